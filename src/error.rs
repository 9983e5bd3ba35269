//! Typed errors for the conversion pipeline.
//!
//! Every variant is terminal for the current invocation: the CLI reports the
//! message on stderr and exits non-zero. Nothing is retried and no partial
//! output is cleaned up.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, ShapeError>;

/// Errors surfaced by codecs, the path tree transform, and file I/O.
#[derive(Debug, Error)]
pub enum ShapeError {
    /// File extension has no registered codec.
    #[error("unknown file extension: {}", path.display())]
    UnknownExtension { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed document content, reported with the offending path.
    #[error("failed to decode {}: {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// Document cannot be represented in the requested format.
    #[error("cannot encode {}: {message}", path.display())]
    Encode { path: PathBuf, message: String },

    /// A path segment is simultaneously a leaf entry and a directory-like
    /// prefix. Reported instead of silently overwriting either side.
    #[error("structural conflict at '{key}': {message}")]
    StructuralConflict { key: String, message: String },

    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("path is not valid unicode: {}", path.display())]
    NonUnicodePath { path: PathBuf },

    /// Input that parsed fine but cannot drive the requested mode.
    #[error("{0}")]
    Usage(String),
}

impl ShapeError {
    pub fn conflict(key: impl Into<String>, message: impl Into<String>) -> Self {
        ShapeError::StructuralConflict {
            key: key.into(),
            message: message.into(),
        }
    }

    pub fn decode(path: &Path, message: impl Into<String>) -> Self {
        ShapeError::Decode {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn encode(path: &Path, message: impl Into<String>) -> Self {
        ShapeError::Encode {
            path: path.to_path_buf(),
            message: message.into(),
        }
    }

    pub fn non_unicode(path: &Path) -> Self {
        ShapeError::NonUnicodePath {
            path: path.to_path_buf(),
        }
    }
}
