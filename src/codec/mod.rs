//! Format codecs and the extension registry.
//!
//! Each supported extension maps to a pair of decode/encode functions over
//! `serde_json::Value` (the shared document tree type; the `preserve_order`
//! feature keeps mappings ordered). The registry is constructed once at
//! startup and passed explicitly to every operation that needs format
//! dispatch.

pub mod properties;
pub mod xml;

use crate::error::{Result, ShapeError};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Decode a document from file content.
pub type DecodeFn = fn(&str) -> std::result::Result<Value, String>;

/// Encode a document to file content.
pub type EncodeFn = fn(&Value) -> std::result::Result<String, String>;

struct Codec {
    extension: &'static str,
    decode: DecodeFn,
    encode: EncodeFn,
}

/// Extension-to-codec mapping for the supported formats.
pub struct CodecRegistry {
    codecs: Vec<Codec>,
}

impl CodecRegistry {
    /// Registry with the four standard formats: `.properties`, `.xml`,
    /// `.yml`, `.json`.
    pub fn standard() -> Self {
        Self {
            codecs: vec![
                Codec {
                    extension: "properties",
                    decode: properties::decode,
                    encode: properties::encode,
                },
                Codec {
                    extension: "xml",
                    decode: xml::decode,
                    encode: xml::encode,
                },
                Codec {
                    extension: "yml",
                    decode: decode_yaml,
                    encode: encode_yaml,
                },
                Codec {
                    extension: "json",
                    decode: decode_json,
                    encode: encode_json,
                },
            ],
        }
    }

    fn codec_for(&self, path: &Path) -> Result<&Codec> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| self.codecs.iter().find(|c| c.extension == ext))
            .ok_or_else(|| ShapeError::UnknownExtension {
                path: path.to_path_buf(),
            })
    }

    /// Whether a file name (or path segment) carries a registered extension.
    ///
    /// This is the terminal check handed to [`crate::tree::flatten`]: a
    /// segment like `db.properties` is a file, `conf.d` is not.
    pub fn is_registered(&self, name: &str) -> bool {
        Path::new(name)
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.codecs.iter().any(|c| c.extension == ext))
    }

    /// Read and decode a document, dispatching on the file extension.
    pub fn read(&self, path: &Path) -> Result<Value> {
        let codec = self.codec_for(path)?;
        let content = fs::read_to_string(path).map_err(|source| ShapeError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), format = codec.extension, "decoding document");
        (codec.decode)(&content).map_err(|message| ShapeError::decode(path, message))
    }

    /// Encode and write a document, dispatching on the file extension.
    pub fn write(&self, path: &Path, value: &Value) -> Result<()> {
        let codec = self.codec_for(path)?;
        let content = (codec.encode)(value).map_err(|message| ShapeError::encode(path, message))?;
        debug!(path = %path.display(), format = codec.extension, "writing document");
        fs::write(path, content).map_err(|source| ShapeError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Render a scalar as plain text. Arrays and mappings have no scalar form.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

fn decode_yaml(input: &str) -> std::result::Result<Value, String> {
    serde_yaml::from_str(input).map_err(|e| e.to_string())
}

fn encode_yaml(value: &Value) -> std::result::Result<String, String> {
    serde_yaml::to_string(value).map_err(|e| e.to_string())
}

fn decode_json(input: &str) -> std::result::Result<Value, String> {
    serde_json::from_str(input).map_err(|e| e.to_string())
}

/// Pretty-printed JSON with 4-space indentation.
fn encode_json(value: &Value) -> std::result::Result<String, String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    value
        .serialize(&mut serializer)
        .map_err(|e| e.to_string())?;
    buf.push(b'\n');
    String::from_utf8(buf).map_err(|e| e.to_string())
}
