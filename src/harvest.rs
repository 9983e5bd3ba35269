//! Recursive discovery and reading of property-bearing files.

use crate::codec::CodecRegistry;
use crate::error::{Result, ShapeError};
use serde_json::{Map, Value};
use std::path::{Component, Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Recursively collect files whose extension is registered, sorted by path
/// so repeated runs over an unchanged tree yield the same order.
pub fn walk(root: &Path, registry: &CodecRegistry) -> Result<Vec<PathBuf>> {
    let mut matches = Vec::new();
    for entry in WalkDir::new(root) {
        let entry = entry.map_err(|source| ShapeError::Read {
            path: root.to_path_buf(),
            source: source.into(),
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry
            .file_name()
            .to_str()
            .ok_or_else(|| ShapeError::non_unicode(entry.path()))?;
        if registry.is_registered(name) {
            matches.push(entry.into_path());
        }
    }
    matches.sort();
    Ok(matches)
}

/// Read every discovered file into a flat map keyed by `/`-joined relative
/// path.
///
/// Keys are anchored at the root directory's name, so harvesting `conf/`
/// yields keys like `conf/db.properties` whether the root was given as a
/// relative or an absolute path. A root that is itself a property file
/// yields a single entry keyed by its file name.
pub fn read_properties(root: &Path, registry: &CodecRegistry) -> Result<Map<String, Value>> {
    let mut data = Map::new();
    for path in walk(root, registry)? {
        let key = composite_key(root, &path)?;
        debug!(path = %path.display(), key = %key, "harvested file");
        let document = registry.read(&path)?;
        data.insert(key, document);
    }
    Ok(data)
}

/// Build the `/`-joined composite key for a harvested file.
fn composite_key(root: &Path, path: &Path) -> Result<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    let mut segments: Vec<&str> = Vec::new();

    if let Some(name) = root.file_name() {
        segments.push(name.to_str().ok_or_else(|| ShapeError::non_unicode(root))?);
    }
    for component in relative.components() {
        if let Component::Normal(part) = component {
            segments.push(part.to_str().ok_or_else(|| ShapeError::non_unicode(path))?);
        }
    }

    Ok(segments.join("/"))
}
