//! Write a flattened file map back out as a directory tree.

use crate::codec::CodecRegistry;
use crate::error::{Result, ShapeError};
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Keep only entries whose composite key contains `needle`.
///
/// Backs the CLI `--key` option; a pure pre-filter on the flat map, applied
/// before any directory or file is touched.
pub fn filter_keys(flat: Map<String, Value>, needle: &str) -> Map<String, Value> {
    flat.into_iter()
        .filter(|(key, _)| key.contains(needle))
        .collect()
}

/// Write every entry of a flat file map under `out_root`, creating missing
/// ancestor directories along the way.
///
/// Creating a directory that already exists is not an error; any other
/// creation failure (permissions, a file squatting on the path) aborts the
/// run with the offending path.
pub fn write_properties(
    flat: &Map<String, Value>,
    out_root: &Path,
    registry: &CodecRegistry,
) -> Result<()> {
    for (key, document) in flat {
        let target = out_root.join(key);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).map_err(|source| ShapeError::CreateDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        debug!(path = %target.display(), "materializing file");
        registry.write(&target, document)?;
    }
    Ok(())
}
