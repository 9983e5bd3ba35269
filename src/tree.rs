//! Path tree transform between flat composite-key maps and nested trees.
//!
//! The forward direction folds keys like `conf/db.properties` into a nested
//! mapping keyed by path segment; the backward direction walks a nested
//! mapping and rebuilds the `/`-joined keys. File documents are opaque at
//! this boundary: the transform never descends into a file's property map,
//! so dotted property keys (`db.host`) cannot be mistaken for path segments.

use crate::error::{Result, ShapeError};
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Fold a flat mapping of `/`-separated composite keys into a nested tree.
///
/// Input order is preserved: the first key to mention a directory creates its
/// branch, and later keys sharing the prefix extend that branch. A key whose
/// path runs through an existing file entry, or that lands on an existing
/// directory, is a structural conflict and aborts the fold -- nothing is
/// overwritten.
///
/// # Example
/// ```
/// use confshape::tree::nest;
/// use serde_json::json;
///
/// let mut flat = serde_json::Map::new();
/// flat.insert("conf/db.properties".into(), json!({"host": "localhost"}));
/// flat.insert("conf/app.properties".into(), json!({"name": "svc"}));
/// let tree = nest(&flat).unwrap();
/// assert_eq!(
///     serde_json::Value::Object(tree),
///     json!({
///         "conf": {
///             "db.properties": {"host": "localhost"},
///             "app.properties": {"name": "svc"}
///         }
///     })
/// );
/// ```
pub fn nest(flat: &Map<String, Value>) -> Result<Map<String, Value>> {
    let mut root = Map::new();
    let mut file_keys: HashSet<String> = HashSet::new();

    for (key, value) in flat {
        let segments: Vec<&str> = key.split('/').filter(|s| !s.is_empty()).collect();
        let Some((file, dirs)) = segments.split_last() else {
            return Err(ShapeError::conflict(key.clone(), "empty composite key"));
        };

        // A directory prefix of this key must not already be a file entry.
        for depth in 1..segments.len() {
            if file_keys.contains(&segments[..depth].join("/")) {
                return Err(ShapeError::conflict(
                    segments[..depth].join("/"),
                    "path runs through an existing file entry",
                ));
            }
        }

        let mut current = &mut root;
        for segment in dirs {
            let entry = current
                .entry(segment.to_string())
                .or_insert_with(|| Value::Object(Map::new()));
            let Value::Object(children) = entry else {
                return Err(ShapeError::conflict(
                    key.clone(),
                    "path segment is already a leaf value",
                ));
            };
            current = children;
        }

        if current.contains_key(*file) {
            return Err(ShapeError::conflict(
                key.clone(),
                "file entry collides with an existing directory",
            ));
        }
        current.insert((*file).to_string(), value.clone());
        file_keys.insert(segments.join("/"));
    }

    Ok(root)
}

/// Walk a nested tree back into a flat mapping of `/`-joined composite keys.
///
/// `is_file` decides which keys terminate a path (the CLI passes the codec
/// registry's extension check). Terminal values are emitted as-is without
/// descending, so a file's property map survives untouched. A non-terminal
/// child that is not itself a mapping has nowhere to hang in a directory
/// tree and is reported as a structural conflict.
///
/// # Example
/// ```
/// use confshape::tree::flatten;
/// use serde_json::json;
///
/// let doc = json!({
///     "conf": {"db.properties": {"host": "localhost"}}
/// });
/// let tree = doc.as_object().unwrap();
/// let flat = flatten(tree, |key| key.ends_with(".properties")).unwrap();
/// assert_eq!(
///     flat.get("conf/db.properties"),
///     Some(&json!({"host": "localhost"}))
/// );
/// ```
pub fn flatten<F>(tree: &Map<String, Value>, is_file: F) -> Result<Map<String, Value>>
where
    F: Fn(&str) -> bool,
{
    let mut flat = Map::new();
    walk_node(tree, "", &is_file, &mut flat)?;
    Ok(flat)
}

fn walk_node<F>(
    node: &Map<String, Value>,
    prefix: &str,
    is_file: &F,
    out: &mut Map<String, Value>,
) -> Result<()>
where
    F: Fn(&str) -> bool,
{
    for (key, value) in node {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}/{key}")
        };

        if is_file(key) {
            out.insert(path, value.clone());
        } else {
            match value {
                Value::Object(children) => walk_node(children, &path, is_file, out)?,
                _ => {
                    return Err(ShapeError::conflict(
                        path,
                        "entry is neither a file nor a directory mapping",
                    ));
                }
            }
        }
    }
    Ok(())
}
