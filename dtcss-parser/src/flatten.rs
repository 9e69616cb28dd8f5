//! Converts nested token trees into flat, ordered token maps.
//!
//! # The High-Level Concept
//!
//! A token file is a tree of groups whose leaves are token records. Walking the tree in key
//! order and recording the path to every record gives each token a unique, stable variable name
//! (`color.brand.primary` → `color-brand-primary`) without any schema beyond "a record is an
//! object with a value field".
//!
//! # The Algorithm
//!
//! 1. **Groups:** for every key of an object, in authored order
//!    - keys starting with `$` are group metadata; `$type` is remembered for descendants
//!    - a record (object with `$value` or `value`) becomes one [`FlattenedToken`]
//!    - any other object is a nested group: push the key and recurse
//!    - anything else is malformed and skipped
//!
//! 2. **Records:** the value field is interpreted with [`TokenValue::from_json`]; records with an
//!    unusable value are skipped. The description becomes the token's comment.
//!
//! 3. **Collisions:** tokens are inserted into an [`IndexMap`] keyed by name. A later token with
//!    the same name replaces the earlier one and keeps its position.
//!
//! Flattening never fails. Anything that does not look like a token is left out.

use crate::value::{join_name, TokenValue};
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Flat, insertion-ordered map of variable name → token.
pub type TokenMap = IndexMap<String, FlattenedToken>;

/// A single token lifted out of its tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedToken {
    /// Variable name without the leading `--`.
    pub name: String,
    pub value: TokenValue,
    pub comment: Option<String>,
    /// Keys traversed from the root of the file to the record.
    pub path: Vec<String>,
    /// `$type` of the record, or of its nearest enclosing group.
    pub token_type: Option<String>,
    /// File the token was read from.
    pub source: PathBuf,
}

/// Flatten a tree that did not come from a file.
pub fn flatten(tree: &Value) -> TokenMap {
    flatten_from::<&str>(tree, &[], Path::new(""))
}

/// Flatten `tree` with every name prefixed by `prefix`, tagging tokens with `source`.
pub fn flatten_from<S: AsRef<str>>(tree: &Value, prefix: &[S], source: &Path) -> TokenMap {
    let mut out = TokenMap::new();
    if let Value::Object(map) = tree {
        let mut path: Vec<String> = prefix.iter().map(|s| s.as_ref().to_string()).collect();
        walk_group(map, &mut path, None, source, &mut out);
    }
    out
}

/// Whether an object is a token record rather than a group.
///
/// `$value` always marks a record. The legacy `value` key only does when it holds a scalar or a
/// dimension, so that a group which happens to be named `value` is still walked.
pub fn is_record(map: &Map<String, Value>) -> bool {
    if map.contains_key("$value") {
        return true;
    }
    match map.get("value") {
        Some(Value::Object(inner)) => inner.contains_key("magnitude") || inner.contains_key("unit"),
        Some(_) => true,
        None => false,
    }
}

fn walk_group(
    map: &Map<String, Value>,
    path: &mut Vec<String>,
    inherited_type: Option<&str>,
    source: &Path,
    out: &mut TokenMap,
) {
    let group_type = string_field(map, "$type").or(inherited_type);

    for (key, value) in map {
        if key.starts_with('$') {
            continue;
        }
        let Value::Object(child) = value else {
            continue;
        };

        path.push(key.clone());
        if is_record(child) {
            if let Some(token) = record_to_token(child, path, group_type, source) {
                out.insert(token.name.clone(), token);
            }
        } else {
            walk_group(child, path, group_type, source, out);
        }
        path.pop();
    }
}

fn record_to_token(
    record: &Map<String, Value>,
    path: &[String],
    inherited_type: Option<&str>,
    source: &Path,
) -> Option<FlattenedToken> {
    let raw = record.get("$value").or_else(|| record.get("value"))?;
    let value = TokenValue::from_json(raw)?;

    let comment = string_field(record, "$description")
        .or_else(|| string_field(record, "description"))
        .map(str::to_string);
    let token_type = string_field(record, "$type")
        .or_else(|| string_field(record, "type"))
        .or(inherited_type)
        .map(str::to_string);

    Some(FlattenedToken {
        name: join_name(path),
        value,
        comment,
        path: path.to_vec(),
        token_type,
        source: source.to_path_buf(),
    })
}

fn string_field<'a>(map: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    map.get(key).and_then(Value::as_str)
}
