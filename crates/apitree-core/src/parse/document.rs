//! Read-only view over a decoded spec document.
//!
//! The document is kept as a generic value; every accessor checks the shape
//! it expects and treats anything else as absent rather than failing.

use serde_json::{Map, Value};

use super::method::HttpMethod;

/// Name given to an `x-tagGroups` entry that has no `name`.
pub const DEFAULT_GROUP_NAME: &str = "Other";

/// A decoded OpenAPI/Swagger document.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiDocument {
    root: Value,
}

/// One entry of a path item's method map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OperationEntry<'a> {
    /// The entry is a mapping and may carry operation details such as `tags`.
    Details(&'a Map<String, Value>),
    /// Any other shape (sequence, scalar, null).
    Malformed(&'a Value),
}

/// A `(path, method key, entry)` triple from the `paths` map.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathOperation<'a> {
    pub path: &'a str,
    /// The method key exactly as written in the document.
    pub method: &'a str,
    pub entry: OperationEntry<'a>,
}

/// A named cluster of tags from `x-tagGroups`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagGroup {
    pub name: String,
    pub tags: Vec<String>,
}

impl ApiDocument {
    pub fn new(root: Value) -> Self {
        Self { root }
    }

    pub fn as_value(&self) -> &Value {
        &self.root
    }

    fn paths_map(&self) -> Option<&Map<String, Value>> {
        self.root.get("paths").and_then(Value::as_object)
    }

    /// Path strings in document order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths_map()
            .into_iter()
            .flat_map(|paths| paths.keys().map(String::as_str))
    }

    /// Every entry of every path item's method map, in document order.
    /// Path items that are not mappings contribute nothing.
    pub fn operations(&self) -> Vec<PathOperation<'_>> {
        let Some(paths) = self.paths_map() else {
            return Vec::new();
        };

        let mut ops = Vec::new();
        for (path, item) in paths {
            let Some(methods) = item.as_object() else {
                log::debug!("skipping path item {path}: not a mapping");
                continue;
            };
            for (method, value) in methods {
                let entry = match value.as_object() {
                    Some(details) => OperationEntry::Details(details),
                    None => OperationEntry::Malformed(value),
                };
                ops.push(PathOperation {
                    path,
                    method,
                    entry,
                });
            }
        }
        ops
    }

    /// Parsed `x-tagGroups`, skipping entries that are not mappings.
    pub fn tag_groups(&self) -> Vec<TagGroup> {
        let Some(groups) = self.root.get("x-tagGroups").and_then(Value::as_array) else {
            return Vec::new();
        };

        groups
            .iter()
            .filter_map(|group| {
                let Some(group) = group.as_object() else {
                    log::debug!("skipping x-tagGroups entry: not a mapping");
                    return None;
                };
                let name = group
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or(DEFAULT_GROUP_NAME)
                    .to_string();
                let tags = group
                    .get("tags")
                    .and_then(Value::as_array)
                    .map(|tags| {
                        tags.iter()
                            .filter_map(Value::as_str)
                            .map(str::to_string)
                            .collect()
                    })
                    .unwrap_or_default();
                Some(TagGroup { name, tags })
            })
            .collect()
    }
}

impl<'a> PathOperation<'a> {
    /// Operation details, when the entry is a mapping.
    pub fn details(&self) -> Option<&'a Map<String, Value>> {
        match self.entry {
            OperationEntry::Details(details) => Some(details),
            OperationEntry::Malformed(_) => None,
        }
    }

    /// The `tags` list of a well-formed entry. Missing lists, malformed
    /// entries and non-string items all yield nothing.
    pub fn tags(&self) -> Vec<&'a str> {
        self.details()
            .and_then(|details| details.get("tags"))
            .and_then(Value::as_array)
            .map(|tags| tags.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    pub fn http_method(&self) -> Option<HttpMethod> {
        HttpMethod::from_key(self.method)
    }

    /// The method key upper-cased, as used in every derived view.
    pub fn method_upper(&self) -> String {
        self.method.to_uppercase()
    }
}
