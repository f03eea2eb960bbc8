use indexmap::IndexMap;
use serde::Serialize;

use super::Endpoint;
use crate::parse::ApiDocument;
use crate::tree::split_path;

/// Endpoints sharing one final path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DuplicateGroup {
    /// The shared segment; empty for paths without segments.
    pub name: String,
    pub endpoints: Vec<Endpoint>,
}

/// Final non-empty segment of a path, or `""` when there is none.
/// e.g. "/users/{id}/" → "{id}", "/" → ""
fn endpoint_name(path: &str) -> &str {
    split_path(path).last().copied().unwrap_or_default()
}

/// Group HTTP-method entries by final path segment and keep the groups with
/// two or more entries, in order of first appearance.
pub fn find_duplicates(doc: &ApiDocument) -> Vec<DuplicateGroup> {
    let mut groups: IndexMap<&str, Vec<Endpoint>> = IndexMap::new();

    for op in doc.operations() {
        let Some(method) = op.http_method() else {
            continue;
        };
        groups
            .entry(endpoint_name(op.path))
            .or_default()
            .push(Endpoint::new(op.path, method.as_str()));
    }

    groups
        .into_iter()
        .filter(|(_, endpoints)| endpoints.len() >= 2)
        .map(|(name, endpoints)| DuplicateGroup {
            name: name.to_string(),
            endpoints,
        })
        .collect()
}
