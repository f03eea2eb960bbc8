pub mod export;
pub mod node;

pub use export::ExportNode;
pub use node::{PathTree, TreeNode};

use crate::parse::ApiDocument;

/// Split a path into its non-empty segments.
/// e.g. "/pets/{petId}/" → ["pets", "{petId}"], "/" → []
pub fn split_path(path: &str) -> Vec<&str> {
    path.trim_matches('/')
        .split('/')
        .filter(|s| !s.is_empty())
        .collect()
}

/// Split a path after trimming outer slashes, keeping empty segments.
/// e.g. "/" → [""], "/a//b" → ["a", "", "b"]
///
/// The per-tag trees are built with this splitter and the grouped export's
/// shape depends on it, so it must stay distinct from [`split_path`].
pub fn split_path_keep_empty(path: &str) -> Vec<&str> {
    path.trim_matches('/').split('/').collect()
}

/// Build the unscoped tree over every HTTP-method entry of the document.
pub fn build_path_tree(doc: &ApiDocument) -> PathTree {
    let mut tree = PathTree::new();
    for op in doc.operations() {
        let Some(method) = op.http_method() else {
            continue;
        };
        tree.insert(&split_path(op.path), method.as_str());
    }
    tree
}
