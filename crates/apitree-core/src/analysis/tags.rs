use indexmap::IndexMap;

use super::Endpoint;
use crate::parse::{ApiDocument, TagGroup};
use crate::tree::{ExportNode, PathTree, split_path_keep_empty};

/// Name of the root node of the grouped export.
pub const GROUPED_ROOT_NAME: &str = "API";

/// Tag name → endpoints carrying that tag, both in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagIndex {
    by_tag: IndexMap<String, Vec<Endpoint>>,
}

impl TagIndex {
    /// Endpoints for `tag`; empty when the tag was never seen.
    pub fn endpoints(&self, tag: &str) -> &[Endpoint] {
        self.by_tag.get(tag).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.by_tag.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.by_tag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_tag.is_empty()
    }

    /// Tags that no group lists, in first-seen order.
    pub fn ungrouped_tags<'a>(&'a self, groups: &[TagGroup]) -> Vec<&'a str> {
        self.tags()
            .filter(|tag| !groups.iter().any(|g| g.tags.iter().any(|t| t == tag)))
            .collect()
    }
}

/// Index every well-formed operation under each of its tags. Entries that are
/// not mappings are skipped; an operation listing several tags is recorded
/// under each of them.
pub fn collect_tagged_paths(doc: &ApiDocument) -> TagIndex {
    let mut by_tag: IndexMap<String, Vec<Endpoint>> = IndexMap::new();

    for op in doc.operations() {
        if op.details().is_none() {
            log::debug!("skipping {} {}: entry is not a mapping", op.method, op.path);
            continue;
        }
        for tag in op.tags() {
            by_tag
                .entry(tag.to_string())
                .or_default()
                .push(Endpoint::new(op.path, op.method_upper()));
        }
    }

    TagIndex { by_tag }
}

/// Build the tree for one tag. Empty segments are kept, so `/` becomes an
/// empty-named child of the root.
pub fn build_tree_for_tag(endpoints: &[Endpoint]) -> PathTree {
    let mut tree = PathTree::new();
    for endpoint in endpoints {
        tree.insert(&split_path_keep_empty(&endpoint.path), &endpoint.method);
    }
    tree
}

/// Wrap a tag's tree under the tag name. The tree's own root is dropped and
/// its children are spliced in directly.
fn tag_tree_to_export(tag: &str, tree: &PathTree) -> ExportNode {
    ExportNode::branch(tag, tree.root().children().map(|c| c.to_export()).collect())
}

/// Compose per-tag trees into `API → group → tag → paths`.
pub fn build_grouped_export(doc: &ApiDocument) -> ExportNode {
    let index = collect_tagged_paths(doc);
    build_grouped_export_from(&index, &doc.tag_groups())
}

/// As [`build_grouped_export`], from an existing index and group manifest.
/// Tags that no group lists are left out.
pub fn build_grouped_export_from(index: &TagIndex, groups: &[TagGroup]) -> ExportNode {
    let omitted = index.ungrouped_tags(groups);
    if !omitted.is_empty() {
        log::info!("tags not in any x-tagGroups entry: {}", omitted.join(", "));
    }

    let group_nodes = groups
        .iter()
        .map(|group| {
            let tag_nodes = group
                .tags
                .iter()
                .map(|tag| tag_tree_to_export(tag, &build_tree_for_tag(index.endpoints(tag))))
                .collect();
            ExportNode::branch(&group.name, tag_nodes)
        })
        .collect();

    ExportNode::branch(GROUPED_ROOT_NAME, group_nodes)
}
