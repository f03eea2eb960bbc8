use std::collections::BTreeSet;
use std::fmt::Write as _;

use indexmap::IndexMap;

use super::export::ExportNode;

/// A node of a path trie, named by its path segment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeNode {
    name: String,
    methods: BTreeSet<String>,
    children: IndexMap<String, TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: BTreeSet::new(),
            children: IndexMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Upper-cased methods recorded exactly at this node, sorted.
    pub fn methods(&self) -> &BTreeSet<String> {
        &self.methods
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = &TreeNode> {
        self.children.values()
    }

    pub fn child(&self, name: &str) -> Option<&TreeNode> {
        self.children.get(name)
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    fn insert<S: AsRef<str>>(&mut self, segments: &[S], method: &str) {
        let mut current = self;
        for segment in segments {
            let segment = segment.as_ref();
            current = current
                .children
                .entry(segment.to_string())
                .or_insert_with(|| TreeNode::new(segment));
        }
        current.methods.insert(method.to_uppercase());
    }

    /// `/name [GET, POST]`, or `/name` when no methods were recorded.
    fn label(&self) -> String {
        if self.methods.is_empty() {
            format!("/{}", self.name)
        } else {
            format!("/{} [{}]", self.name, self.joined_methods())
        }
    }

    fn joined_methods(&self) -> String {
        self.methods.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
    }

    fn render_into(&self, depth: usize, out: &mut String) {
        let _ = writeln!(out, "{}{}", "  ".repeat(depth), self.label());

        let mut children: Vec<&TreeNode> = self.children.values().collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        for child in children {
            child.render_into(depth + 1, out);
        }
    }

    pub fn to_export(&self) -> ExportNode {
        let mut name = if self.name.is_empty() {
            "/".to_string()
        } else {
            format!("/{}", self.name)
        };
        if !self.methods.is_empty() {
            let _ = write!(name, " [{}]", self.joined_methods());
        }

        let children: Vec<ExportNode> = self.children.values().map(TreeNode::to_export).collect();
        ExportNode {
            name,
            children: (!children.is_empty()).then_some(children),
        }
    }
}

/// A trie of path segments rooted at an unnamed node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    root: TreeNode,
}

impl PathTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Record `method` at the node reached by `segments`, creating nodes as
    /// needed. An empty sequence records the method on the root.
    pub fn insert<S: AsRef<str>>(&mut self, segments: &[S], method: &str) {
        self.root.insert(segments, method);
    }

    /// Follow `segments` from the root.
    pub fn find<S: AsRef<str>>(&self, segments: &[S]) -> Option<&TreeNode> {
        segments
            .iter()
            .try_fold(&self.root, |node, segment| node.child(segment.as_ref()))
    }

    /// Depth-first outline, children sorted by segment name, two spaces of
    /// indent per level. Every line ends with a newline.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.root.render_into(0, &mut out);
        out
    }

    pub fn to_export_tree(&self) -> ExportNode {
        self.root.to_export()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_creates_nested_nodes() {
        let mut tree = PathTree::new();
        tree.insert(&["users", "{id}"], "get");

        let node = tree.find(&["users", "{id}"]).unwrap();
        assert_eq!(node.name(), "{id}");
        assert!(node.methods().contains("GET"));
        assert!(tree.find(&["users"]).unwrap().methods().is_empty());
        assert!(tree.find(&["orders"]).is_none());
    }

    #[test]
    fn test_insert_is_idempotent() {
        let mut tree = PathTree::new();
        tree.insert(&["users"], "GET");
        tree.insert(&["users"], "get");
        tree.insert(&["users"], "post");

        let users = tree.find(&["users"]).unwrap();
        assert_eq!(users.methods().len(), 2);
        assert_eq!(tree.root().children().count(), 1);
    }

    #[test]
    fn test_empty_segments_record_on_root() {
        let mut tree = PathTree::new();
        let none: [&str; 0] = [];
        tree.insert(&none, "get");

        assert!(tree.root().is_leaf());
        assert!(tree.root().methods().contains("GET"));
        assert_eq!(tree.render(), "/ [GET]\n");
    }

    #[test]
    fn test_render_sorts_children_and_methods() {
        let mut tree = PathTree::new();
        tree.insert(&["pets"], "post");
        tree.insert(&["pets"], "get");
        tree.insert(&["pets", "{petId}"], "delete");
        tree.insert(&["admin", "stats"], "get");

        insta::assert_snapshot!(tree.render(), @r"
        /
          /admin
            /stats [GET]
          /pets [GET, POST]
            /{petId} [DELETE]
        ");
    }

    #[test]
    fn test_export_marks_leaves_with_none() {
        let mut tree = PathTree::new();
        tree.insert(&["pets"], "get");
        tree.insert(&["pets", "{petId}"], "put");
        tree.insert(&["pets", "{petId}"], "delete");

        let export = tree.to_export_tree();
        assert_eq!(export.name, "/");
        let pets = &export.children.as_ref().unwrap()[0];
        assert_eq!(pets.name, "/pets [GET]");
        let pet = &pets.children.as_ref().unwrap()[0];
        assert_eq!(pet.name, "/{petId} [DELETE, PUT]");
        assert!(pet.children.is_none());
    }

    #[test]
    fn test_export_of_empty_tree() {
        let export = PathTree::new().to_export_tree();
        assert_eq!(export.name, "/");
        assert!(export.children.is_none());
    }

    #[test]
    fn test_export_keeps_insertion_order() {
        let mut tree = PathTree::new();
        tree.insert(&["zebra"], "get");
        tree.insert(&["apple"], "get");

        let export = tree.to_export_tree();
        let names: Vec<&str> = export
            .children
            .as_ref()
            .unwrap()
            .iter()
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(names, vec!["/zebra [GET]", "/apple [GET]"]);
    }
}
