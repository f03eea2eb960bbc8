use serde::{Deserialize, Serialize};

/// A `{name, children}` node for hierarchical visualization.
///
/// `children` is `None` for a leaf and serializes as `null`, which consumers
/// distinguish from an empty list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportNode {
    pub name: String,
    pub children: Option<Vec<ExportNode>>,
}

impl ExportNode {
    /// A node whose children are always emitted as a list, even when empty.
    pub fn branch(name: impl Into<String>, children: Vec<ExportNode>) -> Self {
        Self {
            name: name.into(),
            children: Some(children),
        }
    }

    /// Labels of every leaf, depth-first.
    pub fn leaf_labels(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a str>) {
        match &self.children {
            Some(children) if !children.is_empty() => {
                for child in children {
                    child.collect_leaves(out);
                }
            }
            _ => out.push(&self.name),
        }
    }
}
