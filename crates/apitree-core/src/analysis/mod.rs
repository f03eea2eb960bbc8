pub mod duplicates;
pub mod prefix_stats;
pub mod tags;

use std::fmt;

use serde::Serialize;

pub use duplicates::{DuplicateGroup, find_duplicates};
pub use prefix_stats::PrefixStats;
pub use tags::{TagIndex, build_grouped_export, build_tree_for_tag, collect_tagged_paths};

/// A `(path, METHOD)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Endpoint {
    pub path: String,
    pub method: String,
}

impl Endpoint {
    pub fn new(path: impl Into<String>, method: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            method: method.into(),
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
