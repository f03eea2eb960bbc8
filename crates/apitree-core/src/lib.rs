pub mod analysis;
pub mod config;
pub mod error;
pub mod output;
pub mod parse;
pub mod report;
pub mod tree;

use analysis::{DuplicateGroup, PrefixStats};
use parse::ApiDocument;
use tree::{ExportNode, PathTree};

/// Options for a single analysis pass.
#[derive(Debug, Clone, Copy)]
pub struct AnalysisOptions {
    pub max_depth: usize,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self { max_depth: 3 }
    }
}

/// Every view derived from one document. Each is computed independently.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tree: PathTree,
    pub grouped: ExportNode,
    pub prefix_stats: PrefixStats,
    pub duplicates: Vec<DuplicateGroup>,
}

/// Run all analyses over a parsed document.
pub fn analyze(doc: &ApiDocument, options: &AnalysisOptions) -> Analysis {
    Analysis {
        tree: tree::build_path_tree(doc),
        grouped: analysis::build_grouped_export(doc),
        prefix_stats: PrefixStats::compute(doc, options.max_depth),
        duplicates: analysis::find_duplicates(doc),
    }
}
