use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::analysis::prefix_stats::DEFAULT_TOP;
use crate::error::ConfigError;

/// Top-level project configuration loaded from `.apitree.yaml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApitreeConfig {
    pub output: OutputConfig,
    pub prefix_stats: PrefixStatsConfig,
    pub report: ReportConfig,
}

/// Where the JSON outputs are written.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub dir: String,
    /// Unscoped export tree.
    pub tree: String,
    /// Tag-grouped export tree. Setting this equal to `tree` makes the grouped
    /// export overwrite the unscoped one.
    pub grouped_tree: String,
    pub prefix_stats: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: ".".to_string(),
            tree: "tree.json".to_string(),
            grouped_tree: "tree_grouped.json".to_string(),
            prefix_stats: "tag_path_prefix_stats.json".to_string(),
        }
    }
}

impl OutputConfig {
    pub fn tree_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.tree)
    }

    pub fn grouped_tree_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.grouped_tree)
    }

    pub fn prefix_stats_path(&self) -> PathBuf {
        Path::new(&self.dir).join(&self.prefix_stats)
    }
}

/// Prefix statistics options.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PrefixStatsConfig {
    pub max_depth: usize,
    /// Prefixes listed per tag and depth in the console report.
    pub top: usize,
}

impl Default for PrefixStatsConfig {
    fn default() -> Self {
        Self {
            max_depth: 3,
            top: DEFAULT_TOP,
        }
    }
}

/// Which console reports are printed.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub tree: bool,
    pub prefix_stats: bool,
    pub duplicates: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            tree: true,
            prefix_stats: true,
            duplicates: true,
        }
    }
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".apitree.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ApitreeConfig>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ApitreeConfig =
        serde_yaml_ng::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# apitree configuration
output:
  dir: .
  tree: tree.json                        # unscoped path tree
  grouped_tree: tree_grouped.json        # x-tagGroups tree (set to tree.json to overwrite it)
  prefix_stats: tag_path_prefix_stats.json

prefix_stats:
  max_depth: 3          # longest underscore prefix counted
  top: 5                # prefixes printed per tag and depth

report:
  tree: true
  prefix_stats: true
  duplicates: true
"#
}
