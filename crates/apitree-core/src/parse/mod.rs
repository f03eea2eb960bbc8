pub mod document;
pub mod method;

use std::path::Path;

use crate::error::ParseError;
pub use document::{ApiDocument, DEFAULT_GROUP_NAME, OperationEntry, PathOperation, TagGroup};
pub use method::HttpMethod;

/// Serialization format of a spec file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecFormat {
    Yaml,
    Json,
}

impl SpecFormat {
    /// `.yaml` and `.yml` select YAML; every other extension falls back to JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml" | "yml") => SpecFormat::Yaml,
            _ => SpecFormat::Json,
        }
    }
}

/// Parse a spec document from YAML.
pub fn from_yaml(input: &str) -> Result<ApiDocument, ParseError> {
    let root: serde_json::Value = serde_yaml_ng::from_str(input)?;
    Ok(ApiDocument::new(root))
}

/// Parse a spec document from JSON.
pub fn from_json(input: &str) -> Result<ApiDocument, ParseError> {
    let root: serde_json::Value = serde_json::from_str(input)?;
    Ok(ApiDocument::new(root))
}

/// Parse a spec document in the given format.
pub fn from_str(input: &str, format: SpecFormat) -> Result<ApiDocument, ParseError> {
    match format {
        SpecFormat::Yaml => from_yaml(input),
        SpecFormat::Json => from_json(input),
    }
}
