//! The serialized source map artifact

use crate::error::{Result, SourceMapError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A revision 3 source map
///
/// Field order matches the conventional JSON layout: `version`, `sources`,
/// `names`, `mappings`, then the optional `file`, `sourceRoot` and
/// `sourcesContent`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceMap {
    pub version: u32,
    pub sources: Vec<String>,
    #[serde(default)]
    pub names: Vec<String>,
    pub mappings: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_root: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources_content: Option<Vec<Option<String>>>,
}

impl SourceMap {
    /// Parse a source map from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let map: SourceMap = serde_json::from_str(json)?;
        if map.version != 3 {
            return Err(SourceMapError::UnsupportedVersion(map.version));
        }
        Ok(map)
    }

    /// Serialize to compact JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for SourceMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
