//! Runtime configuration.
//!
//! [`DocsConfig`] is an explicit object handed to the registry and the
//! importer at construction time; nothing reads ambient global state. It is
//! loaded from a JSON file when present and falls back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::docs::Parameter;
use crate::error::Result;
use crate::generation::DEFAULT_GENERATOR_IDS;

/// Configuration for the generator registry and the Postman importer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocsConfig {
    /// When set, restricts the registry to these identifiers
    pub enabled_generators: Option<Vec<String>>,
    /// Generator identifiers assigned to endpoints created by the importer
    pub importer_generators: Vec<String>,
    /// Parameter presets offered when authoring endpoints
    pub predefined_params: Vec<Parameter>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            enabled_generators: None,
            importer_generators: DEFAULT_GENERATOR_IDS
                .iter()
                .map(|s| s.to_string())
                .collect(),
            predefined_params: Vec::new(),
        }
    }
}

impl DocsConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Load from the given path, or defaults when no path is given
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
