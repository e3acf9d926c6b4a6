//! Engine configuration, loadable from a JSON file.

use crate::error::SimResult;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Attach the unit-economics block to every computed metric set.
    pub include_unit_economics: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            include_unit_economics: true,
        }
    }
}

impl EngineConfig {
    pub fn from_json_file(path: &Path) -> SimResult<Self> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
