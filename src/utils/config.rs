use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Converter configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Launch the browser headless in generated session setup
    pub headless: bool,

    /// Viewport width substituted for "maximize window"
    pub viewport_width: u32,

    /// Viewport height substituted for "maximize window"
    pub viewport_height: u32,

    /// File stem used when exporting converted scripts
    pub output_stem: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            headless: false,
            viewport_width: 1920,
            viewport_height: 1080,
            output_stem: "playwright-test".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file. Missing keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConvertError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| ConvertError::Config(e.to_string()))
    }
}
