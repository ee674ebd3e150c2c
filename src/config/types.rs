//! Configuration types

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::policies::ModuleConvention;

/// `[generate]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateConfig {
    /// Marker between the file stem and the extension (`button.<marker>.scss`)
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Stylesheet extensions eligible for generation
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Sort directory listings for deterministic traversal
    #[serde(default)]
    pub sort_paths: bool,

    /// Custom template file, replacing the built-in one
    #[serde(default)]
    pub template: Option<PathBuf>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            marker: default_marker(),
            extensions: default_extensions(),
            sort_paths: false,
            template: None,
        }
    }
}

fn default_marker() -> String {
    ModuleConvention::DEFAULT_MARKER.to_string()
}

fn default_extensions() -> Vec<String> {
    vec![ModuleConvention::DEFAULT_EXTENSION.to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generate: GenerateConfig,
}

impl Config {
    /// Naming convention described by this configuration
    pub fn convention(&self) -> ModuleConvention {
        ModuleConvention::new(
            self.generate.marker.clone(),
            self.generate.extensions.clone(),
        )
    }
}

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{}", line)?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{}'?)", suggestion)?;
        }
        Ok(())
    }
}
