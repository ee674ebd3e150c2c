//! Invalidation Policy
//!
//! Decides whether the declaration file of a stylesheet is stale.
//! Order of checks:
//! 1. path not following the module convention -> never regenerate
//! 2. forced renew -> regenerate
//! 3. no artifact -> regenerate
//! 4. artifact marker equals current fingerprint -> keep
//! 5. anything else (other digest, unreadable, no marker) -> regenerate

use std::path::{Path, PathBuf};

use crate::domain::ports::FileSystem;
use crate::domain::value_objects::Fingerprint;

/// Suffix appended to a stylesheet path to get its declaration file
pub const ARTIFACT_SUFFIX: &str = ".d.ts";

/// Path of the declaration file generated for `source`
pub fn artifact_path(source: &Path) -> PathBuf {
    let mut os = source.as_os_str().to_os_string();
    os.push(ARTIFACT_SUFFIX);
    PathBuf::from(os)
}

/// CSS-module naming convention: `<name>.<marker>.<ext>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleConvention {
    marker: String,
    extensions: Vec<String>,
}

impl ModuleConvention {
    pub const DEFAULT_MARKER: &'static str = "module";
    pub const DEFAULT_EXTENSION: &'static str = "scss";

    pub fn new(marker: impl Into<String>, extensions: Vec<String>) -> Self {
        let extensions = extensions
            .into_iter()
            .map(|e| e.trim().trim_start_matches('.').to_string())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            marker: marker.into().trim_matches('.').to_string(),
            extensions,
        }
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    /// Suffixes a matching file name ends with (`.module.scss`, ...)
    pub fn suffixes(&self) -> Vec<String> {
        self.extensions
            .iter()
            .map(|ext| format!(".{}.{}", self.marker, ext))
            .collect()
    }

    /// Check whether `path` names a CSS-module stylesheet
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return false;
        };
        self.suffixes()
            .iter()
            .any(|suffix| name.ends_with(suffix.as_str()))
    }
}

impl Default for ModuleConvention {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_MARKER,
            vec![Self::DEFAULT_EXTENSION.to_string()],
        )
    }
}

/// Outcome of the staleness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Not a module stylesheet
    Ignored,
    /// Caller asked for a full refresh
    Forced,
    /// No declaration file yet
    Missing,
    /// Declaration file carries another digest, no digest, or cannot be read
    Stale,
    /// Declaration file matches the current content
    Fresh,
}

impl Decision {
    pub fn regenerate(self) -> bool {
        matches!(self, Decision::Forced | Decision::Missing | Decision::Stale)
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Decision::Ignored => write!(f, "ignored"),
            Decision::Forced => write!(f, "forced"),
            Decision::Missing => write!(f, "missing"),
            Decision::Stale => write!(f, "stale"),
            Decision::Fresh => write!(f, "fresh"),
        }
    }
}

/// Staleness policy for declaration files
#[derive(Debug, Clone, Default)]
pub struct InvalidationPolicy {
    convention: ModuleConvention,
}

impl InvalidationPolicy {
    pub fn new(convention: ModuleConvention) -> Self {
        Self { convention }
    }

    pub fn convention(&self) -> &ModuleConvention {
        &self.convention
    }

    pub fn decide<FS: FileSystem>(
        &self,
        fs: &FS,
        file_path: &Path,
        current: &Fingerprint,
        force_renew: bool,
    ) -> Decision {
        if !self.convention.matches(file_path) {
            return Decision::Ignored;
        }
        if force_renew {
            return Decision::Forced;
        }

        let artifact = artifact_path(file_path);
        if !fs.exists(&artifact) {
            return Decision::Missing;
        }

        match fs.read_to_string(&artifact) {
            Ok(content) if current.is_marked_in(&content) => Decision::Fresh,
            _ => Decision::Stale,
        }
    }

    pub fn needs_regeneration<FS: FileSystem>(
        &self,
        fs: &FS,
        file_path: &Path,
        current: &Fingerprint,
        force_renew: bool,
    ) -> bool {
        self.decide(fs, file_path, current, force_renew).regenerate()
    }
}
