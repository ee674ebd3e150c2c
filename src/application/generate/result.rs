//! Generate result types

use std::path::PathBuf;

use crate::domain::policies::Decision;

/// A module stylesheet whose declaration file was left alone
#[derive(Debug, Clone)]
pub struct SkippedFile {
    /// Path to the stylesheet
    pub path: PathBuf,
    /// Why it was skipped
    pub reason: Decision,
}

impl SkippedFile {
    pub fn new(path: PathBuf, reason: Decision) -> Self {
        Self { path, reason }
    }
}

/// Result of a generate run
#[derive(Debug, Clone, Default)]
pub struct GenerateResult {
    /// Declaration files written (or that would be written in dry run)
    pub written: Vec<PathBuf>,
    /// Module stylesheets whose declaration file was already current
    pub skipped: Vec<SkippedFile>,
    /// Candidates not following the module convention
    pub ignored: usize,
    /// Whether this was a dry run
    pub dry_run: bool,
}

impl GenerateResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a written declaration file
    pub fn add_written(&mut self, path: PathBuf) {
        self.written.push(path);
    }

    /// Add a skipped stylesheet
    pub fn add_skipped(&mut self, path: PathBuf, reason: Decision) {
        self.skipped.push(SkippedFile::new(path, reason));
    }

    /// Number of declaration files changed
    pub fn files_changed(&self) -> usize {
        self.written.len()
    }

    /// Human readable summary line
    pub fn summary(&self) -> String {
        if self.dry_run {
            format!("{} file(s) would change", self.files_changed())
        } else {
            format!("{} file(s) changed!", self.files_changed())
        }
    }
}
