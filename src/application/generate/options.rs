//! Generate options

use std::path::PathBuf;

/// Options for a generate run
///
/// Built once at the CLI boundary and passed by value to the use case.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// File or directory to scan
    pub root_path: PathBuf,
    /// Regenerate every module stylesheet, ignoring embedded fingerprints
    pub force_renew: bool,
    /// Report what would change without writing anything
    pub dry_run: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root_path: PathBuf::from("."),
            force_renew: false,
            dry_run: false,
        }
    }
}

impl GenerateOptions {
    /// Create new generate options rooted at `.`
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root path
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root_path = root.into();
        self
    }

    /// Set force renew
    pub fn with_force_renew(mut self, force_renew: bool) -> Self {
        self.force_renew = force_renew;
        self
    }

    /// Set dry run
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
