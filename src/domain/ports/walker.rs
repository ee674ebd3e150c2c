//! FileWalker port - candidate discovery

use std::path::{Path, PathBuf};

use crate::error::CssModResult;

/// Produces the flat list of candidate files below a starting path.
///
/// A file path yields itself; a directory yields every file beneath it.
/// Filtering by naming convention is not the walker's job.
pub trait FileWalker {
    /// Walk `path` and return every file found
    fn walk(&self, path: &Path) -> CssModResult<Vec<PathBuf>>;
}
