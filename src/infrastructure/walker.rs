//! Recursive File Tree Walker
//!
//! Implements the `FileWalker` port on top of any `FileSystem`.

use std::path::{Path, PathBuf};

use crate::domain::ports::{EntryKind, FileSystem, FileWalker, FsError};
use crate::error::{CssModError, CssModResult};
use crate::infrastructure::fs::LocalFs;

/// Depth-first walker using plain recursion.
///
/// Results follow the order the directory listing provides, which is
/// filesystem dependent. `sorted()` switches to per-directory name order.
#[derive(Debug, Clone, Default)]
pub struct RecursiveWalker<FS = LocalFs> {
    fs: FS,
    sort: bool,
}

impl RecursiveWalker<LocalFs> {
    /// Walker over the local disk
    pub fn local() -> Self {
        Self::new(LocalFs::new())
    }
}

impl<FS: FileSystem> RecursiveWalker<FS> {
    pub fn new(fs: FS) -> Self {
        Self { fs, sort: false }
    }

    /// Sort each directory listing by path before descending
    pub fn sorted(mut self) -> Self {
        self.sort = true;
        self
    }

    pub fn with_sort(mut self, sort: bool) -> Self {
        self.sort = sort;
        self
    }

    fn collect(
        &self,
        location: &Path,
        kind: EntryKind,
        files: &mut Vec<PathBuf>,
    ) -> CssModResult<()> {
        match kind {
            EntryKind::File => {
                files.push(location.to_path_buf());
                return Ok(());
            }
            // dangling symlink, socket, fifo...
            EntryKind::Other => return Ok(()),
            EntryKind::Dir => {}
        }

        let mut entries = self.fs.read_dir(location)?;
        if self.sort {
            entries.sort();
        }
        for entry in entries {
            let kind = self.fs.metadata(&entry)?;
            self.collect(&entry, kind, files)?;
        }
        Ok(())
    }
}

impl<FS: FileSystem> FileWalker for RecursiveWalker<FS> {
    fn walk(&self, path: &Path) -> CssModResult<Vec<PathBuf>> {
        let kind = match self.fs.metadata(path) {
            Ok(kind) => kind,
            Err(FsError::NotFound(_)) => {
                return Err(CssModError::NotFound {
                    path: path.to_path_buf(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let mut files = Vec::new();
        self.collect(path, kind, &mut files)?;
        Ok(files)
    }
}
