//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

/// Local file system implementation
///
/// Writes go through a temp file in the target directory followed by a rename,
/// so a reader never observes a half-written declaration file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

/// Write content to a file atomically using tempfile + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> FsResult<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut temp_file = tempfile::NamedTempFile::new_in(parent).map_err(|e| FsError::at(parent, e))?;
    temp_file
        .write_all(content)
        .map_err(|e| FsError::at(path, e))?;
    temp_file
        .persist(path)
        .map_err(|e| FsError::at(path, e.error))?;

    Ok(())
}

impl FileSystem for LocalFs {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        std::fs::read(path).map_err(|e| FsError::at(path, e))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        atomic_write(path, content.as_bytes())
    }

    fn metadata(&self, path: &Path) -> FsResult<EntryKind> {
        match std::fs::metadata(path) {
            Ok(meta) if meta.is_file() => Ok(EntryKind::File),
            Ok(meta) if meta.is_dir() => Ok(EntryKind::Dir),
            Ok(_) => Ok(EntryKind::Other),
            // A dangling symlink still has its own entry
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                match std::fs::symlink_metadata(path) {
                    Ok(_) => Ok(EntryKind::Other),
                    Err(_) => Err(FsError::at(path, e)),
                }
            }
            Err(e) => Err(FsError::at(path, e)),
        }
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        let mut entries = Vec::new();
        for entry in std::fs::read_dir(path).map_err(|e| FsError::at(path, e))? {
            let entry = entry.map_err(|e| FsError::at(path, e))?;
            entries.push(entry.path());
        }
        Ok(entries)
    }
}
