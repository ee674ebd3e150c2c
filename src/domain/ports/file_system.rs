//! FileSystem port - abstraction over file I/O operations
//!
//! This trait lets the walker, the invalidation policy and the generate use case
//! touch the disk without depending on a concrete implementation (local, mock).

use std::path::{Path, PathBuf};

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug)]
pub enum FsError {
    /// File not found
    NotFound(PathBuf),
    /// Permission denied
    PermissionDenied(PathBuf),
    /// Any other I/O error
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a path refers to, following symlinks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Dir,
    /// Dangling symlink, socket, fifo, device...
    Other,
}

impl FsError {
    /// Convert an `io::Error` while remembering which path it concerned
    pub fn at(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        FsError::at(Path::new(""), err)
    }
}

impl std::fmt::Display for FsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FsError::NotFound(path) => write!(f, "File not found: {}", path.display()),
            FsError::PermissionDenied(path) => {
                write!(f, "Permission denied: {}", path.display())
            }
            FsError::Io { path, source } if path.as_os_str().is_empty() => {
                write!(f, "I/O error: {}", source)
            }
            FsError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for FsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FsError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O with atomic writes
/// - `MockFileSystem` - in-memory for testing
pub trait FileSystem {
    /// Read raw file content
    fn read(&self, path: &Path) -> FsResult<Vec<u8>>;

    /// Read file content as string
    fn read_to_string(&self, path: &Path) -> FsResult<String> {
        let bytes = self.read(path)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }

    /// Write content to file, replacing whatever is there
    fn write(&self, path: &Path, content: &str) -> FsResult<()>;

    /// Kind of entry at `path`.
    ///
    /// Unlike [`FileSystem::exists`], a failed lookup is reported, so a
    /// permission problem is never mistaken for a missing path.
    fn metadata(&self, path: &Path) -> FsResult<EntryKind>;

    /// Check if a path exists; any lookup failure counts as absent
    fn exists(&self, path: &Path) -> bool {
        self.metadata(path).is_ok()
    }

    /// List the immediate entries of a directory, in listing order
    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        (**self).read(path)
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        (**self).write(path, content)
    }

    fn metadata(&self, path: &Path) -> FsResult<EntryKind> {
        (**self).metadata(path)
    }

    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        (**self).read_dir(path)
    }
}
