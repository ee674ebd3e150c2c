//! In-memory file system for unit tests
//!
//! Directories are implied by the files beneath them. Listing order is the
//! order in which files were added, mimicking an unsorted directory listing.

use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};
use std::sync::{Arc, Mutex};

use indexmap::{IndexMap, IndexSet};

use crate::domain::ports::file_system::{EntryKind, FileSystem, FsError, FsResult};

/// Mock file system for testing
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Clone, Default)]
pub struct MockFileSystem {
    pub files: Arc<Mutex<IndexMap<PathBuf, Vec<u8>>>>,
    pub reads: Arc<Mutex<Vec<PathBuf>>>,
    pub writes: Arc<Mutex<Vec<PathBuf>>>,
    denied_reads: Arc<Mutex<HashSet<PathBuf>>>,
    denied_writes: Arc<Mutex<HashSet<PathBuf>>>,
    denied_stats: Arc<Mutex<HashSet<PathBuf>>>,
    denied_lists: Arc<Mutex<HashSet<PathBuf>>>,
}

impl MockFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_file(&self, path: impl AsRef<Path>, content: &str) {
        self.files
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf(), content.as_bytes().to_vec());
    }

    pub fn content(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files
            .lock()
            .unwrap()
            .get(path.as_ref())
            .map(|b| String::from_utf8_lossy(b).into_owned())
    }

    pub fn deny_read(&self, path: impl AsRef<Path>) {
        self.denied_reads
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    pub fn deny_write(&self, path: impl AsRef<Path>) {
        self.denied_writes
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Make `metadata` fail as if the parent directory were not searchable
    pub fn deny_stat(&self, path: impl AsRef<Path>) {
        self.denied_stats
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    /// Make `read_dir` fail as if the directory were not readable
    pub fn deny_list(&self, path: impl AsRef<Path>) {
        self.denied_lists
            .lock()
            .unwrap()
            .insert(path.as_ref().to_path_buf());
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.files
            .lock()
            .unwrap()
            .keys()
            .any(|key| key != path && key.starts_with(path))
    }

    pub fn written(&self) -> Vec<PathBuf> {
        self.writes.lock().unwrap().clone()
    }

    pub fn read_log(&self) -> Vec<PathBuf> {
        self.reads.lock().unwrap().clone()
    }
}

impl FileSystem for MockFileSystem {
    fn read(&self, path: &Path) -> FsResult<Vec<u8>> {
        self.reads.lock().unwrap().push(path.to_path_buf());
        if self.denied_reads.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let files = self.files.lock().unwrap();
        files
            .get(path)
            .cloned()
            .ok_or_else(|| FsError::NotFound(path.to_path_buf()))
    }

    fn write(&self, path: &Path, content: &str) -> FsResult<()> {
        if self.denied_writes.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        self.writes.lock().unwrap().push(path.to_path_buf());
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.as_bytes().to_vec());
        Ok(())
    }

    fn metadata(&self, path: &Path) -> FsResult<EntryKind> {
        if self.denied_stats.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        if self.is_file(path) {
            Ok(EntryKind::File)
        } else if self.is_dir(path) {
            Ok(EntryKind::Dir)
        } else {
            Err(FsError::NotFound(path.to_path_buf()))
        }
    }

    fn read_dir(&self, path: &Path) -> FsResult<Vec<PathBuf>> {
        if self.denied_lists.lock().unwrap().contains(path) {
            return Err(FsError::PermissionDenied(path.to_path_buf()));
        }
        let files = self.files.lock().unwrap();
        let mut children = IndexSet::new();
        for key in files.keys() {
            if key == path {
                continue;
            }
            let Ok(rest) = key.strip_prefix(path) else {
                continue;
            };
            if let Some(Component::Normal(first)) = rest.components().next() {
                children.insert(path.join(first));
            }
        }
        if children.is_empty() {
            return Err(FsError::NotFound(path.to_path_buf()));
        }
        Ok(children.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_lists_children_in_insertion_order() {
        let fs = MockFileSystem::new();
        fs.add_file("/root/b/x.scss", "");
        fs.add_file("/root/a/y.scss", "");
        fs.add_file("/root/b/z.scss", "");

        assert_eq!(
            fs.read_dir(Path::new("/root")).unwrap(),
            vec![PathBuf::from("/root/b"), PathBuf::from("/root/a")]
        );
        assert_eq!(fs.metadata(Path::new("/root/a")).unwrap(), EntryKind::Dir);
        assert_eq!(fs.metadata(Path::new("/root/a/y.scss")).unwrap(), EntryKind::File);
        assert!(matches!(fs.metadata(Path::new("/nope")), Err(FsError::NotFound(_))));
    }

    #[test]
    fn mock_denied_read() {
        let fs = MockFileSystem::new();
        fs.add_file("a", "x");
        fs.deny_read("a");
        assert!(matches!(fs.read(Path::new("a")), Err(FsError::PermissionDenied(_))));
    }

    #[test]
    fn mock_denied_stat_and_list() {
        let fs = MockFileSystem::new();
        fs.add_file("/root/a/y.scss", "");
        fs.deny_stat("/root/a/y.scss");
        fs.deny_list("/root/a");

        assert!(matches!(
            fs.metadata(Path::new("/root/a/y.scss")),
            Err(FsError::PermissionDenied(_))
        ));
        assert!(!fs.exists(Path::new("/root/a/y.scss")));
        assert!(matches!(
            fs.read_dir(Path::new("/root/a")),
            Err(FsError::PermissionDenied(_))
        ));
    }
}
