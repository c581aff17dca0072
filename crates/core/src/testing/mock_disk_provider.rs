//! Mock disk provider for testing.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use crate::decision::{DiskError, DiskProvider};

/// In-memory stand-in for the filesystem.
///
/// Unknown paths report `None` free space and no files.
///
/// # Example
///
/// ```rust,ignore
/// use releasegate_core::testing::MockDiskProvider;
///
/// let disk = MockDiskProvider::new();
/// disk.set_free_space(Path::new("/tv"), Some(10 * 1024 * 1024 * 1024));
/// disk.add_file(PathBuf::from("/tv/Series/Season 1/episode.mkv"));
/// ```
#[derive(Debug, Default)]
pub struct MockDiskProvider {
    free_space: RwLock<HashMap<PathBuf, Option<u64>>>,
    missing_directories: RwLock<HashSet<PathBuf>>,
    files: RwLock<HashSet<PathBuf>>,
    /// Number of `available_space` calls.
    space_lookups: AtomicUsize,
}

impl MockDiskProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_free_space(&self, path: &Path, bytes: Option<u64>) {
        self.free_space
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf(), bytes);
    }

    /// Make lookups for `path` fail with [`DiskError::DirectoryNotFound`].
    pub fn set_missing_directory(&self, path: &Path) {
        self.missing_directories
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_path_buf());
    }

    pub fn add_file(&self, path: PathBuf) {
        self.files.write().unwrap_or_else(|e| e.into_inner()).insert(path);
    }

    pub fn space_lookups(&self) -> usize {
        self.space_lookups.load(Ordering::SeqCst)
    }
}

impl DiskProvider for MockDiskProvider {
    fn available_space(&self, path: &Path) -> Result<Option<u64>, DiskError> {
        self.space_lookups.fetch_add(1, Ordering::SeqCst);

        if self.missing_directories.read().unwrap_or_else(|e| e.into_inner()).contains(path) {
            return Err(DiskError::DirectoryNotFound(path.to_path_buf()));
        }
        Ok(self.free_space.read().unwrap_or_else(|e| e.into_inner()).get(path).copied().flatten())
    }

    fn file_exists(&self, path: &Path) -> bool {
        self.files.read().unwrap_or_else(|e| e.into_inner()).contains(path)
    }
}
