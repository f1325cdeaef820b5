/// A resolved file and its length in bytes.
///
/// # Ordering
///
/// `FileSize` orders by `size` **descending** and ignores `path` entirely.
/// Two files of equal size therefore compare equal, and a `BTreeSet<FileSize>`
/// keeps only one of them. `PathScan` relies on this: its ranked set holds at
/// most one entry per distinct size.
use crate::error::ScanError;
use crate::fs::FileSystem;
use serde::Serialize;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct FileSize {
    pub path: PathBuf,
    pub size: u64,
}

impl FileSize {
    pub fn new(path: impl Into<PathBuf>, size: u64) -> Self {
        Self {
            path: path.into(),
            size,
        }
    }

    /// Stat `file` through `fs`. A failed stat is returned as-is with the
    /// path attached; there are no retries.
    pub fn resolve<F>(file: &Path, fs: &F) -> Result<Self, ScanError>
    where
        F: FileSystem + ?Sized,
    {
        let size = fs.length(file).map_err(|e| ScanError::io(file, e))?;
        Ok(Self::new(file, size))
    }
}

impl PartialEq for FileSize {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
    }
}

impl Eq for FileSize {}

impl PartialOrd for FileSize {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FileSize {
    fn cmp(&self, other: &Self) -> Ordering {
        // Descending: larger files come first.
        other.size.cmp(&self.size)
    }
}
