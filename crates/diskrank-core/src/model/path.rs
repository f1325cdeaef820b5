/// Typed filesystem paths.
///
/// The scanner never inspects a path directly. Whether an entry is a file or
/// a directory is decided by the filesystem capability when it lists the
/// parent, and carried here as the variant.
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ScanPath {
    File(PathBuf),
    Directory(PathBuf),
}

impl ScanPath {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self::Directory(path.into())
    }

    /// The underlying path, regardless of variant.
    pub fn path(&self) -> &Path {
        match self {
            Self::File(p) | Self::Directory(p) => p,
        }
    }

    #[inline]
    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory(_))
    }
}
