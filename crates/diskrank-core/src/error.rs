/// Error types for scanning and configuration.
///
/// The scanner has a single failure kind at its core: an I/O error raised by
/// the filesystem capability. The underlying `io::Error` is kept unchanged and
/// paired with the path that was being accessed.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A failed scan.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Stat-ing a file or listing a directory failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The worker pool could not be started. Raised before any filesystem access.
    #[error("failed to start scan workers: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

impl ScanError {
    /// Wrap a filesystem error with the path it occurred on.
    pub fn io(path: &Path, source: io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path being accessed when the failure occurred, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => Some(path),
            Self::ThreadPool(_) => None,
        }
    }

    /// The `io::ErrorKind` of the underlying cause, if this is an I/O failure.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            Self::ThreadPool(_) => None,
        }
    }
}

/// Invalid scan configuration, rejected before a scan starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("top-N must be at least 1")]
    ZeroTopN,

    #[error("worker thread count must be at least 1")]
    ZeroThreads,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display_includes_path_and_cause() {
        let err = ScanError::io(
            Path::new("/data/locked"),
            io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
        );
        assert_eq!(err.to_string(), "/data/locked: permission denied");
        assert_eq!(err.path(), Some(Path::new("/data/locked")));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::PermissionDenied));
    }

    #[test]
    fn test_io_error_keeps_source() {
        use std::error::Error as _;
        let err = ScanError::io(Path::new("x"), io::Error::from(io::ErrorKind::NotFound));
        let source = err.source().expect("io variant carries a source");
        assert!(source.downcast_ref::<io::Error>().is_some());
    }
}
