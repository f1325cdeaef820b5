/// Filesystem capability used by the scanner.
///
/// The scanner only ever touches the filesystem through [`FileSystem`]:
/// one call to stat a file, one call to list a directory. Implementations
/// are shared across every worker thread, so they must be `Send + Sync`.
///
/// - [`LocalFs`] reads the real filesystem.
/// - [`MemoryFs`] serves an in-memory tree with injectable failures.
pub mod local;
pub mod memory;

pub use local::LocalFs;
pub use memory::MemoryFs;

use crate::model::ScanPath;
use std::io;
use std::path::Path;

pub trait FileSystem: Send + Sync {
    /// Length of a regular file in bytes.
    fn length(&self, file: &Path) -> io::Result<u64>;

    /// Immediate children of a directory.
    ///
    /// Entries that are neither regular files nor directories (symlinks,
    /// devices, sockets, ...) are left out. The order is up to the
    /// implementation but must be the same for the whole call, since the
    /// scanner uses it as the traversal order.
    fn list_files(&self, directory: &Path) -> io::Result<Vec<ScanPath>>;
}

impl<F: FileSystem + ?Sized> FileSystem for &F {
    fn length(&self, file: &Path) -> io::Result<u64> {
        (**self).length(file)
    }

    fn list_files(&self, directory: &Path) -> io::Result<Vec<ScanPath>> {
        (**self).list_files(directory)
    }
}

impl<F: FileSystem + ?Sized> FileSystem for Box<F> {
    fn length(&self, file: &Path) -> io::Result<u64> {
        (**self).length(file)
    }

    fn list_files(&self, directory: &Path) -> io::Result<Vec<ScanPath>> {
        (**self).list_files(directory)
    }
}
