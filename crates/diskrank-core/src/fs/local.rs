/// The real filesystem, through `std::fs`.
///
/// Symlinks are never followed: file lengths come from `symlink_metadata`
/// and directory entries are typed with `DirEntry::file_type`, so a link is
/// neither a file nor a directory and is dropped from listings.
use super::FileSystem;
use crate::model::ScanPath;
use std::fs;
use std::io;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    pub fn new() -> Self {
        Self
    }

    /// Type a scan root. Returns `None` when the path exists but is neither
    /// a regular file nor a directory.
    ///
    /// Unlike entries found during the scan, a root that is a symlink is
    /// followed: the returned `ScanPath` names the resolved target, so the
    /// scan stats and lists the target rather than the link.
    pub fn classify(&self, path: &Path) -> io::Result<Option<ScanPath>> {
        let root = if fs::symlink_metadata(path)?.file_type().is_symlink() {
            fs::canonicalize(path)?
        } else {
            path.to_path_buf()
        };

        let file_type = fs::symlink_metadata(&root)?.file_type();
        Ok(if file_type.is_dir() {
            Some(ScanPath::Directory(root))
        } else if file_type.is_file() {
            Some(ScanPath::File(root))
        } else {
            None
        })
    }
}

impl FileSystem for LocalFs {
    fn length(&self, file: &Path) -> io::Result<u64> {
        // Stat without following links; the listing already excluded them.
        Ok(fs::symlink_metadata(file)?.len())
    }

    fn list_files(&self, directory: &Path) -> io::Result<Vec<ScanPath>> {
        let mut children = Vec::new();
        for entry in fs::read_dir(directory)? {
            let entry = entry?;
            let file_type = entry.file_type()?;
            if file_type.is_dir() {
                children.push(ScanPath::Directory(entry.path()));
            } else if file_type.is_file() {
                children.push(ScanPath::File(entry.path()));
            }
        }

        // `read_dir` order is platform-dependent; sort for a stable traversal.
        children.sort_unstable_by(|a, b| a.path().cmp(b.path()));
        Ok(children)
    }
}
