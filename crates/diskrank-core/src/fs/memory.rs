/// In-memory filesystem for tests and dry runs.
///
/// Entries are registered with a builder; missing ancestor directories are
/// created on the fly, and children are listed in the order they were added.
/// Any entry can be made to fail with a chosen `io::ErrorKind` or to stall
/// for a fixed delay before answering, which lets callers force a specific
/// completion order across concurrent siblings.
///
/// ```
/// use diskrank_core::fs::MemoryFs;
/// use std::io::ErrorKind;
///
/// let fs = MemoryFs::new()
///     .with_file("/r/a", 500)
///     .with_file("/r/d/e", 2_000)
///     .with_failure("/r/d/e", ErrorKind::PermissionDenied);
/// # let _ = fs;
/// ```
use super::FileSystem;
use crate::model::ScanPath;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::thread;
use std::time::Duration;

#[derive(Debug, Clone)]
enum Node {
    File { size: u64 },
    Directory { children: Vec<PathBuf> },
    /// Neither a regular file nor a directory (symlink, socket, device).
    Special,
}

#[derive(Debug, Clone)]
struct Entry {
    node: Node,
    failure: Option<io::ErrorKind>,
    delay: Option<Duration>,
}

impl Entry {
    fn new(node: Node) -> Self {
        Self {
            node,
            failure: None,
            delay: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct MemoryFs {
    entries: HashMap<PathBuf, Entry>,
    /// Every path passed to `length` or `list_files`, in call order.
    access_log: Mutex<Vec<PathBuf>>,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a regular file of `size` bytes.
    pub fn with_file(mut self, path: impl Into<PathBuf>, size: u64) -> Self {
        self.insert(path.into(), Node::File { size });
        self
    }

    /// Register an (initially empty) directory.
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if !matches!(
            self.entries.get(&path).map(|e| &e.node),
            Some(Node::Directory { .. })
        ) {
            self.insert(path, Node::Directory { children: Vec::new() });
        }
        self
    }

    /// Register an entry that is neither a file nor a directory. It is
    /// omitted from its parent's listing.
    pub fn with_special(mut self, path: impl Into<PathBuf>) -> Self {
        self.insert(path.into(), Node::Special);
        self
    }

    /// Make every access to `path` fail with `kind`. The path must already
    /// be registered.
    pub fn with_failure(mut self, path: impl AsRef<Path>, kind: io::ErrorKind) -> Self {
        if let Some(entry) = self.registered_mut(path.as_ref()) {
            entry.failure = Some(kind);
        }
        self
    }

    /// Stall every access to `path` for `delay` before answering. The path
    /// must already be registered.
    pub fn with_delay(mut self, path: impl AsRef<Path>, delay: Duration) -> Self {
        if let Some(entry) = self.registered_mut(path.as_ref()) {
            entry.delay = Some(delay);
        }
        self
    }

    /// Entry for a path that a builder call expects to exist. An injected
    /// fault on an unknown path would silently never fire.
    fn registered_mut(&mut self, path: &Path) -> Option<&mut Entry> {
        let entry = self.entries.get_mut(path);
        debug_assert!(
            entry.is_some(),
            "path not registered in MemoryFs: {}",
            path.display()
        );
        entry
    }

    /// Paths accessed so far, in call order.
    pub fn access_log(&self) -> Vec<PathBuf> {
        self.access_log.lock().clone()
    }

    /// Whether `path` has been stat-ed or listed.
    pub fn was_accessed(&self, path: impl AsRef<Path>) -> bool {
        self.access_log.lock().iter().any(|p| p == path.as_ref())
    }

    fn insert(&mut self, path: PathBuf, node: Node) {
        self.ensure_ancestors(&path);
        let parent_listed = path.parent().filter(|p| !p.as_os_str().is_empty());
        if let Some(parent) = parent_listed {
            if let Some(Entry {
                node: Node::Directory { children },
                ..
            }) = self.entries.get_mut(parent)
            {
                if !children.contains(&path) {
                    children.push(path.clone());
                }
            }
        }
        self.entries.insert(path, Entry::new(node));
    }

    /// Create any missing directories between the root and `path`'s parent.
    fn ensure_ancestors(&mut self, path: &Path) {
        let mut missing = Vec::new();
        let mut current = path.parent();
        while let Some(dir) = current.filter(|p| !p.as_os_str().is_empty()) {
            if self.entries.contains_key(dir) {
                break;
            }
            missing.push(dir.to_path_buf());
            current = dir.parent();
        }

        for dir in missing.into_iter().rev() {
            self.insert(dir, Node::Directory { children: Vec::new() });
        }
    }

    /// Record the access, apply any delay and injected failure, and return
    /// the entry.
    fn visit(&self, path: &Path) -> io::Result<&Entry> {
        self.access_log.lock().push(path.to_path_buf());

        let entry = self.entries.get(path).ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no such entry: {}", path.display()),
            )
        })?;
        if let Some(delay) = entry.delay {
            thread::sleep(delay);
        }
        if let Some(kind) = entry.failure {
            return Err(io::Error::new(kind, format!("injected {kind:?} failure")));
        }
        Ok(entry)
    }
}

impl FileSystem for MemoryFs {
    fn length(&self, file: &Path) -> io::Result<u64> {
        match self.visit(file)?.node {
            Node::File { size } => Ok(size),
            Node::Directory { .. } | Node::Special => Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a regular file: {}", file.display()),
            )),
        }
    }

    fn list_files(&self, directory: &Path) -> io::Result<Vec<ScanPath>> {
        let Node::Directory { children } = &self.visit(directory)?.node else {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("not a directory: {}", directory.display()),
            ));
        };

        Ok(children
            .iter()
            .filter_map(|child| match self.entries.get(child).map(|e| &e.node) {
                Some(Node::File { .. }) => Some(ScanPath::File(child.clone())),
                Some(Node::Directory { .. }) => Some(ScanPath::Directory(child.clone())),
                Some(Node::Special) | None => None,
            })
            .collect())
    }
}
