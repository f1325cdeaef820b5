/// Whole-tree scan entry point.
///
/// [`scan_tree`] builds a dedicated rayon pool sized by the configuration,
/// runs the recursive fan-out from [`parallel`] inside it, and returns either
/// the root's `PathScan` or the first failure in traversal order. Nothing
/// partial is ever returned alongside an error.
pub mod parallel;

use crate::config::ScanConfig;
use crate::error::ScanError;
use crate::fs::FileSystem;
use crate::model::{PathScan, ScanPath};
use std::time::Instant;
use tracing::{debug, info};

/// Stack size for scan workers.
///
/// Every directory level nests another `par_iter` frame on the worker that
/// descends into it, so the default rayon stack overflows on deep trees.
/// 64 MiB holds several thousand levels even in debug builds; the memory is
/// reserved, not committed, until a deep tree touches it.
pub const SCAN_STACK_SIZE: usize = 64 * 1024 * 1024;

/// Scan `root` through `fs`, keeping the `config.top_n()` largest files.
pub fn scan_tree<F>(root: &ScanPath, config: &ScanConfig, fs: &F) -> Result<PathScan, ScanError>
where
    F: FileSystem + ?Sized,
{
    let threads = config.worker_threads();
    info!(
        "Starting scan of {} (top {}, {} workers)",
        root.path().display(),
        config.top_n(),
        threads
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("diskrank-scan-{i}"))
        .stack_size(SCAN_STACK_SIZE)
        .build()?;

    let start = Instant::now();
    let result = pool.install(|| parallel::scan_path(root, config.top_n(), fs));

    match &result {
        Ok(scan) => debug!(
            "Scan of {} complete: {} files, {} bytes in {:?}",
            root.path().display(),
            scan.total_count(),
            scan.total_size(),
            start.elapsed()
        ),
        Err(err) => debug!(
            "Scan of {} failed after {:?}: {err}",
            root.path().display(),
            start.elapsed()
        ),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::MemoryFs;

    #[test]
    fn test_scan_tree_uses_configured_pool() {
        let fs = MemoryFs::new().with_file("/r/a", 10).with_file("/r/b/c", 20);
        let config = ScanConfig::new(1).unwrap().with_threads(2).unwrap();

        let scan = scan_tree(&ScanPath::directory("/r"), &config, &fs).unwrap();
        assert_eq!(scan.total_count(), 2);
        assert_eq!(scan.total_size(), 30);
        assert_eq!(scan.largest_files().map(|f| f.size).collect::<Vec<_>>(), vec![20]);
    }

    #[test]
    fn test_scan_tree_accepts_trait_object() {
        let fs: Box<dyn FileSystem> = Box::new(MemoryFs::new().with_file("/r/a", 4));
        let scan = scan_tree(&ScanPath::directory("/r"), &ScanConfig::default(), &fs).unwrap();
        assert_eq!(scan.total_size(), 4);
    }
}
