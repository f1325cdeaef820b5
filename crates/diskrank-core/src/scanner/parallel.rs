/// Recursive fan-out scan over a rayon pool.
///
/// Each directory lists its children once, then scans every child as its own
/// rayon task. Child results are collected in listing order before anything
/// is merged, which gives two guarantees regardless of which task finishes
/// first:
///
/// - the bounded-rank fold always sees children in traversal order, and
/// - when several children fail, the error reported is the one from the
///   first failing child in that order.
///
/// Siblings of a failing child are never cancelled. They run to completion
/// and their results are dropped.
use crate::error::ScanError;
use crate::fs::FileSystem;
use crate::model::{FileSize, PathScan, ScanPath};
use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, trace};

/// Scan one path, keeping at most `limit` largest files.
///
/// Must run inside the scan pool (see [`super::scan_tree`]) for the fan-out
/// to use the configured worker count; outside it rayon's global pool is used.
pub fn scan_path<F>(path: &ScanPath, limit: usize, fs: &F) -> Result<PathScan, ScanError>
where
    F: FileSystem + ?Sized,
{
    match path {
        ScanPath::File(file) => FileSize::resolve(file, fs).map(PathScan::of_file),
        ScanPath::Directory(dir) => scan_directory(dir, limit, fs),
    }
}

fn scan_directory<F>(dir: &Path, limit: usize, fs: &F) -> Result<PathScan, ScanError>
where
    F: FileSystem + ?Sized,
{
    // A listing failure ends this subtree before any child is dispatched.
    let children = fs.list_files(dir).map_err(|e| ScanError::io(dir, e))?;
    trace!("Listed {} entries in {}", children.len(), dir.display());

    // `collect` into a Vec of Results (not a Result of Vec) so that every
    // child runs to completion and the order matches the listing.
    let results: Vec<Result<PathScan, ScanError>> = children
        .par_iter()
        .map(|child| scan_path(child, limit, fs))
        .collect();

    let merged = results
        .into_iter()
        .try_fold(PathScan::empty(), |acc, child| {
            child.map(|scan| acc.merge(scan, limit))
        });

    if let Err(err) = &merged {
        debug!("Scan of {} aborted: {err}", dir.display());
    }
    merged
}
