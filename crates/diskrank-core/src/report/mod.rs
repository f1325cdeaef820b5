/// Report rendering for a finished scan.
///
/// Nothing here is called by the scanner itself. The host picks one of:
///
/// - [`render`] — the human-readable text report.
/// - [`to_json`] — a [`ScanReport`] snapshot as pretty-printed JSON.
/// - [`write_csv`] — one `rank,size,path` row per retained file.
///
/// A failed scan is rendered with [`render_failure`].
use crate::error::ScanError;
use crate::model::size::{format_count, format_size, percent_of};
use crate::model::PathScan;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Write as _;
use std::io;
use std::path::PathBuf;

/// Render the text report for `scan` rooted at `root`.
///
/// ```text
/// Scanned '/data': 4 files, 3.5 KB
///
/// Largest files:
///    1.     2.0 KB   55.6%  /data/d/e
///    2.  1000 B      27.8%  /data/b
/// ```
pub fn render(scan: &PathScan, root: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Scanned '{root}': {} {}, {}",
        format_count(scan.total_count()),
        if scan.total_count() == 1 { "file" } else { "files" },
        format_size(scan.total_size())
    );

    if scan.largest_files().len() == 0 {
        let _ = writeln!(out, "\nNo files found.");
        return out;
    }

    let _ = writeln!(out, "\nLargest files:");
    for (rank, file) in scan.largest_files().enumerate() {
        let _ = writeln!(
            out,
            "{:>4}.  {:>10}  {:>5.1}%  {}",
            rank + 1,
            format_size(file.size),
            percent_of(file.size, scan.total_size()),
            file.path.display()
        );
    }
    out
}

/// Render the one-line message shown when a scan fails.
pub fn render_failure(root: &str, err: &ScanError) -> String {
    format!("scan of '{root}' failed: {err}")
}

/// A serialisable snapshot of a finished scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    pub root: String,
    pub generated_at: DateTime<Utc>,
    pub total_size: u64,
    pub total_count: u64,
    pub largest_files: Vec<RankedFile>,
}

/// One entry of [`ScanReport::largest_files`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedFile {
    pub rank: usize,
    pub size: u64,
    pub path: PathBuf,
}

impl ScanReport {
    pub fn new(scan: &PathScan, root: &str) -> Self {
        Self {
            root: root.to_string(),
            generated_at: Utc::now(),
            total_size: scan.total_size(),
            total_count: scan.total_count(),
            largest_files: ranked(scan),
        }
    }
}

fn ranked(scan: &PathScan) -> Vec<RankedFile> {
    scan.largest_files()
        .enumerate()
        .map(|(i, f)| RankedFile {
            rank: i + 1,
            size: f.size,
            path: f.path.clone(),
        })
        .collect()
}

/// Pretty-printed JSON for `scan`.
pub fn to_json(scan: &PathScan, root: &str) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ScanReport::new(scan, root))
}

/// Write the ranked files as CSV with a `rank,size,path` header.
pub fn write_csv<W: io::Write>(scan: &PathScan, writer: W) -> csv::Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    for row in ranked(scan) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}
