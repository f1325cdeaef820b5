/// diskrank Core — scanning, ranking, and reporting.
///
/// This crate contains all business logic with no CLI dependencies.
/// The host supplies a root path, a [`ScanConfig`] and a [`FileSystem`],
/// and gets back either a bounded [`PathScan`] or the first [`ScanError`]
/// in traversal order.
///
/// # Modules
///
/// - [`model`] — Typed paths, file sizes, and the bounded `PathScan` aggregate.
/// - [`fs`] — The filesystem capability plus local and in-memory implementations.
/// - [`scanner`] — Concurrent recursive scan over a rayon pool.
/// - [`report`] — Text, JSON, and CSV rendering of a finished scan.
/// - [`config`] — Scan configuration.
/// - [`error`] — Scan and configuration errors.
pub mod config;
pub mod error;
pub mod fs;
pub mod model;
pub mod report;
pub mod scanner;

pub use config::{ScanConfig, DEFAULT_TOP_N};
pub use error::{ConfigError, ScanError};
pub use fs::FileSystem;
pub use model::{FileSize, PathScan, ScanPath};
pub use scanner::scan_tree;
