/// Data model for diskrank scans.
///
/// Typed paths, resolved file sizes, and the bounded `PathScan` aggregate.
pub mod file_size;
pub mod path;
pub mod path_scan;
pub mod size;

pub use file_size::FileSize;
pub use path::ScanPath;
pub use path_scan::PathScan;
