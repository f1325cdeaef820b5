/// Scan configuration.
///
/// Supplied once per scan. `top_n` bounds how many of the largest files are
/// retained at every level of the merge; `threads` sizes the worker pool.
use crate::error::ConfigError;
use std::num::NonZeroUsize;

/// Number of largest files reported when the caller does not say otherwise.
pub const DEFAULT_TOP_N: usize = 10;

const DEFAULT_TOP_N_NZ: NonZeroUsize = match NonZeroUsize::new(DEFAULT_TOP_N) {
    Some(n) => n,
    None => panic!("DEFAULT_TOP_N must be non-zero"),
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanConfig {
    top_n: NonZeroUsize,
    threads: Option<NonZeroUsize>,
}

impl ScanConfig {
    /// Create a configuration retaining the `top_n` largest files.
    pub fn new(top_n: usize) -> Result<Self, ConfigError> {
        let top_n = NonZeroUsize::new(top_n).ok_or(ConfigError::ZeroTopN)?;
        Ok(Self {
            top_n,
            threads: None,
        })
    }

    /// Pin the worker pool to `threads` workers instead of one per core.
    pub fn with_threads(mut self, threads: usize) -> Result<Self, ConfigError> {
        self.threads = Some(NonZeroUsize::new(threads).ok_or(ConfigError::ZeroThreads)?);
        Ok(self)
    }

    #[inline]
    pub fn top_n(&self) -> usize {
        self.top_n.get()
    }

    /// Worker count for the scan pool: the configured value, or the number of
    /// logical CPUs.
    pub fn worker_threads(&self) -> usize {
        self.threads.map_or_else(num_cpus::get, NonZeroUsize::get)
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            top_n: DEFAULT_TOP_N_NZ,
            threads: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_top_n() {
        assert_eq!(ScanConfig::new(0), Err(ConfigError::ZeroTopN));
    }

    #[test]
    fn test_rejects_zero_threads() {
        let cfg = ScanConfig::new(3).unwrap();
        assert_eq!(cfg.with_threads(0), Err(ConfigError::ZeroThreads));
    }

    #[test]
    fn test_default() {
        let cfg = ScanConfig::default();
        assert_eq!(cfg.top_n(), DEFAULT_TOP_N);
        assert!(cfg.worker_threads() >= 1);
    }

    #[test]
    fn test_explicit_threads() {
        let cfg = ScanConfig::new(5).unwrap().with_threads(3).unwrap();
        assert_eq!(cfg.top_n(), 5);
        assert_eq!(cfg.worker_threads(), 3);
    }
}
