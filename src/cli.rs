/// Command-line arguments.
use clap::{ArgAction, Parser, ValueEnum};
use diskrank_core::DEFAULT_TOP_N;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "diskrank",
    version,
    about = "Report the largest files and total usage under a directory"
)]
pub struct Args {
    /// Directory (or single file) to scan
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Number of largest files to report
    #[arg(short = 'n', long = "top", env = "DISKRANK_TOP", default_value_t = DEFAULT_TOP_N)]
    pub top: usize,

    /// Worker threads for the scan (defaults to one per logical CPU)
    #[arg(short = 'j', long, env = "DISKRANK_THREADS")]
    pub threads: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, conflicts_with = "quiet")]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
    Csv,
}

impl Args {
    pub fn log_level(&self) -> tracing::Level {
        match (self.quiet, self.verbose) {
            (true, _) => tracing::Level::WARN,
            (false, 0) => tracing::Level::INFO,
            (false, 1) => tracing::Level::DEBUG,
            (false, _) => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["diskrank"]).unwrap();
        assert_eq!(args.path, PathBuf::from("."));
        assert_eq!(args.format, Format::Text);
        assert_eq!(args.log_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_flags() {
        let args =
            Args::try_parse_from(["diskrank", "/data", "-n", "3", "-j", "2", "-f", "csv", "-vv"])
                .unwrap();
        assert_eq!(args.path, PathBuf::from("/data"));
        assert_eq!(args.top, 3);
        assert_eq!(args.threads, Some(2));
        assert_eq!(args.format, Format::Csv);
        assert_eq!(args.log_level(), tracing::Level::TRACE);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Args::try_parse_from(["diskrank", "-q", "-v"]).is_err());
    }
}
