//! diskrank: report the largest files under a directory.
//!
//! Thin binary entry point. All scanning and rendering lives in the
//! `diskrank-core` crate.

mod cli;

use anyhow::{bail, Context};
use clap::Parser;
use cli::{Args, Format};
use diskrank_core::fs::LocalFs;
use diskrank_core::{report, scan_tree, ScanConfig};
use std::io::{self, Write};
use std::process::ExitCode;
use std::time::Instant;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    // Logs go to stderr so stdout carries only the report.
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .init();

    tracing::info!("diskrank starting");

    let mut config = ScanConfig::new(args.top).context("invalid --top")?;
    if let Some(threads) = args.threads {
        config = config.with_threads(threads).context("invalid --threads")?;
    }

    let fs = LocalFs::new();
    let root_display = args.path.display().to_string();
    let Some(root) = fs
        .classify(&args.path)
        .with_context(|| format!("cannot access '{root_display}'"))?
    else {
        bail!("'{root_display}' is neither a regular file nor a directory");
    };

    let start = Instant::now();
    let outcome = scan_tree(&root, &config, &fs);
    tracing::info!("Scan finished in {:?}", start.elapsed());

    let scan = match outcome {
        Ok(scan) => scan,
        Err(err) => {
            eprintln!("{}", report::render_failure(&root_display, &err));
            return Ok(ExitCode::FAILURE);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match args.format {
        Format::Text => out.write_all(report::render(&scan, &root_display).as_bytes())?,
        Format::Json => {
            let json = report::to_json(&scan, &root_display).context("failed to encode JSON")?;
            writeln!(out, "{json}")?;
        }
        Format::Csv => report::write_csv(&scan, &mut out).context("failed to write CSV")?,
    }
    out.flush()?;

    Ok(ExitCode::SUCCESS)
}
