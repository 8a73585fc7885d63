//! `license-files` — report which files document a directory's license.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config and build the precedence table ([`license_files::config`]).
//! 3. List the directory and match its entries ([`license_files::scan_dir`]).
//! 4. Render the requested report ([`report`]).
//! 5. Exit `0` when a license file was found, `1` otherwise.

mod cli;
mod report;

use anyhow::{Context, Result};
use clap::Parser;

use cli::{Cli, ReportFormat};
use license_files::config::load_config;
use license_files::scan_dir;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let config = load_config(&cli.path, cli.config.as_deref())?;
    let precedence = config.precedence()?;

    let mut report = scan_dir(&cli.path, &precedence)
        .with_context(|| format!("cannot scan {}", cli.path.display()))?;

    if cli.first {
        report.files.truncate(1);
    }

    match cli.report {
        ReportFormat::Terminal => report::terminal::render(&report, cli.quiet)?,
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if report.files.is_empty() {
        std::process::exit(1);
    }

    Ok(())
}
