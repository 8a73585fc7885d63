use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "license-files",
    about = "List the files documenting a directory's license, in precedence order",
    version
)]
pub struct Cli {
    /// Directory to inspect
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Config file [default: ./.license-files/config.toml, fallback ~/.config/license-files/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Only report the highest-precedence license file
    #[arg(long)]
    pub first: bool,

    /// Log rule evaluation to stderr
    #[arg(short, long)]
    pub verbose: bool,

    /// Print file names only, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}
