pub mod sweep;

use std::path::PathBuf;

use clap::Parser;
use grabbr_common::config::DEFAULT_WORKERS;

#[derive(Parser)]
#[command(name = "grabbr")]
#[command(about = "Bulk HTTP(S) header reconnaissance.")]
pub struct CommandLine {
    /// A single host to probe
    #[arg(long)]
    pub host: Option<String>,

    /// File containing a newline-separated list of targets
    #[arg(long, default_value = "/tmp/scan_targets.txt", conflicts_with = "host")]
    pub infile: PathBuf,

    /// Comma-separated ports probed on every target
    #[arg(long, required = true, value_delimiter = ',')]
    pub ports: Vec<u16>,

    /// File the JSON result set is written to
    #[arg(long, default_value = "/tmp/scan_results.json")]
    pub outfile: PathBuf,

    /// Timeout in seconds for a single probe attempt
    #[arg(long, default_value_t = 3)]
    pub timeout: u64,

    /// Number of concurrent workers
    #[arg(long, default_value_t = DEFAULT_WORKERS)]
    pub workers: usize,

    /// Suppress the startup banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
