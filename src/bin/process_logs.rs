//! Classification log statistics CLI
//!
//! Turns classification logger output into a `tabs_open` /
//! `classification_time_ms` TSV ready for a spreadsheet.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use lica_payload::commands::{execute_process_logs, validate_process_logs_args, ProcessLogsArgs};
use lica_payload::utils::config::{DEFAULT_LOG_PATH, DEFAULT_STATS_FILE};

/// Extract classification timing statistics from a log
#[derive(Parser, Debug)]
#[command(name = "process-logs")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Classification log to read
    #[arg(short, long, env = "LICA_LOG_PATH", default_value = DEFAULT_LOG_PATH)]
    input: PathBuf,

    /// TSV file to write
    #[arg(short, long, default_value = DEFAULT_STATS_FILE)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let args = ProcessLogsArgs {
        input: cli.input,
        output: cli.output,
    };

    validate_process_logs_args(&args)?;
    execute_process_logs(args)?;

    Ok(())
}
