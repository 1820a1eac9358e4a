//! Log statistics command implementation.
//!
//! Reads the classification log, groups classification times by the
//! number of open tabs and writes them as TSV rows.

use super::models::ProcessLogsArgs;
use crate::aggregator::{histogram_from_file, LogScanStats};
use crate::output::write_histogram;
use anyhow::{Context, Result};
use log::info;

/// Execute the log statistics command
pub fn execute_process_logs(args: ProcessLogsArgs) -> Result<LogScanStats> {
    let (histogram, stats) = histogram_from_file(&args.input)
        .with_context(|| format!("Failed to read classification log {}", args.input.display()))?;

    info!("{}", stats.summary());
    info!(
        "Collected {} samples across {} tab counts",
        histogram.sample_count(),
        histogram.len()
    );

    write_histogram(&histogram, &args.output).context("Failed to write statistics TSV")?;
    info!("✓ Statistics written to: {}", args.output.display());

    Ok(stats)
}

/// Validate log statistics arguments
pub fn validate_process_logs_args(args: &ProcessLogsArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if args.input == args.output {
        anyhow::bail!("Input and output must be different files");
    }

    Ok(())
}
