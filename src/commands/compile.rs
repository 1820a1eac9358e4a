//! Payload compile command implementation.
//!
//! The compile command:
//! 1. Fetches the source documents
//! 2. Loads supplemental adgroup sources (if given)
//! 3. Merges everything into the payload
//! 4. Writes the payload file

use super::models::CompileArgs;
use crate::aggregator::{build_payload, MergeStats};
use crate::fetch::client::is_http_url;
use crate::fetch::types::missing_sources;
use crate::fetch::{load_supplemental, PayloadClient};
use crate::output::write_payload;
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Execute the compile command
///
/// **Public** - main entry point called from the binary
///
/// Nothing is written unless every fetch and every lookup succeeds.
///
/// # Errors
/// * Fetch failures (transport, non-success status, invalid JSON)
/// * Unknown categories and malformed source documents
/// * File write errors
pub fn execute_compile(args: CompileArgs) -> Result<MergeStats> {
    let start_time = Instant::now();

    // Step 1: Fetch source documents
    info!("Step 1/4: Fetching {} source documents...", args.locations.len());
    let client = PayloadClient::new().context("Failed to create HTTP client")?;
    let sources = client
        .fetch_sources(&args.locations)
        .context("Failed to fetch source documents")?;

    // Step 2: Supplemental sources
    let supplemental = match (&args.adgroups, &args.adgroup_mappings) {
        (Some(adgroups), Some(mappings)) => {
            info!("Step 2/4: Loading adgroup sources...");
            Some(load_supplemental(adgroups, mappings).context("Failed to load adgroup sources")?)
        }
        _ => {
            info!("Step 2/4: Skipping adgroup sources (not requested)");
            None
        }
    };

    // Step 3: Merge
    info!("Step 3/4: Merging payload...");
    let (payload, stats) = build_payload(&sources, supplemental.as_ref(), &args.merge_options)
        .context("Failed to merge payload")?;
    info!("{}", stats.summary());

    // Step 4: Write
    info!("Step 4/4: Writing payload...");
    write_payload(&payload, &args.output).context("Failed to write payload JSON")?;
    info!("✓ Payload written to: {}", args.output.display());

    info!("Compile completed in {:.2}s", start_time.elapsed().as_secs_f64());

    Ok(stats)
}

/// Validate compile arguments
///
/// **Public** - can be called before execute_compile for early validation
pub fn validate_compile_args(args: &CompileArgs) -> Result<()> {
    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output path cannot be empty");
    }

    if let Some(name) = missing_sources(&args.locations).first() {
        anyhow::bail!("No URL configured for {}", name);
    }

    for (name, url) in &args.locations {
        if !is_http_url(url) {
            anyhow::bail!("URL for {} must start with http:// or https://", name);
        }
    }

    if args.adgroups.is_some() != args.adgroup_mappings.is_some() {
        anyhow::bail!("Adgroup dump and adgroup mappings must be given together");
    }

    if let Some(sentinel) = &args.merge_options.unused_sentinel {
        if sentinel.is_empty() {
            anyhow::bail!("Unused-category sentinel cannot be empty");
        }
    }

    Ok(())
}
