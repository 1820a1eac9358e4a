//! LICA payload compiler CLI
//!
//! Fetches the classifier's source datasets, merges them and writes
//! the payload JSON.

use anyhow::Result;
use clap::Parser;
use env_logger::Env;
use std::path::PathBuf;

use lica_payload::aggregator::{MergeOptions, Variant};
use lica_payload::commands::{execute_compile, validate_compile_args, CompileArgs};
use lica_payload::utils::config::{
    DEFAULT_DOMAIN_RULES_URL, DEFAULT_HIERARCHY_URL, DEFAULT_KEYWORDS_URL, DEFAULT_PAYLOAD_FILE,
    DEFAULT_STOPWORDS_URL, DEFAULT_UNUSED_SENTINEL, DOMAIN_RULES_SOURCE, HIERARCHY_SOURCE,
    KEYWORDS_SOURCE, STOPWORDS_SOURCE,
};

/// Compile the LICA classifier payload
#[derive(Parser, Debug)]
#[command(name = "compile-payload")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output path for the payload JSON
    #[arg(default_value = DEFAULT_PAYLOAD_FILE)]
    output: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Category hierarchy URL
    #[arg(long, env = "LICA_HIERARCHY_URL", default_value = DEFAULT_HIERARCHY_URL)]
    hierarchy_url: String,

    /// Domain/host/path rules URL
    #[arg(long, env = "LICA_DOMAIN_RULES_URL", default_value = DEFAULT_DOMAIN_RULES_URL)]
    domain_rules_url: String,

    /// Keyword lists URL
    #[arg(long, env = "LICA_KEYWORDS_URL", default_value = DEFAULT_KEYWORDS_URL)]
    keywords_url: String,

    /// Stopword list URL
    #[arg(long, env = "LICA_STOPWORDS_URL", default_value = DEFAULT_STOPWORDS_URL)]
    stopwords_url: String,

    /// Raw category that marks a domain rule as unused
    #[arg(long, default_value = DEFAULT_UNUSED_SENTINEL)]
    unused_sentinel: String,

    /// Keep every domain rule (no unused-category filtering)
    #[arg(long, conflicts_with = "unused_sentinel")]
    no_sentinel: bool,

    /// Local adgroup dump to merge into the domain rules
    #[arg(long, requires = "adgroup_mappings")]
    adgroups: Option<PathBuf>,

    /// Local adgroup -> "top/sub" category mapping
    #[arg(long, requires = "adgroups")]
    adgroup_mappings: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let merge_options = if cli.no_sentinel {
        MergeOptions::from(Variant::Unfiltered)
    } else {
        MergeOptions {
            unused_sentinel: Some(cli.unused_sentinel),
        }
    };

    let locations = [
        (HIERARCHY_SOURCE, cli.hierarchy_url),
        (DOMAIN_RULES_SOURCE, cli.domain_rules_url),
        (KEYWORDS_SOURCE, cli.keywords_url),
        (STOPWORDS_SOURCE, cli.stopwords_url),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url))
    .collect();

    let args = CompileArgs {
        output: cli.output,
        locations,
        merge_options,
        adgroups: cli.adgroups,
        adgroup_mappings: cli.adgroup_mappings,
    };

    // Validate args first
    validate_compile_args(&args)?;

    // Execute compile
    execute_compile(args)?;

    Ok(())
}
