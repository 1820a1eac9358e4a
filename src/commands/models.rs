use crate::aggregator::MergeOptions;
use crate::fetch::types::{default_locations, SourceLocations};
use crate::utils::config::{DEFAULT_LOG_PATH, DEFAULT_PAYLOAD_FILE, DEFAULT_STATS_FILE};
use std::path::PathBuf;

/// Arguments for the payload compiler
///
/// **Public** - used by the binary to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompileArgs {
    /// Output path for the payload JSON
    pub output: PathBuf,

    /// Logical source name -> URL
    pub locations: SourceLocations,

    /// Merge variant settings
    pub merge_options: MergeOptions,

    /// Local adgroup dump (site lists per adgroup)
    pub adgroups: Option<PathBuf>,

    /// Local adgroup -> "top/sub" mapping
    pub adgroup_mappings: Option<PathBuf>,
}

impl Default for CompileArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_PAYLOAD_FILE),
            locations: default_locations(),
            merge_options: MergeOptions::default(),
            adgroups: None,
            adgroup_mappings: None,
        }
    }
}

/// Arguments for the log statistics extractor
#[derive(Debug, Clone)]
pub struct ProcessLogsArgs {
    /// Classification log to read
    pub input: PathBuf,

    /// TSV file to write
    pub output: PathBuf,
}

impl Default for ProcessLogsArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_LOG_PATH),
            output: PathBuf::from(DEFAULT_STATS_FILE),
        }
    }
}
