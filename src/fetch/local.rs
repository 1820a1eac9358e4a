//! Loader for local JSON source files.

use super::types::{RawDocument, SupplementalSources};
use crate::utils::error::FetchError;
use log::debug;
use std::path::Path;

/// Read and parse a local JSON file
pub fn load_json_file(path: impl AsRef<Path>) -> Result<RawDocument, FetchError> {
    let path = path.as_ref();
    debug!("Loading {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|source| FetchError::ReadFailed {
        path: path.display().to_string(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| FetchError::InvalidJson {
        name: path.display().to_string(),
        source,
    })
}

/// Load the adgroup dump and its category mapping
pub fn load_supplemental(
    adgroups: impl AsRef<Path>,
    mappings: impl AsRef<Path>,
) -> Result<SupplementalSources, FetchError> {
    Ok(SupplementalSources {
        adgroups: load_json_file(adgroups)?,
        mappings: load_json_file(mappings)?,
    })
}
