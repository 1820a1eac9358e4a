//! JSON payload output writer.
//!
//! Writes the compiled payload as sorted, indented UTF-8 JSON.

use crate::parser::schema::Payload;
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Write the payload to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// The document is serialized in full, written to a temporary file beside
/// the target and then renamed over it, so a failed run never leaves a
/// partial file and an existing payload stays intact.
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
///
/// # Example
/// ```ignore
/// let (payload, _) = build_payload(&sources, None, &MergeOptions::default())?;
/// write_payload(&payload, "lica_payload.json")?;
/// ```
pub fn write_payload(payload: &Payload, output_path: impl AsRef<Path>) -> Result<u64, OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing payload to: {}", output_path.display());

    let json = payload_to_string(payload)?;

    super::prepare_path(output_path)?;

    let dir = match output_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir).map_err(OutputError::WriteFailed)?;
    staged.write_all(json.as_bytes()).map_err(OutputError::WriteFailed)?;
    staged.as_file().sync_all().map_err(OutputError::WriteFailed)?;
    debug!("Staged payload at {}", staged.path().display());

    staged
        .persist(output_path)
        .map_err(|e| OutputError::WriteFailed(e.error))?;

    let size = json.len() as u64;
    info!("Payload written successfully ({} bytes)", size);

    Ok(size)
}

/// Serialize the payload with two-space indentation
pub fn payload_to_string(payload: &Payload) -> Result<String, OutputError> {
    serde_json::to_string_pretty(payload).map_err(OutputError::SerializationFailed)
}

/// Read a payload from a JSON file
///
/// **Public** - useful for validation and testing
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_payload(input_path: impl AsRef<Path>) -> Result<Payload, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading payload from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let payload: Payload =
        serde_json::from_reader(std::io::BufReader::new(file)).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Payload loaded: {} domain rules, {} keywords",
        payload.domain_rules.len(),
        payload.keywords.len()
    );

    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{Category, DomainRules, KeywordTable, NestedRules};
    use serde_json::json;

    fn create_test_payload() -> Payload {
        let mut domain_rules = DomainRules::new();
        domain_rules.insert("espn.com".to_string(), Category::new("sports", "general"));

        let mut keywords = KeywordTable::new();
        keywords.insert("guitar".to_string(), Category::new("arts", "music"));

        Payload {
            bad_domain_specific: json!(["facebook.com"]),
            domain_rules,
            host_rules: NestedRules::new(),
            ignore_domains: json!({}),
            keywords,
            path_rules: NestedRules::new(),
            stopwords: json!(["the"]),
        }
    }

    #[test]
    fn test_write_and_read_payload() {
        let payload = create_test_payload();
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_payload(&payload, path).unwrap();
        let loaded = read_payload(path).unwrap();

        assert_eq!(loaded, payload);
    }

    #[test]
    fn test_payload_keys_are_sorted() {
        let json = payload_to_string(&create_test_payload()).unwrap();

        let positions: Vec<usize> = [
            "\"bad_domain_specific\"",
            "\"domain_rules\"",
            "\"host_rules\"",
            "\"ignore_domains\"",
            "\"keywords\"",
            "\"path_rules\"",
            "\"stopwords\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(json.starts_with("{\n  \"bad_domain_specific\""));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("nested/dirs/lica_payload.json");

        write_payload(&create_test_payload(), &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_replaces_existing_file_without_leftovers() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("lica_payload.json");
        std::fs::write(&path, "x".repeat(64 * 1024)).unwrap();

        write_payload(&create_test_payload(), &path).unwrap();

        assert_eq!(read_payload(&path).unwrap(), create_test_payload());
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_rejected_target_is_left_untouched() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("lica_payload.json");
        std::fs::create_dir(&path).unwrap();
        std::fs::write(path.join("keep.txt"), "kept").unwrap();

        assert!(write_payload(&create_test_payload(), &path).is_err());

        assert_eq!(std::fs::read_to_string(path.join("keep.txt")).unwrap(), "kept");
        let entries: Vec<_> = std::fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }
}
