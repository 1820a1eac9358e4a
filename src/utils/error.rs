//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in the binaries and commands.

use thiserror::Error;

/// Errors that can occur while fetching source documents
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Could not download {name} from {url}: HTTP {status}")]
    BadStatus {
        name: String,
        url: String,
        status: u16,
    },

    #[error("Invalid JSON in {name}: {source}")]
    InvalidJson {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No location configured for source: {0}")]
    MissingSource(String),

    #[error("Failed to read {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during parsing of URLs and log payloads
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid URL '{input}': {reason}")]
    InvalidUrl { input: String, reason: String },

    #[error("Invalid literal at offset {offset}: {reason}")]
    InvalidLiteral { offset: usize, reason: String },

    #[error("Invalid log payload: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while merging the payload
#[derive(Error, Debug)]
pub enum MergeError {
    #[error("Unknown category '{category}' for rule '{rule}'")]
    UnknownCategory { category: String, rule: String },

    #[error("Invalid source document {source_name}: {reason}")]
    InvalidSource { source_name: String, reason: String },

    #[error("Invalid adgroup mapping for '{adgroup}': {reason}")]
    InvalidMapping { adgroup: String, reason: String },

    #[error("Failed to decompose rule: {0}")]
    Decompose(#[from] ParseError),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

/// Errors that can occur while reading the classification log
#[derive(Error, Debug)]
pub enum LogError {
    #[error("Failed to read log {path}: {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
