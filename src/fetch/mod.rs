//! Acquisition of the source documents: remote over HTTP, supplemental from disk.

pub mod client;
pub mod local;
pub mod types;

// Re-export main types
pub use client::PayloadClient;
pub use local::{load_json_file, load_supplemental};
pub use types::{default_locations, RawDocument, SourceDocuments, SourceLocations, SupplementalSources};
