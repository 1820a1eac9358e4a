//! Aggregation of source documents and log lines.
//!
//! This module transforms parsed inputs into:
//! - The taxonomy lookup and flattened keyword table
//! - Domain / host / path rule maps and the merged payload
//! - The tabs-open / classification-time histogram

pub mod histogram;
pub mod keywords;
pub mod payload;
pub mod rules;
pub mod taxonomy;

// Re-export main types and functions
pub use histogram::{collect_histogram, histogram_from_file, LogScanStats, TabTimeHistogram};
pub use keywords::flatten_keywords;
pub use payload::{build_payload, MergeOptions, MergeStats, Variant};
pub use rules::{build_domain_rules, build_host_rules, build_path_rules, merge_supplemental_domains};
pub use taxonomy::TaxonomyLookup;
