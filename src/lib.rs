//! LICA payload tools
//!
//! Compiles the single JSON payload consumed by the LICA classifier from
//! its remote source datasets (taxonomy, domain rules, keywords, stopwords),
//! and extracts classification timing statistics from logger output.
//!
//! ## Getting Started
//!
//! ```bash
//! compile-payload                      # writes lica_payload.json
//! compile-payload out/payload.json
//! process-logs --input classification_log.txt
//! ```

pub mod aggregator;
pub mod commands;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod utils;
