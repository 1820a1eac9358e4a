//! Parsing and schema definitions.
//!
//! This module handles:
//! - Decomposing URLs into subdomain / registrable domain / path
//! - Parsing classification log lines and their mapping literals
//! - Defining the output payload schema

pub mod literal;
pub mod log_line;
pub mod schema;
pub mod url;

// Re-export main types
pub use literal::parse_literal;
pub use log_line::{parse_log_line, LogRecord};
pub use schema::{Category, DomainRules, KeywordTable, NestedRules, Payload};
pub use url::{parse_url, UrlComponents};
