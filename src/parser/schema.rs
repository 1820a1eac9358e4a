//! Output JSON schema definitions for the compiled payload.
//!
//! This module defines the structure of the JSON file we write to disk.
//! Field order matches sorted key order so the written document is sorted
//! at every level (`serde_json` maps are `BTreeMap`-backed).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A `[top_level, sub_level]` pair from the taxonomy
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Category(pub String, pub String);

impl Category {
    pub fn new(top_level: impl Into<String>, sub_level: impl Into<String>) -> Self {
        Self(top_level.into(), sub_level.into())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, self.1)
    }
}

/// bare domain -> category
pub type DomainRules = BTreeMap<String, Category>;

/// registrable domain -> (subdomain | first path segment) -> category
pub type NestedRules = BTreeMap<String, BTreeMap<String, Category>>;

/// keyword -> category
pub type KeywordTable = BTreeMap<String, Category>;

/// Top-level payload structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payload {
    /// Passed through from the keyword document
    pub bad_domain_specific: serde_json::Value,

    /// Whole-domain classifications
    pub domain_rules: DomainRules,

    /// Classifications keyed by registrable domain, then subdomain
    pub host_rules: NestedRules,

    /// Passed through from the keyword document
    pub ignore_domains: serde_json::Value,

    /// Flattened keyword table
    pub keywords: KeywordTable,

    /// Classifications keyed by registrable domain, then first path segment
    pub path_rules: NestedRules,

    /// Passed through from the stopword document
    pub stopwords: serde_json::Value,
}

impl Payload {
    /// Total number of host rules across all domains
    pub fn host_rule_count(&self) -> usize {
        self.host_rules.values().map(BTreeMap::len).sum()
    }

    /// Total number of path rules across all domains
    pub fn path_rule_count(&self) -> usize {
        self.path_rules.values().map(BTreeMap::len).sum()
    }
}

/// Find the first field present under any of `names`
///
/// Source documents have been published with differing field spellings.
pub fn find_field<'a>(
    obj: &'a serde_json::Map<String, serde_json::Value>,
    names: &[&str],
) -> Option<&'a serde_json::Value> {
    names.iter().find_map(|name| obj.get(*name))
}
