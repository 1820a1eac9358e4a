//! Types for the source documents the compiler consumes.

use crate::utils::config::{
    DEFAULT_DOMAIN_RULES_URL, DEFAULT_HIERARCHY_URL, DEFAULT_KEYWORDS_URL, DEFAULT_STOPWORDS_URL,
    DOMAIN_RULES_SOURCE, HIERARCHY_SOURCE, KEYWORDS_SOURCE, REQUIRED_SOURCES, STOPWORDS_SOURCE,
};
use crate::utils::error::FetchError;
use std::collections::BTreeMap;

/// A fetched document, untyped at this layer
pub type RawDocument = serde_json::Value;

/// Logical source name -> URL
pub type SourceLocations = BTreeMap<String, String>;

/// Default locations for all four remote sources
pub fn default_locations() -> SourceLocations {
    [
        (HIERARCHY_SOURCE, DEFAULT_HIERARCHY_URL),
        (DOMAIN_RULES_SOURCE, DEFAULT_DOMAIN_RULES_URL),
        (KEYWORDS_SOURCE, DEFAULT_KEYWORDS_URL),
        (STOPWORDS_SOURCE, DEFAULT_STOPWORDS_URL),
    ]
    .into_iter()
    .map(|(name, url)| (name.to_string(), url.to_string()))
    .collect()
}

/// Names from `REQUIRED_SOURCES` that have no location
pub fn missing_sources(locations: &SourceLocations) -> Vec<&'static str> {
    REQUIRED_SOURCES
        .iter()
        .copied()
        .filter(|name| !locations.contains_key(*name))
        .collect()
}

/// The four documents the payload is built from
#[derive(Debug, Clone)]
pub struct SourceDocuments {
    /// top_level -> [sub_level, ...]
    pub hierarchy: RawDocument,

    /// {domain_rules, host_rules, path_rules}
    pub domain_rules: RawDocument,

    /// {positive_words, ignore_domains, bad_domain_specific}
    pub keywords: RawDocument,

    /// Passed through verbatim
    pub stopwords: RawDocument,
}

impl SourceDocuments {
    /// Pick the four documents out of a fetched name -> document map
    pub fn from_fetched(mut fetched: BTreeMap<String, RawDocument>) -> Result<Self, FetchError> {
        let mut take = |name: &str| {
            fetched
                .remove(name)
                .ok_or_else(|| FetchError::MissingSource(name.to_string()))
        };

        Ok(Self {
            hierarchy: take(HIERARCHY_SOURCE)?,
            domain_rules: take(DOMAIN_RULES_SOURCE)?,
            keywords: take(KEYWORDS_SOURCE)?,
            stopwords: take(STOPWORDS_SOURCE)?,
        })
    }
}

/// Local adgroup dumps merged into the domain rules
#[derive(Debug, Clone)]
pub struct SupplementalSources {
    /// adgroup name -> [site, ...]
    pub adgroups: RawDocument,

    /// adgroup name -> "top_level/sub_level"
    pub mappings: RawDocument,
}
