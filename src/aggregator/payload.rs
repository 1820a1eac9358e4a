//! Payload merger.
//!
//! Assembles the final payload from the fetched source documents, the
//! taxonomy lookup and the URL decomposer. Any unresolved category aborts
//! the whole merge; nothing is partially built.

use super::keywords::flatten_keywords;
use super::rules::{build_domain_rules, build_host_rules, build_path_rules, merge_supplemental_domains};
use super::taxonomy::TaxonomyLookup;
use crate::fetch::types::{SourceDocuments, SupplementalSources};
use crate::parser::schema::{find_field, Payload};
use crate::utils::config::{
    BAD_DOMAIN_FIELD_NAMES, DEFAULT_UNUSED_SENTINEL, DOMAIN_RULES_SOURCE, DOMAIN_RULE_FIELD_NAMES,
    HOST_RULE_FIELD_NAMES, IGNORE_DOMAINS_FIELD_NAMES, KEYWORDS_SOURCE, PATH_RULE_FIELD_NAMES,
    POSITIVE_WORDS_FIELD_NAMES,
};
use crate::utils::error::MergeError;
use log::{debug, info};

/// Named merge behaviours
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Variant {
    /// Drop domain rules categorised with the "not in use" sentinel
    #[default]
    Filtered,

    /// Keep every domain rule; a sentinel category is then an unknown category
    Unfiltered,
}

/// Options controlling the merge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOptions {
    /// Raw category meaning "drop this domain rule"
    pub unused_sentinel: Option<String>,
}

impl Default for MergeOptions {
    fn default() -> Self {
        Variant::default().into()
    }
}

impl From<Variant> for MergeOptions {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Filtered => Self {
                unused_sentinel: Some(DEFAULT_UNUSED_SENTINEL.to_string()),
            },
            Variant::Unfiltered => Self {
                unused_sentinel: None,
            },
        }
    }
}

/// Counts gathered while merging
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub taxonomy_entries: usize,
    pub keywords: usize,
    pub domain_rules: usize,
    pub dropped_domains: usize,
    pub supplemental_domains: usize,
    pub host_rules: usize,
    pub path_rules: usize,
    pub skipped_paths: usize,
}

impl MergeStats {
    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Taxonomy: {} | Keywords: {} | Domains: {} ({} dropped, {} adgroup) | Hosts: {} | Paths: {} ({} skipped)",
            self.taxonomy_entries,
            self.keywords,
            self.domain_rules,
            self.dropped_domains,
            self.supplemental_domains,
            self.host_rules,
            self.path_rules,
            self.skipped_paths
        )
    }
}

/// Build the payload from the source documents
///
/// **Public** - main entry point for merging
///
/// # Arguments
/// * `sources` - The four fetched documents
/// * `supplemental` - Optional adgroup dumps merged into the domain rules
/// * `options` - Merge variant settings
///
/// # Errors
/// * `MergeError::UnknownCategory` - a rule names a category missing from the taxonomy
/// * `MergeError::InvalidSource` - a document lacks a field the merge reads
/// * `MergeError::Decompose` - a host or path rule is not a usable URL
/// * `MergeError::InvalidMapping` - an adgroup has no usable mapping
pub fn build_payload(
    sources: &SourceDocuments,
    supplemental: Option<&SupplementalSources>,
    options: &MergeOptions,
) -> Result<(Payload, MergeStats), MergeError> {
    let lookup = TaxonomyLookup::from_hierarchy(&sources.hierarchy)?;
    info!("Built taxonomy lookup with {} categories", lookup.len());

    let keyword_doc = document_fields(&sources.keywords, KEYWORDS_SOURCE)?;
    let rules_doc = document_fields(&sources.domain_rules, DOMAIN_RULES_SOURCE)?;

    let keywords = flatten_keywords(required(keyword_doc, POSITIVE_WORDS_FIELD_NAMES, KEYWORDS_SOURCE)?)?;

    let mut domain_set = build_domain_rules(
        required(rules_doc, DOMAIN_RULE_FIELD_NAMES, DOMAIN_RULES_SOURCE)?,
        &lookup,
        options.unused_sentinel.as_deref(),
    )?;

    let supplemental_domains = match supplemental {
        Some(sources) => merge_supplemental_domains(&mut domain_set.rules, sources)?,
        None => 0,
    };

    let host_rules = build_host_rules(
        required(rules_doc, HOST_RULE_FIELD_NAMES, DOMAIN_RULES_SOURCE)?,
        &lookup,
    )?;

    let path_set = build_path_rules(
        required(rules_doc, PATH_RULE_FIELD_NAMES, DOMAIN_RULES_SOURCE)?,
        &lookup,
    )?;

    let payload = Payload {
        bad_domain_specific: required(keyword_doc, BAD_DOMAIN_FIELD_NAMES, KEYWORDS_SOURCE)?.clone(),
        domain_rules: domain_set.rules,
        host_rules,
        ignore_domains: required(keyword_doc, IGNORE_DOMAINS_FIELD_NAMES, KEYWORDS_SOURCE)?.clone(),
        keywords,
        path_rules: path_set.rules,
        stopwords: sources.stopwords.clone(),
    };

    let stats = MergeStats {
        taxonomy_entries: lookup.len(),
        keywords: payload.keywords.len(),
        domain_rules: payload.domain_rules.len(),
        dropped_domains: domain_set.dropped,
        supplemental_domains,
        host_rules: payload.host_rule_count(),
        path_rules: payload.path_rule_count(),
        skipped_paths: path_set.skipped,
    };

    debug!("Merge stats: {:?}", stats);
    Ok((payload, stats))
}

fn document_fields<'a>(
    doc: &'a serde_json::Value,
    source_name: &str,
) -> Result<&'a serde_json::Map<String, serde_json::Value>, MergeError> {
    doc.as_object().ok_or_else(|| MergeError::InvalidSource {
        source_name: source_name.to_string(),
        reason: "document must be an object".to_string(),
    })
}

fn required<'a>(
    doc: &'a serde_json::Map<String, serde_json::Value>,
    names: &[&str],
    source_name: &str,
) -> Result<&'a serde_json::Value, MergeError> {
    find_field(doc, names).ok_or_else(|| MergeError::InvalidSource {
        source_name: source_name.to_string(),
        reason: format!("missing field '{}'", names[0]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::Category;
    use serde_json::json;

    fn sources() -> SourceDocuments {
        SourceDocuments {
            hierarchy: json!({"arts": ["music", "film"], "sports": ["football"]}),
            domain_rules: json!({
                "domain_rules": {"espn.com": "sports", "unused.com": "not in use"},
                "host_rules": {"music.yahoo.com": "music"},
                "path_rules": {"bbc.co.uk/sport": "football"}
            }),
            keywords: json!({
                "positive_words": {"arts": {"music": ["guitar"]}},
                "ignore_domains": {"google": {"com": true}},
                "bad_domain_specific": ["facebook.com"]
            }),
            stopwords: json!(["the", "and"]),
        }
    }

    #[test]
    fn test_build_payload() {
        let (payload, stats) = build_payload(&sources(), None, &MergeOptions::default()).unwrap();

        assert_eq!(payload.domain_rules.len(), 1);
        assert_eq!(payload.domain_rules["espn.com"], Category::new("sports", "general"));
        assert_eq!(payload.host_rules["yahoo.com"]["music"], Category::new("arts", "music"));
        assert_eq!(payload.path_rules["bbc.co.uk"]["sport"], Category::new("sports", "football"));
        assert_eq!(payload.keywords["guitar"], Category::new("arts", "music"));
        assert_eq!(payload.stopwords, json!(["the", "and"]));
        assert_eq!(payload.bad_domain_specific, json!(["facebook.com"]));

        assert_eq!(stats.dropped_domains, 1);
        assert_eq!(stats.taxonomy_entries, 5);
    }

    #[test]
    fn test_unfiltered_variant_fails_on_sentinel() {
        let result = build_payload(&sources(), None, &Variant::Unfiltered.into());
        assert!(matches!(result, Err(MergeError::UnknownCategory { .. })));
    }

    #[test]
    fn test_missing_field_is_reported() {
        let mut docs = sources();
        docs.keywords = json!({"positive_words": {}});

        let result = build_payload(&docs, None, &MergeOptions::default());
        assert!(matches!(result, Err(MergeError::InvalidSource { .. })));
    }

    #[test]
    fn test_merge_stats_summary() {
        let stats = MergeStats {
            keywords: 3,
            ..Default::default()
        };
        assert!(stats.summary().contains("Keywords: 3"));
    }
}
