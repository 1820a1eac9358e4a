//! Domain, host and path rule builders.
//!
//! Host rules are regrouped for lookup by registrable domain:
//! from `"au.movies.yahoo.com": "television"`
//! to   `"yahoo.com": {"au.movies": ["arts & entertainment", "television"]}`.
//! Path rules are grouped the same way, keyed by first path segment.

use super::taxonomy::TaxonomyLookup;
use crate::fetch::types::SupplementalSources;
use crate::parser::schema::{Category, DomainRules, NestedRules};
use crate::parser::url::parse_url;
use crate::utils::error::MergeError;
use log::debug;
use serde_json::{Map, Value};

/// Domain rules plus the number of entries dropped by the sentinel
#[derive(Debug, Clone, Default)]
pub struct DomainRuleSet {
    pub rules: DomainRules,
    pub dropped: usize,
}

/// Path rules plus the number of entries with no first path segment
#[derive(Debug, Clone, Default)]
pub struct PathRuleSet {
    pub rules: NestedRules,
    pub skipped: usize,
}

/// Read a `rule -> category name` map
pub fn rule_entries<'a>(
    value: &'a Value,
    source_name: &str,
) -> Result<Vec<(&'a String, &'a str)>, MergeError> {
    let map: &Map<String, Value> = value.as_object().ok_or_else(|| MergeError::InvalidSource {
        source_name: source_name.to_string(),
        reason: "rules must be an object".to_string(),
    })?;

    map.iter()
        .map(|(rule, category)| {
            category
                .as_str()
                .map(|category| (rule, category))
                .ok_or_else(|| MergeError::InvalidSource {
                    source_name: source_name.to_string(),
                    reason: format!("category of '{}' must be a string", rule),
                })
        })
        .collect()
}

/// Map whole-domain rules onto taxonomy categories
///
/// Rules whose raw category equals `unused_sentinel` are dropped before lookup.
pub fn build_domain_rules(
    raw: &Value,
    lookup: &TaxonomyLookup,
    unused_sentinel: Option<&str>,
) -> Result<DomainRuleSet, MergeError> {
    let mut set = DomainRuleSet::default();

    for (domain, category) in rule_entries(raw, "domain_rules")? {
        if unused_sentinel == Some(category) {
            debug!("Dropping unused domain rule: {}", domain);
            set.dropped += 1;
            continue;
        }

        let category = lookup.resolve(category, domain)?;
        set.rules.insert(domain.clone(), category);
    }

    Ok(set)
}

/// Group host rules by registrable domain and subdomain
///
/// The first rule seen for a (domain, subdomain) pair is kept.
pub fn build_host_rules(raw: &Value, lookup: &TaxonomyLookup) -> Result<NestedRules, MergeError> {
    let mut rules = NestedRules::new();

    for (host, category) in rule_entries(raw, "host_rules")? {
        let category = lookup.resolve(category, host)?;
        let components = parse_url(host)?;

        rules
            .entry(components.registrable_domain)
            .or_default()
            .entry(components.subdomain)
            .or_insert(category);
    }

    Ok(rules)
}

/// Group path rules by registrable domain and first path segment
///
/// The last rule seen for a (domain, segment) pair is kept. Rules with no
/// first path segment are skipped.
pub fn build_path_rules(raw: &Value, lookup: &TaxonomyLookup) -> Result<PathRuleSet, MergeError> {
    let mut set = PathRuleSet::default();

    for (path, category) in rule_entries(raw, "path_rules")? {
        let category = lookup.resolve(category, path)?;
        let components = parse_url(path)?;

        let Some(segment) = components.first_path_segment() else {
            debug!("Path rule has no path segment, skipping: {}", path);
            set.skipped += 1;
            continue;
        };

        set.rules
            .entry(components.registrable_domain.clone())
            .or_default()
            .insert(segment.to_string(), category);
    }

    Ok(set)
}

/// Parse an adgroup mapping such as `"sports/football"`
pub fn parse_mapping(adgroup: &str, mapping: &str) -> Result<Category, MergeError> {
    match mapping.split_once('/') {
        Some((top_level, sub_level)) if !top_level.is_empty() && !sub_level.is_empty() => {
            Ok(Category::new(top_level, sub_level))
        }
        _ => Err(MergeError::InvalidMapping {
            adgroup: adgroup.to_string(),
            reason: format!("expected 'top_level/sub_level', found '{}'", mapping),
        }),
    }
}

/// Add adgroup sites to the domain rules
///
/// Sites already present keep their existing category. Returns the
/// number of sites added.
pub fn merge_supplemental_domains(
    domain_rules: &mut DomainRules,
    sources: &SupplementalSources,
) -> Result<usize, MergeError> {
    let adgroups = sources
        .adgroups
        .as_object()
        .ok_or_else(|| MergeError::InvalidSource {
            source_name: "adgroups".to_string(),
            reason: "adgroups must be an object".to_string(),
        })?;

    let mut added = 0usize;

    for (adgroup, sites) in adgroups {
        let mapping = sources
            .mappings
            .get(adgroup)
            .and_then(Value::as_str)
            .ok_or_else(|| MergeError::InvalidMapping {
                adgroup: adgroup.clone(),
                reason: "no mapping".to_string(),
            })?;
        let category = parse_mapping(adgroup, mapping)?;

        let sites = sites.as_array().ok_or_else(|| MergeError::InvalidSource {
            source_name: "adgroups".to_string(),
            reason: format!("'{}' must list its sites", adgroup),
        })?;

        for site in sites.iter().filter_map(Value::as_str) {
            if !domain_rules.contains_key(site) {
                domain_rules.insert(site.to_string(), category.clone());
                added += 1;
            }
        }
    }

    debug!("Added {} adgroup domains", added);
    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lookup() -> TaxonomyLookup {
        TaxonomyLookup::from_hierarchy(&json!({
            "arts & entertainment": ["television", "movies"],
            "sports": ["football"]
        }))
        .unwrap()
    }

    #[test]
    fn test_domain_rules_resolve_and_drop_sentinel() {
        let raw = json!({
            "espn.com": "sports",
            "imdb.com": "movies",
            "example.com": "not in use"
        });

        let set = build_domain_rules(&raw, &lookup(), Some("not in use")).unwrap();

        assert_eq!(set.dropped, 1);
        assert_eq!(set.rules.len(), 2);
        assert_eq!(set.rules["espn.com"], Category::new("sports", "general"));
        assert_eq!(set.rules["imdb.com"], Category::new("arts & entertainment", "movies"));
        assert!(!set.rules.contains_key("example.com"));
    }

    #[test]
    fn test_domain_rules_without_sentinel_fail_on_unknown() {
        let raw = json!({"example.com": "not in use"});
        let result = build_domain_rules(&raw, &lookup(), None);
        assert!(matches!(result, Err(MergeError::UnknownCategory { .. })));
    }

    #[test]
    fn test_host_rules_group_by_domain() {
        let raw = json!({
            "au.movies.yahoo.com": "television",
            "sports.yahoo.com": "football",
            "news.bbc.co.uk": "television"
        });

        let rules = build_host_rules(&raw, &lookup()).unwrap();

        assert_eq!(rules.len(), 2);
        assert_eq!(
            rules["yahoo.com"]["au.movies"],
            Category::new("arts & entertainment", "television")
        );
        assert_eq!(rules["yahoo.com"]["sports"], Category::new("sports", "football"));
        assert!(rules["bbc.co.uk"].contains_key("news"));
    }

    #[test]
    fn test_host_rules_first_wins() {
        // Both normalize to (yahoo.com, movies); "MOVIES..." sorts first
        let raw = json!({
            "MOVIES.yahoo.com": "movies",
            "movies.yahoo.com": "television"
        });

        let rules = build_host_rules(&raw, &lookup()).unwrap();
        assert_eq!(
            rules["yahoo.com"]["movies"],
            Category::new("arts & entertainment", "movies")
        );
    }

    #[test]
    fn test_path_rules_last_wins_and_skip_bare() {
        let raw = json!({
            "bbc.co.uk/sport": "sports",
            "bbc.co.uk/sport/football": "football",
            "yahoo.com": "movies"
        });

        let set = build_path_rules(&raw, &lookup()).unwrap();

        assert_eq!(set.skipped, 1);
        assert_eq!(set.rules.len(), 1);
        assert_eq!(set.rules["bbc.co.uk"]["sport"], Category::new("sports", "football"));
    }

    #[test]
    fn test_parse_mapping() {
        assert_eq!(
            parse_mapping("Soccer", "sports/football").unwrap(),
            Category::new("sports", "football")
        );
        assert!(parse_mapping("Soccer", "sports").is_err());
        assert!(parse_mapping("Soccer", "/football").is_err());
    }

    #[test]
    fn test_supplemental_domains_do_not_override() {
        let mut rules = DomainRules::new();
        rules.insert("espn.com".to_string(), Category::new("sports", "general"));

        let sources = SupplementalSources {
            adgroups: json!({"Soccer": ["espn.com", "goal.com"]}),
            mappings: json!({"Soccer": "sports/football"}),
        };

        let added = merge_supplemental_domains(&mut rules, &sources).unwrap();

        assert_eq!(added, 1);
        assert_eq!(rules["espn.com"], Category::new("sports", "general"));
        assert_eq!(rules["goal.com"], Category::new("sports", "football"));
    }

    #[test]
    fn test_supplemental_missing_mapping() {
        let mut rules = DomainRules::new();
        let sources = SupplementalSources {
            adgroups: json!({"Soccer": ["goal.com"]}),
            mappings: json!({}),
        };

        let result = merge_supplemental_domains(&mut rules, &sources);
        assert!(matches!(result, Err(MergeError::InvalidMapping { .. })));
    }
}
