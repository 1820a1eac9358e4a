//! Flat taxonomy lookup built from the two-level category hierarchy.
//!
//! The hierarchy arrives as `top_level: [sub_level, ...]`. Rules reference
//! categories by a single name, so we index both levels:
//! `top_level -> [top_level, "general"]` and `sub_level -> [top_level, sub_level]`.

use crate::parser::schema::Category;
use crate::utils::config::GENERAL_SUB_LEVEL;
use crate::utils::error::MergeError;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Category name -> `[top_level, sub_level]`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaxonomyLookup {
    entries: BTreeMap<String, Category>,
}

impl TaxonomyLookup {
    /// Build the lookup from a hierarchy document
    ///
    /// Names are expected to be unique across the hierarchy. If one is not,
    /// the entry written last (in sorted top-level order) wins and the
    /// collision is logged.
    ///
    /// # Errors
    /// * `MergeError::InvalidSource` - hierarchy is not an object of string lists
    pub fn from_hierarchy(hierarchy: &serde_json::Value) -> Result<Self, MergeError> {
        let groups = hierarchy
            .as_object()
            .ok_or_else(|| invalid("hierarchy must be an object"))?;

        let mut lookup = Self::default();

        for (top_level, sub_levels) in groups {
            lookup.insert(top_level, Category::new(top_level, GENERAL_SUB_LEVEL));

            let sub_levels = sub_levels
                .as_array()
                .ok_or_else(|| invalid(&format!("'{}' must list its sub-levels", top_level)))?;

            for sub_level in sub_levels {
                let sub_level = sub_level
                    .as_str()
                    .ok_or_else(|| invalid(&format!("non-string sub-level under '{}'", top_level)))?;
                lookup.insert(sub_level, Category::new(top_level, sub_level));
            }
        }

        debug!("Taxonomy lookup has {} entries", lookup.len());
        Ok(lookup)
    }

    fn insert(&mut self, name: &str, category: Category) {
        if let Some(previous) = self.entries.insert(name.to_string(), category.clone()) {
            if previous != category {
                warn!(
                    "Category name '{}' appears twice in the hierarchy ({} and {}), keeping {}",
                    name, previous, category, category
                );
            }
        }
    }

    /// Look up a category name
    pub fn get(&self, name: &str) -> Option<&Category> {
        self.entries.get(name)
    }

    /// Look up the category of a rule, failing on unknown names
    pub fn resolve(&self, category: &str, rule: &str) -> Result<Category, MergeError> {
        self.get(category)
            .cloned()
            .ok_or_else(|| MergeError::UnknownCategory {
                category: category.to_string(),
                rule: rule.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Category)> {
        self.entries.iter()
    }
}

fn invalid(reason: &str) -> MergeError {
    MergeError::InvalidSource {
        source_name: crate::utils::config::HIERARCHY_SOURCE.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup_from_hierarchy() {
        let lookup = TaxonomyLookup::from_hierarchy(&json!({"arts": ["music", "film"]})).unwrap();

        assert_eq!(lookup.len(), 3);
        assert_eq!(lookup.get("arts"), Some(&Category::new("arts", "general")));
        assert_eq!(lookup.get("music"), Some(&Category::new("arts", "music")));
        assert_eq!(lookup.get("film"), Some(&Category::new("arts", "film")));
    }

    #[test]
    fn test_duplicate_sub_level_last_wins() {
        let lookup = TaxonomyLookup::from_hierarchy(&json!({
            "arts": ["design"],
            "technology": ["design"]
        }))
        .unwrap();

        assert_eq!(lookup.get("design"), Some(&Category::new("technology", "design")));
    }

    #[test]
    fn test_resolve_unknown_category() {
        let lookup = TaxonomyLookup::from_hierarchy(&json!({"arts": []})).unwrap();
        let err = lookup.resolve("sports", "espn.com").unwrap_err();

        assert!(matches!(
            err,
            MergeError::UnknownCategory { category, rule } if category == "sports" && rule == "espn.com"
        ));
    }

    #[test]
    fn test_invalid_hierarchy_shapes() {
        assert!(TaxonomyLookup::from_hierarchy(&json!(["arts"])).is_err());
        assert!(TaxonomyLookup::from_hierarchy(&json!({"arts": "music"})).is_err());
        assert!(TaxonomyLookup::from_hierarchy(&json!({"arts": [1]})).is_err());
    }
}
