//! Keyword table flattening.
//!
//! From: `top_level -> sub_level -> [keyword, ...]`
//! To:   `keyword -> [top_level, sub_level]`

use crate::parser::schema::{Category, KeywordTable};
use crate::utils::config::KEYWORDS_SOURCE;
use crate::utils::error::MergeError;
use log::debug;

/// Flatten the positive-word tree into a keyword table
///
/// A keyword listed under several categories keeps the last one visited
/// (sorted top-level, then sorted sub-level order).
pub fn flatten_keywords(positive_words: &serde_json::Value) -> Result<KeywordTable, MergeError> {
    let top_levels = positive_words
        .as_object()
        .ok_or_else(|| invalid("positive words must be an object"))?;

    let mut table = KeywordTable::new();
    let mut overwritten = 0usize;

    for (top_level, sub_levels) in top_levels {
        let sub_levels = sub_levels
            .as_object()
            .ok_or_else(|| invalid(&format!("'{}' must map sub-levels to keywords", top_level)))?;

        for (sub_level, keywords) in sub_levels {
            let keywords = keywords
                .as_array()
                .ok_or_else(|| invalid(&format!("'{}/{}' must list keywords", top_level, sub_level)))?;

            for keyword in keywords {
                let keyword = keyword
                    .as_str()
                    .ok_or_else(|| invalid(&format!("non-string keyword under '{}/{}'", top_level, sub_level)))?;

                if table
                    .insert(keyword.to_string(), Category::new(top_level, sub_level))
                    .is_some()
                {
                    overwritten += 1;
                }
            }
        }
    }

    debug!("Flattened {} keywords ({} reassigned)", table.len(), overwritten);
    Ok(table)
}

fn invalid(reason: &str) -> MergeError {
    MergeError::InvalidSource {
        source_name: KEYWORDS_SOURCE.to_string(),
        reason: reason.to_string(),
    }
}
