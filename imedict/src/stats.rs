//! Read-only reporting over a loaded dictionary.

use serde::Serialize;

use crate::types::Dictionary;

/// Placeholder for header fields the dictionary does not set.
pub const NOT_AVAILABLE: &str = "N/A";

/// One line of the category listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySummary {
    /// 1-based position in declaration order.
    pub index: usize,
    pub name: String,
    pub enabled: bool,
    pub word_count: usize,
    pub description: String,
}

/// Aggregate numbers for the whole dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DictionaryStats {
    pub name: String,
    pub updated: String,
    pub category_count: usize,
    /// Entries in every category, enabled or not.
    pub total_words: usize,
    /// Entries in enabled categories.
    pub active_words: usize,
    pub categories: Vec<CategorySummary>,
}

impl Dictionary {
    pub fn category_summaries(&self) -> Vec<CategorySummary> {
        self.categories
            .iter()
            .enumerate()
            .map(|(i, (name, category))| CategorySummary {
                index: i + 1,
                name: name.clone(),
                enabled: category.is_enabled(),
                word_count: category.entries.len(),
                description: category.description.clone(),
            })
            .collect()
    }

    pub fn stats(&self) -> DictionaryStats {
        let categories = self.category_summaries();
        let total_words = categories.iter().map(|c| c.word_count).sum();
        let active_words = categories
            .iter()
            .filter(|c| c.enabled)
            .map(|c| c.word_count)
            .sum();

        DictionaryStats {
            name: self
                .info
                .name
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            updated: self
                .info
                .updated
                .clone()
                .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
            category_count: categories.len(),
            total_words,
            active_words,
            categories,
        }
    }
}
