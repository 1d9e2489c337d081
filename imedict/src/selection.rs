//! Flattening a [`Dictionary`] into the ordered entry list an output format
//! consumes.

use std::fmt::Display;

use crate::types::{Dictionary, ResolvedEntry};

/// An allow-list of category names.
///
/// The names keep the order the caller gave them in; that order is only used
/// when the filter is displayed. Selection always follows declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryFilter {
    names: Vec<String>,
}

impl CategoryFilter {
    /// Creates a filter from names, trimming each and dropping empty ones.
    ///
    /// Returns `None` when no name is left, which means "no filter".
    pub fn new<I, S>(names: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(Self { names })
        }
    }

    /// Parses a comma-separated list such as `"記号, 矢印"`.
    pub fn parse(list: &str) -> Option<Self> {
        Self::new(list.split(','))
    }

    pub fn contains(&self, category: &str) -> bool {
        self.names.iter().any(|name| name == category)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

/// The entries chosen for one output, plus the filter that chose them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Selection {
    pub entries: Vec<ResolvedEntry>,
    pub filter: Option<CategoryFilter>,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Select entries from `dictionary`.
///
/// Categories are visited in declaration order. A category is skipped when a
/// filter is given and does not name it, or when it is explicitly disabled.
/// Entries keep their source order and carry the name of their category.
pub fn select(dictionary: &Dictionary, filter: Option<&CategoryFilter>) -> Selection {
    let entries: Vec<ResolvedEntry> = dictionary
        .categories
        .iter()
        .filter(|(name, _)| filter.is_none_or(|f| f.contains(name)))
        .filter(|(_, category)| category.is_enabled())
        .flat_map(|(name, category)| {
            category
                .entries
                .iter()
                .map(move |entry| entry.resolve(name))
        })
        .collect();

    tracing::debug!(
        entries = entries.len(),
        filter = filter.map(ToString::to_string),
        "selected entries"
    );

    Selection {
        entries,
        filter: filter.cloned(),
    }
}

impl Dictionary {
    /// Shorthand for [`select`].
    pub fn select(&self, filter: Option<&CategoryFilter>) -> Selection {
        select(self, filter)
    }
}
