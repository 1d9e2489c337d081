//! Options shared by all emitters.

use chrono::{Local, NaiveDateTime};

use crate::selection::CategoryFilter;

/// How one output should be produced.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EmitOptions {
    /// Only these categories are emitted. `None` means all enabled ones.
    pub categories: Option<CategoryFilter>,
    /// Timestamp written into text headers. `None` means "now".
    pub generated_at: Option<NaiveDateTime>,
}

impl EmitOptions {
    /// Creates default emit options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts output to the given categories.
    pub fn with_categories(mut self, categories: Option<CategoryFilter>) -> Self {
        self.categories = categories;
        self
    }

    /// Pins the header timestamp, for reproducible output.
    pub fn with_generated_at(mut self, generated_at: NaiveDateTime) -> Self {
        self.generated_at = Some(generated_at);
        self
    }

    /// The pinned timestamp, or the current local time.
    pub fn timestamp(&self) -> NaiveDateTime {
        self.generated_at
            .unwrap_or_else(|| Local::now().naive_local())
    }
}
