//! Core types for imedict.
//!
//! The loader decodes the source JSON into these; the selector resolves
//! [`Entry`] values into [`ResolvedEntry`] values that every format consumes.

use std::{
    fmt::Display,
    fs::File,
    io::Read,
    path::Path,
};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::{error::Error, pos::DEFAULT_PART_OF_SPEECH};

/// A complete source dictionary.
///
/// Category order is the order in which the categories are declared in the
/// source file; [`IndexMap`] keeps it through deserialization.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Dictionary {
    /// Descriptive header, opaque to the converters.
    #[serde(rename = "辞書情報", alias = "metadata", default, deserialize_with = "null_as_default")]
    pub info: DictionaryInfo,

    /// Category name to category, in declaration order.
    #[serde(rename = "カテゴリ", alias = "categories", default, deserialize_with = "null_as_default")]
    pub categories: IndexMap<String, Category>,
}

impl Dictionary {
    /// Parse a dictionary from any reader holding UTF-8 JSON.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, serde_json::Error> {
        serde_json::from_reader(reader)
    }

    /// Parse a dictionary from a JSON string.
    pub fn from_json(s: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(s.trim_start_matches('\u{feff}'))
    }

    /// Load a dictionary file.
    ///
    /// The file is decoded through a BOM-sniffing reader, so UTF-8 files with
    /// or without a BOM and UTF-16 files with a BOM are all accepted. Any
    /// failure is reported as [`Error::Load`].
    pub fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| Error::load(path, e))?;
        let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
            .bom_override(true)
            .build(file);

        let mut decoded = String::new();
        decoder
            .read_to_string(&mut decoded)
            .map_err(|e| Error::load(path, e))?;

        let dictionary = Self::from_json(&decoded).map_err(|e| Error::load(path, e))?;
        tracing::debug!(
            path = %path.display(),
            categories = dictionary.categories.len(),
            "loaded dictionary"
        );
        Ok(dictionary)
    }

    /// Finds a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.get(name)
    }

    /// Iterates category names in declaration order.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }
}

/// Treats an explicit `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Header-level metadata of a dictionary.
///
/// `name`, `description` and `updated` are the standard fields; anything else
/// found in the header is kept in `custom`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct DictionaryInfo {
    #[serde(rename = "名前", alias = "name", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "説明", alias = "description", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Last-updated date, free-form (the editor writes `YYYY-MM-DD`).
    #[serde(rename = "更新日", alias = "updated", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    #[serde(flatten)]
    pub custom: IndexMap<String, serde_json::Value>,
}

/// A named group of entries that can be switched off as a whole.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Category {
    #[serde(rename = "説明", alias = "description", default, deserialize_with = "null_as_default")]
    pub description: String,

    /// Only an explicit `false` disables the category.
    #[serde(rename = "有効", alias = "enabled", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    #[serde(rename = "単語リスト", alias = "entries", default, deserialize_with = "null_as_default")]
    pub entries: Vec<Entry>,
}

impl Category {
    pub fn is_enabled(&self) -> bool {
        self.enabled != Some(false)
    }
}

/// One dictionary record as written in the source file.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
pub struct Entry {
    /// Canonical reading.
    #[serde(rename = "読み", alias = "reading", default, deserialize_with = "null_as_default")]
    pub reading: String,

    /// Reading used only by the Windows IME output.
    #[serde(rename = "読み_Windows", alias = "reading_windows", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_windows: Option<String>,

    #[serde(rename = "単語", alias = "word", default, deserialize_with = "null_as_default")]
    pub word: String,

    #[serde(rename = "品詞", alias = "part_of_speech", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,

    #[serde(rename = "説明", alias = "description", default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(rename = "タグ", alias = "tags", default, deserialize_with = "null_as_default")]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Entry {
    /// Resolve defaults and attach the owning category name.
    pub fn resolve(&self, category: &str) -> ResolvedEntry {
        ResolvedEntry {
            reading: self.reading.clone(),
            reading_windows: self.reading_windows.clone(),
            word: self.word.clone(),
            part_of_speech: self
                .part_of_speech
                .clone()
                .unwrap_or_else(|| DEFAULT_PART_OF_SPEECH.to_string()),
            description: self.description.clone().unwrap_or_default(),
            tags: self.tags.clone(),
            category: category.to_string(),
        }
    }
}

/// An entry as seen by the output formats: defaults applied, category attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedEntry {
    pub reading: String,
    pub reading_windows: Option<String>,
    pub word: String,
    pub part_of_speech: String,
    pub description: String,
    pub tags: Vec<String>,
    /// Name of the category the entry was selected from.
    pub category: String,
}

impl ResolvedEntry {
    /// The reading the Windows IME should see: the override when it is
    /// present and non-empty, otherwise the canonical reading.
    pub fn windows_reading(&self) -> &str {
        match self.reading_windows.as_deref() {
            Some(reading) if !reading.is_empty() => reading,
            _ => &self.reading,
        }
    }

    /// Tags joined with `;`.
    pub fn joined_tags(&self) -> String {
        self.tags.join(";")
    }
}

impl Display for ResolvedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Entry {{ reading: {}, word: {}, category: {} }}",
            self.reading, self.word, self.category
        )
    }
}
