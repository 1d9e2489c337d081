//! Quoted CSV for spreadsheets and general interchange.
//!
//! The file starts with a UTF-8 BOM so spreadsheet tools that assume a
//! legacy encoding detect UTF-8. Every field is quoted; tags are joined
//! with `;`.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::{error::Error, selection::Selection, traits::Encoder, types::ResolvedEntry};

/// UTF-8 byte order mark.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Column names, in output order.
pub const HEADER: [&str; 7] = ["読み", "読み_Windows", "単語", "品詞", "説明", "タグ", "カテゴリ"];

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct CSVRecord {
    #[serde(rename = "読み")]
    pub reading: String,
    #[serde(rename = "読み_Windows")]
    pub reading_windows: String,
    #[serde(rename = "単語")]
    pub word: String,
    #[serde(rename = "品詞")]
    pub part_of_speech: String,
    #[serde(rename = "説明")]
    pub description: String,
    #[serde(rename = "タグ")]
    pub tags: String,
    #[serde(rename = "カテゴリ")]
    pub category: String,
}

impl From<&ResolvedEntry> for CSVRecord {
    fn from(entry: &ResolvedEntry) -> Self {
        CSVRecord {
            reading: entry.reading.clone(),
            reading_windows: entry.reading_windows.clone().unwrap_or_default(),
            word: entry.word.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            description: entry.description.clone(),
            tags: entry.joined_tags(),
            category: entry.category.clone(),
        }
    }
}

/// The CSV output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub records: Vec<CSVRecord>,
}

impl From<&Selection> for Format {
    fn from(selection: &Selection) -> Self {
        Format {
            records: selection.entries.iter().map(CSVRecord::from).collect(),
        }
    }
}

impl Encoder for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        writer.write_all(UTF8_BOM)?;

        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .quote_style(csv::QuoteStyle::Always)
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        wtr.write_record(HEADER)?;
        for record in &self.records {
            wtr.serialize(record)?;
        }
        wtr.flush()?;
        Ok(())
    }
}
