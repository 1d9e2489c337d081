//! Tab-separated plain text.
//!
//! A `#` comment header (title, timestamp, entry count, category filter,
//! column legend) and an empty line, then one
//! `reading<TAB>word<TAB>part_of_speech<TAB>description` row per entry.
//! Consumers tell metadata from data by the leading `#`.

use std::{fmt::Display, io::Write};

use chrono::NaiveDateTime;

use crate::{
    error::Error,
    selection::{CategoryFilter, Selection},
    traits::Encoder,
    types::ResolvedEntry,
};

/// Timestamp layout used in every text header.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const TITLE: &str = "IME辞書データ";
const LEGEND: &str = "読み<TAB>単語<TAB>品詞<TAB>説明";

/// One data row, shared with the macOS legacy text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub reading: String,
    pub word: String,
    pub part_of_speech: String,
    pub description: String,
}

impl From<&ResolvedEntry> for Line {
    fn from(entry: &ResolvedEntry) -> Self {
        Line {
            reading: entry.reading.clone(),
            word: entry.word.clone(),
            part_of_speech: entry.part_of_speech.clone(),
            description: entry.description.clone(),
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\t{}\t{}\t{}",
            self.reading, self.word, self.part_of_speech, self.description
        )
    }
}

/// The comment block that opens the text outputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Header<'a> {
    pub title: &'a str,
    pub generated_at: NaiveDateTime,
    pub count: usize,
    pub categories: Option<&'a CategoryFilter>,
    pub legend: Option<&'a str>,
}

impl Header<'_> {
    /// Writes the comment lines and the empty separator line.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<(), Error> {
        writeln!(writer, "# {}", self.title)?;
        writeln!(
            writer,
            "# 生成日時: {}",
            self.generated_at.format(TIMESTAMP_FORMAT)
        )?;
        writeln!(writer, "# 単語数: {}件", self.count)?;
        if let Some(categories) = self.categories {
            writeln!(writer, "# カテゴリ: {}", categories)?;
        }
        if let Some(legend) = self.legend {
            writeln!(writer, "# 形式: {}", legend)?;
        }
        writeln!(writer)?;
        Ok(())
    }
}

/// The plain text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub generated_at: NaiveDateTime,
    pub categories: Option<CategoryFilter>,
    pub lines: Vec<Line>,
}

impl Format {
    pub fn new(selection: &Selection, generated_at: NaiveDateTime) -> Self {
        Format {
            generated_at,
            categories: selection.filter.clone(),
            lines: selection.entries.iter().map(Line::from).collect(),
        }
    }
}

impl Encoder for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        Header {
            title: TITLE,
            generated_at: self.generated_at,
            count: self.lines.len(),
            categories: self.categories.as_ref(),
            legend: Some(LEGEND),
        }
        .write(&mut writer)?;

        for line in &self.lines {
            writeln!(writer, "{}", line)?;
        }
        writer.flush()?;
        Ok(())
    }
}
