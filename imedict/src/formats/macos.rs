//! macOS outputs.
//!
//! The destination decides the shape: a `.plist` path gets the property
//! list from [`crate::formats::plist`], anything else the legacy text form
//! defined here. The legacy form is grouped by category for browsing, so it
//! is the one output that does not keep selection order across categories.

use std::{io::Write, path::Path};

use chrono::NaiveDateTime;

use crate::{
    error::Error,
    formats::text::{Header, Line},
    selection::{CategoryFilter, Selection},
    traits::Encoder,
};

const TITLE: &str = "macOS日本語入力用辞書";

/// Which macOS output a destination path asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputKind {
    /// `.plist` text replacement list.
    StructuredMarkup,
    /// Commented, tab-separated text grouped by category.
    LegacyText,
}

impl OutputKind {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        if path.as_ref().to_string_lossy().ends_with(".plist") {
            OutputKind::StructuredMarkup
        } else {
            OutputKind::LegacyText
        }
    }
}

/// Entries of one category in the legacy text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub category: String,
    pub lines: Vec<Line>,
}

/// The legacy macOS text output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    pub generated_at: NaiveDateTime,
    pub categories: Option<CategoryFilter>,
    pub groups: Vec<Group>,
}

impl Format {
    /// Groups the selection by category name, sorted. The sort is stable, so
    /// entries inside a group keep selection order.
    pub fn new(selection: &Selection, generated_at: NaiveDateTime) -> Self {
        let mut entries: Vec<_> = selection.entries.iter().collect();
        entries.sort_by(|a, b| a.category.cmp(&b.category));

        let mut groups: Vec<Group> = Vec::new();
        for entry in entries {
            match groups.last_mut() {
                Some(group) if group.category == entry.category => {
                    group.lines.push(Line::from(entry));
                }
                _ => groups.push(Group {
                    category: entry.category.clone(),
                    lines: vec![Line::from(entry)],
                }),
            }
        }

        Format {
            generated_at,
            categories: selection.filter.clone(),
            groups,
        }
    }

    pub fn entry_count(&self) -> usize {
        self.groups.iter().map(|g| g.lines.len()).sum()
    }
}

impl Encoder for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        Header {
            title: TITLE,
            generated_at: self.generated_at,
            count: self.entry_count(),
            categories: self.categories.as_ref(),
            legend: None,
        }
        .write(&mut writer)?;

        for group in &self.groups {
            writeln!(writer)?;
            writeln!(writer, "# {}", group.category)?;
            for line in &group.lines {
                writeln!(writer, "{}", line)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;
    use chrono::NaiveDate;

    fn fixed_time() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 12, 31)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    }

    fn entry(reading: &str, word: &str, category: &str) -> crate::types::ResolvedEntry {
        Entry {
            reading: reading.to_string(),
            word: word.to_string(),
            ..Default::default()
        }
        .resolve(category)
    }

    #[test]
    fn test_output_kind_from_path() {
        assert_eq!(
            OutputKind::from_path("out/dict.plist"),
            OutputKind::StructuredMarkup
        );
        assert_eq!(OutputKind::from_path("out/dict.txt"), OutputKind::LegacyText);
        assert_eq!(OutputKind::from_path("dict"), OutputKind::LegacyText);
        assert_eq!(OutputKind::from_path("dict.PLIST"), OutputKind::LegacyText);
    }

    #[test]
    fn test_groups_sorted_by_category_and_stable() {
        let selection = Selection {
            entries: vec![
                entry("b1", "B1", "b"),
                entry("a1", "A1", "a"),
                entry("b2", "B2", "b"),
                entry("a2", "A2", "a"),
            ],
            filter: None,
        };
        let format = Format::new(&selection, fixed_time());
        let categories: Vec<_> = format.groups.iter().map(|g| g.category.as_str()).collect();
        assert_eq!(categories, vec!["a", "b"]);
        let words: Vec<_> = format.groups[1].lines.iter().map(|l| l.word.as_str()).collect();
        assert_eq!(words, vec!["B1", "B2"]);
        assert_eq!(format.entry_count(), 4);
    }

    #[test]
    fn test_write_legacy_text() {
        let selection = Selection {
            entries: vec![entry("よみ", "語", "記号"), entry("たなか", "田中", "人名")],
            filter: CategoryFilter::parse("記号,人名"),
        };
        let format = Format::new(&selection, fixed_time());
        let out = String::from_utf8(format.to_bytes().unwrap()).unwrap();
        assert_eq!(
            out,
            "# macOS日本語入力用辞書\n\
             # 生成日時: 2024-12-31 23:59:00\n\
             # 単語数: 2件\n\
             # カテゴリ: 記号, 人名\n\
             \n\
             \n\
             # 人名\n\
             たなか\t田中\t名詞\t\n\
             \n\
             # 記号\n\
             よみ\t語\t名詞\t\n"
        );
    }
}
