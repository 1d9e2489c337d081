//! All supported output formats.
//!
//! Each submodule defines a `Format` value built from a [`Selection`] and
//! written through [`crate::traits::Encoder`]. [`FormatType`] names the
//! formats for generic handling, e.g. by the command line.
//!
//! [`Selection`]: crate::selection::Selection

pub mod csv;
pub mod macos;
pub mod plist;
pub mod text;
pub mod windows;

use std::{
    fmt::{Display, Formatter},
    path::{Path, PathBuf},
    str::FromStr,
};

pub use self::csv::{CSVRecord, Format as CsvFormat};
pub use macos::{Format as MacosTextFormat, OutputKind};
pub use plist::Format as PlistFormat;
pub use text::Format as TextFormat;
pub use windows::Format as WindowsFormat;

use serde::Serialize;

use crate::{error::Error, selection::CategoryFilter};

/// Every output the converter can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// Quoted CSV, UTF-8 with BOM.
    Csv,
    /// Tab-separated text with a `#` comment header.
    #[serde(rename = "txt")]
    Text,
    /// macOS user dictionary; `.plist` or legacy text depending on the path.
    Macos,
    /// Microsoft IME dictionary text, UTF-16LE with BOM.
    Windows,
}

impl FormatType {
    /// All formats, in the order the all-formats mode writes them.
    pub const ALL: [FormatType; 4] = [
        FormatType::Csv,
        FormatType::Text,
        FormatType::Macos,
        FormatType::Windows,
    ];

    /// Returns the file name the all-formats mode uses for this format.
    pub fn file_name(&self, base: &str) -> String {
        match self {
            FormatType::Csv => format!("{base}.csv"),
            FormatType::Text => format!("{base}.txt"),
            FormatType::Macos => format!("{base}.plist"),
            FormatType::Windows => format!("{base}_windows.txt"),
        }
    }

    /// Human-readable label used in reports.
    pub fn label(&self) -> &'static str {
        match self {
            FormatType::Csv => "CSV",
            FormatType::Text => "TXT",
            FormatType::Macos => "macOS",
            FormatType::Windows => "Windows",
        }
    }
}

impl Display for FormatType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FormatType::Csv => write!(f, "csv"),
            FormatType::Text => write!(f, "txt"),
            FormatType::Macos => write!(f, "macos"),
            FormatType::Windows => write!(f, "windows"),
        }
    }
}

/// Accepts `csv`, `txt`/`text`, `macos`/`mac`/`plist` and `windows`/`win`,
/// case-insensitively.
impl FromStr for FormatType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_ascii_lowercase();
        match s.as_str() {
            "csv" => Ok(FormatType::Csv),
            "txt" | "text" => Ok(FormatType::Text),
            "macos" | "mac" | "plist" => Ok(FormatType::Macos),
            "windows" | "win" => Ok(FormatType::Windows),
            other => Err(Error::UnknownFormat(other.to_string())),
        }
    }
}

/// Base file name for the all-formats mode.
///
/// Without a filter this is the source file stem. With one, `_` and the
/// category names joined by `_` are appended, cut to 30 characters, with
/// `/` replaced so the name stays a single path component.
pub fn all_formats_base_name(source: &Path, categories: Option<&CategoryFilter>) -> String {
    let stem = source
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    match categories {
        Some(filter) => {
            let suffix: String = filter.names().join("_").chars().take(30).collect();
            format!("{stem}_{}", suffix.replace('/', "_"))
        }
        None => stem,
    }
}

/// Destination paths for the all-formats mode, in [`FormatType::ALL`] order.
pub fn all_formats_targets(
    output_dir: &Path,
    source: &Path,
    categories: Option<&CategoryFilter>,
) -> Vec<(FormatType, PathBuf)> {
    let base = all_formats_base_name(source, categories);
    FormatType::ALL
        .iter()
        .map(|format| (*format, output_dir.join(format.file_name(&base))))
        .collect()
}
