//! The conversion entry points.
//!
//! A [`Converter`] owns one loaded [`Dictionary`]. Every `to_*` call makes a
//! fresh selection, so calls are independent and may run in parallel against
//! the same converter. Nothing is printed; each call returns an
//! [`EmitReport`] for the caller to render.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::Error,
    formats::{
        CsvFormat, FormatType, MacosTextFormat, OutputKind, PlistFormat, TextFormat,
        WindowsFormat,
    },
    options::EmitOptions,
    selection::{CategoryFilter, Selection},
    traits::Encoder,
    types::Dictionary,
};

/// What one emitter call did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum EmitOutcome {
    /// The artifact was written with this many entries.
    Written { entries: usize },
    /// The selection was empty; nothing was written.
    NoEntries,
}

/// Result of one emitter call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmitReport {
    pub format: FormatType,
    /// Set only for macOS output: which shape the destination selected.
    #[serde(skip)]
    pub kind: Option<OutputKind>,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: EmitOutcome,
    /// Category filter that was active, if any.
    pub categories: Option<Vec<String>>,
}

impl EmitReport {
    fn new(format: FormatType, path: &Path, selection: &Selection) -> Self {
        EmitReport {
            format,
            kind: None,
            path: path.to_path_buf(),
            outcome: if selection.is_empty() {
                EmitOutcome::NoEntries
            } else {
                EmitOutcome::Written {
                    entries: selection.len(),
                }
            },
            categories: selection.filter.as_ref().map(|f| f.names().to_vec()),
        }
    }

    /// Number of entries written; zero when nothing was written.
    pub fn written(&self) -> usize {
        match self.outcome {
            EmitOutcome::Written { entries } => entries,
            EmitOutcome::NoEntries => 0,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self.outcome, EmitOutcome::Written { .. })
    }
}

/// Converts one dictionary into the supported outputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Converter {
    dictionary: Dictionary,
}

impl Converter {
    pub fn new(dictionary: Dictionary) -> Self {
        Converter { dictionary }
    }

    /// Loads the dictionary at `path`. See [`Dictionary::read_from`].
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        Ok(Converter::new(Dictionary::read_from(path)?))
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Selects entries for one output.
    pub fn select(&self, categories: Option<&CategoryFilter>) -> Selection {
        self.dictionary.select(categories)
    }

    /// Writes the quoted CSV output.
    pub fn to_csv<P: AsRef<Path>>(
        &self,
        path: P,
        options: &EmitOptions,
    ) -> Result<EmitReport, Error> {
        self.emit(FormatType::Csv, path.as_ref(), options, |selection, _, path| {
            CsvFormat::from(selection).write_to(path)
        })
    }

    /// Writes the tab-separated plain text output.
    pub fn to_txt<P: AsRef<Path>>(
        &self,
        path: P,
        options: &EmitOptions,
    ) -> Result<EmitReport, Error> {
        self.emit(FormatType::Text, path.as_ref(), options, |selection, options, path| {
            TextFormat::new(selection, options.timestamp()).write_to(path)
        })
    }

    /// Writes the macOS output, choosing the shape from the path extension.
    pub fn to_macos<P: AsRef<Path>>(
        &self,
        path: P,
        options: &EmitOptions,
    ) -> Result<EmitReport, Error> {
        let path = path.as_ref();
        let kind = OutputKind::from_path(path);
        let mut report = match kind {
            OutputKind::StructuredMarkup => self.to_macos_plist(path, options)?,
            OutputKind::LegacyText => {
                self.emit(FormatType::Macos, path, options, |selection, options, path| {
                    MacosTextFormat::new(selection, options.timestamp()).write_to(path)
                })?
            }
        };
        report.kind = Some(kind);
        Ok(report)
    }

    /// Writes the macOS property list regardless of the path extension.
    pub fn to_macos_plist<P: AsRef<Path>>(
        &self,
        path: P,
        options: &EmitOptions,
    ) -> Result<EmitReport, Error> {
        let mut report = self.emit(FormatType::Macos, path.as_ref(), options, |selection, _, path| {
            PlistFormat::from(selection).write_to(path)
        })?;
        report.kind = Some(OutputKind::StructuredMarkup);
        Ok(report)
    }

    /// Writes the Microsoft IME output.
    pub fn to_windows<P: AsRef<Path>>(
        &self,
        path: P,
        options: &EmitOptions,
    ) -> Result<EmitReport, Error> {
        self.emit(FormatType::Windows, path.as_ref(), options, |selection, _, path| {
            WindowsFormat::from(selection).write_to(path)
        })
    }

    /// Writes `format` to `path`.
    pub fn write<P: AsRef<Path>>(
        &self,
        format: FormatType,
        path: P,
        options: &EmitOptions,
    ) -> Result<EmitReport, Error> {
        match format {
            FormatType::Csv => self.to_csv(path, options),
            FormatType::Text => self.to_txt(path, options),
            FormatType::Macos => self.to_macos(path, options),
            FormatType::Windows => self.to_windows(path, options),
        }
    }

    /// Select, then write. An empty selection writes nothing.
    fn emit<F>(
        &self,
        format: FormatType,
        path: &Path,
        options: &EmitOptions,
        write: F,
    ) -> Result<EmitReport, Error>
    where
        F: FnOnce(&Selection, &EmitOptions, &Path) -> Result<(), Error>,
    {
        let selection = self.select(options.categories.as_ref());
        let report = EmitReport::new(format, path, &selection);
        if selection.is_empty() {
            tracing::debug!(%format, path = %path.display(), "no entries to write");
            return Ok(report);
        }

        write(&selection, options, path)?;
        tracing::debug!(
            %format,
            path = %path.display(),
            entries = selection.len(),
            "wrote output"
        );
        Ok(report)
    }
}
