#![forbid(unsafe_code)]
//! Convert a categorized JSON word list into IME user dictionaries.
//!
//! One source dictionary is written out for several input methods, each
//! with its own encoding and layout. All conversion goes through a
//! [`Selection`]: the enabled entries of the requested categories, in
//! declaration order, with defaults resolved.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use imedict::{CategoryFilter, Converter, EmitOptions};
//!
//! let converter = Converter::load("dictionary.json")?;
//! let options = EmitOptions::new().with_categories(CategoryFilter::parse("記号,矢印"));
//!
//! converter.to_csv("dictionary.csv", &options)?;
//! converter.to_macos("dictionary.plist", &options)?;
//! converter.to_windows("dictionary_windows.txt", &options)?;
//! # Ok::<(), imedict::Error>(())
//! ```
//!
//! # Supported Formats
//!
//! - **CSV**: every field quoted, UTF-8 with BOM
//! - **Plain text**: `#` comment header and tab-separated rows
//! - **macOS**: text replacement `.plist`, or a legacy text file grouped by category
//! - **Windows**: Microsoft IME dictionary text, UTF-16LE with BOM

pub mod converter;
pub mod error;
pub mod formats;
pub mod options;
pub mod pos;
pub mod selection;
pub mod stats;
pub mod traits;
pub mod types;

// Re-export most used types for easy consumption
pub use crate::{
    converter::{Converter, EmitOutcome, EmitReport},
    error::Error,
    formats::{FormatType, OutputKind, all_formats_base_name, all_formats_targets},
    options::EmitOptions,
    pos::{DEFAULT_PART_OF_SPEECH, normalize_for_windows},
    selection::{CategoryFilter, Selection, select},
    stats::{CategorySummary, DictionaryStats},
    types::{Category, Dictionary, DictionaryInfo, Entry, ResolvedEntry},
};
