//! All error types for the imedict crate.
//!
//! These are returned from every fallible operation (loading the source
//! dictionary, writing an output artifact, parsing a format name).

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The source dictionary is missing, unreadable, or not well-formed JSON.
    #[error("failed to load dictionary {}: {source}", path.display())]
    Load {
        path: PathBuf,
        #[source]
        source: LoadSource,
    },

    /// A destination could not be created or written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV error other than I/O; I/O failures become [`Error::Io`].
    #[error("CSV write error: {0}")]
    Csv(csv::Error),

    /// A value holds a character XML 1.0 cannot represent.
    #[error("{field} contains U+{:04X}, which is not allowed in XML: {value:?}", u32::from(*ch))]
    InvalidXmlChar {
        field: &'static str,
        ch: char,
        value: String,
    },

    #[error("XML write error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("unknown format `{0}`")]
    UnknownFormat(String),
}

/// Underlying cause of an [`Error::Load`].
#[derive(Error, Debug)]
pub enum LoadSource {
    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<csv::Error> for Error {
    fn from(error: csv::Error) -> Self {
        if !error.is_io_error() {
            return Error::Csv(error);
        }
        match error.into_kind() {
            csv::ErrorKind::Io(source) => Error::Io(source),
            _ => unreachable!("is_io_error guarantees an Io kind"),
        }
    }
}

impl Error {
    /// Creates a load error for `path`.
    pub fn load(path: impl Into<PathBuf>, source: impl Into<LoadSource>) -> Self {
        Error::Load {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Creates a write error for `path`.
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }

    /// Returns true when the error happened while loading the source document.
    pub fn is_load_error(&self) -> bool {
        matches!(self, Error::Load { .. })
    }
}
