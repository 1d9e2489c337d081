//! The trait every output format implements.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::Error;

/// A fully prepared output artifact that can be written anywhere.
///
/// # Example
///
/// ```rust,no_run
/// use imedict::{Dictionary, formats::CsvFormat, traits::Encoder};
///
/// let dictionary = Dictionary::read_from("dictionary.json")?;
/// let selection = dictionary.select(None);
/// CsvFormat::from(&selection).write_to("dictionary.csv")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Encoder {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Check that the content can be encoded at all.
    ///
    /// Runs before a destination is created, so a rejected artifact leaves
    /// no file behind.
    fn validate(&self) -> Result<(), Error> {
        Ok(())
    }

    /// Write to a file path, creating or truncating it.
    ///
    /// I/O failures are reported as [`Error::Write`] naming `path`.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        self.validate()?;
        let file = File::create(path).map_err(|e| Error::write(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)
            .and_then(|()| writer.flush().map_err(Error::Io))
            .map_err(|e| match e {
                Error::Io(source) => Error::write(path, source),
                other => other,
            })
    }

    /// Encode into an in-memory buffer.
    fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        let mut out = Vec::new();
        self.to_writer(&mut out)?;
        Ok(out)
    }
}
