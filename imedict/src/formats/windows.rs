//! Microsoft IME dictionary text.
//!
//! The importer identifies the encoding only from the byte order mark, so the
//! file is UTF-16LE and always starts with `FF FE`. Readings prefer the
//! Windows override and parts of speech are folded into the set the importer
//! accepts.

use std::io::Write;

use crate::{
    error::Error,
    pos::normalize_for_windows,
    selection::Selection,
    traits::Encoder,
    types::ResolvedEntry,
};

/// UTF-16LE byte order mark.
pub const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

pub const TOOL_NAME: &str = "Microsoft IME Dictionary Tool";
pub const VERSION: &str = "10.0";

const LINE_ENDING: &str = "\r\n";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub reading: String,
    pub word: String,
    pub part_of_speech: &'static str,
    pub comment: String,
}

impl From<&ResolvedEntry> for Line {
    fn from(entry: &ResolvedEntry) -> Self {
        Line {
            reading: entry.windows_reading().to_string(),
            word: entry.word.clone(),
            // Defaults were applied at selection; normalization comes second.
            part_of_speech: normalize_for_windows(&entry.part_of_speech),
            comment: entry.description.clone(),
        }
    }
}

/// The Windows IME output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub lines: Vec<Line>,
}

impl From<&Selection> for Format {
    fn from(selection: &Selection) -> Self {
        Format {
            lines: selection.entries.iter().map(Line::from).collect(),
        }
    }
}

impl Format {
    /// The document as text, before UTF-16 encoding.
    pub fn to_text(&self) -> String {
        let mut content = String::new();
        for banner in [
            format!("!{TOOL_NAME}"),
            format!("!Version={VERSION}"),
            "!CharSet=UTF-16LE".to_string(),
            "!Format=<Reading>\t<Word>\t<POS>\t<Comment>".to_string(),
            String::new(),
        ] {
            content.push_str(&banner);
            content.push_str(LINE_ENDING);
        }
        for line in &self.lines {
            content.push_str(&format!(
                "{}\t{}\t{}\t{}",
                line.reading, line.word, line.part_of_speech, line.comment
            ));
            content.push_str(LINE_ENDING);
        }
        content
    }
}

impl Encoder for Format {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        let text = self.to_text();
        let mut bytes = Vec::with_capacity(UTF16LE_BOM.len() + text.len() * 2);
        bytes.extend_from_slice(&UTF16LE_BOM);
        for unit in text.encode_utf16() {
            bytes.extend_from_slice(&unit.to_le_bytes());
        }
        writer.write_all(&bytes)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    fn decode(bytes: &[u8]) -> String {
        let units: Vec<u16> = bytes
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
            .collect();
        String::from_utf16(&units).unwrap()
    }

    fn format_of(entries: Vec<Entry>) -> Format {
        Format::from(&Selection {
            entries: entries.iter().map(|e| e.resolve("テスト")).collect(),
            filter: None,
        })
    }

    #[test]
    fn test_bom_and_banner() {
        let bytes = format_of(vec![]).to_bytes().unwrap();
        assert_eq!(&bytes[..2], &[0xFF, 0xFE]);
        assert_eq!(
            decode(&bytes[2..]),
            "!Microsoft IME Dictionary Tool\r\n\
             !Version=10.0\r\n\
             !CharSet=UTF-16LE\r\n\
             !Format=<Reading>\t<Word>\t<POS>\t<Comment>\r\n\
             \r\n"
        );
    }

    #[test]
    fn test_reading_prefers_override() {
        let format = format_of(vec![
            Entry {
                reading: "かのにかる".to_string(),
                reading_windows: Some("うぃん".to_string()),
                word: "語".to_string(),
                ..Default::default()
            },
            Entry {
                reading: "ふつう".to_string(),
                reading_windows: Some(String::new()),
                word: "普通".to_string(),
                ..Default::default()
            },
        ]);
        let text = decode(&format.to_bytes().unwrap()[2..]);
        assert!(text.contains("うぃん\t語\t名詞\t\r\n"));
        assert!(!text.contains("かのにかる"));
        assert!(text.contains("ふつう\t普通\t名詞\t\r\n"));
    }

    #[test]
    fn test_part_of_speech_is_normalized() {
        let format = format_of(vec![
            Entry {
                reading: "みぎ".to_string(),
                word: "→".to_string(),
                part_of_speech: Some("記号".to_string()),
                description: Some("矢印".to_string()),
                ..Default::default()
            },
            Entry {
                reading: "はしる".to_string(),
                word: "走る".to_string(),
                part_of_speech: Some("動詞".to_string()),
                ..Default::default()
            },
        ]);
        let parts: Vec<_> = format.lines.iter().map(|l| l.part_of_speech).collect();
        assert_eq!(parts, vec!["短縮よみ", "名詞"]);
        let text = decode(&format.to_bytes().unwrap()[2..]);
        assert!(text.contains("みぎ\t→\t短縮よみ\t矢印\r\n"));
    }

    #[test]
    fn test_non_bmp_characters_use_surrogate_pairs() {
        let format = format_of(vec![Entry {
            reading: "えもじ".to_string(),
            word: "😀".to_string(),
            ..Default::default()
        }]);
        let bytes = format.to_bytes().unwrap();
        assert_eq!(bytes.len() % 2, 0);
        assert!(decode(&bytes[2..]).contains("えもじ\t😀\t"));
    }
}
