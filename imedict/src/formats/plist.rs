//! macOS text replacement property list.
//!
//! An `<array>` of `<dict>` records, each with a `phrase` (the word) and a
//! `shortcut` (the canonical reading). The Windows reading override is never
//! used here.

use std::io::Write;

use quick_xml::{
    Writer,
    events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event},
};

use crate::{error::Error, selection::Selection, traits::Encoder, types::ResolvedEntry};

const DOCTYPE: &str = r#"plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd""#;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub phrase: String,
    pub shortcut: String,
}

impl From<&ResolvedEntry> for Item {
    fn from(entry: &ResolvedEntry) -> Self {
        Item {
            phrase: entry.word.clone(),
            shortcut: entry.reading.clone(),
        }
    }
}

/// The plist output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Format {
    pub items: Vec<Item>,
}

impl From<&Selection> for Format {
    fn from(selection: &Selection) -> Self {
        Format {
            items: selection.entries.iter().map(Item::from).collect(),
        }
    }
}

/// The XML 1.0 `Char` production.
fn is_xml_char(ch: char) -> bool {
    matches!(
        ch,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn check_text(field: &'static str, value: &str) -> Result<(), Error> {
    match value.chars().find(|ch| !is_xml_char(*ch)) {
        Some(ch) => Err(Error::InvalidXmlChar {
            field,
            ch,
            value: value.to_string(),
        }),
        None => Ok(()),
    }
}

impl Encoder for Format {
    fn validate(&self) -> Result<(), Error> {
        for item in &self.items {
            check_text("phrase", &item.phrase)?;
            check_text("shortcut", &item.shortcut)?;
        }
        Ok(())
    }

    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        self.validate()?;
        let mut xml_writer = Writer::new_with_indent(&mut writer, b'\t', 1);

        xml_writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
        xml_writer.write_event(Event::DocType(BytesText::from_escaped(DOCTYPE)))?;

        let mut plist = BytesStart::new("plist");
        plist.push_attribute(("version", "1.0"));
        xml_writer.write_event(Event::Start(plist))?;
        xml_writer.write_event(Event::Start(BytesStart::new("array")))?;

        for item in &self.items {
            xml_writer.write_event(Event::Start(BytesStart::new("dict")))?;
            write_pair(&mut xml_writer, "phrase", &item.phrase)?;
            write_pair(&mut xml_writer, "shortcut", &item.shortcut)?;
            xml_writer.write_event(Event::End(BytesEnd::new("dict")))?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("array")))?;
        xml_writer.write_event(Event::End(BytesEnd::new("plist")))?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

fn write_pair<W: Write>(xml_writer: &mut Writer<W>, key: &str, value: &str) -> Result<(), Error> {
    xml_writer
        .create_element("key")
        .write_text_content(BytesText::new(key))?;
    xml_writer
        .create_element("string")
        .write_text_content(BytesText::new(value))?;
    Ok(())
}
