//! Serialization: a value tree back to markup events.
//!
//! A document is written as an XML declaration, a `<plist>` start tag with
//! the `version` attribute when present, at most one root child, and the
//! end tag. Values are walked depth-first and dispatched by variant to
//! their markup tag; booleans select one of the two zero-content tags.
//!
//! The opaque payload variants (`Data`, `Date`) have no output form: an
//! array element of either kind emits nothing, and a dict pair whose value
//! is opaque is suppressed entirely, key included, so the output never
//! contains a dangling key.

use crate::error::{Error, Result};
use crate::spec;
use crate::value::{Document, Value};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io;

/// Serializes a document to a string of markup.
///
/// # Examples
///
/// ```rust
/// use plist_xml::{to_string, Document, Value};
///
/// let doc = Document::new(Value::from(1234));
/// assert_eq!(
///     to_string(&doc).unwrap(),
///     r#"<?xml version="1.0"?><plist version="1.0"><integer>1234</integer></plist>"#
/// );
/// ```
///
/// # Errors
///
/// Returns an error if the markup sink fails.
pub fn to_string(doc: &Document) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, doc)?;
    // The writer emits UTF-8 only.
    String::from_utf8(buf).map_err(Error::io)
}

/// Serializes a document to an I/O stream.
///
/// The stream is not closed; that is up to the caller.
///
/// # Errors
///
/// Returns an error if writing to the stream fails.
pub fn to_writer<W: io::Write>(writer: W, doc: &Document) -> Result<()> {
    let mut writer = Writer::new(writer);
    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", None, None)))
        .map_err(Error::io)?;

    let mut root = BytesStart::new(spec::PLIST);
    if let Some(version) = doc.version() {
        root.push_attribute((spec::VERSION, version));
    }
    writer.write_event(Event::Start(root)).map_err(Error::io)?;

    if let Some(value) = doc.root() {
        write_value(&mut writer, value)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(spec::PLIST)))
        .map_err(Error::io)?;
    Ok(())
}

fn write_value<W: io::Write>(writer: &mut Writer<W>, value: &Value) -> Result<()> {
    match value {
        Value::String(s) => write_text_element(writer, spec::STRING, s),
        Value::Integer(i) => write_text_element(writer, spec::INTEGER, &i.to_string()),
        Value::Real(r) => write_text_element(writer, spec::REAL, &r.to_string()),
        Value::Boolean(b) => {
            let tag = if *b { spec::TRUE } else { spec::FALSE };
            writer
                .write_event(Event::Empty(BytesStart::new(tag)))
                .map_err(Error::io)
        }
        Value::Array(items) => {
            writer
                .write_event(Event::Start(BytesStart::new(spec::ARRAY)))
                .map_err(Error::io)?;
            for item in items {
                if !item.is_emittable() {
                    continue;
                }
                write_value(writer, item)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(spec::ARRAY)))
                .map_err(Error::io)
        }
        Value::Dict(dict) => {
            writer
                .write_event(Event::Start(BytesStart::new(spec::DICT)))
                .map_err(Error::io)?;
            for (key, item) in dict.iter() {
                // Suppress the whole pair when the value has no output
                // form, key included.
                if !item.is_emittable() {
                    continue;
                }
                write_text_element(writer, spec::KEY, key)?;
                write_value(writer, item)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(spec::DICT)))
                .map_err(Error::io)
        }
        // Opaque payloads have no output form.
        Value::Data(_) | Value::Date(_) => Ok(()),
    }
}

fn write_text_element<W: io::Write>(writer: &mut Writer<W>, tag: &str, text: &str) -> Result<()> {
    writer
        .write_event(Event::Start(BytesStart::new(tag)))
        .map_err(Error::io)?;
    writer
        .write_event(Event::Text(BytesText::new(text)))
        .map_err(Error::io)?;
    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(Error::io)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_emits_no_child() {
        let doc = Document::empty();
        assert_eq!(to_string(&doc).unwrap(), r#"<?xml version="1.0"?><plist></plist>"#);
    }

    #[test]
    fn version_attribute_written_when_present() {
        let mut doc = Document::empty();
        doc.set_version("1.0");
        assert_eq!(
            to_string(&doc).unwrap(),
            r#"<?xml version="1.0"?><plist version="1.0"></plist>"#
        );
    }

    #[test]
    fn opaque_root_emits_empty_body() {
        let doc = Document::new(Value::Data("aGVsbG8=".to_string()));
        assert_eq!(
            to_string(&doc).unwrap(),
            r#"<?xml version="1.0"?><plist version="1.0"></plist>"#
        );
    }
}
