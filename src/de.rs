//! Parsing: markup events to a value tree.
//!
//! The entry points locate the first top-level `<plist>` element and build
//! a [`Document`] from it with a depth-first walk over the reader's events.
//! No `<plist>` element in the input is *absence*, reported as `Ok(None)`;
//! malformed markup surfaces as [`Error::Source`] with the reader's message
//! passed through unchanged.
//!
//! Element content is assembled per container:
//!
//! - `<array>` appends every recognized child value in document order
//! - `<dict>` runs the key/value pairing state machine ([`DictState`]):
//!   every value element must be preceded by a `<key>` element
//! - `<plist>` keeps the last recognized child as the document root
//!
//! Whitespace and comments between child elements are ignored. Text content
//! of leaf elements is taken verbatim (entity and character references
//! resolved); `<integer>` and `<real>` content is then parsed strictly.

use crate::error::{Error, Result};
use crate::map::Dict;
use crate::spec;
use crate::value::{Document, Value};
use quick_xml::escape::resolve_xml_entity;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io;

/// Reads a plist document from a string slice.
///
/// Returns `Ok(None)` if the input contains no `<plist>` root element.
///
/// # Examples
///
/// ```rust
/// use plist_xml::{from_str, Value};
///
/// let doc = from_str(r#"<plist version="1.0"><integer>42</integer></plist>"#)
///     .unwrap()
///     .unwrap();
/// assert_eq!(doc.root().and_then(Value::as_i64), Some(42));
/// ```
///
/// # Errors
///
/// Returns an error if the markup is malformed, a dict value has no
/// preceding key, or numeric content fails strict parsing.
pub fn from_str(input: &str) -> Result<Option<Document>> {
    let mut reader = Reader::from_str(input);
    read_document(&mut reader)
}

/// Reads a plist document from UTF-8 bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, or for any reason
/// [`from_str`] does.
pub fn from_slice(input: &[u8]) -> Result<Option<Document>> {
    let input = std::str::from_utf8(input).map_err(Error::source)?;
    from_str(input)
}

/// Reads a plist document from an I/O stream.
///
/// The stream is read to completion before parsing; it is not closed.
///
/// # Errors
///
/// Returns an error if reading fails, or for any reason [`from_str`] does.
pub fn from_reader<R: io::Read>(mut reader: R) -> Result<Option<Document>> {
    let mut input = String::new();
    reader.read_to_string(&mut input).map_err(Error::io)?;
    from_str(&input)
}

/// Key/value pairing state for one dict build.
///
/// Held in a local scoped to a single `<dict>` element, so "no pending key"
/// needs no sentinel value.
enum DictState {
    AwaitingKey,
    HaveKey(String),
}

fn read_document(reader: &mut Reader<&[u8]>) -> Result<Option<Document>> {
    loop {
        match reader.read_event().map_err(Error::source)? {
            Event::Start(e) => {
                if e.name().as_ref() == spec::PLIST.as_bytes() {
                    return read_plist(reader, &e, false).map(Some);
                }
                // Not a plist root: skip the element and keep looking.
                let end = e.to_end().into_owned();
                reader.read_to_end(end.name()).map_err(Error::source)?;
            }
            Event::Empty(e) => {
                if e.name().as_ref() == spec::PLIST.as_bytes() {
                    return read_plist(reader, &e, true).map(Some);
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

fn read_plist(reader: &mut Reader<&[u8]>, start: &BytesStart, empty: bool) -> Result<Document> {
    let mut doc = Document::empty();
    for attr in start.attributes() {
        let attr = attr.map_err(Error::source)?;
        if attr.key.as_ref() == spec::VERSION.as_bytes() {
            let version = attr
                .decode_and_unescape_value(reader.decoder())
                .map_err(Error::source)?;
            doc.set_version(version.into_owned());
        }
        // Any other attribute is ignored.
    }
    if empty {
        return Ok(doc);
    }
    loop {
        let (name, child_empty) = match reader.read_event().map_err(Error::source)? {
            Event::Start(e) => (element_name(&e)?, false),
            Event::Empty(e) => (element_name(&e)?, true),
            Event::End(_) => return Ok(doc),
            Event::Eof => return Err(Error::UnexpectedEof(spec::PLIST.to_string())),
            _ => continue,
        };
        // A well-formed document has one root element; the last one wins.
        doc.set_root(read_value(reader, &name, child_empty)?);
    }
}

fn read_value(reader: &mut Reader<&[u8]>, name: &str, empty: bool) -> Result<Value> {
    match name {
        spec::STRING => Ok(Value::String(element_text(reader, name, empty)?)),
        spec::DATA => Ok(Value::Data(element_text(reader, name, empty)?)),
        spec::DATE => Ok(Value::Date(element_text(reader, name, empty)?)),
        spec::INTEGER => {
            let text = element_text(reader, name, empty)?;
            text.trim()
                .parse::<i64>()
                .map(Value::Integer)
                .map_err(|_| Error::InvalidInteger(text))
        }
        spec::REAL => {
            let text = element_text(reader, name, empty)?;
            text.trim()
                .parse::<f64>()
                .map(Value::Real)
                .map_err(|_| Error::InvalidReal(text))
        }
        spec::TRUE => {
            element_text(reader, name, empty)?;
            Ok(Value::Boolean(true))
        }
        spec::FALSE => {
            element_text(reader, name, empty)?;
            Ok(Value::Boolean(false))
        }
        spec::ARRAY => read_array(reader, empty),
        spec::DICT => read_dict(reader, empty),
        _ => Err(Error::UnexpectedElement(name.to_string())),
    }
}

fn read_array(reader: &mut Reader<&[u8]>, empty: bool) -> Result<Value> {
    let mut items = Vec::new();
    if !empty {
        loop {
            let (name, child_empty) = match reader.read_event().map_err(Error::source)? {
                Event::Start(e) => (element_name(&e)?, false),
                Event::Empty(e) => (element_name(&e)?, true),
                Event::End(_) => break,
                Event::Eof => return Err(Error::UnexpectedEof(spec::ARRAY.to_string())),
                _ => continue,
            };
            items.push(read_value(reader, &name, child_empty)?);
        }
    }
    Ok(Value::Array(items))
}

fn read_dict(reader: &mut Reader<&[u8]>, empty: bool) -> Result<Value> {
    let mut dict = Dict::new();
    if !empty {
        let mut state = DictState::AwaitingKey;
        loop {
            let (name, child_empty) = match reader.read_event().map_err(Error::source)? {
                Event::Start(e) => (element_name(&e)?, false),
                Event::Empty(e) => (element_name(&e)?, true),
                Event::End(_) => break,
                Event::Eof => return Err(Error::UnexpectedEof(spec::DICT.to_string())),
                _ => continue,
            };
            if name == spec::KEY {
                // A second key before any value replaces the pending one;
                // the replaced key produces no entry.
                state = DictState::HaveKey(element_text(reader, spec::KEY, child_empty)?);
            } else {
                let value = read_value(reader, &name, child_empty)?;
                match std::mem::replace(&mut state, DictState::AwaitingKey) {
                    DictState::HaveKey(key) => {
                        dict.insert(key, value);
                    }
                    DictState::AwaitingKey => return Err(Error::ValueWithoutKey(name)),
                }
            }
        }
        // A pending key left when the dict closes produces no entry.
    }
    Ok(Value::Dict(dict))
}

/// Collects the text content of a leaf element up to its end tag.
///
/// Entity and character references are resolved; CDATA is taken as-is.
/// Nested markup inside a leaf element is an error.
fn element_text(reader: &mut Reader<&[u8]>, element: &str, empty: bool) -> Result<String> {
    if empty {
        return Ok(String::new());
    }
    let mut text = String::new();
    loop {
        match reader.read_event().map_err(Error::source)? {
            Event::Text(t) => text.push_str(&t.decode().map_err(Error::source)?),
            Event::CData(c) => {
                text.push_str(std::str::from_utf8(c.as_ref()).map_err(Error::source)?);
            }
            Event::GeneralRef(r) => {
                let entity = r.decode().map_err(Error::source)?;
                text.push_str(&resolve_reference(&entity)?);
            }
            Event::Start(e) | Event::Empty(e) => {
                return Err(Error::UnexpectedElement(element_name(&e)?));
            }
            Event::End(_) => return Ok(text),
            Event::Eof => return Err(Error::UnexpectedEof(element.to_string())),
            _ => {}
        }
    }
}

fn element_name(e: &BytesStart) -> Result<String> {
    std::str::from_utf8(e.name().as_ref())
        .map(str::to_string)
        .map_err(Error::source)
}

/// Resolves a general entity reference (`amp`, `lt`, ...) or a character
/// reference (`#10`, `#x41`, ...) to its replacement text.
fn resolve_reference(entity: &str) -> Result<String> {
    if let Some(digits) = entity.strip_prefix('#') {
        let code = if let Some(hex) = digits.strip_prefix('x').or_else(|| digits.strip_prefix('X'))
        {
            u32::from_str_radix(hex, 16).ok()
        } else {
            digits.parse::<u32>().ok()
        };
        return code
            .and_then(char::from_u32)
            .map(String::from)
            .ok_or_else(|| Error::source(format!("invalid character reference &#{};", digits)));
    }
    resolve_xml_entity(entity)
        .map(str::to_string)
        .ok_or_else(|| Error::source(format!("unknown entity &{};", entity)))
}
