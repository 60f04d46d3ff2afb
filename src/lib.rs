//! # plist-xml
//!
//! A codec for the XML property-list ("plist") format, mapping between
//! textual markup and an in-memory tagged-value tree.
//!
//! ## Key Features
//!
//! - **Typed value tree**: [`Value`] is a closed tagged union (string,
//!   integer, real, boolean, array, dict) with equality and conversions
//! - **Deterministic dicts**: dict entries keep insertion order, so parsed
//!   documents serialize their keys back in document order
//! - **Strict numerics**: `<integer>` and `<real>` content is parsed
//!   strictly; `<integer>12.3</integer>` is an error, not a coercion
//! - **Serde bridge**: [`Value`] implements `Serialize`/`Deserialize`, so
//!   value trees convert to and from other formats
//! - **No unsafe code**
//!
//! ## Quick Start
//!
//! ```rust
//! use plist_xml::{from_str, to_string, Document, Value};
//!
//! let markup = r#"<?xml version="1.0"?>
//! <plist version="1.0">
//!   <dict>
//!     <key>name</key><string>Alice</string>
//!     <key>logins</key><integer>42</integer>
//!   </dict>
//! </plist>"#;
//!
//! let doc = from_str(markup).unwrap().expect("plist present");
//! let dict = doc.root().and_then(Value::as_dict).unwrap();
//! assert_eq!(dict.get("name").and_then(Value::as_str), Some("Alice"));
//! assert_eq!(dict.get("logins").and_then(Value::as_i64), Some(42));
//!
//! let out = to_string(&doc).unwrap();
//! assert_eq!(from_str(&out).unwrap().unwrap(), doc);
//! ```
//!
//! ### Building values with the plist! macro
//!
//! ```rust
//! use plist_xml::{plist, Document, to_string};
//!
//! let settings = plist!({
//!     "volume": 0.8,
//!     "muted": false,
//!     "presets": [1, 2, 3]
//! });
//! let markup = to_string(&Document::new(settings)).unwrap();
//! assert!(markup.contains("<key>volume</key><real>0.8</real>"));
//! ```
//!
//! ## Absence is not an error
//!
//! Input with no `<plist>` root element parses to `Ok(None)`, and a
//! `<plist>` element with no recognized child yields a [`Document`] whose
//! root is `None`. Only malformed markup, a dict value without a preceding
//! key, or non-numeric `<integer>`/`<real>` content produce errors.
//!
//! ## Unsupported payloads
//!
//! `<data>` and `<date>` elements parse into opaque textual values
//! ([`Value::Data`], [`Value::Date`]) and are never re-emitted; see
//! [`spec`] for the exact rules.
//!
//! ## Format Reference
//!
//! The implemented grammar and tag vocabulary are documented in [`spec`].

pub mod de;
pub mod error;
pub mod macros;
pub mod map;
pub mod ser;
pub mod spec;
pub mod value;

pub use de::{from_reader, from_slice, from_str};
pub use error::{Error, Result};
pub use map::Dict;
pub use ser::{to_string, to_writer};
pub use value::{Document, Value};

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(value: Value) {
        let doc = Document::new(value);
        let markup = to_string(&doc).unwrap();
        let parsed = from_str(&markup).unwrap().expect("document present");
        assert_eq!(parsed, doc, "markup was: {}", markup);
    }

    #[test]
    fn roundtrip_scalars() {
        roundtrip(Value::from("abc1234"));
        roundtrip(Value::from(1234));
        roundtrip(Value::from(-7));
        roundtrip(Value::from(1234.456));
        roundtrip(Value::from(true));
        roundtrip(Value::from(false));
    }

    #[test]
    fn roundtrip_containers() {
        roundtrip(plist!(["a", "b", "c", 1, 1.1, true]));
        roundtrip(plist!({
            "key1": "abc",
            "key2": 123,
            "key3": 123.456,
            "key4": false
        }));
        roundtrip(plist!({
            "nested": { "inner": [1, [2, { "deep": true }]] }
        }));
    }

    #[test]
    fn roundtrip_via_writer_and_reader() {
        let doc = Document::new(plist!({ "x": 1 }));
        let mut buf = Vec::new();
        to_writer(&mut buf, &doc).unwrap();
        let parsed = from_reader(buf.as_slice()).unwrap().unwrap();
        assert_eq!(parsed, doc);
        let parsed = from_slice(&buf).unwrap().unwrap();
        assert_eq!(parsed, doc);
    }
}
