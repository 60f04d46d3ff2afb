//! XML Property List Format Reference
//!
//! This module documents the subset of the XML property-list format
//! implemented by this library and defines its canonical tag vocabulary.
//!
//! # Overview
//!
//! A property list ("plist") is a hierarchical, typed document. The XML
//! representation wraps a single root value in a `<plist>` element carrying
//! a `version` attribute:
//!
//! ```text
//! <?xml version="1.0"?>
//! <plist version="1.0">
//!   <dict>
//!     <key>name</key>
//!     <string>Alice</string>
//!     <key>logins</key>
//!     <integer>42</integer>
//!   </dict>
//! </plist>
//! ```
//!
//! # Value elements
//!
//! | Element | Value | Notes |
//! |---------|-------|-------|
//! | `<string>` | UTF-8 text | content taken verbatim |
//! | `<integer>` | signed 64-bit integer | strict decimal parse |
//! | `<real>` | double-precision float | strict parse |
//! | `<true/>` / `<false/>` | boolean | two zero-content tags, no text form |
//! | `<array>` | ordered sequence | heterogeneous, may be empty |
//! | `<dict>` | string-keyed map | alternating `<key>`/value children |
//! | `<data>` | opaque text | base-64 payload, not decoded |
//! | `<date>` | opaque text | ISO 8601 payload, not decoded |
//!
//! # Dict pairing protocol
//!
//! Inside `<dict>`, every value element must be preceded by a `<key>`
//! element. A value with no pending key is a fatal structural error. Two
//! consecutive `<key>` elements are accepted: the later key replaces the
//! pending one and the earlier key produces no entry. Duplicate keys keep
//! the first insertion position; the last value wins.
//!
//! # Ordering
//!
//! Array order is significant and preserved. Dict entries serialize in
//! insertion order (the backing map is an [`IndexMap`], so output is
//! deterministic).
//!
//! # Unsupported payloads
//!
//! `<data>` and `<date>` parse into opaque textual values but are never
//! re-emitted: the serializers skip them wherever they occur, and a dict
//! pair whose value is opaque is suppressed entirely, key included.
//!
//! [`IndexMap`]: indexmap::IndexMap

/// Document root tag.
pub const PLIST: &str = "plist";

/// Dict key tag.
pub const KEY: &str = "key";

/// String value tag.
pub const STRING: &str = "string";

/// Integer value tag.
pub const INTEGER: &str = "integer";

/// Real (floating-point) value tag.
pub const REAL: &str = "real";

/// Base-64 data tag. The payload is carried as opaque text.
pub const DATA: &str = "data";

/// Date tag. The payload is carried as opaque text.
pub const DATE: &str = "date";

/// Zero-content boolean tag for `true`.
pub const TRUE: &str = "true";

/// Zero-content boolean tag for `false`.
pub const FALSE: &str = "false";

/// Array container tag.
pub const ARRAY: &str = "array";

/// Dict container tag.
pub const DICT: &str = "dict";

/// Version attribute on the document root tag.
pub const VERSION: &str = "version";

/// Canonical format version written by [`Document::new`].
///
/// [`Document::new`]: crate::Document::new
pub const PLIST_VERSION: &str = "1.0";
