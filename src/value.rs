//! The plist value model.
//!
//! This module provides [`Value`], the tagged union representing any plist
//! value, and [`Document`], the top-level wrapper pairing a format version
//! with a single root value.
//!
//! ## Core Types
//!
//! - [`Value`]: string, integer, real, boolean, array, dict, plus the two
//!   opaque payload variants (`Data`, `Date`)
//! - [`Document`]: `{ version, root }`, the unit read and written by the
//!   public entry points
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use plist_xml::Value;
//!
//! let text = Value::from("hello");
//! let count = Value::from(42);
//! let ratio = Value::from(0.5);
//! let flag = Value::from(true);
//!
//! // Or with the plist! macro
//! use plist_xml::plist;
//! let settings = plist!({
//!     "name": "Alice",
//!     "logins": 42
//! });
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use plist_xml::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_integer());
//! assert_eq!(value.as_i64(), Some(42));
//! assert_eq!(i64::try_from(value).unwrap(), 42);
//! ```

use crate::map::Dict;
use crate::spec;
use serde::de::{self, Visitor};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed plist value.
///
/// Exactly one variant is active per instance. There is no null variant:
/// absent values are expressed with `Option<Value>` at the document level,
/// and element values inside arrays and dicts are always present.
///
/// `Data` and `Date` hold their markup content verbatim; the payloads are
/// not decoded and the serializers never emit them (see [`crate::spec`]).
///
/// # Examples
///
/// ```rust
/// use plist_xml::Value;
///
/// let num = Value::Integer(42);
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_integer());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    String(String),
    Integer(i64),
    Real(f64),
    Boolean(bool),
    Array(Vec<Value>),
    Dict(Dict),
    /// Base-64 payload carried as opaque text.
    Data(String),
    /// Date payload carried as opaque text.
    Date(String),
}

impl Value {
    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is an integer.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Value::Integer(_))
    }

    /// Returns `true` if the value is a real.
    #[inline]
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Value::Real(_))
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_boolean(&self) -> bool {
        matches!(self, Value::Boolean(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    /// Returns `true` if the value is a dict.
    #[inline]
    #[must_use]
    pub const fn is_dict(&self) -> bool {
        matches!(self, Value::Dict(_))
    }

    /// Returns `true` if the value is an opaque data payload.
    #[inline]
    #[must_use]
    pub const fn is_data(&self) -> bool {
        matches!(self, Value::Data(_))
    }

    /// Returns `true` if the value is an opaque date payload.
    #[inline]
    #[must_use]
    pub const fn is_date(&self) -> bool {
        matches!(self, Value::Date(_))
    }

    /// If the value is a string, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// If the value is a real or an integer, returns it as `f64`.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(r) => Some(*r),
            Value::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// If the value is a dict, returns a reference to it.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    /// If the value is an opaque data payload, returns its verbatim text.
    /// Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_data(&self) -> Option<&str> {
        match self {
            Value::Data(text) => Some(text),
            _ => None,
        }
    }

    /// Returns `true` if the serializers have a markup tag for this value.
    ///
    /// Opaque payloads (`Data`, `Date`) parse but are never re-emitted.
    #[inline]
    #[must_use]
    pub(crate) const fn is_emittable(&self) -> bool {
        !matches!(self, Value::Data(_) | Value::Date(_))
    }

    /// The element tag this value's variant corresponds to, for messages.
    pub(crate) const fn tag_name(&self) -> &'static str {
        match self {
            Value::String(_) => spec::STRING,
            Value::Integer(_) => spec::INTEGER,
            Value::Real(_) => spec::REAL,
            Value::Boolean(true) => spec::TRUE,
            Value::Boolean(false) => spec::FALSE,
            Value::Array(_) => spec::ARRAY,
            Value::Dict(_) => spec::DICT,
            Value::Data(_) => spec::DATA,
            Value::Date(_) => spec::DATE,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Real(r) => write!(f, "{}", r),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
            Value::Dict(dict) => {
                write!(f, "{{")?;
                for (i, (key, value)) in dict.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}={}", key, value)?;
                }
                write!(f, "}}")
            }
            Value::Data(text) | Value::Date(text) => write!(f, "{}", text),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Integer(value)
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Integer(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Real(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

impl From<Dict> for Value {
    fn from(value: Dict) -> Self {
        Value::Dict(value)
    }
}

impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Integer(i) => Ok(i),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found <{}>",
                value.tag_name()
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Real(r) => Ok(r),
            Value::Integer(i) => Ok(i as f64),
            _ => Err(crate::Error::custom(format!(
                "expected real, found <{}>",
                value.tag_name()
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Boolean(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected boolean, found <{}>",
                value.tag_name()
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found <{}>",
                value.tag_name()
            ))),
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::String(s) => serializer.serialize_str(s),
            Value::Integer(i) => serializer.serialize_i64(*i),
            Value::Real(r) => serializer.serialize_f64(*r),
            Value::Boolean(b) => serializer.serialize_bool(*b),
            Value::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Dict(dict) => {
                let mut map = serializer.serialize_map(Some(dict.len()))?;
                for (key, value) in dict.iter() {
                    map.serialize_entry(key, value)?;
                }
                map.end()
            }
            Value::Data(text) | Value::Date(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a plist value")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Value::Integer)
                    .map_err(|_| E::custom(format!("integer {} out of range", value)))
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Real(value))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                Deserialize::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Value::Array(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut dict = Dict::new();
                while let Some((key, value)) = map.next_entry()? {
                    dict.insert(key, value);
                }
                Ok(Value::Dict(dict))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

/// A plist document: an optional format version and at most one root value.
///
/// Parsing may produce a document whose root is `None` (the `<plist>`
/// element had no recognized child). Callers must treat that as "no value
/// present", not as an error.
///
/// # Examples
///
/// ```rust
/// use plist_xml::{Document, Value};
///
/// let doc = Document::new(Value::from("hello"));
/// assert_eq!(doc.version(), Some("1.0"));
/// assert_eq!(doc.root().and_then(Value::as_str), Some("hello"));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Document {
    version: Option<String>,
    root: Option<Value>,
}

impl Document {
    /// Creates a document with the given root value and the canonical
    /// format version.
    #[must_use]
    pub fn new(root: Value) -> Self {
        Document {
            version: Some(spec::PLIST_VERSION.to_string()),
            root: Some(root),
        }
    }

    /// Creates an empty document shell: version unset, root unset.
    #[must_use]
    pub fn empty() -> Self {
        Document::default()
    }

    /// The format version tag, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Sets the format version tag.
    pub fn set_version(&mut self, version: impl Into<String>) {
        self.version = Some(version.into());
    }

    /// The root value, if present.
    #[must_use]
    pub fn root(&self) -> Option<&Value> {
        self.root.as_ref()
    }

    /// Assigns the root value. A later call replaces the earlier root
    /// silently.
    pub fn set_root(&mut self, root: Value) {
        self.root = Some(root);
    }

    /// Consumes the document, returning the root value if present.
    #[must_use]
    pub fn into_root(self) -> Option<Value> {
        self.root
    }
}

impl From<Value> for Document {
    fn from(root: Value) -> Self {
        Document::new(root)
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plist:version={}", self.version.as_deref().unwrap_or(""))?;
        match &self.root {
            Some(root) => write!(f, ",{}={}", root.tag_name(), root),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tryfrom_i64() {
        assert_eq!(i64::try_from(Value::Integer(42)).unwrap(), 42);
        assert!(i64::try_from(Value::String("42".to_string())).is_err());
    }

    #[test]
    fn tryfrom_f64() {
        assert_eq!(f64::try_from(Value::Real(3.5)).unwrap(), 3.5);
        assert_eq!(f64::try_from(Value::Integer(42)).unwrap(), 42.0);
        assert!(f64::try_from(Value::Boolean(true)).is_err());
    }

    #[test]
    fn tryfrom_bool() {
        assert!(bool::try_from(Value::Boolean(true)).unwrap());
        assert!(bool::try_from(Value::Integer(1)).is_err());
    }

    #[test]
    fn tryfrom_string() {
        assert_eq!(
            String::try_from(Value::String("hello".to_string())).unwrap(),
            "hello"
        );
        assert!(String::try_from(Value::Integer(42)).is_err());
    }

    #[test]
    fn from_primitives() {
        assert_eq!(Value::from(true), Value::Boolean(true));
        assert_eq!(Value::from(42i32), Value::Integer(42));
        assert_eq!(Value::from(42i64), Value::Integer(42));
        assert_eq!(Value::from(3.5f64), Value::Real(3.5));
        assert_eq!(Value::from("abc"), Value::String("abc".to_string()));
    }

    #[test]
    fn from_collections() {
        let items = vec![Value::from(1), Value::from(2)];
        assert_eq!(Value::from(items.clone()), Value::Array(items));

        let mut dict = Dict::new();
        dict.insert("key".to_string(), Value::from(42));
        assert_eq!(Value::from(dict.clone()), Value::Dict(dict));
    }

    #[test]
    fn document_version_defaults() {
        let doc = Document::new(Value::from(1234));
        assert_eq!(doc.version(), Some("1.0"));

        let doc = Document::empty();
        assert_eq!(doc.version(), None);
        assert_eq!(doc.root(), None);
    }

    #[test]
    fn document_last_root_wins() {
        let mut doc = Document::empty();
        doc.set_root(Value::from("first"));
        doc.set_root(Value::from("second"));
        assert_eq!(doc.root().and_then(Value::as_str), Some("second"));
    }

    #[test]
    fn display_document() {
        let doc = Document::new(Value::from("abc"));
        assert_eq!(doc.to_string(), "plist:version=1.0,string=abc");

        let doc = Document::new(Value::Boolean(true));
        assert_eq!(doc.to_string(), "plist:version=1.0,true=true");
    }

    #[test]
    fn display_nested() {
        let mut dict = Dict::new();
        dict.insert("a".to_string(), Value::from(1));
        dict.insert("b".to_string(), Value::Array(vec![Value::from(2)]));
        assert_eq!(Value::Dict(dict).to_string(), "{a=1,b=[2]}");
    }
}
