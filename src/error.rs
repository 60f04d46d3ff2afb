//! Error types for plist parsing and serialization.
//!
//! ## Error Categories
//!
//! - **Structural errors**: a dict value appears with no preceding key
//! - **Type errors**: `<integer>`/`<real>` content fails strict numeric parsing
//! - **Source errors**: the underlying markup stream is malformed; the
//!   collaborator's message is propagated unchanged
//! - **I/O errors**: stream reading/writing failures
//!
//! Absence of a plist root element is *not* an error: the read entry points
//! return `Ok(None)` for it.

use std::fmt;
use thiserror::Error;

/// Represents all possible errors produced while reading or writing a plist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error during reading or writing.
    #[error("IO error: {0}")]
    Io(String),

    /// The markup source is malformed. The message comes from the
    /// underlying XML reader and is passed through unchanged.
    #[error("malformed markup: {0}")]
    Source(String),

    /// A dict value element appeared without a preceding `<key>` element.
    #[error("found dict value <{0}> without a preceding key")]
    ValueWithoutKey(String),

    /// `<integer>` content that is not a valid signed decimal integer.
    #[error("invalid integer literal {0:?}")]
    InvalidInteger(String),

    /// `<real>` content that is not a valid floating-point number.
    #[error("invalid real literal {0:?}")]
    InvalidReal(String),

    /// An element that is not part of the plist vocabulary appeared where
    /// a value was expected.
    #[error("unexpected element <{0}>")]
    UnexpectedElement(String),

    /// The input ended while an element was still open.
    #[error("unexpected end of input inside <{0}>")]
    UnexpectedEof(String),

    /// Generic message.
    #[error("{0}")]
    Message(String),
}

impl Error {
    /// Wraps a failure reported by the markup source.
    pub(crate) fn source(err: impl fmt::Display) -> Self {
        Error::Source(err.to_string())
    }

    /// Wraps a stream read/write failure.
    pub(crate) fn io(err: impl fmt::Display) -> Self {
        Error::Io(err.to_string())
    }

    /// Creates an error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Message(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
