//! Failure-signal normalization.
//!
//! Collapses the three ways a failure can arrive — absent, an existing
//! structured error, or an arbitrary recovered panic payload — into two:
//! absent, or a uniform [`Error`] with a human-readable message.
//!
//! Uses `thiserror` for ergonomic error definition.

use std::any::Any;
use std::fmt;

use thiserror::Error;

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Uniform failure value produced by normalization.
#[derive(Debug, Error)]
pub enum Error {
    /// Failure rendered from a value with no error structure of its own.
    #[error("{0}")]
    Message(String),

    /// A structured error passed through normalization unchanged.
    #[error(transparent)]
    Wrapped(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Renders an arbitrary value into a message error using its default
    /// string rendering.
    #[must_use]
    pub fn message(value: impl fmt::Display) -> Self {
        Self::Message(value.to_string())
    }

    /// Wraps an existing structured error without altering it.
    #[must_use]
    pub fn wrap(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Wrapped(Box::new(source))
    }

    /// Normalizes a recovered panic payload.
    ///
    /// An [`Error`] payload passes through unchanged, as does a boxed
    /// structured error. String payloads keep their text. Any other
    /// payload has no universal rendering and becomes an opaque message.
    #[must_use]
    pub fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let payload = match payload.downcast::<Self>() {
            Ok(error) => return *error,
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<Box<dyn std::error::Error + Send + Sync>>() {
            Ok(source) => return Self::Wrapped(*source),
            Err(payload) => payload,
        };
        let payload = match payload.downcast::<String>() {
            Ok(text) => return Self::Message(*text),
            Err(payload) => payload,
        };
        match payload.downcast::<&'static str>() {
            Ok(text) => Self::Message((*text).to_string()),
            Err(_) => Self::Message("opaque failure payload".to_string()),
        }
    }
}

/// Normalizes an optional failure signal.
///
/// Absent in, absent out; a present signal is normalized via
/// [`Error::from_panic`].
#[must_use]
pub fn normalize(signal: Option<Box<dyn Any + Send>>) -> Option<Error> {
    signal.map(Error::from_panic)
}
