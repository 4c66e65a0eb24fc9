//! Error types for tri-state binding.
//!
//! Binding never panics on bad input. Every failure is reported as an [`Error`]
//! and, when it happens while binding a named field, wrapped in a [`FieldError`]
//! that carries the field name.
//!
//! ## Error Categories
//!
//! - **Format Errors**: A token could not be converted to the target scalar type
//! - **Required Value Errors**: A null token showed up where the target cannot hold null
//! - **JSON Errors**: The host JSON engine rejected the document
//!
//! ## Examples
//!
//! ```rust
//! use serde_tristate::{QueryAdapter, QueryParams};
//!
//! let params = QueryParams::parse("limit=lots");
//! let err = QueryAdapter::default()
//!     .scalar::<u32>(&params, "limit")
//!     .unwrap_err();
//!
//! assert_eq!(err.field, "limit");
//! assert!(err.to_string().contains("lots"));
//! ```

use std::fmt;
use thiserror::Error;

/// Represents all possible errors that can occur while binding a tri-state value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A token could not be converted to the target scalar kind
    #[error("cannot parse {token:?} as {kind}: {reason}")]
    Format {
        kind: &'static str,
        token: String,
        reason: String,
    },

    /// A null token was found where the target type cannot represent null
    #[error("a value is required for {kind}, found null token {token:?}")]
    RequiredValue { kind: &'static str, token: String },

    /// The host JSON engine rejected the input
    #[error("JSON error: {0}")]
    Json(String),
}

impl Error {
    /// Creates a format error for a token that does not parse as `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::Error;
    ///
    /// let err = Error::format("boolean", "maybe", "expected true, false, 1 or 0");
    /// assert!(err.to_string().contains("maybe"));
    /// ```
    pub fn format<R: fmt::Display>(kind: &'static str, token: &str, reason: R) -> Self {
        Error::Format {
            kind,
            token: token.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a required-value error for a null token bound to a non-nullable slot.
    pub fn required_value(kind: &'static str, token: &str) -> Self {
        Error::RequiredValue {
            kind,
            token: token.to_string(),
        }
    }

    /// Returns `true` for the errors raised while converting a token.
    ///
    /// A null token inside a non-nullable collection is reported as
    /// [`Error::RequiredValue`] rather than [`Error::Format`] so callers can
    /// tell the two apart, but both are conversion failures of the token.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::Error;
    ///
    /// assert!(Error::required_value("integer", "null").is_format());
    /// assert!(Error::format("integer", "x", "invalid digit").is_format());
    /// ```
    #[must_use]
    pub fn is_format(&self) -> bool {
        matches!(self, Error::Format { .. } | Error::RequiredValue { .. })
    }

    /// Attaches a field name, producing the error reported to binding callers.
    #[must_use]
    pub fn at_field(self, field: &str) -> FieldError {
        FieldError {
            field: field.to_string(),
            error: self,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err.to_string())
    }
}

/// A binding failure associated with the field that produced it.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("field `{field}`: {error}")]
pub struct FieldError {
    pub field: String,
    #[source]
    pub error: Error,
}

/// Every field that failed during one binding pass, in the order attempted.
///
/// Produced by [`QueryBinder::finish`](crate::QueryBinder::finish). A failing
/// field never stops its siblings from binding, so this can hold several entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BindErrors(Vec<FieldError>);

impl BindErrors {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, error: FieldError) {
        self.0.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the first error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.0.iter().find(|e| e.field == field)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FieldError> {
        self.0.iter()
    }
}

impl fmt::Display for BindErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} field(s) failed to bind", self.0.len())?;
        for err in &self.0 {
            write!(f, "\n  {}", err)?;
        }
        Ok(())
    }
}

impl std::error::Error for BindErrors {}

impl IntoIterator for BindErrors {
    type Item = FieldError;
    type IntoIter = std::vec::IntoIter<FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a BindErrors {
    type Item = &'a FieldError;
    type IntoIter = std::slice::Iter<'a, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

pub type Result<T> = std::result::Result<T, Error>;
