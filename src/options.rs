//! Configuration options for binding.
//!
//! This module provides types to customize how adapters read raw input:
//!
//! - [`BindOptions`]: Main configuration struct
//! - [`NullTokens`]: Case-insensitive strings recognized as an explicit null
//! - [`Delimiter`]: Separator used to split a single collection occurrence
//!
//! ## Examples
//!
//! ```rust
//! use serde_tristate::{BindOptions, Delimiter, NullTokens, QueryAdapter, QueryParams, TriState};
//!
//! let options = BindOptions::new()
//!     .with_null_tokens(NullTokens::new(["undefined", "none"]))
//!     .with_delimiter(Delimiter::Pipe);
//! let adapter = QueryAdapter::new(options);
//!
//! let params = QueryParams::parse("tags=a|b&owner=UNDEFINED");
//! assert_eq!(
//!     adapter.list::<String>(&params, "tags").unwrap(),
//!     TriState::of(vec!["a".to_string(), "b".to_string()])
//! );
//! assert_eq!(adapter.scalar::<String>(&params, "owner").unwrap(), TriState::Null);
//! ```

use indexmap::IndexSet;
use std::fmt;

/// Separator used to split a single query occurrence into collection elements.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::Delimiter;
///
/// assert_eq!(Delimiter::Comma.as_char(), ',');
/// assert_eq!(Delimiter::Pipe.as_char(), '|');
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Delimiter {
    #[default]
    Comma,
    Semicolon,
    Tab,
    Pipe,
}

impl Delimiter {
    /// Returns the character this delimiter splits on.
    #[must_use]
    pub const fn as_char(&self) -> char {
        match self {
            Delimiter::Comma => ',',
            Delimiter::Semicolon => ';',
            Delimiter::Tab => '\t',
            Delimiter::Pipe => '|',
        }
    }
}

/// A case-insensitive set of strings that mean "explicit null".
///
/// Tokens are only consulted where the encoding has no null of its own: a
/// query-string value, or a JSON *string* (a native JSON `null` is always null).
/// The default set is `{"null", "nil"}`.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::NullTokens;
///
/// let tokens = NullTokens::default();
/// assert!(tokens.contains("NULL"));
/// assert!(tokens.contains("Nil"));
/// assert!(!tokens.contains("none"));
///
/// let custom = NullTokens::new(["undefined", "none"]);
/// assert!(custom.contains("None"));
/// assert!(!custom.contains("null"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullTokens(IndexSet<String>);

pub(crate) const DEFAULT_NULL_TOKENS: [&str; 2] = ["null", "nil"];

impl Default for NullTokens {
    fn default() -> Self {
        NullTokens::new(DEFAULT_NULL_TOKENS)
    }
}

impl NullTokens {
    /// Creates a set holding exactly `tokens`, replacing the defaults.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        NullTokens(
            tokens
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
        )
    }

    /// Creates an empty set: no string is ever treated as null.
    #[must_use]
    pub fn none() -> Self {
        NullTokens(IndexSet::new())
    }

    /// Returns a copy of this set with `token` added.
    #[must_use]
    pub fn with(mut self, token: &str) -> Self {
        self.0.insert(token.to_lowercase());
        self
    }

    /// Returns `true` if `token` matches a configured null token, ignoring case.
    ///
    /// The token is compared as given; callers trim when their input calls for it.
    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        if token.is_ascii() {
            self.0.iter().any(|t| t.eq_ignore_ascii_case(token))
        } else {
            self.0.contains(&token.to_lowercase())
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterates the (lowercased) tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl fmt::Display for NullTokens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, token) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", token)?;
        }
        f.write_str("}")
    }
}

impl<S: AsRef<str>> FromIterator<S> for NullTokens {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        NullTokens::new(iter)
    }
}

/// Configuration shared by the query and JSON adapters.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::{BindOptions, Delimiter};
///
/// // Defaults: {"null", "nil"} and comma-separated collections
/// let options = BindOptions::new();
/// assert!(options.null_tokens.contains("nil"));
/// assert_eq!(options.delimiter, Delimiter::Comma);
///
/// // Add a token on top of the defaults
/// let options = BindOptions::new().with_null_token("~");
/// assert!(options.null_tokens.contains("~"));
/// assert!(options.null_tokens.contains("null"));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BindOptions {
    pub null_tokens: NullTokens,
    pub delimiter: Delimiter,
}

impl BindOptions {
    /// Creates default options (`{"null", "nil"}`, comma delimiter).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the null-token set.
    #[must_use]
    pub fn with_null_tokens(mut self, null_tokens: NullTokens) -> Self {
        self.null_tokens = null_tokens;
        self
    }

    /// Adds one token to the current null-token set.
    #[must_use]
    pub fn with_null_token(mut self, token: &str) -> Self {
        self.null_tokens = self.null_tokens.with(token);
        self
    }

    /// Sets the delimiter used to split a single collection occurrence.
    ///
    /// Only the query adapter splits; JSON arrays are always structural.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: Delimiter) -> Self {
        self.delimiter = delimiter;
        self
    }
}
