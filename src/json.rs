//! JSON binding for tri-state fields.
//!
//! [`TriState`] implements `Serialize` and `Deserialize` directly, so it works
//! inside any `#[derive(Deserialize)]` struct. Reading rules for one field:
//!
//! | JSON | Result |
//! |------|--------|
//! | key omitted (field has `#[serde(default)]`) | `Absent` |
//! | `null` | `Null` |
//! | `"null"`, `"NIL"` (an active null token) | `Null` |
//! | anything else | `Value(decoded)` |
//!
//! A non-null field is handed to `T` as the original JSON text, so `T` sees
//! exactly what it would see without the wrapper: full-width integers, member
//! order and borrowed strings all survive. This needs the document in memory;
//! use `serde_json::from_str` / `from_slice` (or this crate's equivalents)
//! rather than `from_reader`, and [`JsonAdapter::from_value`] for an
//! already-parsed [`Value`].
//!
//! Writing emits `null` for both `Absent` and `Null`.
//!
//! The default null tokens are `{"null", "nil"}`. A [`JsonAdapter`] swaps in
//! its own set for the duration of each call it makes, on the calling thread
//! only, so concurrent adapters with different sets never see each other's
//! tokens.
//!
//! ## Examples
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_tristate::{JsonAdapter, NullTokens, TriState};
//!
//! #[derive(Deserialize)]
//! struct Patch {
//!     #[serde(default)]
//!     title: TriState<String>,
//! }
//!
//! let adapter = JsonAdapter::with_null_tokens(NullTokens::new(["undefined"]));
//!
//! let patch: Patch = adapter.from_str(r#"{"title": "undefined"}"#).unwrap();
//! assert_eq!(patch.title, TriState::Null);
//!
//! // "null" is ordinary text for this adapter
//! let patch: Patch = adapter.from_str(r#"{"title": "null"}"#).unwrap();
//! assert_eq!(patch.title, TriState::of("null".to_string()));
//! ```

use crate::options::{BindOptions, NullTokens, DEFAULT_NULL_TOKENS};
use crate::{Result, TriState};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;
use serde_json::Value;
use std::borrow::Cow;
use std::cell::RefCell;

thread_local! {
    static ACTIVE_TOKENS: RefCell<Option<NullTokens>> = const { RefCell::new(None) };
}

fn is_active_null_token(s: &str) -> bool {
    ACTIVE_TOKENS.with(|active| match &*active.borrow() {
        Some(tokens) => tokens.contains(s),
        None => DEFAULT_NULL_TOKENS
            .iter()
            .any(|token| token.eq_ignore_ascii_case(s)),
    })
}

/// Installs a null-token set on this thread and restores the previous one on drop.
struct TokenScope {
    previous: Option<NullTokens>,
}

impl TokenScope {
    fn enter(tokens: &NullTokens) -> Self {
        let previous = ACTIVE_TOKENS.with(|active| active.replace(Some(tokens.clone())));
        TokenScope { previous }
    }
}

impl Drop for TokenScope {
    fn drop(&mut self) {
        let previous = self.previous.take();
        ACTIVE_TOKENS.with(|active| *active.borrow_mut() = previous);
    }
}

/// The contents of a JSON string literal, unescaped only when needed.
fn string_contents(text: &str) -> Option<Cow<'_, str>> {
    let inner = text.strip_prefix('"')?.strip_suffix('"')?;
    if inner.contains('\\') {
        serde_json::from_str::<String>(text).ok().map(Cow::Owned)
    } else {
        Some(Cow::Borrowed(inner))
    }
}

/// Turns the raw JSON text of one field into a tri-state field.
pub(crate) fn lift<'de, T>(raw: &'de RawValue) -> std::result::Result<TriState<T>, serde_json::Error>
where
    T: Deserialize<'de>,
{
    let text = raw.get();
    if text == "null" {
        return Ok(TriState::Null);
    }
    if let Some(s) = string_contents(text) {
        if is_active_null_token(&s) {
            tracing::trace!(token = %s, "null token in JSON string");
            return Ok(TriState::Null);
        }
    }
    serde_json::from_str::<T>(text).map(TriState::Value)
}

/// Reads and writes JSON with a configured null-token set.
///
/// Adapters are immutable and cheap to clone; share one across threads freely.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::{JsonAdapter, TriState};
/// use serde_json::json;
///
/// let adapter = JsonAdapter::default();
///
/// let field: TriState<u32> = adapter.read(json!("nil")).unwrap();
/// assert_eq!(field, TriState::Null);
///
/// let field: TriState<u32> = adapter.read(json!(7)).unwrap();
/// assert_eq!(field, TriState::of(7));
///
/// assert_eq!(adapter.write(&TriState::<u32>::Absent).unwrap(), json!(null));
/// ```
#[derive(Clone, Debug, Default)]
pub struct JsonAdapter {
    null_tokens: NullTokens,
}

impl JsonAdapter {
    /// Creates an adapter from shared options; only the null tokens apply to JSON.
    #[must_use]
    pub fn new(options: BindOptions) -> Self {
        JsonAdapter {
            null_tokens: options.null_tokens,
        }
    }

    #[must_use]
    pub fn with_null_tokens(null_tokens: NullTokens) -> Self {
        JsonAdapter { null_tokens }
    }

    #[must_use]
    pub fn null_tokens(&self) -> &NullTokens {
        &self.null_tokens
    }

    fn scoped<R>(&self, f: impl FnOnce() -> R) -> R {
        let _scope = TokenScope::enter(&self.null_tokens);
        f()
    }

    /// Deserializes a whole document; nested tri-state fields use this adapter's tokens.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the text is not valid JSON
    /// or does not decode into `T`.
    pub fn from_str<'a, T>(&self, s: &'a str) -> Result<T>
    where
        T: Deserialize<'a>,
    {
        self.scoped(|| serde_json::from_str::<T>(s)).map_err(Into::into)
    }

    /// Deserializes a whole document from UTF-8 bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) on invalid input.
    pub fn from_slice<'a, T>(&self, v: &'a [u8]) -> Result<T>
    where
        T: Deserialize<'a>,
    {
        self.scoped(|| serde_json::from_slice::<T>(v)).map_err(Into::into)
    }

    /// Deserializes an already-parsed JSON value.
    ///
    /// The value is rendered back to JSON text first, since tri-state fields
    /// read the raw text of each member.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if the value does not decode into `T`.
    pub fn from_value<T>(&self, value: Value) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let text = value.to_string();
        self.scoped(|| serde_json::from_str::<T>(&text))
            .map_err(Into::into)
    }

    /// Reads a single field token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if a non-null token does not decode into `T`.
    pub fn read<T>(&self, token: Value) -> Result<TriState<T>>
    where
        T: DeserializeOwned,
    {
        let text = token.to_string();
        self.scoped(|| serde_json::from_str::<TriState<T>>(&text))
            .map_err(Into::into)
    }

    /// Reads a single field from a `serde_json` deserializer over in-memory
    /// input, using this adapter's tokens.
    ///
    /// # Errors
    ///
    /// Propagates the deserializer's own error.
    pub fn read_from<'de, T, D>(&self, deserializer: D) -> std::result::Result<TriState<T>, D::Error>
    where
        T: Deserialize<'de>,
        D: Deserializer<'de>,
    {
        self.scoped(|| TriState::deserialize(deserializer))
    }

    /// Writes a single field: `Absent` and `Null` both become JSON `null`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`](crate::Error::Json) if `T` fails to serialize.
    pub fn write<T>(&self, field: &TriState<T>) -> Result<Value>
    where
        T: Serialize,
    {
        serde_json::to_value(field).map_err(Into::into)
    }
}
