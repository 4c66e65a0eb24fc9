//! # serde_tristate
//!
//! A field wrapper that tells "absent", "explicitly null" and "has a value"
//! apart, with adapters that bind it from query strings and JSON bodies.
//!
//! ## Why?
//!
//! `Option<T>` has two states. A partial update needs three: a client that
//! omits `nickname` wants it left alone, a client that sends `nickname: null`
//! wants it cleared. [`TriState`] keeps those apart all the way from the
//! request to your handler.
//!
//! ## Key Features
//!
//! - **Three explicit states**: [`TriState::Absent`], [`TriState::Null`], [`TriState::Value`]
//! - **Query binding**: scalars and collections, comma-separated or repeated parameters
//! - **JSON binding**: plain `#[derive(Deserialize)]` support through serde
//! - **Configurable null tokens**: `null` / `nil` by default, replaceable per adapter
//! - **No Unsafe Code**: Written entirely in safe Rust
//!
//! ## Quick Start
//!
//! ```toml
//! [dependencies]
//! serde_tristate = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### JSON Bodies
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_tristate::{from_str, TriState};
//!
//! #[derive(Deserialize)]
//! struct UpdateUser {
//!     #[serde(default)]
//!     nickname: TriState<String>,
//!     #[serde(default)]
//!     age: TriState<u32>,
//!     #[serde(default)]
//!     bio: TriState<String>,
//! }
//!
//! let update: UpdateUser = from_str(r#"{"nickname": null, "age": 42}"#).unwrap();
//!
//! assert_eq!(update.nickname, TriState::Null);
//! assert_eq!(update.age, TriState::of(42));
//! assert_eq!(update.bio, TriState::Absent);
//! ```
//!
//! ### Query Strings
//!
//! ```rust
//! use serde_tristate::{QueryAdapter, QueryParams, TriState};
//!
//! let params = QueryParams::parse("ids=1,2&ids=3&cursor=nil");
//! let adapter = QueryAdapter::default();
//!
//! assert_eq!(adapter.list::<u64>(&params, "ids").unwrap(), TriState::of(vec![1, 2, 3]));
//! assert_eq!(adapter.scalar::<String>(&params, "cursor").unwrap(), TriState::Null);
//! assert_eq!(adapter.scalar::<u32>(&params, "limit").unwrap(), TriState::Absent);
//! ```
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - Bad input is reported as an error naming the field, never a panic
//! - Adapters are immutable and can be shared between threads
//!
//! See [`conventions`] for the complete binding rules.

pub mod binder;
pub mod conventions;
pub mod error;
pub mod json;
pub mod macros;
pub mod options;
pub mod query;
pub mod scalar;
pub mod tri_state;

pub use binder::{QueryAdapter, QueryBinder};
pub use error::{BindErrors, Error, FieldError, Result};
pub use json::JsonAdapter;
pub use options::{BindOptions, Delimiter, NullTokens};
pub use query::QueryParams;
pub use scalar::{parse_date, parse_date_time, parse_date_time_with_offset, FromToken};
pub use tri_state::TriState;

use serde::{Deserialize, Serialize};

/// Deserialize an instance of type `T` from JSON text, using the default null tokens.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_tristate::{from_str, TriState};
///
/// #[derive(Deserialize)]
/// struct Patch {
///     #[serde(default)]
///     title: TriState<String>,
/// }
///
/// let patch: Patch = from_str(r#"{"title": "NIL"}"#).unwrap();
/// assert!(patch.title.is_null());
/// ```
///
/// # Errors
///
/// Returns [`Error::Json`] if the input is not valid JSON or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<'a, T>(s: &'a str) -> Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_str(s).map_err(Into::into)
}

/// Deserialize an instance of type `T` from JSON bytes.
///
/// # Errors
///
/// Returns [`Error::Json`] if the bytes are not valid JSON or cannot be
/// deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<'a, T>(v: &'a [u8]) -> Result<T>
where
    T: Deserialize<'a>,
{
    serde_json::from_slice(v).map_err(Into::into)
}

/// Serialize any `T: Serialize` to a JSON string.
///
/// Tri-state fields that are `Absent` are written as `null` unless the field
/// is skipped with `skip_serializing_if = "TriState::is_absent"`.
///
/// # Examples
///
/// ```rust
/// use serde::Serialize;
/// use serde_tristate::{to_string, TriState};
///
/// #[derive(Serialize)]
/// struct Patch {
///     a: TriState<i32>,
///     b: TriState<i32>,
///     c: TriState<i32>,
/// }
///
/// let json = to_string(&Patch { a: TriState::Absent, b: TriState::Null, c: TriState::of(1) }).unwrap();
/// assert_eq!(json, r#"{"a":null,"b":null,"c":1}"#);
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(Into::into)
}

/// Convert any `T: Serialize` to a `serde_json::Value`.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<serde_json::Value>
where
    T: ?Sized + Serialize,
{
    serde_json::to_value(value).map_err(Into::into)
}
