//! The tri-state field wrapper.
//!
//! This module provides [`TriState`], which distinguishes three states that
//! `Option<T>` collapses into two:
//!
//! - [`TriState::Absent`]: the caller never mentioned the field
//! - [`TriState::Null`]: the caller mentioned the field and explicitly cleared it
//! - [`TriState::Value`]: the caller supplied a value
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use serde_tristate::TriState;
//!
//! let absent: TriState<i32> = TriState::absent();
//! let null: TriState<i32> = TriState::null();
//! let value = TriState::of(42);
//! let lifted: TriState<i32> = 42.into();
//!
//! assert_eq!(value, lifted);
//! ```
//!
//! ### Branching on State
//!
//! ```rust
//! use serde_tristate::TriState;
//!
//! fn describe(field: &TriState<String>) -> &str {
//!     match field {
//!         TriState::Absent => "leave unchanged",
//!         TriState::Null => "clear",
//!         TriState::Value(_) => "overwrite",
//!     }
//! }
//!
//! assert_eq!(describe(&TriState::Null), "clear");
//! ```
//!
//! ### Deserializing a Partial Update
//!
//! Missing keys only become [`TriState::Absent`] when the field carries
//! `#[serde(default)]`; the wrapper itself is only called when a value exists.
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_tristate::TriState;
//!
//! #[derive(Deserialize)]
//! struct Patch {
//!     #[serde(default)]
//!     nickname: TriState<String>,
//!     #[serde(default)]
//!     age: TriState<u32>,
//! }
//!
//! let patch: Patch = serde_json::from_str(r#"{"nickname": null}"#).unwrap();
//! assert!(patch.nickname.is_null());
//! assert!(patch.age.is_absent());
//! ```

use crate::json;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::value::RawValue;
use std::fmt;

/// A field that is absent, explicitly null, or holds a value.
///
/// Values are immutable: a state transition means constructing a new
/// `TriState`. Two instances are equal when both states match and, for
/// [`TriState::Value`], the values are equal.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::TriState;
///
/// let field = TriState::of("hello");
/// assert!(field.is_assigned());
/// assert!(field.has_value());
/// assert_eq!(field.value(), Some(&"hello"));
///
/// let cleared: TriState<&str> = TriState::null();
/// assert!(cleared.is_assigned());
/// assert!(!cleared.has_value());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TriState<T> {
    /// The field was not present in the input.
    Absent,
    /// The field was present as null.
    Null,
    /// The field was present with a value.
    Value(T),
}

impl<T> TriState<T> {
    /// The "never mentioned" state.
    #[inline]
    #[must_use]
    pub const fn absent() -> Self {
        TriState::Absent
    }

    /// The "explicitly cleared" state.
    #[inline]
    #[must_use]
    pub const fn null() -> Self {
        TriState::Null
    }

    /// Lifts a value into the assigned state.
    #[inline]
    #[must_use]
    pub const fn of(value: T) -> Self {
        TriState::Value(value)
    }

    /// Lifts an `Option`: `None` becomes [`TriState::Null`], never `Absent`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::TriState;
    ///
    /// assert_eq!(TriState::from_option(Some(1)), TriState::of(1));
    /// assert_eq!(TriState::<i32>::from_option(None), TriState::Null);
    /// ```
    #[inline]
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => TriState::Value(v),
            None => TriState::Null,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, TriState::Absent)
    }

    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, TriState::Null)
    }

    /// Returns `true` if the field was present in the input, null or not.
    #[inline]
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        !self.is_absent()
    }

    /// Returns `true` only for an assigned, non-null value.
    #[inline]
    #[must_use]
    pub const fn has_value(&self) -> bool {
        matches!(self, TriState::Value(_))
    }

    #[inline]
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        match self {
            TriState::Value(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn into_value(self) -> Option<T> {
        match self {
            TriState::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the value, or `default` when absent or null.
    #[inline]
    #[must_use]
    pub fn value_or(self, default: T) -> T {
        self.into_value().unwrap_or(default)
    }

    #[inline]
    pub const fn as_ref(&self) -> TriState<&T> {
        match self {
            TriState::Absent => TriState::Absent,
            TriState::Null => TriState::Null,
            TriState::Value(v) => TriState::Value(v),
        }
    }

    /// Maps the contained value, keeping `Absent` and `Null` as they are.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::TriState;
    ///
    /// assert_eq!(TriState::of(2).map(|n| n * 10), TriState::of(20));
    /// assert_eq!(TriState::<i32>::Null.map(|n| n * 10), TriState::Null);
    /// ```
    #[inline]
    pub fn map<U, F>(self, f: F) -> TriState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            TriState::Absent => TriState::Absent,
            TriState::Null => TriState::Null,
            TriState::Value(v) => TriState::Value(f(v)),
        }
    }

    /// Splits into the nested-`Option` encoding: outer `None` means absent.
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<Option<T>> {
        match self {
            TriState::Absent => None,
            TriState::Null => Some(None),
            TriState::Value(v) => Some(Some(v)),
        }
    }
}

/// Missing fields default to [`TriState::Absent`], whatever `T` is.
impl<T> Default for TriState<T> {
    fn default() -> Self {
        TriState::Absent
    }
}

impl<T> From<T> for TriState<T> {
    fn from(value: T) -> Self {
        TriState::Value(value)
    }
}

impl<T> From<TriState<T>> for Option<Option<T>> {
    fn from(value: TriState<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Display> fmt::Display for TriState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriState::Absent => f.write_str("absent"),
            TriState::Null => f.write_str("null"),
            TriState::Value(v) => v.fmt(f),
        }
    }
}

/// `Absent` and `Null` both serialize as the format's none.
///
/// The absent/null distinction does not survive the wire unless the field also
/// carries `#[serde(skip_serializing_if = "TriState::is_absent")]`.
impl<T: Serialize> Serialize for TriState<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            TriState::Absent | TriState::Null => serializer.serialize_none(),
            TriState::Value(value) => value.serialize(serializer),
        }
    }
}

/// Native null and strings matching an active null token become
/// [`TriState::Null`]; anything else is decoded into `T` from the field's own
/// JSON text.
///
/// The field is captured as a borrowed [`RawValue`], so the deserializer must
/// be `serde_json` reading from memory (`from_str` or `from_slice`). `T` may
/// borrow from the input. Containers that buffer their members first, such as
/// `#[serde(flatten)]` or untagged enums, cannot hold a `TriState`.
///
/// ```rust
/// use serde::Deserialize;
/// use serde_tristate::TriState;
///
/// #[derive(Deserialize)]
/// struct Lookup<'a> {
///     #[serde(borrow, default)]
///     name: TriState<&'a str>,
/// }
///
/// let lookup: Lookup = serde_json::from_str(r#"{"name": "ada"}"#).unwrap();
/// assert_eq!(lookup.name, TriState::of("ada"));
/// ```
impl<'de, T: Deserialize<'de>> Deserialize<'de> for TriState<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = <&'de RawValue>::deserialize(deserializer)?;
        json::lift(raw).map_err(D::Error::custom)
    }
}
