//! Query-string binding.
//!
//! [`QueryAdapter`] turns the raw occurrences of one query parameter into a
//! [`TriState`]. Each target shape has its own method:
//!
//! | Input | [`scalar`](QueryAdapter::scalar) | [`collection`](QueryAdapter::collection) |
//! |-------|--------|------------|
//! | parameter absent | `Absent` | `Absent` |
//! | `p=` | `Absent` | `Value(empty)` |
//! | `p=null`, `p=NIL` | `Null` | `Null` |
//! | `p=42` | `Value(42)` | `Value([42])` |
//! | `p=1,2,3` or `p=1&p=2&p=3` | first occurrence only | `Value([1, 2, 3])` |
//! | unparsable token | `Err(FieldError)` | `Err(FieldError)` |
//!
//! [`QueryBinder`] wraps the same methods for binding many fields at once: a
//! failing field yields `Absent`, its error is recorded, and the remaining
//! fields still bind.
//!
//! ## Examples
//!
//! ```rust
//! use serde_tristate::{QueryAdapter, QueryParams, TriState};
//!
//! let adapter = QueryAdapter::default();
//! let params = QueryParams::parse("ids=1,2&ids=3&owner=null&page=");
//!
//! assert_eq!(adapter.list::<u32>(&params, "ids").unwrap(), TriState::of(vec![1, 2, 3]));
//! assert_eq!(adapter.scalar::<String>(&params, "owner").unwrap(), TriState::Null);
//! assert_eq!(adapter.scalar::<u32>(&params, "page").unwrap(), TriState::Absent);
//! assert_eq!(adapter.scalar::<u32>(&params, "limit").unwrap(), TriState::Absent);
//! ```

use crate::error::{BindErrors, FieldError};
use crate::{BindOptions, Error, FromToken, QueryParams, Result, TriState};

type FieldResult<T> = std::result::Result<T, FieldError>;

/// Binds query parameters into tri-state values.
///
/// The adapter only holds immutable options, so a single instance can be
/// shared across threads and requests.
#[derive(Clone, Debug, Default)]
pub struct QueryAdapter {
    options: BindOptions,
}

impl QueryAdapter {
    #[must_use]
    pub fn new(options: BindOptions) -> Self {
        QueryAdapter { options }
    }

    #[must_use]
    pub fn options(&self) -> &BindOptions {
        &self.options
    }

    /// Starts a multi-field binding pass that collects errors instead of stopping.
    #[must_use]
    pub fn binder<'a>(&'a self, params: &'a QueryParams) -> QueryBinder<'a> {
        QueryBinder {
            adapter: self,
            params,
            errors: BindErrors::new(),
        }
    }

    fn is_null_token(&self, token: &str) -> bool {
        self.options.null_tokens.contains(token)
    }

    /// Binds a single scalar. Only the first occurrence of `name` is read.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] naming `name` when the token does not parse as `T`.
    pub fn scalar<T: FromToken>(&self, params: &QueryParams, name: &str) -> FieldResult<TriState<T>> {
        let token = match params.get(name) {
            Some(token) => token,
            None => return Ok(TriState::Absent),
        };
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Ok(TriState::Absent);
        }
        if self.is_null_token(trimmed) {
            tracing::trace!(field = name, token, "null token");
            return Ok(TriState::Null);
        }
        T::from_token(token)
            .map(TriState::Value)
            .map_err(|e| e.at_field(name))
    }

    /// Binds every occurrence of `name` into any collection of non-null elements.
    ///
    /// `C` is materialized through `FromIterator`, so `Vec`, `VecDeque`,
    /// `Box<[E]>`, `BTreeSet` and user collections all work.
    ///
    /// An element equal to a null token fails the field like any other
    /// unconvertible element, but is reported as [`Error::RequiredValue`]
    /// instead of [`Error::Format`] so the cause stays visible;
    /// [`Error::is_format`] is `true` for both. Use
    /// [`nullable_collection`](Self::nullable_collection) to accept null elements.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for the first element that fails; no partial
    /// collection is ever produced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::{QueryAdapter, QueryParams, TriState};
    /// use std::collections::BTreeSet;
    ///
    /// let params = QueryParams::parse("tags=b,a&tags=b");
    /// let tags = QueryAdapter::default()
    ///     .collection::<BTreeSet<String>, String>(&params, "tags")
    ///     .unwrap();
    ///
    /// let expected: BTreeSet<String> = ["a", "b"].iter().map(|s| s.to_string()).collect();
    /// assert_eq!(tags, TriState::of(expected));
    /// ```
    pub fn collection<C, E>(&self, params: &QueryParams, name: &str) -> FieldResult<TriState<C>>
    where
        C: FromIterator<E>,
        E: FromToken,
    {
        self.bind_collection(params, name, |token| {
            if self.is_null_token(token) {
                Err(Error::required_value(E::KIND, token))
            } else {
                E::from_token(token)
            }
        })
    }

    /// Shorthand for [`collection`](Self::collection) into a `Vec`.
    ///
    /// # Errors
    ///
    /// Same as [`collection`](Self::collection).
    pub fn list<E: FromToken>(&self, params: &QueryParams, name: &str) -> FieldResult<TriState<Vec<E>>> {
        self.collection(params, name)
    }

    /// Binds a collection whose elements may individually be null.
    ///
    /// # Errors
    ///
    /// Returns a [`FieldError`] for the first non-null element that fails to parse.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use serde_tristate::{QueryAdapter, QueryParams, TriState};
    ///
    /// let params = QueryParams::parse("scores=10,nil,30");
    /// let scores = QueryAdapter::default()
    ///     .nullable_collection::<Vec<Option<i32>>, i32>(&params, "scores")
    ///     .unwrap();
    ///
    /// assert_eq!(scores, TriState::of(vec![Some(10), None, Some(30)]));
    /// ```
    pub fn nullable_collection<C, E>(
        &self,
        params: &QueryParams,
        name: &str,
    ) -> FieldResult<TriState<C>>
    where
        C: FromIterator<Option<E>>,
        E: FromToken,
    {
        self.bind_collection(params, name, |token| {
            if self.is_null_token(token) {
                Ok(None)
            } else {
                E::from_token(token).map(Some)
            }
        })
    }

    fn bind_collection<C, E, F>(&self, params: &QueryParams, name: &str, parse: F) -> FieldResult<TriState<C>>
    where
        C: FromIterator<E>,
        F: Fn(&str) -> Result<E>,
    {
        let occurrences = match params.get_all(name) {
            Some(occurrences) => occurrences,
            None => return Ok(TriState::Absent),
        };

        if let [only] = occurrences {
            if self.is_null_token(only.trim()) {
                tracing::trace!(field = name, token = %only, "null token for whole collection");
                return Ok(TriState::Null);
            }
        }

        let delimiter = self.options.delimiter.as_char();
        occurrences
            .iter()
            .flat_map(|occurrence| occurrence.split(delimiter))
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .map(parse)
            .collect::<Result<C>>()
            .map(TriState::Value)
            .map_err(|e| e.at_field(name))
    }
}

/// Binds several fields from one parameter set, collecting every failure.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::{QueryAdapter, QueryParams, TriState};
///
/// let adapter = QueryAdapter::default();
/// let params = QueryParams::parse("limit=ten&active=1&ids=4,5");
///
/// let mut binder = adapter.binder(&params);
/// let limit = binder.scalar::<u32>("limit");
/// let active = binder.scalar::<bool>("active");
/// let ids = binder.list::<u64>("ids");
///
/// assert_eq!(limit, TriState::Absent);
/// assert_eq!(active, TriState::of(true));
/// assert_eq!(ids, TriState::of(vec![4, 5]));
///
/// let errors = binder.finish().unwrap_err();
/// assert_eq!(errors.len(), 1);
/// assert!(errors.get("limit").is_some());
/// ```
#[derive(Debug)]
pub struct QueryBinder<'a> {
    adapter: &'a QueryAdapter,
    params: &'a QueryParams,
    errors: BindErrors,
}

impl<'a> QueryBinder<'a> {
    fn record<T>(&mut self, result: FieldResult<TriState<T>>) -> TriState<T> {
        match result {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!(field = %err.field, error = %err.error, "query field failed to bind");
                self.errors.push(err);
                TriState::Absent
            }
        }
    }

    pub fn scalar<T: FromToken>(&mut self, name: &str) -> TriState<T> {
        let result = self.adapter.scalar(self.params, name);
        self.record(result)
    }

    pub fn list<E: FromToken>(&mut self, name: &str) -> TriState<Vec<E>> {
        let result = self.adapter.list(self.params, name);
        self.record(result)
    }

    pub fn collection<C, E>(&mut self, name: &str) -> TriState<C>
    where
        C: FromIterator<E>,
        E: FromToken,
    {
        let result = self.adapter.collection::<C, E>(self.params, name);
        self.record(result)
    }

    pub fn nullable_collection<C, E>(&mut self, name: &str) -> TriState<C>
    where
        C: FromIterator<Option<E>>,
        E: FromToken,
    {
        let result = self.adapter.nullable_collection::<C, E>(self.params, name);
        self.record(result)
    }

    /// Errors recorded so far.
    #[must_use]
    pub fn errors(&self) -> &BindErrors {
        &self.errors
    }

    /// Ends the pass.
    ///
    /// # Errors
    ///
    /// Returns every recorded [`FieldError`] if at least one field failed.
    pub fn finish(self) -> std::result::Result<(), BindErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}
