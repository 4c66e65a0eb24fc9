//! Binding conventions
//!
//! This module documents how raw request input maps onto [`TriState`](crate::TriState)
//! as implemented by this library. It contains no code; the examples are
//! compiled and run as doctests.
//!
//! # The Three States
//!
//! | State | Meaning | Typical handling in a PATCH |
//! |-------|---------|-----------------------------|
//! | `Absent` | the field was never mentioned | leave the stored value alone |
//! | `Null` | the field was mentioned and cleared | erase the stored value |
//! | `Value(v)` | the field was mentioned with a value | overwrite with `v` |
//!
//! `is_assigned()` is true for `Null` and `Value`; `has_value()` only for `Value`.
//!
//! # Null Tokens
//!
//! A query string has no native null, so a configurable set of strings stands
//! in for one. The default set is `null` and `nil`, matched ignoring case.
//! Replacing the set removes the defaults: with `{"undefined", "none"}`, the
//! text `null` is ordinary data again.
//!
//! JSON has a native `null`, which is always honored. Null tokens additionally
//! apply to JSON *strings*, so `"field": "NULL"` is an explicit null too.
//!
//! # Query Strings
//!
//! | Input | Scalar target | Collection target |
//! |-------|---------------|-------------------|
//! | `p` missing | `Absent` | `Absent` |
//! | `p=` | `Absent` | `Value([])` |
//! | `p=null` | `Null` | `Null` |
//! | `p=42` | `Value(42)` | `Value([42])` |
//! | `p=1,2,3` | parse error for numeric targets | `Value([1, 2, 3])` |
//! | `p=1&p=2&p=3` | `Value(1)` (first occurrence) | `Value([1, 2, 3])` |
//! | `p=oops` | field error | field error |
//!
//! Collection rules:
//!
//! - Each occurrence is split on the delimiter (comma by default), each piece
//!   trimmed, and empty pieces dropped.
//! - Pieces keep their order: occurrence order first, split order second.
//! - A lone occurrence that is a null token nulls the whole collection.
//!   Repeating it (`p=null&p=null`) does not; those become null *elements*.
//! - Null elements are only allowed by `nullable_collection`; elsewhere they
//!   are a required-value error.
//! - One bad element fails the whole field. There is no partial result.
//!
//! ```rust
//! use serde_tristate::{QueryAdapter, QueryParams, TriState};
//!
//! let adapter = QueryAdapter::default();
//!
//! let empty = adapter.list::<i32>(&QueryParams::parse("p="), "p").unwrap();
//! let null = adapter.list::<i32>(&QueryParams::parse("p=null"), "p").unwrap();
//!
//! assert_eq!(empty, TriState::of(vec![]));
//! assert_eq!(null, TriState::Null);
//! assert_ne!(empty, null);
//! ```
//!
//! # Scalar Kinds
//!
//! - **Booleans** accept `1` and `0` before `true` / `false` (any case).
//! - **Dates** try `yyyy-MM-dd` as midnight UTC before any lenient format, so
//!   `2024-03-04` can never be read as anything but 4 March 2024.
//! - **Enumerations** match variant names ignoring case.
//! - **Everything else** goes through `FromStr` for explicitly registered types.
//!
//! ```rust
//! use serde_tristate::{token_enum, QueryAdapter, QueryParams, TriState};
//!
//! #[derive(Debug, PartialEq)]
//! enum Status {
//!     Open,
//!     Closed,
//! }
//!
//! token_enum!(Status { Open, Closed });
//!
//! let params = QueryParams::parse("status=CLOSED&archived=0");
//! let adapter = QueryAdapter::default();
//!
//! assert_eq!(adapter.scalar::<Status>(&params, "status").unwrap(), TriState::of(Status::Closed));
//! assert_eq!(adapter.scalar::<bool>(&params, "archived").unwrap(), TriState::of(false));
//! ```
//!
//! # JSON
//!
//! | Input | Result |
//! |-------|--------|
//! | key omitted | `Absent` (requires `#[serde(default)]` on the field) |
//! | `"field": null` | `Null` |
//! | `"field": "null"` | `Null` |
//! | `"field": <value>` | `Value(decoded)` |
//!
//! | Output | JSON |
//! |--------|------|
//! | `Absent` | `null` |
//! | `Null` | `null` |
//! | `Value(v)` | `v` |
//!
//! Writing is lossy: `Absent` and `Null` produce the same `null`. When the
//! distinction must survive a round trip, skip absent fields instead:
//!
//! ```rust
//! use serde::{Deserialize, Serialize};
//! use serde_tristate::TriState;
//!
//! #[derive(Serialize, Deserialize, Debug, PartialEq)]
//! struct Patch {
//!     #[serde(default, skip_serializing_if = "TriState::is_absent")]
//!     email: TriState<String>,
//!     #[serde(default, skip_serializing_if = "TriState::is_absent")]
//!     phone: TriState<String>,
//! }
//!
//! let patch = Patch { email: TriState::Null, phone: TriState::Absent };
//! let json = serde_json::to_string(&patch).unwrap();
//! assert_eq!(json, r#"{"email":null}"#);
//!
//! let back: Patch = serde_json::from_str(&json).unwrap();
//! assert_eq!(back, patch);
//! ```
