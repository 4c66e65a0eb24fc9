//! Scalar token parsing.
//!
//! This module provides [`FromToken`], the conversion from one raw string token
//! (a query-string value or one element of a delimited list) into a typed
//! scalar. The set of supported kinds is closed and explicit:
//!
//! | Kind | Types | Accepted tokens |
//! |------|-------|-----------------|
//! | text | `String` | anything, unchanged |
//! | character | `char` | exactly one character |
//! | boolean | `bool` | `1`, `0`, `true`, `false` (any case) |
//! | identifier | `Uuid` | hyphenated, simple, braced or URN UUIDs |
//! | date | `DateTime<Utc>`, `DateTime<FixedOffset>`, `NaiveDateTime`, `NaiveDate` | `yyyy-MM-dd` first, then the lenient formats below |
//! | enumeration | enums declared with [`token_enum!`](crate::token_enum) | variant name, any case |
//! | other | integers, floats, `BigInt`, `IpAddr`, `Url`, and anything registered with [`from_token_via_from_str!`](crate::from_token_via_from_str) | `FromStr` |
//!
//! ## Dates
//!
//! Date parsing is two-pass and the order matters. The strict pass accepts
//! exactly four year digits, two month digits and two day digits separated by
//! `-`, read as midnight UTC. Only when that fails does the lenient pass run:
//! RFC 3339, RFC 2822, ISO-like date-times without an offset (read as UTC),
//! and invariant-culture month-first forms such as `03/04/2024` (4 March).
//!
//! ```rust
//! use chrono::{Datelike, NaiveDate};
//! use serde_tristate::FromToken;
//!
//! let strict = NaiveDate::from_token("2024-03-04").unwrap();
//! let lenient = NaiveDate::from_token("03/04/2024").unwrap();
//! assert_eq!(strict, lenient);
//! assert_eq!(lenient.month(), 3);
//! ```

use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Utc};
use num_bigint::BigInt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use uuid::Uuid;

/// Conversion from a single raw string token into a typed scalar.
///
/// Implemented for the built-in kinds listed in the [module docs](self). Enable
/// more kinds with [`token_enum!`](crate::token_enum),
/// [`from_token_via_from_str!`](crate::from_token_via_from_str), or a manual impl.
pub trait FromToken: Sized {
    /// Human-readable kind used in error messages.
    const KIND: &'static str;

    /// Parses one non-empty token.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Format`] when the token is not a valid `Self`.
    fn from_token(token: &str) -> Result<Self>;
}

impl FromToken for String {
    const KIND: &'static str = "text";

    fn from_token(token: &str) -> Result<Self> {
        Ok(token.to_string())
    }
}

impl FromToken for char {
    const KIND: &'static str = "character";

    fn from_token(token: &str) -> Result<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(Error::format(
                Self::KIND,
                token,
                "expected exactly one character",
            )),
        }
    }
}

impl FromToken for bool {
    const KIND: &'static str = "boolean";

    fn from_token(token: &str) -> Result<Self> {
        match token.trim() {
            "1" => Ok(true),
            "0" => Ok(false),
            t if t.eq_ignore_ascii_case("true") => Ok(true),
            t if t.eq_ignore_ascii_case("false") => Ok(false),
            _ => Err(Error::format(
                Self::KIND,
                token,
                "expected true, false, 1 or 0",
            )),
        }
    }
}

impl FromToken for Uuid {
    const KIND: &'static str = "UUID";

    fn from_token(token: &str) -> Result<Self> {
        Uuid::parse_str(token.trim()).map_err(|e| Error::format(Self::KIND, token, e))
    }
}

impl FromToken for DateTime<Utc> {
    const KIND: &'static str = "date";

    fn from_token(token: &str) -> Result<Self> {
        parse_date_time(token)
    }
}

impl FromToken for DateTime<FixedOffset> {
    const KIND: &'static str = "date";

    fn from_token(token: &str) -> Result<Self> {
        parse_date_time_with_offset(token)
    }
}

impl FromToken for NaiveDateTime {
    const KIND: &'static str = "date";

    fn from_token(token: &str) -> Result<Self> {
        parse_date_time(token).map(|dt| dt.naive_utc())
    }
}

impl FromToken for NaiveDate {
    const KIND: &'static str = "date";

    fn from_token(token: &str) -> Result<Self> {
        parse_date(token)
    }
}

crate::from_token_via_from_str!("integer" => i8, i16, i32, i64, i128, isize);
crate::from_token_via_from_str!("unsigned integer" => u8, u16, u32, u64, u128, usize);
crate::from_token_via_from_str!("number" => f32, f64);
crate::from_token_via_from_str!("big integer" => BigInt);
crate::from_token_via_from_str!("IP address" => IpAddr, Ipv4Addr, Ipv6Addr);
crate::from_token_via_from_str!("URL" => url::Url);

const LENIENT_DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %I:%M %p",
];

const LENIENT_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%m/%d/%Y",
    "%Y/%m/%d",
    "%d %B %Y",
    "%B %d, %Y",
    "%d %b %Y",
    "%b %d, %Y",
];

/// Strict pass: exactly `yyyy-MM-dd`.
fn parse_strict_date(token: &str) -> Option<NaiveDate> {
    let bytes = token.as_bytes();
    let shape_ok = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !shape_ok {
        return None;
    }
    NaiveDate::parse_from_str(token, "%Y-%m-%d").ok()
}

fn midnight_utc(date: NaiveDate) -> Option<DateTime<Utc>> {
    date.and_hms_opt(0, 0, 0)
        .map(|naive| Utc.from_utc_datetime(&naive))
}

fn parse_lenient(token: &str) -> Option<DateTime<FixedOffset>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(token) {
        return Some(dt);
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(token) {
        return Some(dt);
    }
    let naive = LENIENT_DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(token, fmt).ok())
        .or_else(|| {
            LENIENT_DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(Utc.from_utc_datetime(&naive).into())
}

fn date_error(token: &str) -> Error {
    Error::format(
        "date",
        token,
        "expected yyyy-MM-dd or a recognizable date/time",
    )
}

/// Parses a date or date-time token into a UTC instant.
///
/// # Errors
///
/// Returns [`Error::Format`] when neither the strict nor the lenient pass matches.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::parse_date_time;
///
/// let dt = parse_date_time("2024-03-04").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-03-04T00:00:00+00:00");
///
/// let dt = parse_date_time("2024-03-04T10:30:00+02:00").unwrap();
/// assert_eq!(dt.to_rfc3339(), "2024-03-04T08:30:00+00:00");
/// ```
pub fn parse_date_time(token: &str) -> Result<DateTime<Utc>> {
    parse_date_time_with_offset(token).map(|dt| dt.with_timezone(&Utc))
}

/// Like [`parse_date_time`], but keeps an explicit offset from the token.
///
/// Tokens without an offset are read as UTC.
///
/// # Errors
///
/// Returns [`Error::Format`] when neither pass matches.
pub fn parse_date_time_with_offset(token: &str) -> Result<DateTime<FixedOffset>> {
    let token = token.trim();
    if let Some(dt) = parse_strict_date(token).and_then(midnight_utc) {
        return Ok(dt.into());
    }
    parse_lenient(token).ok_or_else(|| date_error(token))
}

/// Parses a calendar date; date-time tokens keep the date in their own offset.
///
/// # Errors
///
/// Returns [`Error::Format`] when neither pass matches.
pub fn parse_date(token: &str) -> Result<NaiveDate> {
    let token = token.trim();
    if let Some(date) = parse_strict_date(token) {
        return Ok(date);
    }
    parse_lenient(token)
        .map(|dt| dt.naive_local().date())
        .ok_or_else(|| date_error(token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_text_is_unchanged() {
        assert_eq!(String::from_token("  Hello, World ").unwrap(), "  Hello, World ");
    }

    #[test]
    fn test_char() {
        assert_eq!(char::from_token("x").unwrap(), 'x');
        assert_eq!(char::from_token("é").unwrap(), 'é');
        assert!(char::from_token("xy").is_err());
        assert!(char::from_token("").is_err());
    }

    #[test]
    fn test_bool_numeric_and_literal() {
        assert!(bool::from_token("1").unwrap());
        assert!(!bool::from_token("0").unwrap());
        assert!(bool::from_token("true").unwrap());
        assert!(bool::from_token("TRUE").unwrap());
        assert!(!bool::from_token("False").unwrap());

        let err = bool::from_token("yes").unwrap_err();
        assert!(matches!(err, Error::Format { kind: "boolean", .. }));
        assert!(bool::from_token("2").is_err());
    }

    #[test]
    fn test_uuid() {
        let id = Uuid::from_token("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();
        assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
        assert_eq!(
            Uuid::from_token("67e5504410b1426f9247bb680e5fe0c8").unwrap(),
            id
        );
        assert!(Uuid::from_token("67e55044-10b1").is_err());
    }

    #[test]
    fn test_strict_date_is_midnight_utc() {
        let dt = DateTime::<Utc>::from_token("2024-03-04").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 3, 4));
        assert_eq!((dt.hour(), dt.minute(), dt.second()), (0, 0, 0));
    }

    #[test]
    fn test_strict_shape_rejects_short_fields() {
        assert!(parse_strict_date("2024-3-4").is_none());
        assert!(parse_strict_date("20240-03-04").is_none());
        assert!(parse_strict_date("2024-02-30").is_none());
    }

    #[test]
    fn test_lenient_month_first() {
        let date = NaiveDate::from_token("03/04/2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
    }

    #[test]
    fn test_lenient_forms() {
        let dt = parse_date_time("2024-03-04 10:15:00").unwrap();
        assert_eq!(dt.hour(), 10);

        let dt = parse_date_time("Mon, 04 Mar 2024 10:15:00 +0000").unwrap();
        assert_eq!(dt.day(), 4);

        let date = parse_date("March 4, 2024").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());

        let dt = parse_date_time("2024-3-4").unwrap();
        assert_eq!((dt.month(), dt.day()), (3, 4));
    }

    #[test]
    fn test_offset_is_kept() {
        let dt = DateTime::<FixedOffset>::from_token("2024-03-04T23:30:00-05:00").unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -5 * 3600);
        assert_eq!(parse_date("2024-03-04T23:30:00-05:00").unwrap().day(), 4);
    }

    #[test]
    fn test_bad_dates() {
        assert!(parse_date_time("yesterday").is_err());
        assert!(parse_date_time("13/45/2024").is_err());
        assert!(NaiveDateTime::from_token("").is_err());
    }

    #[test]
    fn test_numbers_via_from_str() {
        assert_eq!(i32::from_token("42").unwrap(), 42);
        assert_eq!(i32::from_token(" -7 ").unwrap(), -7);
        assert_eq!(f64::from_token("2.5").unwrap(), 2.5);
        assert!(u8::from_token("256").is_err());

        let err = i64::from_token("not-a-number").unwrap_err();
        assert!(matches!(err, Error::Format { kind: "integer", .. }));
    }

    #[test]
    fn test_big_integer() {
        let n = BigInt::from_token("123456789012345678901234567890").unwrap();
        assert_eq!(n.to_string(), "123456789012345678901234567890");
    }

    #[test]
    fn test_network_kinds() {
        assert!(IpAddr::from_token("127.0.0.1").is_ok());
        assert!(url::Url::from_token("https://example.com/a?b=c").is_ok());
        assert!(Ipv6Addr::from_token("not-an-ip").is_err());
    }
}
