/// Implements [`FromToken`](crate::FromToken) for fieldless enums by
/// case-insensitive variant name.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::{token_enum, FromToken};
///
/// #[derive(Debug, PartialEq)]
/// enum SortOrder {
///     Ascending,
///     Descending,
/// }
///
/// token_enum!(SortOrder { Ascending, Descending });
///
/// assert_eq!(SortOrder::from_token("descending").unwrap(), SortOrder::Descending);
/// assert!(SortOrder::from_token("sideways").is_err());
/// ```
#[macro_export]
macro_rules! token_enum {
    ($ty:ident { $($variant:ident),+ $(,)? }) => {
        impl $crate::FromToken for $ty {
            const KIND: &'static str = stringify!($ty);

            fn from_token(token: &str) -> $crate::Result<Self> {
                const VARIANTS: &[&str] = &[$(stringify!($variant)),+];
                let name = token.trim();
                $(
                    if name.eq_ignore_ascii_case(stringify!($variant)) {
                        return Ok($ty::$variant);
                    }
                )+
                Err($crate::Error::format(
                    stringify!($ty),
                    token,
                    format!("expected one of {}", VARIANTS.join(", ")),
                ))
            }
        }
    };
}

/// Registers one or more `FromStr` types as [`FromToken`](crate::FromToken)
/// scalars.
///
/// Only registered types can be bound; this is the extension point for kinds
/// the crate does not ship. The token is trimmed before `FromStr` sees it.
/// An optional leading `"kind" =>` names the kind used in error messages.
///
/// # Examples
///
/// ```rust
/// use serde_tristate::{from_token_via_from_str, FromToken};
/// use std::str::FromStr;
///
/// #[derive(Debug, PartialEq)]
/// struct Sku(String);
///
/// impl FromStr for Sku {
///     type Err = String;
///
///     fn from_str(s: &str) -> Result<Self, Self::Err> {
///         if s.starts_with("SKU-") {
///             Ok(Sku(s.to_string()))
///         } else {
///             Err("missing SKU- prefix".to_string())
///         }
///     }
/// }
///
/// from_token_via_from_str!("sku" => Sku);
///
/// assert_eq!(Sku::from_token(" SKU-1 ").unwrap(), Sku("SKU-1".to_string()));
/// assert!(Sku::from_token("1").is_err());
/// ```
#[macro_export]
macro_rules! from_token_via_from_str {
    (@impl $kind:expr, $ty:ty) => {
        impl $crate::FromToken for $ty {
            const KIND: &'static str = $kind;

            fn from_token(token: &str) -> $crate::Result<Self> {
                token
                    .trim()
                    .parse::<$ty>()
                    .map_err(|e| $crate::Error::format($kind, token, e))
            }
        }
    };

    ($kind:literal => $($ty:ty),+ $(,)?) => {
        $(
            $crate::from_token_via_from_str!(@impl $kind, $ty);
        )+
    };

    ($($ty:ty),+ $(,)?) => {
        $(
            $crate::from_token_via_from_str!(@impl stringify!($ty), $ty);
        )+
    };
}
