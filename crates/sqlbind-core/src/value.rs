// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Dynamically typed SQL parameter values.
//!
//! Generated statements carry their bound values as a `Vec<SqlValue>` so a
//! single code path can bind heterogeneous parameter lists. The enum covers
//! the column types sqlbind maps out of the box.
//!
//! Every variant holds an `Option` of its native type: a null value keeps
//! the variant of its column, so the driver declares the parameter with the
//! column's type instead of defaulting to text. A text-typed null is
//! rejected by Postgres when assigned to any non-text column, even though
//! the value itself is null.
//!
//! # Conversions
//!
//! `From` implementations exist for the native Rust counterparts, including
//! `Option<T>` (mapping `None` to the typed null of the same variant):
//!
//! ```rust
//! use sqlbind_core::SqlValue;
//!
//! let v: SqlValue = 42i64.into();
//! let none: SqlValue = Option::<i64>::None.into();
//! assert_eq!(none, SqlValue::Int(None));
//! assert!(none.is_null());
//! ```
//!
//! # Display
//!
//! `Display` renders a log-friendly literal (`'text'` quoted, `NULL` for
//! null). The template proxy uses it to report every parameter of a failed
//! statement in order.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// A single bound parameter of a generated statement.
///
/// `None` in any variant is SQL NULL carrying that variant's column type.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Boolean value.
    Bool(Option<bool>),

    /// Signed integer. Narrower integer types widen into this variant.
    Int(Option<i64>),

    /// Double-precision float.
    Float(Option<f64>),

    /// Text value.
    Text(Option<String>),

    /// UUID value.
    Uuid(Option<Uuid>),

    /// Calendar date without a time component.
    Date(Option<NaiveDate>),

    /// UTC timestamp.
    Timestamp(Option<DateTime<Utc>>),

    /// JSON document.
    Json(Option<serde_json::Value>),
}

impl SqlValue {
    /// Whether this value is SQL NULL, regardless of its carried type.
    pub fn is_null(&self) -> bool {
        matches!(
            self,
            Self::Bool(None)
                | Self::Int(None)
                | Self::Float(None)
                | Self::Text(None)
                | Self::Uuid(None)
                | Self::Date(None)
                | Self::Timestamp(None)
                | Self::Json(None)
        )
    }
}

impl std::fmt::Display for SqlValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(Some(b)) => write!(f, "{b}"),
            Self::Int(Some(i)) => write!(f, "{i}"),
            Self::Float(Some(v)) => write!(f, "{v}"),
            Self::Text(Some(s)) => write!(f, "'{s}'"),
            Self::Uuid(Some(u)) => write!(f, "'{u}'"),
            Self::Date(Some(d)) => write!(f, "'{d}'"),
            Self::Timestamp(Some(t)) => write!(f, "'{t}'"),
            Self::Json(Some(j)) => write!(f, "'{j}'"),
            _ => write!(f, "NULL"),
        }
    }
}

/// `From<T>` and `From<Option<T>>` sharing one native-to-variant mapping.
macro_rules! impl_from {
    ($native:ty, $variant:ident, |$v:ident| $conv:expr) => {
        impl From<$native> for SqlValue {
            fn from($v: $native) -> Self {
                Self::$variant(Some($conv))
            }
        }

        impl From<Option<$native>> for SqlValue {
            fn from(value: Option<$native>) -> Self {
                Self::$variant(value.map(|$v| $conv))
            }
        }
    };
}

impl_from!(bool, Bool, |v| v);
impl_from!(i16, Int, |v| i64::from(v));
impl_from!(i32, Int, |v| i64::from(v));
impl_from!(i64, Int, |v| v);
impl_from!(f32, Float, |v| f64::from(v));
impl_from!(f64, Float, |v| v);
impl_from!(String, Text, |v| v);
impl_from!(&str, Text, |v| v.to_string());
impl_from!(Uuid, Uuid, |v| v);
impl_from!(NaiveDate, Date, |v| v);
impl_from!(DateTime<Utc>, Timestamp, |v| v);
impl_from!(serde_json::Value, Json, |v| v);

/// Build a `Vec<SqlValue>` from a list of convertible expressions.
///
/// ```rust
/// use sqlbind_core::{params, SqlValue};
///
/// let p = params!["alex", 42i64, Option::<i64>::None];
/// assert_eq!(p[2], SqlValue::Int(None));
/// ```
#[macro_export]
macro_rules! params {
    () => {
        ::std::vec::Vec::<$crate::SqlValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::SqlValue::from($value)),+]
    };
}

/// Bind one [`SqlValue`] onto a sqlx query builder, preserving position.
///
/// Every arm binds the inner `Option` directly, so a null parameter is
/// declared with its variant's type at the protocol level.
///
/// Works for `Query`, `QueryAs` and `QueryScalar` alike, which is why this
/// is a macro.
macro_rules! bind_value {
    ($query:expr, $value:expr) => {
        match $value {
            $crate::SqlValue::Bool(b) => $query.bind(*b),
            $crate::SqlValue::Int(i) => $query.bind(*i),
            $crate::SqlValue::Float(v) => $query.bind(*v),
            $crate::SqlValue::Text(s) => $query.bind(s.clone()),
            $crate::SqlValue::Uuid(u) => $query.bind(*u),
            $crate::SqlValue::Date(d) => $query.bind(*d),
            $crate::SqlValue::Timestamp(t) => $query.bind(*t),
            $crate::SqlValue::Json(j) => $query.bind(j.clone()),
        }
    };
}

pub(crate) use bind_value;

/// Render a parameter list the way the failure log expects it.
///
/// Format: `['alex' , 42 , NULL]`, every value in bind order.
pub(crate) fn render_params(params: &[SqlValue]) -> String {
    let mut out = String::from("[");
    for (i, p) in params.iter().enumerate() {
        if i > 0 {
            out.push_str(" , ");
        }
        out.push_str(&p.to_string());
    }
    out.push(']');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_widening() {
        assert_eq!(SqlValue::from(7i16), SqlValue::Int(Some(7)));
        assert_eq!(SqlValue::from(7i32), SqlValue::Int(Some(7)));
        assert_eq!(SqlValue::from(7i64), SqlValue::Int(Some(7)));
    }

    #[test]
    fn none_keeps_the_column_type() {
        assert_eq!(SqlValue::from(Option::<i64>::None), SqlValue::Int(None));
        assert_eq!(SqlValue::from(Option::<i32>::None), SqlValue::Int(None));
        assert_eq!(SqlValue::from(Option::<Uuid>::None), SqlValue::Uuid(None));
        assert_eq!(
            SqlValue::from(Option::<String>::None),
            SqlValue::Text(None)
        );
        assert!(SqlValue::from(Option::<NaiveDate>::None).is_null());
    }

    #[test]
    fn some_converts_like_the_bare_value() {
        assert_eq!(
            SqlValue::from(Some("x")),
            SqlValue::Text(Some("x".to_string()))
        );
        assert_eq!(SqlValue::from(Some(7i32)), SqlValue::from(7i32));
        assert!(!SqlValue::from(Some(7i32)).is_null());
    }

    #[test]
    fn display_quotes_text_only() {
        assert_eq!(SqlValue::from("abc").to_string(), "'abc'");
        assert_eq!(SqlValue::from(42i64).to_string(), "42");
        assert_eq!(SqlValue::Int(None).to_string(), "NULL");
        assert_eq!(SqlValue::Text(None).to_string(), "NULL");
        assert_eq!(SqlValue::from(true).to_string(), "true");
    }

    #[test]
    fn params_macro_converts_each_value() {
        let p = params!["alex", 42i64, Option::<String>::None];
        assert_eq!(
            p,
            vec![
                SqlValue::Text(Some("alex".to_string())),
                SqlValue::Int(Some(42)),
                SqlValue::Text(None)
            ]
        );
        let empty = params![];
        assert!(empty.is_empty());
    }

    #[test]
    fn render_params_bracket_format() {
        let rendered = render_params(&params!["alex", 42i64, Option::<i64>::None]);
        assert_eq!(rendered, "['alex' , 42 , NULL]");
        assert_eq!(render_params(&[]), "[]");
    }
}
