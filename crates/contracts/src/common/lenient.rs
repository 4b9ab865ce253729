//! `deserialize_with` helpers for fields the backend fills inconsistently.
//!
//! `#[serde(default)]` only covers a missing key. Rows regularly carry `null`
//! for unset amounts, and decimal columns arrive as strings (`"25000.00"`).
//! Either shape would otherwise fail the row and, through the untagged
//! [`ListPayload`](super::ListPayload), the whole page.

use serde::de::{Deserializer, Error, Unexpected};
use serde::Deserialize;
use serde_json::{Number, Value};

/// Numeric field types accepted by [`number`] and [`opt_number`]
pub trait LenientNumber: Sized + Default {
    fn from_number(n: &Number) -> Option<Self>;
    fn from_text(s: &str) -> Option<Self>;
}

impl LenientNumber for f64 {
    fn from_number(n: &Number) -> Option<Self> {
        n.as_f64()
    }

    fn from_text(s: &str) -> Option<Self> {
        s.parse::<f64>().ok().filter(|v| v.is_finite())
    }
}

/// `12.0` and `"12.00"` are accepted for integer fields, `12.5` is not
fn whole<T: TryFrom<i64>>(v: f64) -> Option<T> {
    if v.is_finite() && v.fract() == 0.0 && v.abs() <= i64::MAX as f64 {
        T::try_from(v as i64).ok()
    } else {
        None
    }
}

macro_rules! lenient_integer {
    ($($ty:ty),*) => {$(
        impl LenientNumber for $ty {
            fn from_number(n: &Number) -> Option<Self> {
                n.as_i64()
                    .and_then(|v| Self::try_from(v).ok())
                    .or_else(|| n.as_u64().and_then(|v| Self::try_from(v).ok()))
                    .or_else(|| n.as_f64().and_then(whole))
            }

            fn from_text(s: &str) -> Option<Self> {
                s.parse::<Self>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole))
            }
        }
    )*};
}

lenient_integer!(i64, u32, u64);

fn parse<'de, D, T>(value: Value) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => T::from_number(&n)
            .map(Some)
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Other(&n.to_string()), &"a number in range")),
        Value::String(s) if s.trim().is_empty() => Ok(None),
        Value::String(s) => T::from_text(s.trim())
            .map(Some)
            .ok_or_else(|| D::Error::invalid_value(Unexpected::Str(&s), &"a numeric string")),
        Value::Bool(b) => Err(D::Error::invalid_type(Unexpected::Bool(b), &"a number")),
        Value::Array(_) => Err(D::Error::invalid_type(Unexpected::Seq, &"a number")),
        Value::Object(_) => Err(D::Error::invalid_type(Unexpected::Map, &"a number")),
    }
}

/// Number, numeric string, `null` or `""` (the last two give the default)
pub fn number<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    let value = Value::deserialize(deserializer)?;
    Ok(parse::<D, T>(value)?.unwrap_or_default())
}

/// Like [`number`], keeping "absent" as `None`
pub fn opt_number<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: LenientNumber,
{
    let value = Value::deserialize(deserializer)?;
    parse::<D, T>(value)
}

/// `null` decodes to `T::default()`
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Row {
        #[serde(deserialize_with = "number")]
        amount: f64,
        #[serde(deserialize_with = "number")]
        quantity: i64,
        #[serde(deserialize_with = "number")]
        count: u32,
        #[serde(deserialize_with = "opt_number")]
        total: Option<u64>,
        #[serde(deserialize_with = "or_default")]
        name: String,
    }

    fn row(json: &str) -> Row {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_null_fields_fall_back_to_defaults() {
        let r = row(r#"{"amount":null,"quantity":null,"count":null,"total":null,"name":null}"#);
        assert_eq!(r.amount, 0.0);
        assert_eq!(r.quantity, 0);
        assert_eq!(r.count, 0);
        assert_eq!(r.total, None);
        assert_eq!(r.name, "");
    }

    #[test]
    fn test_numeric_strings_are_parsed() {
        let r = row(r#"{"amount":"25000.00","quantity":" -3 ","count":"12.0","total":"40"}"#);
        assert_eq!(r.amount, 25000.0);
        assert_eq!(r.quantity, -3);
        assert_eq!(r.count, 12);
        assert_eq!(r.total, Some(40));
    }

    #[test]
    fn test_blank_string_is_absent() {
        let r = row(r#"{"amount":"","total":""}"#);
        assert_eq!(r.amount, 0.0);
        assert_eq!(r.total, None);
    }

    #[test]
    fn test_plain_numbers_still_work() {
        let r = row(r#"{"amount":1.5,"quantity":7,"count":2.0,"total":9}"#);
        assert_eq!(r.amount, 1.5);
        assert_eq!(r.quantity, 7);
        assert_eq!(r.count, 2);
        assert_eq!(r.total, Some(9));
    }

    #[test]
    fn test_rejects_text_and_fractions_for_integers() {
        assert!(serde_json::from_str::<Row>(r#"{"quantity":"abc"}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"quantity":2.5}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"count":-1}"#).is_err());
        assert!(serde_json::from_str::<Row>(r#"{"amount":true}"#).is_err());
    }
}
