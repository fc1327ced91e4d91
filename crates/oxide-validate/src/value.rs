//! Raw input values and coerced field values.

use std::collections::HashMap;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// A raw value as supplied by the caller, before coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RawValue {
    /// Boolean input.
    Bool(bool),
    /// Integer input.
    Int(i64),
    /// Textual input.
    Text(String),
    /// No value.
    #[default]
    Absent,
}

impl RawValue {
    /// Returns the text if this is textual input.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

/// Accepts any JSON scalar. Numbers that do not fit an `i64` are kept as
/// their literal text so a decimal field can parse them exactly.
impl<'de> Deserialize<'de> for RawValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::Null => Ok(Self::Absent),
            serde_json::Value::Bool(b) => Ok(Self::Bool(b)),
            serde_json::Value::Number(n) => {
                Ok(n.as_i64().map_or_else(|| Self::Text(n.to_string()), Self::Int))
            }
            serde_json::Value::String(s) => Ok(Self::Text(s)),
            other => Err(serde::de::Error::custom(format!(
                "expected a scalar value, got {other}"
            ))),
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// Mapping from field name to raw value.
pub type RawData = HashMap<String, RawValue>;

/// Builds a [`RawData`] mapping from `(name, value)` pairs.
pub fn raw_data<K, V, I>(pairs: I) -> RawData
where
    K: Into<String>,
    V: Into<RawValue>,
    I: IntoIterator<Item = (K, V)>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}

/// Decodes a JSON object of raw values.
///
/// # Errors
///
/// Returns [`crate::FormError::ParseError`] when the input is not a JSON
/// object of scalar values.
pub fn raw_data_from_json(json: &str) -> Result<RawData> {
    Ok(serde_json::from_str(json)?)
}

/// The current value of a field after coercion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Unset, or cleared by a failed coercion.
    #[default]
    Null,
    /// Text.
    Text(String),
    /// Integer, also used for booleans (0/1) and timestamps.
    Int(i64),
    /// Boolean passed through unchanged by a text field.
    Bool(bool),
    /// Exact decimal number of arbitrary precision.
    Decimal(BigDecimal),
}

impl FieldValue {
    /// Returns whether the value counts as missing: `Null` or empty text.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            _ => false,
        }
    }

    /// Returns the text if this is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the decimal if this is a decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Option<&BigDecimal> {
        match self {
            Self::Decimal(d) => Some(d),
            _ => None,
        }
    }
}

impl From<RawValue> for FieldValue {
    fn from(value: RawValue) -> Self {
        match value {
            RawValue::Absent => Self::Null,
            RawValue::Text(s) => Self::Text(s),
            RawValue::Int(n) => Self::Int(n),
            RawValue::Bool(b) => Self::Bool(b),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<BigDecimal> for FieldValue {
    fn from(value: BigDecimal) -> Self {
        Self::Decimal(value)
    }
}

impl std::fmt::Display for FieldValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Null => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_from_option() {
        assert_eq!(RawValue::from(None::<&str>), RawValue::Absent);
        assert_eq!(RawValue::from(Some(5)), RawValue::Int(5));
    }

    #[test]
    fn test_raw_data_from_json() {
        let data =
            raw_data_from_json(r#"{"name": "bob", "age": 42, "ok": true, "gone": null}"#).unwrap();
        assert_eq!(data["name"], RawValue::Text("bob".to_string()));
        assert_eq!(data["age"], RawValue::Int(42));
        assert_eq!(data["ok"], RawValue::Bool(true));
        assert_eq!(data["gone"], RawValue::Absent);
    }

    #[test]
    fn test_raw_data_from_json_non_integer_numbers() {
        let data = raw_data_from_json(
            r#"{"price": 12.5, "huge": 123456789012345678901234567890, "neg": -3}"#,
        )
        .unwrap();
        assert_eq!(data["price"], RawValue::from("12.5"));
        assert_eq!(data["huge"], RawValue::from("123456789012345678901234567890"));
        assert_eq!(data["neg"], RawValue::Int(-3));
    }

    #[test]
    fn test_raw_data_from_json_rejects_nesting() {
        assert!(raw_data_from_json(r#"{"a": {"b": 1}}"#).is_err());
        assert!(raw_data_from_json("[1, 2]").is_err());
    }

    #[test]
    fn test_is_empty() {
        assert!(FieldValue::Null.is_empty());
        assert!(FieldValue::from("").is_empty());
        assert!(!FieldValue::from(" ").is_empty());
        assert!(!FieldValue::Int(0).is_empty());
    }

    #[test]
    fn test_serialize_decimal_exact() {
        let value = FieldValue::Decimal("12.5".parse().unwrap());
        assert_eq!(serde_json::to_value(&value).unwrap(), serde_json::json!("12.5"));
        assert_eq!(
            serde_json::to_value(FieldValue::Null).unwrap(),
            serde_json::Value::Null
        );
    }
}
