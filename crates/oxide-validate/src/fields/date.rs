//! Date field options and coercion.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

use crate::value::FieldValue;

/// Default input format: day.month.year.
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Options for date fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOptions {
    /// chrono `strftime` format used to parse input.
    pub format: String,
}

impl DateOptions {
    /// Creates options with the default format.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// Sets the input format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }
}

impl Default for DateOptions {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerces a stripped value into local epoch seconds.
///
/// Never fails: anything that cannot be read as a date becomes `Null`.
/// Integers are taken as epoch seconds already.
pub(crate) fn coerce(value: FieldValue, options: &DateOptions) -> FieldValue {
    match value {
        FieldValue::Text(s) => parse_local(&s, &options.format).map_or(FieldValue::Null, FieldValue::Int),
        FieldValue::Int(n) => FieldValue::Int(n),
        FieldValue::Null | FieldValue::Bool(_) | FieldValue::Decimal(_) => FieldValue::Null,
    }
}

/// Parses `input` with `format` and returns local epoch seconds.
///
/// Formats without time fields resolve to local midnight. Ambiguous local
/// times resolve to the earlier instant; nonexistent ones yield `None`.
#[must_use]
pub fn parse_local(input: &str, format: &str) -> Option<i64> {
    let naive = NaiveDateTime::parse_from_str(input, format)
        .or_else(|_| NaiveDate::parse_from_str(input, format).map(|d| d.and_time(NaiveTime::MIN)))
        .ok()?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_midnight(y: i32, m: u32, d: u32) -> i64 {
        let naive = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN);
        Local.from_local_datetime(&naive).earliest().unwrap().timestamp()
    }

    #[test]
    fn test_default_format() {
        assert_eq!(
            coerce(FieldValue::from("31.12.2024"), &DateOptions::new()),
            FieldValue::Int(local_midnight(2024, 12, 31))
        );
    }

    #[test]
    fn test_custom_format() {
        let options = DateOptions::new().format("%Y-%m-%d");
        assert_eq!(
            coerce(FieldValue::from("2024-02-29"), &options),
            FieldValue::Int(local_midnight(2024, 2, 29))
        );
        assert_eq!(coerce(FieldValue::from("31.12.2024"), &options), FieldValue::Null);
    }

    #[test]
    fn test_format_with_time() {
        let options = DateOptions::new().format("%d.%m.%Y %H:%M");
        assert_eq!(
            coerce(FieldValue::from("01.03.2024 10:30"), &options),
            FieldValue::Int(local_midnight(2024, 3, 1) + 10 * 3600 + 30 * 60)
        );
    }

    #[test]
    fn test_invalid_is_null() {
        let options = DateOptions::default();
        assert_eq!(coerce(FieldValue::from("not-a-date"), &options), FieldValue::Null);
        assert_eq!(coerce(FieldValue::from("31.02.2024"), &options), FieldValue::Null);
        assert_eq!(coerce(FieldValue::from(""), &options), FieldValue::Null);
        assert_eq!(coerce(FieldValue::Bool(true), &options), FieldValue::Null);
    }

    #[test]
    fn test_int_passes_through() {
        assert_eq!(
            coerce(FieldValue::Int(1_700_000_000), &DateOptions::new()),
            FieldValue::Int(1_700_000_000)
        );
    }
}
