//! Decimal field coercion and format check.

use bigdecimal::BigDecimal;

use crate::error::ValidationError;
use crate::value::FieldValue;

/// Message reported when a decimal field holds something else.
pub const DECIMAL_MESSAGE: &str = "Field must be decimal";

/// Coerces a stripped value into a decimal.
///
/// Blank text becomes `Null`. Text that does not parse is kept so the
/// format check can report it.
pub(crate) fn coerce(value: FieldValue) -> FieldValue {
    match value {
        FieldValue::Text(s) if s.is_empty() => FieldValue::Null,
        FieldValue::Text(s) => parse(&s).map_or(FieldValue::Text(s), FieldValue::Decimal),
        FieldValue::Int(n) => FieldValue::Decimal(BigDecimal::from(n)),
        other => other,
    }
}

pub(crate) fn check(value: &FieldValue) -> Result<(), ValidationError> {
    let ok = match value {
        FieldValue::Decimal(_) | FieldValue::Int(_) => true,
        FieldValue::Text(s) => parse(s).is_some(),
        FieldValue::Null | FieldValue::Bool(_) => false,
    };

    if ok {
        Ok(())
    } else {
        Err(ValidationError::format(DECIMAL_MESSAGE))
    }
}

/// Parses plain or scientific notation without loss of precision.
///
/// Surrounding whitespace is ignored even when the field keeps it.
pub fn parse(s: &str) -> Option<BigDecimal> {
    s.trim().parse::<BigDecimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> BigDecimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_coerce_exact() {
        assert_eq!(coerce(FieldValue::from("12.5")), FieldValue::Decimal(dec("12.5")));
        assert_eq!(coerce(FieldValue::from("0.1")), FieldValue::Decimal(dec("0.1")));
        assert_eq!(coerce(FieldValue::Int(7)), FieldValue::Decimal(dec("7")));
    }

    #[test]
    fn test_coerce_beyond_28_digits() {
        let big = "123456789012345678901234567890123";
        assert_eq!(coerce(FieldValue::from(big)), FieldValue::Decimal(dec(big)));
        assert!(check(&coerce(FieldValue::from(big))).is_ok());

        let long_fraction = "0.123456789012345678901234567891234";
        let FieldValue::Decimal(d) = coerce(FieldValue::from(long_fraction)) else {
            panic!("expected a decimal");
        };
        assert_eq!(d, dec(long_fraction));
        assert_ne!(d, dec("0.1234567890123456789012345679"));
    }

    #[test]
    fn test_coerce_blank_is_null() {
        assert_eq!(coerce(FieldValue::from("")), FieldValue::Null);
    }

    #[test]
    fn test_coerce_keeps_garbage() {
        assert_eq!(coerce(FieldValue::from("abc")), FieldValue::from("abc"));
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(coerce(FieldValue::from(" 12.5 ")), FieldValue::Decimal(dec("12.5")));
        assert!(check(&FieldValue::from(" 12.5 ")).is_ok());
        assert!(check(&FieldValue::from("   ")).is_err());
    }

    #[test]
    fn test_scientific() {
        assert_eq!(coerce(FieldValue::from("1.5e2")), FieldValue::Decimal(dec("150")));
    }

    #[test]
    fn test_check() {
        assert!(check(&FieldValue::Decimal(dec("1"))).is_ok());
        assert_eq!(
            check(&FieldValue::from("abc")),
            Err(ValidationError::format("Field must be decimal"))
        );
        assert!(check(&FieldValue::Bool(true)).is_err());
    }
}
