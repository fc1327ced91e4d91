//! Field validator hooks.
//!
//! A [`Validator`] receives the coerced value of a field and either accepts
//! it or returns a [`ValidationError`]. Hooks run only on non-empty values;
//! required-ness is checked by the field itself before any hook runs.

use std::sync::LazyLock;

use bigdecimal::BigDecimal;
use regex::Regex;

use crate::error::ValidationError;
use crate::value::FieldValue;

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a coerced value.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError::Format`] describing the rejection, or
    /// [`ValidationError::Unknown`] if the value cannot be checked at all.
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError>;
}

impl<F> Validator for F
where
    F: Fn(&FieldValue) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        self(value)
    }
}

fn expect_text(value: &FieldValue) -> Result<&str, ValidationError> {
    value
        .as_text()
        .ok_or_else(|| ValidationError::unknown(format!("expected text, got {value:?}")))
}

/// Validator that enforces a maximum length in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    #[must_use]
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if expect_text(value)?.chars().count() > self.max_length {
            Err(ValidationError::format(&self.message))
        } else {
            Ok(())
        }
    }
}

/// Validator that enforces a minimum length in characters.
#[derive(Debug, Clone)]
pub struct MinLengthValidator {
    min_length: usize,
    message: String,
}

impl MinLengthValidator {
    /// Creates a new MinLengthValidator.
    #[must_use]
    pub fn new(min_length: usize) -> Self {
        Self {
            min_length,
            message: format!("Ensure this value has at least {min_length} characters."),
        }
    }

    /// Creates a new MinLengthValidator with custom message.
    pub fn with_message(min_length: usize, message: impl Into<String>) -> Self {
        Self {
            min_length,
            message: message.into(),
        }
    }
}

impl Validator for MinLengthValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if expect_text(value)?.chars().count() < self.min_length {
            Err(ValidationError::format(&self.message))
        } else {
            Ok(())
        }
    }
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("email regex is valid")
});

/// Validator for email addresses.
#[derive(Debug, Clone)]
pub struct EmailValidator {
    message: String,
}

impl EmailValidator {
    /// Creates a new EmailValidator with default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "Enter a valid email address.".to_string(),
        }
    }

    /// Creates a new EmailValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for EmailValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for EmailValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if EMAIL_RE.is_match(expect_text(value)?) {
            Ok(())
        } else {
            Err(ValidationError::format(&self.message))
        }
    }
}

/// Validator for http(s) URLs.
#[derive(Debug, Clone)]
pub struct UrlValidator {
    message: String,
}

impl UrlValidator {
    /// Creates a new UrlValidator with default message.
    #[must_use]
    pub fn new() -> Self {
        Self {
            message: "Enter a valid URL.".to_string(),
        }
    }

    /// Creates a new UrlValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for UrlValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for UrlValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let text = expect_text(value)?;
        if text.starts_with("http://") || text.starts_with("https://") {
            Ok(())
        } else {
            Err(ValidationError::format(&self.message))
        }
    }
}

/// Validator using a custom regex pattern.
#[derive(Debug, Clone)]
pub struct RegexValidator {
    pattern: Regex,
    message: String,
}

impl RegexValidator {
    /// Creates a new RegexValidator.
    ///
    /// # Errors
    ///
    /// Returns the regex compilation error for an invalid pattern.
    pub fn new(pattern: &str, message: impl Into<String>) -> Result<Self, regex::Error> {
        Ok(Self {
            pattern: Regex::new(pattern)?,
            message: message.into(),
        })
    }
}

impl Validator for RegexValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        if self.pattern.is_match(expect_text(value)?) {
            Ok(())
        } else {
            Err(ValidationError::format(&self.message))
        }
    }
}

/// Validator for a numeric range with exact decimal bounds.
///
/// Accepts decimal and integer values, and text that parses as a decimal.
#[derive(Debug, Clone)]
pub struct RangeValidator {
    min: Option<BigDecimal>,
    max: Option<BigDecimal>,
    message: String,
}

impl RangeValidator {
    /// Creates a new RangeValidator with min and max bounds.
    #[must_use]
    pub fn new(min: Option<BigDecimal>, max: Option<BigDecimal>) -> Self {
        let message = match (&min, &max) {
            (Some(min), Some(max)) => format!("Value must be between {min} and {max}."),
            (Some(min), None) => format!("Value must be at least {min}."),
            (None, Some(max)) => format!("Value must be at most {max}."),
            (None, None) => "Invalid value.".to_string(),
        };
        Self { min, max, message }
    }

    /// Creates a new RangeValidator with custom message.
    pub fn with_message(
        min: Option<BigDecimal>,
        max: Option<BigDecimal>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            min,
            max,
            message: message.into(),
        }
    }
}

impl Validator for RangeValidator {
    fn validate(&self, value: &FieldValue) -> Result<(), ValidationError> {
        let num = match value {
            FieldValue::Decimal(d) => d.clone(),
            FieldValue::Int(n) => BigDecimal::from(*n),
            FieldValue::Text(s) => crate::fields::parse_decimal(s)
                .ok_or_else(|| ValidationError::format("Enter a valid number."))?,
            other => {
                return Err(ValidationError::unknown(format!(
                    "expected a number, got {other:?}"
                )))
            }
        };

        let below = self.min.as_ref().is_some_and(|min| &num < min);
        let above = self.max.as_ref().is_some_and(|max| &num > max);
        if below || above {
            return Err(ValidationError::format(&self.message));
        }

        Ok(())
    }
}
