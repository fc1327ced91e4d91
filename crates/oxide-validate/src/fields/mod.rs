//! Field definitions.
//!
//! A [`Field`] is one named input slot. Its [`FieldKind`] decides how raw
//! input is coerced in [`Field::set_value`] and which format check runs at the
//! end of [`Field::validate`].

mod boolean;
mod date;
mod decimal;

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{FormError, Result, ValidationError};
use crate::validation::Validator;
use crate::value::{FieldValue, RawValue};

pub use boolean::{BOOLEAN_MESSAGE, TRUTHY};
pub use date::{parse_local, DateOptions, DEFAULT_DATE_FORMAT};
pub use decimal::{parse as parse_decimal, DECIMAL_MESSAGE};

/// Key under which fields flagged with [`Field::common_error`] report.
pub const COMMON_ERROR_KEY: &str = "common";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][0-9A-Za-z_]*$").expect("name regex is valid"));

/// The type of a field and its type-specific options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldKind {
    /// Text, stored as given (after stripping).
    #[default]
    Text,
    /// Exact decimal number.
    Decimal,
    /// Boolean stored as 0 or 1.
    Boolean,
    /// Calendar date stored as local epoch seconds.
    Date(DateOptions),
}

/// A named, typed input.
pub struct Field {
    name: String,
    value: FieldValue,
    kind: FieldKind,
    required: bool,
    strip: bool,
    common_error: bool,
    validators: Vec<Box<dyn Validator>>,
}

impl std::fmt::Debug for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Field")
            .field("name", &self.name)
            .field("value", &self.value)
            .field("kind", &self.kind)
            .field("required", &self.required)
            .field("strip", &self.strip)
            .field("common_error", &self.common_error)
            .field("validators", &self.validators.len())
            .finish()
    }
}

impl Field {
    /// Creates a required, stripping field of the given kind.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidFieldName`] unless `name` is an identifier
    /// (`[A-Za-z_][0-9A-Za-z_]*`).
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Result<Self> {
        let name = name.into();
        if !NAME_RE.is_match(&name) {
            return Err(FormError::InvalidFieldName(name));
        }

        Ok(Self {
            name,
            value: FieldValue::Null,
            kind,
            required: true,
            strip: true,
            common_error: false,
            validators: Vec::new(),
        })
    }

    /// Creates a text field.
    ///
    /// # Errors
    ///
    /// See [`Field::new`].
    pub fn text(name: impl Into<String>) -> Result<Self> {
        Self::new(name, FieldKind::Text)
    }

    /// Creates a decimal field.
    ///
    /// # Errors
    ///
    /// See [`Field::new`].
    pub fn decimal(name: impl Into<String>) -> Result<Self> {
        Self::new(name, FieldKind::Decimal)
    }

    /// Creates a boolean field.
    ///
    /// # Errors
    ///
    /// See [`Field::new`].
    pub fn boolean(name: impl Into<String>) -> Result<Self> {
        Self::new(name, FieldKind::Boolean)
    }

    /// Creates a date field using [`DEFAULT_DATE_FORMAT`].
    ///
    /// # Errors
    ///
    /// See [`Field::new`].
    pub fn date(name: impl Into<String>) -> Result<Self> {
        Self::new(name, FieldKind::Date(DateOptions::new()))
    }

    /// Creates a date field with explicit options.
    ///
    /// # Errors
    ///
    /// See [`Field::new`].
    pub fn date_with(name: impl Into<String>, options: DateOptions) -> Result<Self> {
        Self::new(name, FieldKind::Date(options))
    }

    /// Makes the field optional.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Sets whether the field is required.
    #[must_use]
    pub const fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Keeps surrounding whitespace of textual input.
    #[must_use]
    pub const fn no_strip(mut self) -> Self {
        self.strip = false;
        self
    }

    /// Reports this field's failures under [`COMMON_ERROR_KEY`].
    #[must_use]
    pub const fn common_error(mut self) -> Self {
        self.common_error = true;
        self
    }

    /// Adds a validator. Validators run in the order they were added.
    #[must_use]
    pub fn validator(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// Sets an initial value.
    ///
    /// The value is coerced immediately, so call this after the other
    /// builder methods.
    #[must_use]
    pub fn initial(mut self, value: impl Into<RawValue>) -> Self {
        self.set_value(value);
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the current coerced value.
    #[must_use]
    pub const fn value(&self) -> &FieldValue {
        &self.value
    }

    /// Returns the field kind.
    #[must_use]
    pub const fn kind(&self) -> &FieldKind {
        &self.kind
    }

    /// Returns whether a value is required.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns whether textual input is stripped.
    #[must_use]
    pub const fn strips(&self) -> bool {
        self.strip
    }

    /// Returns whether failures go to the common bucket.
    #[must_use]
    pub const fn uses_common_error(&self) -> bool {
        self.common_error
    }

    /// Returns the key under which this field's failures are reported.
    #[must_use]
    pub fn error_key(&self) -> &str {
        if self.common_error {
            COMMON_ERROR_KEY
        } else {
            &self.name
        }
    }

    /// Returns the number of attached validators.
    #[must_use]
    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    /// Assigns a raw value, coercing it according to the field kind.
    ///
    /// Never fails. Input that cannot be coerced is either kept for
    /// [`Field::validate`] to reject or cleared to `Null`, depending on kind.
    pub fn set_value(&mut self, raw: impl Into<RawValue>) {
        let value = match raw.into() {
            RawValue::Text(s) if self.strip => FieldValue::Text(s.trim().to_string()),
            other => FieldValue::from(other),
        };

        self.value = match &self.kind {
            FieldKind::Text => value,
            FieldKind::Decimal => decimal::coerce(value),
            FieldKind::Boolean => boolean::coerce(value),
            FieldKind::Date(options) => date::coerce(value, options),
        };
    }

    /// Validates the current value.
    ///
    /// An empty value fails with [`ValidationError::Required`] on a required
    /// field and passes on an optional one without running anything else.
    /// Otherwise validators run in order and the first failure is returned,
    /// followed by the kind's own format check.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        if self.value.is_empty() {
            return if self.required {
                Err(ValidationError::Required)
            } else {
                Ok(())
            };
        }

        for validator in &self.validators {
            validator.validate(&self.value)?;
        }

        match &self.kind {
            FieldKind::Text | FieldKind::Date(_) => Ok(()),
            FieldKind::Decimal => decimal::check(&self.value),
            FieldKind::Boolean => boolean::check(&self.value),
        }
    }
}
