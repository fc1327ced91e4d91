//! Forms: ordered collections of fields plus their validation state.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::error::{ErrorKind, ValidationErrors, UNKNOWN_MESSAGE};
use crate::fields::Field;
use crate::value::{FieldValue, RawData};

/// An ordered set of fields and the result of their last validation.
///
/// A form never fails. Validation outcome is read from [`Form::is_valid`]
/// and [`Form::errors`].
#[derive(Debug, Default)]
pub struct Form {
    fields: Vec<Field>,
    errors: ValidationErrors,
    valid: bool,
}

impl Form {
    /// Creates a form and assigns every value in `data` whose key names one
    /// of the fields. Other fields keep their current value.
    #[must_use]
    pub fn new(fields: Vec<Field>, data: &RawData) -> Self {
        let mut form = Self {
            fields,
            errors: ValidationErrors::new(),
            valid: false,
        };
        form.assign(data);
        form
    }

    /// Creates a form builder.
    #[must_use]
    pub fn builder() -> FormBuilder {
        FormBuilder::new()
    }

    /// Assigns a new set of raw values and invalidates previous results.
    pub fn bind(&mut self, data: &RawData) {
        self.assign(data);
        self.errors.clear();
        self.valid = false;
    }

    fn assign(&mut self, data: &RawData) {
        for field in &mut self.fields {
            if let Some(raw) = data.get(field.name()) {
                field.set_value(raw.clone());
            }
        }
    }

    /// Appends a field. Errors are cleared and the form must be validated
    /// again.
    pub fn add(&mut self, field: Field) {
        self.fields.push(field);
        self.errors.clear();
        self.valid = false;
    }

    /// Returns the fields in insertion order.
    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the first field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name() == name)
    }

    /// Returns the first field with the given name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name() == name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the current value of every field, keyed by name.
    ///
    /// Values reflect the last coercion, whatever the validation outcome.
    /// If two fields share a name the later one wins.
    #[must_use]
    pub fn values(&self) -> HashMap<String, FieldValue> {
        self.fields
            .iter()
            .map(|f| (f.name().to_string(), f.value().clone()))
            .collect()
    }

    /// Records an error found outside the per-field checks, such as a
    /// username that is already taken.
    ///
    /// The message replaces any error under the field's error key and marks
    /// the form invalid. Errors of other fields are kept. Returns `false`
    /// and changes nothing if no field has that name.
    pub fn error(&mut self, field_name: &str, message: impl Into<String>) -> bool {
        let Some(field) = self.field(field_name) else {
            debug!(field = field_name, "ignoring error for unknown field");
            return false;
        };

        let key = field.error_key().to_string();
        self.errors.set(&key, message);
        self.valid = false;
        true
    }

    /// Records [`UNKNOWN_MESSAGE`] for a field, as [`Form::error`] does.
    pub fn error_default(&mut self, field_name: &str) -> bool {
        self.error(field_name, UNKNOWN_MESSAGE)
    }

    /// Validates every field and rebuilds the error report from scratch.
    ///
    /// All fields are checked. When several fields report under the same key
    /// the last one wins. Returns whether the form is valid.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();

        for field in &self.fields {
            let key = field.error_key();
            match field.validate() {
                Ok(()) => trace!(field = field.name(), "field valid"),
                Err(err) => {
                    if err.kind() == ErrorKind::Unknown {
                        warn!(field = field.name(), error = %err, "unexpected validation failure");
                    } else {
                        trace!(field = field.name(), key, error = %err, "field invalid");
                    }
                    self.errors.set(key, err.message());
                }
            }
        }

        self.valid = self.errors.is_empty();
        debug!(
            fields = self.fields.len(),
            errors = self.errors.len(),
            valid = self.valid,
            "form validated"
        );
        self.valid
    }

    /// Returns whether the last validation succeeded.
    ///
    /// False before the first call to [`Form::validate`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// Returns the current error report.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }
}

/// A simple form builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    fields: Vec<Field>,
}

impl FormBuilder {
    /// Creates a new form builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    /// Builds the form and assigns `data`.
    #[must_use]
    pub fn build(self, data: &RawData) -> Form {
        Form::new(self.fields, data)
    }
}
