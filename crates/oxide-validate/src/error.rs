//! Error types for fields and forms.

use std::collections::HashMap;

use serde::Serialize;
use thiserror::Error;

/// Message reported for a missing value on a required field.
pub const REQUIRED_MESSAGE: &str = "Field is required";

/// Message reported for failures that are neither required nor format errors.
pub const UNKNOWN_MESSAGE: &str = "Unknown error";

/// Errors raised while assembling fields and forms.
///
/// These describe misuse of the API. Validation failures of submitted values
/// are never reported through this type; see [`ValidationError`].
#[derive(Debug, Error)]
pub enum FormError {
    /// Field name is not an identifier.
    #[error("invalid field name: {0:?}")]
    InvalidFieldName(String),

    /// A textual field description could not be understood.
    #[error("invalid field spec: {0}")]
    InvalidFieldSpec(String),

    /// Raw input data could not be decoded.
    #[error("failed to parse form data: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Classification of a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Value missing on a required field.
    Required,
    /// Value present but malformed or rejected by a validator.
    Format,
    /// Anything else.
    Unknown,
}

/// Failure of a single field's validation step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value missing on a required field.
    #[error("Field is required")]
    Required,

    /// Value present but rejected, with a human-readable message.
    #[error("{0}")]
    Format(String),

    /// Internal failure. The cause is kept for logging only.
    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl ValidationError {
    /// Creates a format error with the given message.
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Wraps an arbitrary cause as an unknown error.
    pub fn unknown(cause: impl std::fmt::Display) -> Self {
        Self::Unknown(cause.to_string())
    }

    /// Returns the classification of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Required => ErrorKind::Required,
            Self::Format(_) => ErrorKind::Format,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// Returns the message shown to users.
    ///
    /// Unknown errors always render as [`UNKNOWN_MESSAGE`]; their cause is
    /// never exposed here.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Required => REQUIRED_MESSAGE,
            Self::Format(message) => message,
            Self::Unknown(_) => UNKNOWN_MESSAGE,
        }
    }
}

/// A single entry of the error report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorMessage {
    /// The user-facing message.
    pub message: String,
}

impl ErrorMessage {
    /// Creates a new entry.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Validation errors keyed by field name or by the common bucket.
///
/// Each key holds exactly one message; setting a key again replaces it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    /// Errors keyed by error key.
    pub errors: HashMap<String, ErrorMessage>,
}

impl ValidationErrors {
    /// Creates a new empty ValidationErrors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: HashMap::new(),
        }
    }

    /// Sets the error for a key, replacing any previous one.
    pub fn set(&mut self, key: &str, message: impl Into<String>) {
        self.errors
            .insert(key.to_string(), ErrorMessage::new(message));
    }

    /// Removes all errors.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Returns whether there are any errors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of keys with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the error for a specific key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ErrorMessage> {
        self.errors.get(key)
    }

    /// Returns the message for a specific key.
    #[must_use]
    pub fn message(&self, key: &str) -> Option<&str> {
        self.errors.get(key).map(|e| e.message.as_str())
    }

    /// Returns whether an error is recorded for the key.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.errors.contains_key(key)
    }

    /// Iterates over `(key, message)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.errors
            .iter()
            .map(|(key, e)| (key.as_str(), e.message.as_str()))
    }

    /// Renders the report as a JSON object of `{key: {message}}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::Value::Object(
            self.errors
                .iter()
                .map(|(key, e)| (key.clone(), serde_json::json!({ "message": e.message })))
                .collect(),
        )
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut keys: Vec<&String> = self.errors.keys().collect();
        keys.sort();
        for key in keys {
            writeln!(f, "{key}: {}", self.errors[key].message)?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_by_kind() {
        assert_eq!(ValidationError::Required.message(), "Field is required");
        assert_eq!(ValidationError::format("bad").message(), "bad");
        assert_eq!(
            ValidationError::unknown("db offline").message(),
            "Unknown error"
        );
        assert_eq!(ValidationError::Required.kind(), ErrorKind::Required);
        assert_eq!(ValidationError::format("x").kind(), ErrorKind::Format);
    }

    #[test]
    fn test_unknown_display_keeps_cause() {
        let err = ValidationError::unknown("db offline");
        assert_eq!(err.to_string(), "Unknown error: db offline");
    }

    #[test]
    fn test_set_replaces_message() {
        let mut errors = ValidationErrors::new();
        errors.set("common", "first");
        errors.set("common", "second");
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.message("common"), Some("second"));
        assert_eq!(errors.get("common"), Some(&ErrorMessage::new("second")));
        assert_eq!(errors.get("other"), None);
    }

    #[test]
    fn test_iter_pairs() {
        let mut errors = ValidationErrors::new();
        errors.set("a", "one");
        errors.set("b", "two");
        let mut pairs: Vec<(&str, &str)> = errors.iter().collect();
        pairs.sort_unstable();
        assert_eq!(pairs, vec![("a", "one"), ("b", "two")]);
    }

    #[test]
    fn test_json_shape() {
        let mut errors = ValidationErrors::new();
        errors.set("email", "Field is required");
        assert_eq!(
            errors.to_json(),
            serde_json::json!({ "email": { "message": "Field is required" } })
        );
        assert_eq!(
            serde_json::to_value(&errors).unwrap(),
            errors.to_json()
        );
    }

    #[test]
    fn test_display_sorted() {
        let mut errors = ValidationErrors::new();
        errors.set("b", "two");
        errors.set("a", "one");
        assert_eq!(errors.to_string(), "a: one\nb: two\n");
    }
}
