//! # oxide-validate
//!
//! Declarative field coercion and validation with aggregated per-field
//! errors.
//!
//! This crate provides:
//! - Typed fields (text, decimal, boolean, date) that coerce raw input
//! - Required-value enforcement and per-type format checks
//! - Pluggable validator hooks
//! - Forms that validate every field and collect one message per key,
//!   optionally routing failures into a shared `"common"` entry
//!
//! Where the raw values come from (an HTTP request, a CLI, a file) is up to
//! the caller.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_validate::{raw_data, Field, FieldValue, Form};
//! use bigdecimal::BigDecimal;
//!
//! # fn main() -> oxide_validate::Result<()> {
//! let data = raw_data([("amount", "12.5"), ("agree", "on"), ("email", "")]);
//!
//! let mut form = Form::new(
//!     vec![
//!         Field::decimal("amount")?,
//!         Field::boolean("agree")?,
//!         Field::text("email")?,
//!     ],
//!     &data,
//! );
//!
//! assert!(!form.validate());
//! assert_eq!(form.errors().message("email"), Some("Field is required"));
//!
//! let values = form.values();
//! assert_eq!(values["amount"], FieldValue::Decimal("12.5".parse::<BigDecimal>().unwrap()));
//! assert_eq!(values["agree"], FieldValue::Int(1));
//! # Ok(())
//! # }
//! ```
//!
//! ## Validators
//!
//! ```rust
//! use oxide_validate::validation::{EmailValidator, MaxLengthValidator};
//! use oxide_validate::{raw_data, Field, FieldValue, Form, ValidationError};
//!
//! # fn main() -> oxide_validate::Result<()> {
//! let not_reserved = |value: &FieldValue| match value.as_text() {
//!     Some("admin" | "root") => Err(ValidationError::format("Name is reserved")),
//!     _ => Ok(()),
//! };
//!
//! let mut form = Form::builder()
//!     .field(
//!         Field::text("username")?
//!             .validator(MaxLengthValidator::new(20))
//!             .validator(not_reserved),
//!     )
//!     .field(Field::text("email")?.validator(EmailValidator::new()))
//!     .build(&raw_data([("username", "admin"), ("email", "a@example.com")]));
//!
//! assert!(!form.validate());
//! assert_eq!(form.errors().message("username"), Some("Name is reserved"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Errors found elsewhere
//!
//! ```rust
//! use oxide_validate::{raw_data, Field, Form};
//!
//! # fn main() -> oxide_validate::Result<()> {
//! let mut form = Form::new(
//!     vec![Field::text("username")?],
//!     &raw_data([("username", "bob")]),
//! );
//! assert!(form.validate());
//!
//! form.error("username", "Username already taken");
//! assert!(!form.is_valid());
//! assert_eq!(form.errors().message("username"), Some("Username already taken"));
//! # Ok(())
//! # }
//! ```

mod error;
pub mod fields;
mod form;
pub mod validation;
mod value;

pub use error::{
    ErrorKind, ErrorMessage, FormError, Result, ValidationError, ValidationErrors,
    REQUIRED_MESSAGE, UNKNOWN_MESSAGE,
};
pub use fields::{DateOptions, Field, FieldKind, COMMON_ERROR_KEY};
pub use form::{Form, FormBuilder};
pub use value::{raw_data, raw_data_from_json, FieldValue, RawData, RawValue};
