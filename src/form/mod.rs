//! Typed, validatable form fields.
//!
//! A [`FormField`] carries the raw input of one form control together with a
//! [`FieldKind`] holding the constraints of that kind of field. Calling
//! [`FormField::validate`] runs the rules for its kind and records a
//! [`ValidationErrorCode`] on failure; [`FormField::client_field`] produces the
//! serializable view handed back to the browser.
//!
//! ```
//! use booking_lib::form::{FormField, ValidationErrorCode};
//!
//! let mut email = FormField::email("f1", "  a@b.com ");
//! assert!(email.validate());
//! assert_eq!(email.safe_value(), "a@b.com");
//!
//! let mut amount = FormField::number("f2", "12.345").with_decimals(2);
//! assert!(!amount.validate());
//! assert_eq!(
//!     amount.validation_error(),
//!     Some(ValidationErrorCode::NumberInvalid)
//! );
//! ```

mod error_code;
mod field;
pub mod rules;

pub use error_code::ValidationErrorCode;
pub use field::{validate_all, ClientConstraints, ClientField, FieldKind, FormField};
