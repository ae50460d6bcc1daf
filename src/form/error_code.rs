use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Symbolic validation failure recorded on a [`FormField`](super::FormField).
///
/// Serializes to the `ERR_FORM_VALIDATION_*` constants the client translates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum ValidationErrorCode {
    /// A required field was left empty.
    #[serde(rename = "ERR_FORM_VALIDATION_VALUE_UNDEFINED")]
    #[error("ERR_FORM_VALIDATION_VALUE_UNDEFINED")]
    ValueUndefined,

    #[serde(rename = "ERR_FORM_VALIDATION_EMAIL_TOO_LONG")]
    #[error("ERR_FORM_VALIDATION_EMAIL_TOO_LONG")]
    EmailTooLong,

    #[serde(rename = "ERR_FORM_VALIDATION_EMAIL_INVALID")]
    #[error("ERR_FORM_VALIDATION_EMAIL_INVALID")]
    EmailInvalid,

    /// Not a number, or more decimal places than the field allows.
    #[serde(rename = "ERR_FORM_VALIDATION_NUMBER_INVALID")]
    #[error("ERR_FORM_VALIDATION_NUMBER_INVALID")]
    NumberInvalid,
}

impl ValidationErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ValueUndefined => "ERR_FORM_VALIDATION_VALUE_UNDEFINED",
            Self::EmailTooLong => "ERR_FORM_VALIDATION_EMAIL_TOO_LONG",
            Self::EmailInvalid => "ERR_FORM_VALIDATION_EMAIL_INVALID",
            Self::NumberInvalid => "ERR_FORM_VALIDATION_NUMBER_INVALID",
        }
    }
}
