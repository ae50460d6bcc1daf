use serde::Serialize;

use super::rules::{self, EMAIL_FLAGS, EMAIL_PATTERN};
use super::ValidationErrorCode;

/// The kind of a form field and the constraints specific to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Email {
        /// Maximum length of the trimmed address in characters.
        max_length: Option<usize>,
    },
    Number {
        /// Maximum number of fractional digits.
        decimals: Option<u32>,
    },
}

impl FieldKind {
    /// The `type` sent to the client.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Email { .. } => "email",
            Self::Number { .. } => "number",
        }
    }
}

/// One submitted form control.
///
/// Built from the raw request value, configured through the `with_*`
/// methods, then validated once before the values are used.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    id: String,
    value: String,
    label: Option<String>,
    required: bool,
    validation_error: Option<ValidationErrorCode>,
    kind: FieldKind,
}

impl FormField {
    fn new(id: impl Into<String>, value: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
            label: None,
            required: true,
            validation_error: None,
            kind,
        }
    }

    /// A required email field without a length limit.
    pub fn email(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(id, value, FieldKind::Email { max_length: None })
    }

    /// A required number field accepting any precision.
    pub fn number(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(id, value, FieldKind::Number { decimals: None })
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Limits the address length. Has no effect on non-email fields.
    pub fn with_max_length(mut self, length: usize) -> Self {
        if let FieldKind::Email { max_length } = &mut self.kind {
            *max_length = Some(length);
        }
        self
    }

    /// Limits the fractional digits. Has no effect on non-number fields.
    pub fn with_decimals(mut self, count: u32) -> Self {
        if let FieldKind::Number { decimals } = &mut self.kind {
            *decimals = Some(count);
        }
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// The value exactly as submitted.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    pub fn is_required(&self) -> bool {
        self.required
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    pub fn max_length(&self) -> Option<usize> {
        match self.kind {
            FieldKind::Email { max_length } => max_length,
            FieldKind::Number { .. } => None,
        }
    }

    pub fn decimals(&self) -> Option<u32> {
        match self.kind {
            FieldKind::Number { decimals } => decimals,
            FieldKind::Email { .. } => None,
        }
    }

    /// The error recorded by the last [`validate`](Self::validate) call.
    pub fn validation_error(&self) -> Option<ValidationErrorCode> {
        self.validation_error
    }

    /// The trimmed value used for validation and storage.
    pub fn safe_value(&self) -> &str {
        self.value.trim()
    }

    /// The parsed value of a number field, `None` for other kinds or when the
    /// input is not a plain decimal number.
    pub fn number_value(&self) -> Option<f64> {
        match self.kind {
            FieldKind::Number { .. } if rules::is_number(self.safe_value(), None) => {
                self.safe_value().parse().ok()
            }
            _ => None,
        }
    }

    /// Runs the rules of this field's kind, stopping at the first failure.
    ///
    /// Returns `true` when the value is acceptable; otherwise the failure is
    /// available from [`validation_error`](Self::validation_error).
    pub fn validate(&mut self) -> bool {
        self.validation_error = self.check().err();
        self.validation_error.is_none()
    }

    fn check(&self) -> Result<(), ValidationErrorCode> {
        let value = self.safe_value();

        if value.is_empty() {
            return if self.required {
                Err(ValidationErrorCode::ValueUndefined)
            } else {
                Ok(())
            };
        }

        match self.kind {
            FieldKind::Email { max_length } => rules::validate_email(value, max_length),
            FieldKind::Number { decimals } => rules::validate_number(value, decimals),
        }
    }

    /// The view of this field sent back to the browser.
    pub fn client_field(&self) -> ClientField {
        let constraints = match self.kind {
            FieldKind::Email { max_length } => ClientConstraints::Email {
                max_length,
                validation: [EMAIL_PATTERN.to_string(), EMAIL_FLAGS.to_string()],
            },
            FieldKind::Number { decimals } => ClientConstraints::Number { decimals },
        };

        ClientField {
            id: self.id.clone(),
            label: self.label.clone(),
            value: self.safe_value().to_string(),
            error: self.validation_error,
            required: self.required,
            constraints,
        }
    }
}

/// Validates every field, so each one carries its own error afterwards.
///
/// Returns `true` only if all fields passed.
pub fn validate_all(fields: &mut [FormField]) -> bool {
    fields
        .iter_mut()
        .fold(true, |all_valid, field| field.validate() && all_valid)
}

/// Serializable form field as consumed by the client.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientField {
    pub id: String,
    pub label: Option<String>,
    pub value: String,
    pub error: Option<ValidationErrorCode>,
    pub required: bool,
    #[serde(flatten)]
    pub constraints: ClientConstraints,
}

/// Kind-specific part of a [`ClientField`], tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ClientConstraints {
    #[serde(rename_all = "camelCase")]
    Email {
        max_length: Option<usize>,
        /// Pattern source and flags, for client-side pre-validation.
        validation: [String; 2],
    },
    Number { decimals: Option<u32> },
}
