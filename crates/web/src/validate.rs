//! Validation for the call request form.

use std::fmt;

use serde::Deserialize;

/// Number of characters a destination phone number must have.
///
/// The number is kept as a string end to end, so leading zeros count; the
/// integer parse below is only a format gate and its value is discarded.
pub const PHONE_NUMBER_LENGTH: usize = 10;

/// A call request as submitted from the home page form.
///
/// Field names match the form inputs. Absent fields deserialize as empty
/// strings so validation can report them instead of the extractor bailing
/// out first.
#[derive(Debug, Clone, Deserialize)]
pub struct CallForm {
    /// Destination phone number.
    #[serde(rename = "recipientPhoneNumber", default)]
    pub recipient_phone_number: String,
    /// Who is being called.
    #[serde(rename = "recipientContext", default)]
    pub recipient_context: String,
    /// What the call should accomplish.
    #[serde(rename = "objective", default)]
    pub objective: String,
    /// Extra context. May be empty.
    #[serde(rename = "otherContext", default)]
    pub other_context: String,
}

/// Why a call form was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required fields were left empty.
    MissingFields(Vec<&'static str>),
    /// Phone number does not parse as a base-10 integer.
    PhoneNotNumeric(String),
    /// Phone number has the wrong number of characters.
    PhoneWrongLength { actual: usize },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingFields(fields) => {
                write!(f, "missing required field(s): {}", fields.join(", "))
            }
            ValidationError::PhoneNotNumeric(number) => {
                write!(f, "phone number is not numeric: {}", number)
            }
            ValidationError::PhoneWrongLength { actual } => {
                write!(
                    f,
                    "phone number must be {} digits, got {}",
                    PHONE_NUMBER_LENGTH, actual
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a submitted call form.
///
/// Phone number, objective, and recipient context are required; the other
/// context is optional.
pub fn validate_call_form(form: &CallForm) -> Result<(), ValidationError> {
    let mut missing = Vec::new();
    if form.recipient_phone_number.is_empty() {
        missing.push("recipientPhoneNumber");
    }
    if form.objective.is_empty() {
        missing.push("objective");
    }
    if form.recipient_context.is_empty() {
        missing.push("recipientContext");
    }
    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    validate_phone_number(&form.recipient_phone_number)
}

/// Validate a destination phone number.
///
/// The string must parse as a base-10 integer and be exactly ten
/// characters long. Length governs, not value: `"0123456789"` passes.
pub fn validate_phone_number(number: &str) -> Result<(), ValidationError> {
    if number.parse::<i64>().is_err() {
        return Err(ValidationError::PhoneNotNumeric(number.to_string()));
    }

    if number.len() != PHONE_NUMBER_LENGTH {
        return Err(ValidationError::PhoneWrongLength {
            actual: number.len(),
        });
    }

    Ok(())
}
