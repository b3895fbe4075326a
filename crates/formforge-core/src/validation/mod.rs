//! Validation engine
//!
//! Two advisory layers, both evaluated at the UI boundary rather than
//! continuously enforced on the data model:
//!
//! - step-transition validation of the *field definitions* in the current
//!   step during authoring ([`validate_step_transition`])
//! - answer validation of end-user input against a published step
//!   ([`answers::validate_answers`])
//!
//! A failed check never mutates state; control returns to the user.

use crate::domain::step::StepDefinition;
use std::error::Error;
use std::fmt;

pub mod answers;

/// A single validation failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error code (a constant identifier from [`error_codes`])
    pub code: &'static str,

    /// Human-readable error message
    pub message: String,

    /// Optional path to the location of the error (e.g., "fields[2]")
    pub path: Option<String>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(path) = &self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl Error for ValidationError {}

/// Validation error codes
pub mod error_codes {
    /// A required field has an empty label
    pub const MISSING_LABEL: &str = "ERR_FORM_VALIDATION_MISSING_LABEL";

    /// A required field has no answer
    pub const MISSING_ANSWER: &str = "ERR_FORM_VALIDATION_MISSING_ANSWER";

    /// An answer is shorter than the field's minimum length
    pub const ANSWER_TOO_SHORT: &str = "ERR_FORM_VALIDATION_ANSWER_TOO_SHORT";

    /// An answer is longer than the field's maximum length
    pub const ANSWER_TOO_LONG: &str = "ERR_FORM_VALIDATION_ANSWER_TOO_LONG";

    /// An answer does not match the field's pattern
    pub const PATTERN_MISMATCH: &str = "ERR_FORM_VALIDATION_PATTERN_MISMATCH";

    /// The field's pattern source does not compile
    pub const INVALID_PATTERN: &str = "ERR_FORM_VALIDATION_INVALID_PATTERN";

    /// A dropdown answer is not one of the field's options
    pub const UNKNOWN_OPTION: &str = "ERR_FORM_VALIDATION_UNKNOWN_OPTION";

    /// An answer has the wrong JSON type for its field
    pub const INVALID_ANSWER_TYPE: &str = "ERR_FORM_VALIDATION_INVALID_ANSWER_TYPE";
}

/// Gate a step transition or submission during authoring
///
/// Every field in the step with `required = true` must have a non-empty
/// trimmed label. The first offending field aborts the check; its label is
/// reported as "Untitled" when empty. This validates the field
/// *definitions*, not end-user answers.
pub fn validate_step_transition(step: &StepDefinition) -> Result<(), ValidationError> {
    for (index, field) in step.fields.iter().enumerate() {
        if field.required && field.label.trim().is_empty() {
            return Err(ValidationError {
                code: error_codes::MISSING_LABEL,
                message: format!("Field \"{}\" label is required", field.display_label()),
                path: Some(format!("fields[{}]", index)),
            });
        }
    }
    Ok(())
}
