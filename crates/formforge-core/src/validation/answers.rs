//! Answer validation for the fill-out consumer
//!
//! Mirrors the native input-validation semantics the renderer relies on,
//! keyed off the same `required`, `min_length`, `max_length`, and
//! `pattern` attributes as the field definitions. Constraints that do not
//! apply to a field's type are never acted on, even if stale values are
//! present on the definition.

use crate::domain::field::{FieldDefinition, FieldId, FieldType};
use crate::domain::step::StepDefinition;
use crate::validation::{error_codes, ValidationError};
use regex::Regex;
use serde_json::Value;
use std::collections::HashMap;

/// End-user answers for one step, keyed by field id
///
/// Text, textarea, date, and dropdown answers are strings; checkbox
/// answers are booleans. Absent keys mean "not answered".
pub type StepAnswers = HashMap<FieldId, Value>;

/// Validate a step's answers against its field definitions
///
/// Returns every failure found, in field order. An empty vector means the
/// step is ready to advance or submit.
pub fn validate_answers(step: &StepDefinition, answers: &StepAnswers) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (index, field) in step.fields.iter().enumerate() {
        let path = format!("fields[{}]", index);
        validate_field_answer(field, answers.get(&field.id), &path, &mut errors);
    }

    errors
}

fn validate_field_answer(
    field: &FieldDefinition,
    answer: Option<&Value>,
    path: &str,
    errors: &mut Vec<ValidationError>,
) {
    if field.field_type == FieldType::Checkbox {
        let checked = match answer {
            None => false,
            Some(Value::Bool(b)) => *b,
            Some(_) => {
                errors.push(ValidationError {
                    code: error_codes::INVALID_ANSWER_TYPE,
                    message: format!(
                        "Field \"{}\" expects a boolean answer",
                        field.display_label()
                    ),
                    path: Some(path.to_string()),
                });
                return;
            }
        };
        if field.required && !checked {
            errors.push(missing_answer(field, path));
        }
        return;
    }

    // All remaining types answer with a string
    let text = match answer {
        None => None,
        Some(Value::String(s)) => Some(s.as_str()),
        Some(_) => {
            errors.push(ValidationError {
                code: error_codes::INVALID_ANSWER_TYPE,
                message: format!("Field \"{}\" expects a text answer", field.display_label()),
                path: Some(path.to_string()),
            });
            return;
        }
    };

    let text = match text {
        // The renderer treats an empty string the same as no answer
        None | Some("") => {
            if field.required {
                errors.push(missing_answer(field, path));
            }
            return;
        }
        Some(text) => text,
    };

    if field.field_type == FieldType::Dropdown {
        let options = field.options.as_deref().unwrap_or(&[]);
        if !options.iter().any(|opt| opt == text) {
            errors.push(ValidationError {
                code: error_codes::UNKNOWN_OPTION,
                message: format!(
                    "\"{}\" is not an option of field \"{}\"",
                    text,
                    field.display_label()
                ),
                path: Some(path.to_string()),
            });
        }
        return;
    }

    // Length and pattern constraints only apply to text and textarea;
    // stale constraints on other types are ignored
    if !field.field_type.supports_text_constraints() {
        return;
    }

    let len = text.chars().count() as u32;
    if let Some(min) = field.min_length {
        if len < min {
            errors.push(ValidationError {
                code: error_codes::ANSWER_TOO_SHORT,
                message: format!(
                    "Field \"{}\" requires at least {} characters",
                    field.display_label(),
                    min
                ),
                path: Some(path.to_string()),
            });
        }
    }
    if let Some(max) = field.max_length {
        if len > max {
            errors.push(ValidationError {
                code: error_codes::ANSWER_TOO_LONG,
                message: format!(
                    "Field \"{}\" allows at most {} characters",
                    field.display_label(),
                    max
                ),
                path: Some(path.to_string()),
            });
        }
    }

    if let Some(pattern) = &field.pattern {
        // Anchor the whole value, matching native input pattern semantics
        match Regex::new(&format!("^(?:{})$", pattern)) {
            Ok(regex) => {
                if !regex.is_match(text) {
                    errors.push(ValidationError {
                        code: error_codes::PATTERN_MISMATCH,
                        message: format!(
                            "Field \"{}\" answer does not match the expected format",
                            field.display_label()
                        ),
                        path: Some(path.to_string()),
                    });
                }
            }
            Err(_) => errors.push(ValidationError {
                code: error_codes::INVALID_PATTERN,
                message: format!(
                    "Field \"{}\" has an invalid pattern: {}",
                    field.display_label(),
                    pattern
                ),
                path: Some(path.to_string()),
            }),
        }
    }
}

fn missing_answer(field: &FieldDefinition, path: &str) -> ValidationError {
    ValidationError {
        code: error_codes::MISSING_ANSWER,
        message: format!("Field \"{}\" is required", field.display_label()),
        path: Some(path.to_string()),
    }
}
