//!
//! Formforge Core - form-definition state model and mutation protocol
//!
//! This crate defines the in-memory model of a multi-step form (fields,
//! steps, the builder-session definition), the operations that mutate it,
//! the validation layers that gate step transitions and submissions, the
//! built-in templates, and the drop routing for the authoring canvas.
//! Publishing and the external store boundary live in `formforge-store`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

/// Domain layer - fields, steps, and the session form definition
pub mod domain;

/// The mutation protocol driving the builder session
pub mod session;

/// Step-transition and answer validation
pub mod validation;

/// Drop routing for the authoring canvas
pub mod canvas;

/// Built-in form templates
pub mod templates;

/// Error types
pub mod error;

// Re-export main API types for easy use
pub use canvas::{handle_drop, DropPayload};
pub use domain::field::{FieldDefinition, FieldId, FieldPatch, FieldType};
pub use domain::form_definition::FormDefinition;
pub use domain::step::{StepDefinition, StepId};
pub use error::CoreError;
pub use session::FormAction;
pub use validation::{validate_step_transition, ValidationError};
