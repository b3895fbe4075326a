/// Field definitions and patches
pub mod field;

/// Step definitions
pub mod step;

/// The builder-session form definition
pub mod form_definition;
