use crate::domain::field::{FieldDefinition, FieldId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Identifier of a step, unique within the form definition
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StepId(pub String);

impl StepId {
    /// Generate a fresh random step id
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Display for StepId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for StepId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A named, ordered group of fields shown together as one screen of a
/// multi-step form
///
/// Field order is meaningful: it is both display order and navigation
/// order. The step owns its fields exclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepDefinition {
    /// Stable identifier, unique within the form definition
    pub id: StepId,

    /// Display name, defaults to "Step N"
    pub name: String,

    /// The fields in this step, in display order
    pub fields: Vec<FieldDefinition>,
}

impl StepDefinition {
    /// Create an empty step with a fresh id
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: StepId::new_v4(),
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Look up a field by id
    pub fn field(&self, id: &FieldId) -> Option<&FieldDefinition> {
        self.fields.iter().find(|f| &f.id == id)
    }

    /// Look up a field by id, mutably
    pub fn field_mut(&mut self, id: &FieldId) -> Option<&mut FieldDefinition> {
        self.fields.iter_mut().find(|f| &f.id == id)
    }
}
