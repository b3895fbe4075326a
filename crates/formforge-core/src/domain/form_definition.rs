use crate::domain::field::{FieldDefinition, FieldId};
use crate::domain::step::StepDefinition;

/// The full builder-session state: ordered steps plus cursor state
///
/// Invariants:
/// - `steps` always contains at least one step
/// - `current_step_index` is always a valid index into `steps`
/// - `selected_field_id` is a reference, not ownership; it is cleared
///   whenever the step changes or the current step's fields are bulk
///   replaced
/// The state is mutated exclusively through the mutation protocol in
/// `session`; outside the crate only read access is exposed, so the
/// invariants cannot be broken by reaching around the protocol.
#[derive(Debug, Clone, PartialEq)]
pub struct FormDefinition {
    /// Ordered steps; never empty
    pub(crate) steps: Vec<StepDefinition>,

    /// Cursor into `steps`; always in `0..steps.len()`
    pub(crate) current_step_index: usize,

    /// The field currently selected in the settings editor, if any
    pub(crate) selected_field_id: Option<FieldId>,
}

impl FormDefinition {
    /// A fresh session: one empty "Step 1", cursor at the start
    pub fn new() -> Self {
        Self {
            steps: vec![StepDefinition::new("Step 1")],
            current_step_index: 0,
            selected_field_id: None,
        }
    }

    /// All steps, in display order
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// The cursor into the step sequence
    pub fn current_step_index(&self) -> usize {
        self.current_step_index
    }

    /// The id of the field selected in the settings editor, if any
    pub fn selected_field_id(&self) -> Option<&FieldId> {
        self.selected_field_id.as_ref()
    }

    /// The step the cursor points at
    pub fn current_step(&self) -> &StepDefinition {
        &self.steps[self.current_step_index]
    }

    /// Mutable access to the step the cursor points at
    pub(crate) fn current_step_mut(&mut self) -> &mut StepDefinition {
        &mut self.steps[self.current_step_index]
    }

    /// The fields of the current step, in display order
    pub fn current_fields(&self) -> &[FieldDefinition] {
        &self.current_step().fields
    }

    /// The currently selected field, if the selection points at a field
    /// in the current step
    pub fn selected_field(&self) -> Option<&FieldDefinition> {
        let id = self.selected_field_id.as_ref()?;
        self.current_step().field(id)
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// 1-based step number for display
    pub fn current_step_number(&self) -> usize {
        self.current_step_index + 1
    }
}

impl Default for FormDefinition {
    fn default() -> Self {
        Self::new()
    }
}
