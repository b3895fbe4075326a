//! The mutation protocol for the builder session
//!
//! Every operation is a synchronous, atomic transformation of the
//! [`FormDefinition`]. Invalid inputs (out-of-bounds indices, unknown ids)
//! are defensive no-ops rather than errors: the prior state is left intact
//! and nothing is surfaced to the caller. Ignored inputs are traced for
//! diagnosability.

use crate::domain::field::{FieldDefinition, FieldId, FieldPatch};
use crate::domain::form_definition::FormDefinition;
use crate::domain::step::{StepDefinition, StepId};
use tracing::{debug, warn};

/// An operation against the builder session
///
/// Dispatch through [`FormDefinition::apply`] for reducer-style handling,
/// or call the individual methods directly.
#[derive(Debug, Clone, PartialEq)]
pub enum FormAction {
    /// Append a fully-formed field to the current step
    AddField(FieldDefinition),
    /// Merge a partial attribute set onto a field in the current step
    UpdateField {
        /// Target field id
        id: FieldId,
        /// Attributes to merge
        patch: FieldPatch,
    },
    /// Remove a field from the current step
    DeleteField(FieldId),
    /// Move a field within the current step, preserving relative order of
    /// the others
    ReorderFields {
        /// Index the field currently occupies
        from_index: usize,
        /// Index it should end up at
        to_index: usize,
    },
    /// Replace the current step's fields wholesale
    ReplaceFields(Vec<FieldDefinition>),
    /// Mark a field as selected in the settings editor
    SelectField(FieldId),
    /// Append a new empty step
    AddStep {
        /// Display name for the new step
        name: String,
    },
    /// Remove a step by id
    RemoveStep(StepId),
    /// Rename a step by id
    RenameStep {
        /// Target step id
        id: StepId,
        /// New display name
        name: String,
    },
    /// Advance the cursor to the next step
    NextStep,
    /// Move the cursor back to the previous step
    PrevStep,
    /// Jump the cursor to a specific step index
    GoToStep(usize),
    /// Replace all steps with a template
    LoadTemplate(Vec<StepDefinition>),
}

impl FormDefinition {
    /// Apply one action to the session state
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::AddField(field) => self.add_field(field),
            FormAction::UpdateField { id, patch } => self.update_field(&id, &patch),
            FormAction::DeleteField(id) => self.delete_field(&id),
            FormAction::ReorderFields {
                from_index,
                to_index,
            } => self.reorder_fields(from_index, to_index),
            FormAction::ReplaceFields(fields) => self.replace_fields(fields),
            FormAction::SelectField(id) => self.select_field(id),
            FormAction::AddStep { name } => self.add_step(name),
            FormAction::RemoveStep(id) => self.remove_step(&id),
            FormAction::RenameStep { id, name } => self.rename_step(&id, name),
            FormAction::NextStep => self.next_step(),
            FormAction::PrevStep => self.prev_step(),
            FormAction::GoToStep(index) => self.go_to_step(index),
            FormAction::LoadTemplate(steps) => self.load_template(steps),
        }
    }

    /// Append a field to the current step
    ///
    /// No duplicate-id check is performed; the caller guarantees
    /// uniqueness within the step.
    pub fn add_field(&mut self, field: FieldDefinition) {
        self.current_step_mut().fields.push(field);
    }

    /// Merge a patch onto the matching field in the current step
    ///
    /// No-op if the id is not found in the current step.
    pub fn update_field(&mut self, id: &FieldId, patch: &FieldPatch) {
        match self.current_step_mut().field_mut(id) {
            Some(field) => patch.apply_to(field),
            None => debug!(field_id = %id, "update_field: id not in current step, ignoring"),
        }
    }

    /// Remove the matching field from the current step
    ///
    /// No-op if the id is not found.
    pub fn delete_field(&mut self, id: &FieldId) {
        let fields = &mut self.current_step_mut().fields;
        let before = fields.len();
        fields.retain(|f| &f.id != id);
        if fields.len() == before {
            debug!(field_id = %id, "delete_field: id not in current step, ignoring");
        }
    }

    /// Move the field at `from_index` to `to_index` within the current
    /// step, preserving the relative order of all other fields
    ///
    /// No-op if either index is out of bounds.
    pub fn reorder_fields(&mut self, from_index: usize, to_index: usize) {
        let fields = &mut self.current_step_mut().fields;
        if from_index >= fields.len() || to_index >= fields.len() {
            debug!(
                from_index,
                to_index,
                len = fields.len(),
                "reorder_fields: index out of bounds, ignoring"
            );
            return;
        }

        let moved = fields.remove(from_index);
        fields.insert(to_index, moved);
    }

    /// Replace the current step's fields wholesale and clear the selection
    pub fn replace_fields(&mut self, fields: Vec<FieldDefinition>) {
        self.current_step_mut().fields = fields;
        self.selected_field_id = None;
    }

    /// Set the selected field id
    ///
    /// No existence check; the editing surface is expected to pass a valid
    /// id.
    pub fn select_field(&mut self, id: FieldId) {
        self.selected_field_id = Some(id);
    }

    /// Append a new empty step with a fresh id
    pub fn add_step(&mut self, name: impl Into<String>) {
        self.steps.push(StepDefinition::new(name));
    }

    /// Remove the matching step, re-clamping the cursor
    ///
    /// Removing the last remaining step is a no-op: the session always
    /// holds at least one step. Unknown ids are ignored.
    pub fn remove_step(&mut self, id: &StepId) {
        if self.steps.len() == 1 {
            if &self.steps[0].id == id {
                warn!(step_id = %id, "remove_step: refusing to remove the last remaining step");
            } else {
                debug!(step_id = %id, "remove_step: unknown step id, ignoring");
            }
            return;
        }

        let before = self.steps.len();
        self.steps.retain(|step| &step.id != id);
        if self.steps.len() == before {
            debug!(step_id = %id, "remove_step: unknown step id, ignoring");
            return;
        }

        if self.current_step_index >= self.steps.len() {
            self.current_step_index = self.steps.len() - 1;
        }
    }

    /// Rename the matching step
    ///
    /// No-op if the id is not found.
    pub fn rename_step(&mut self, id: &StepId, name: impl Into<String>) {
        match self.steps.iter_mut().find(|step| &step.id == id) {
            Some(step) => step.name = name.into(),
            None => debug!(step_id = %id, "rename_step: unknown step id, ignoring"),
        }
    }

    /// Advance the cursor by one step, clearing the selection
    ///
    /// No-op past the last step.
    pub fn next_step(&mut self) {
        if self.current_step_index < self.steps.len() - 1 {
            self.current_step_index += 1;
            self.selected_field_id = None;
        }
    }

    /// Move the cursor back by one step, clearing the selection
    ///
    /// No-op before the first step.
    pub fn prev_step(&mut self) {
        if self.current_step_index > 0 {
            self.current_step_index -= 1;
            self.selected_field_id = None;
        }
    }

    /// Jump the cursor to `index`, clearing the selection
    ///
    /// No-op if `index` is out of bounds.
    pub fn go_to_step(&mut self, index: usize) {
        if index >= self.steps.len() {
            debug!(index, len = self.steps.len(), "go_to_step: out of bounds, ignoring");
            return;
        }
        self.current_step_index = index;
        self.selected_field_id = None;
    }

    /// Replace all steps with a template, resetting the cursor and
    /// selection
    ///
    /// The caller supplies a well-formed template; no structural
    /// validation is performed beyond refusing an empty step list, which
    /// would break the at-least-one-step invariant.
    pub fn load_template(&mut self, steps: Vec<StepDefinition>) {
        if steps.is_empty() {
            warn!("load_template: empty template, ignoring");
            return;
        }
        self.steps = steps;
        self.current_step_index = 0;
        self.selected_field_id = None;
    }
}
