//! Drop routing for the authoring canvas
//!
//! The drag-and-drop transfer channel carries one of two tag kinds: a
//! field-type tag from the sidebar palette ("create a new field of type
//! T") or a source-index tag from an existing canvas row ("reorder").
//! This module disambiguates the two and routes them into the mutation
//! protocol.

use crate::domain::field::{FieldDefinition, FieldType};
use crate::domain::form_definition::FormDefinition;
use tracing::debug;

/// Transfer-channel key for a palette drag carrying a field type
pub const FIELD_TYPE_TAG: &str = "field-type";

/// Transfer-channel key for a canvas-row drag carrying a source index
pub const REORDER_INDEX_TAG: &str = "reorder-index";

/// The decoded payload of a canvas drop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropPayload {
    /// A palette item was dropped: create a new field of this type
    NewField(FieldType),
    /// An existing row was dropped: move the field at this index
    Reorder {
        /// Index the dragged field currently occupies
        from_index: usize,
    },
}

impl DropPayload {
    /// Decode a (tag kind, data) pair from the transfer channel
    ///
    /// Unknown tag kinds and unparseable data yield `None`, which the
    /// canvas treats as a no-op drop.
    pub fn decode(tag: &str, data: &str) -> Option<Self> {
        match tag {
            FIELD_TYPE_TAG => FieldType::from_tag(data).map(DropPayload::NewField),
            REORDER_INDEX_TAG => data
                .parse::<usize>()
                .ok()
                .map(|from_index| DropPayload::Reorder { from_index }),
            _ => None,
        }
    }
}

/// Apply a decoded drop to the session
///
/// A palette drop appends the default field for its type to the current
/// step; a reorder drop moves the dragged field to `target_index`. Both
/// paths inherit the mutation protocol's defensive no-op policy for bad
/// indices.
pub fn handle_drop(form: &mut FormDefinition, payload: DropPayload, target_index: usize) {
    match payload {
        DropPayload::NewField(field_type) => {
            debug!(%field_type, "canvas drop: new field");
            form.add_field(FieldDefinition::untitled(field_type));
        }
        DropPayload::Reorder { from_index } => {
            debug!(from_index, target_index, "canvas drop: reorder");
            form.reorder_fields(from_index, target_index);
        }
    }
}
