use serde::{Deserialize, Serialize};
use std::fmt::Display;
use uuid::Uuid;

/// Identifier of a field, unique within its step
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldId(pub String);

impl FieldId {
    /// Generate a fresh random field id
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl Display for FieldId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FieldId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// The closed set of input kinds a field can have
///
/// The type of a field is fixed at creation; changing it is not supported
/// and re-creation is the only path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Single-line text input
    Text,
    /// Multi-line text input
    Textarea,
    /// Boolean checkbox
    Checkbox,
    /// Select from a fixed list of options
    Dropdown,
    /// Date picker
    Date,
}

impl FieldType {
    /// All supported field types, in sidebar order
    pub const ALL: [FieldType; 5] = [
        FieldType::Text,
        FieldType::Textarea,
        FieldType::Checkbox,
        FieldType::Dropdown,
        FieldType::Date,
    ];

    /// Parse the tag carried on the drag-and-drop transfer channel
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "text" => Some(FieldType::Text),
            "textarea" => Some(FieldType::Textarea),
            "checkbox" => Some(FieldType::Checkbox),
            "dropdown" => Some(FieldType::Dropdown),
            "date" => Some(FieldType::Date),
            _ => None,
        }
    }

    /// The wire/transfer tag for this type
    pub fn as_tag(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Checkbox => "checkbox",
            FieldType::Dropdown => "dropdown",
            FieldType::Date => "date",
        }
    }

    /// Whether min/max length and pattern constraints apply to this type
    pub fn supports_text_constraints(&self) -> bool {
        matches!(self, FieldType::Text | FieldType::Textarea)
    }

    /// Whether the field carries an options list (dropdown only)
    pub fn supports_options(&self) -> bool {
        matches!(self, FieldType::Dropdown)
    }

    /// Whether a placeholder makes sense for this type (all but checkbox)
    pub fn supports_placeholder(&self) -> bool {
        !matches!(self, FieldType::Checkbox)
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A single form input definition
///
/// Constraint attributes are only meaningful for the matching type
/// (`options` for dropdowns, length/pattern for text and textarea).
/// The structure does not physically forbid stale out-of-type attributes;
/// editors and renderers must never surface or act on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    /// Stable identifier, unique within the owning step, immutable
    pub id: FieldId,

    /// Input kind, immutable after creation
    #[serde(rename = "type")]
    pub field_type: FieldType,

    /// Display label; emptiness is only rejected at step-transition time
    pub label: String,

    /// Whether the fill-out consumer must supply an answer
    pub required: bool,

    /// Placeholder text; not applicable to checkbox fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,

    /// Ordered option labels, dropdown only, replaced as a whole.
    ///
    /// The settings editor displays these comma-joined with no escaping,
    /// so option text containing a literal comma does not survive a
    /// round-trip through that editor. Kept as-is to match existing
    /// behavior.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    /// Minimum answer length, text/textarea only. No relation to
    /// `max_length` is enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u32>,

    /// Maximum answer length, text/textarea only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,

    /// Regular-expression source for answer validation, text/textarea
    /// only. Not compiled or checked at edit time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl FieldDefinition {
    /// Create a field with a fresh id and the given label
    pub fn new(field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: FieldId::new_v4(),
            field_type,
            label: label.into(),
            required: false,
            placeholder: None,
            options: None,
            min_length: None,
            max_length: None,
            pattern: None,
        }
    }

    /// The default field the canvas creates when a type tag is dropped
    ///
    /// Labelled "Untitled {type}"; dropdowns start with two placeholder
    /// options.
    pub fn untitled(field_type: FieldType) -> Self {
        Self {
            options: field_type
                .supports_options()
                .then(|| vec!["Option 1".to_string(), "Option 2".to_string()]),
            placeholder: Some(String::new()),
            ..Self::new(field_type, format!("Untitled {}", field_type))
        }
    }

    /// Label for messages, defaulting to "Untitled" when empty
    pub fn display_label(&self) -> &str {
        if self.label.trim().is_empty() {
            "Untitled"
        } else {
            &self.label
        }
    }
}

/// A partial attribute set merged onto a field by the update operation
///
/// Outer `None` leaves the attribute untouched; for optional attributes the
/// inner option distinguishes "set to value" from "clear".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldPatch {
    /// New display label
    pub label: Option<String>,
    /// New required flag
    pub required: Option<bool>,
    /// Set or clear the placeholder
    pub placeholder: Option<Option<String>>,
    /// Replace or clear the options list as a whole
    pub options: Option<Option<Vec<String>>>,
    /// Set or clear the minimum length
    pub min_length: Option<Option<u32>>,
    /// Set or clear the maximum length
    pub max_length: Option<Option<u32>>,
    /// Set or clear the pattern source
    pub pattern: Option<Option<String>>,
}

impl FieldPatch {
    /// Patch that only changes the label
    pub fn label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Patch that only changes the required flag
    pub fn required(required: bool) -> Self {
        Self {
            required: Some(required),
            ..Self::default()
        }
    }

    /// Merge this patch onto a field, leaving untouched attributes alone
    pub fn apply_to(&self, field: &mut FieldDefinition) {
        if let Some(label) = &self.label {
            field.label = label.clone();
        }
        if let Some(required) = self.required {
            field.required = required;
        }
        if let Some(placeholder) = &self.placeholder {
            field.placeholder = placeholder.clone();
        }
        if let Some(options) = &self.options {
            field.options = options.clone();
        }
        if let Some(min_length) = self.min_length {
            field.min_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            field.max_length = max_length;
        }
        if let Some(pattern) = &self.pattern {
            field.pattern = pattern.clone();
        }
    }
}
