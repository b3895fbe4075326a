//! Formforge Store
//!
//! The serialization/publish boundary of the form builder. A published
//! form is an immutable snapshot of the session's steps, encoded as a
//! transport blob and stored under a fresh opaque key in an external
//! key-value collaborator. The fill-out consumer retrieves the blob by
//! key and drives its own answer state against the read-only
//! [`PublishedForm`] view; missing keys and corrupt blobs both surface as
//! a user-visible "form not found" state, never a crash.

use async_trait::async_trait;
use formforge_core::{FormDefinition, StepDefinition};
use std::fmt::{Debug, Display};
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

pub mod memory;

/// The opaque identifier a published form is retrieved by
///
/// Minted fresh at publish time; there is no update-in-place under an
/// existing key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FormKey(String);

impl FormKey {
    /// Parse a key from a fill URL path parameter
    ///
    /// Keys are uuids; anything else is rejected before it reaches the
    /// store.
    pub fn new(key: String) -> Result<Self, FormStoreError> {
        if Uuid::parse_str(&key).is_err() {
            return Err(FormStoreError::InvalidKeyFormat(key));
        }
        Ok(Self(key))
    }

    /// Mint a fresh key for a new publication
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Get the string representation of the key
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Display for FormKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors that can occur at the store boundary
#[derive(Error, Debug)]
pub enum FormStoreError {
    /// Catch-all for backend-specific issues
    #[error("Storage backend error: {0}")]
    BackendError(#[from] anyhow::Error),

    /// No blob stored under the key
    #[error("Form not found for key: {0}")]
    NotFound(FormKey),

    /// The stored blob is not a valid snapshot
    #[error("Malformed form snapshot: {0}")]
    ParseError(#[from] serde_json::Error),

    /// The key is not a valid identifier
    #[error("Invalid form key format: {0}")]
    InvalidKeyFormat(String),
}

impl FormStoreError {
    /// Whether the fill-out consumer should render this as "form not
    /// found"
    ///
    /// Both a missing key and a corrupt snapshot map to the same terminal
    /// view.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            FormStoreError::NotFound(_)
                | FormStoreError::ParseError(_)
                | FormStoreError::InvalidKeyFormat(_)
        )
    }
}

/// Result type for store operations
pub type FormStoreResult<T> = Result<T, FormStoreError>;

/// Contract for the external key-value collaborator
///
/// Accessed at exactly two points: publish (write) and fill-out load
/// (read). No locking or transactions; a read racing an incomplete write
/// simply observes "not found".
#[async_trait]
pub trait FormStore: Send + Sync + Debug {
    /// Store a snapshot blob under a key
    async fn put(&self, key: &FormKey, blob: Vec<u8>) -> FormStoreResult<()>;

    /// Retrieve the blob stored under a key
    async fn get(&self, key: &FormKey) -> FormStoreResult<Vec<u8>>;

    /// Check whether a key has a stored blob
    async fn exists(&self, key: &FormKey) -> FormStoreResult<bool>;
}

/// Encode a step sequence as a transport blob
///
/// Session-only cursor state (`current_step_index`, `selected_field_id`)
/// is excluded by construction: only the steps are encoded.
pub fn serialize_steps(steps: &[StepDefinition]) -> FormStoreResult<Vec<u8>> {
    Ok(serde_json::to_vec(steps)?)
}

/// Decode a transport blob back into a step sequence
///
/// Malformed input yields [`FormStoreError::ParseError`] rather than
/// panicking.
pub fn deserialize_steps(blob: &[u8]) -> FormStoreResult<Vec<StepDefinition>> {
    Ok(serde_json::from_slice(blob)?)
}

/// Publish an immutable snapshot of the session's steps
///
/// Assigns a fresh key; the session state continues to evolve
/// independently of the snapshot afterwards.
pub async fn publish(store: &dyn FormStore, form: &FormDefinition) -> FormStoreResult<FormKey> {
    let key = FormKey::generate();
    let blob = serialize_steps(form.steps())?;
    store.put(&key, blob).await?;
    debug!(key = %key, steps = form.steps().len(), "published form snapshot");
    Ok(key)
}

/// A read-only view of a published form for the fill-out consumer
///
/// Holds the snapshot's steps; the consumer drives its own answer state
/// and cursor against them.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishedForm {
    steps: Vec<StepDefinition>,
}

impl PublishedForm {
    /// Load and decode the snapshot stored under a key
    pub async fn load(store: &dyn FormStore, key: &FormKey) -> FormStoreResult<Self> {
        let blob = store.get(key).await?;
        let steps = deserialize_steps(&blob)?;
        Ok(Self { steps })
    }

    /// The published steps, in display order
    pub fn steps(&self) -> &[StepDefinition] {
        &self.steps
    }

    /// The step at `index`, if it exists
    pub fn step(&self, index: usize) -> Option<&StepDefinition> {
        self.steps.get(index)
    }

    /// Number of steps
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Whether `index` is the final step (submission instead of "next")
    pub fn is_last_step(&self, index: usize) -> bool {
        index + 1 >= self.steps.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use formforge_core::{FieldDefinition, FieldType};
    use pretty_assertions::assert_eq;

    fn sample_steps() -> Vec<StepDefinition> {
        let mut step = StepDefinition::new("Contact Info");
        let mut email = FieldDefinition::new(FieldType::Text, "Email");
        email.required = true;
        email.pattern = Some("\\S+@\\S+".to_string());
        step.fields.push(email);
        step.fields
            .push(FieldDefinition::new(FieldType::Textarea, "Message"));
        vec![step, StepDefinition::new("Extras")]
    }

    #[test]
    fn test_form_key_validation() {
        let minted = FormKey::generate();
        assert!(FormKey::new(minted.as_str().to_string()).is_ok());

        let err = FormKey::new("not-a-uuid".to_string()).unwrap_err();
        assert!(matches!(err, FormStoreError::InvalidKeyFormat(_)));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_serialize_round_trip() {
        let steps = sample_steps();
        let blob = serialize_steps(&steps).unwrap();
        let back = deserialize_steps(&blob).unwrap();
        assert_eq!(back, steps);
    }

    #[test]
    fn test_snapshot_excludes_cursor_state() {
        let steps = sample_steps();
        let blob = serialize_steps(&steps).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&blob).unwrap();

        // The blob is exactly the step array, nothing session-shaped
        assert!(value.is_array());
        let text = String::from_utf8(blob).unwrap();
        assert!(!text.contains("currentStepIndex"));
        assert!(!text.contains("selectedFieldId"));
    }

    #[test]
    fn test_deserialize_malformed_blob() {
        let err = deserialize_steps(b"{not json").unwrap_err();
        assert!(matches!(err, FormStoreError::ParseError(_)));
        assert!(err.is_not_found());

        // Valid JSON of the wrong shape is just as unloadable
        let err = deserialize_steps(b"{\"steps\": 3}").unwrap_err();
        assert!(matches!(err, FormStoreError::ParseError(_)));
    }

    #[test]
    fn test_published_form_view() {
        let form = PublishedForm {
            steps: sample_steps(),
        };
        assert_eq!(form.step_count(), 2);
        assert_eq!(form.step(0).unwrap().name, "Contact Info");
        assert!(form.step(2).is_none());
        assert!(!form.is_last_step(0));
        assert!(form.is_last_step(1));
    }
}
