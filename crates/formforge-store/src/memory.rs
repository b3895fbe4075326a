//! In-memory implementation of FormStore
//!
//! This implementation is primarily intended for testing and development
//! purposes. All data is lost when the instance is dropped.

use crate::{FormKey, FormStore, FormStoreError, FormStoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of FormStore
#[derive(Debug, Clone, Default)]
pub struct InMemoryFormStore {
    forms: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemoryFormStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots
    pub async fn len(&self) -> usize {
        self.forms.read().await.len()
    }

    /// Whether the store holds no snapshots
    pub async fn is_empty(&self) -> bool {
        self.forms.read().await.is_empty()
    }
}

#[async_trait]
impl FormStore for InMemoryFormStore {
    async fn put(&self, key: &FormKey, blob: Vec<u8>) -> FormStoreResult<()> {
        let mut store = self.forms.write().await;
        store.insert(key.as_str().to_string(), blob);
        Ok(())
    }

    async fn get(&self, key: &FormKey) -> FormStoreResult<Vec<u8>> {
        let store = self.forms.read().await;
        match store.get(key.as_str()) {
            Some(blob) => Ok(blob.clone()),
            None => Err(FormStoreError::NotFound(key.clone())),
        }
    }

    async fn exists(&self, key: &FormKey) -> FormStoreResult<bool> {
        let store = self.forms.read().await;
        Ok(store.contains_key(key.as_str()))
    }
}
