use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{common::entities::app_errors::CoreError, storage::ports::KeyValueStore};

/// Process-local store, used in tests and for guest sessions that should
/// leave nothing behind.
#[derive(Debug, Default)]
pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned() -> CoreError {
        CoreError::StorageError("in-memory store lock poisoned".to_string())
    }
}

impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CoreError> {
        let values = self.values.read().map_err(|_| Self::poisoned())?;
        Ok(values.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> Result<(), CoreError> {
        let mut values = self.values.write().map_err(|_| Self::poisoned())?;
        values.insert(key.to_string(), value);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut values = self.values.write().map_err(|_| Self::poisoned())?;
        values.remove(key);
        Ok(())
    }
}
