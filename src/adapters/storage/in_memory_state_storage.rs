//! In-Memory State Storage Adapter
//!
//! Stores values in memory. Useful for testing and for sessions that
//! should not touch the disk. An optional byte quota reproduces the
//! "storage full" failure of browser local storage.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{validate_key, KeyValueStorage, StateStorageError};

/// In-memory key-value storage
#[derive(Debug, Clone, Default)]
pub struct InMemoryStateStorage {
    items: Arc<RwLock<HashMap<String, String>>>,
    quota: Option<usize>,
}

impl InMemoryStateStorage {
    /// Create a new in-memory storage
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a storage that rejects any value larger than `bytes`
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
            quota: Some(bytes),
        }
    }

    /// Clear all stored data (useful for tests)
    pub async fn clear(&self) {
        self.items.write().await.clear();
    }

    /// Get the number of stored keys
    pub async fn item_count(&self) -> usize {
        self.items.read().await.len()
    }
}

#[async_trait]
impl KeyValueStorage for InMemoryStateStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StateStorageError> {
        validate_key(key)?;
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StateStorageError> {
        validate_key(key)?;
        if let Some(quota) = self.quota {
            if value.len() > quota {
                return Err(StateStorageError::QuotaExceeded {
                    size: value.len(),
                    quota,
                });
            }
        }

        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StateStorageError> {
        validate_key(key)?;
        self.items.write().await.remove(key);
        Ok(())
    }
}
