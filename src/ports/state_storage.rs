//! State Storage Port - Interface for the key-value store holding the dashboard.
//!
//! Mirrors browser local storage: string values under string keys, each
//! write replacing the whole value for its key.

use async_trait::async_trait;

/// Errors that can occur during state storage operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StateStorageError {
    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize state: {0}")]
    SerializationFailed(String),

    #[error("Failed to deserialize state: {0}")]
    DeserializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Storage quota exceeded: {size} bytes over a {quota} byte limit")]
    QuotaExceeded { size: usize, quota: usize },
}

/// Port for the persistent key-value store
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    ///
    /// # Returns
    /// `None` if the key has never been written or was removed
    async fn get_item(&self, key: &str) -> Result<Option<String>, StateStorageError>;

    /// Replace the value stored under `key`
    ///
    /// The write is atomic per key: readers see either the old or the new
    /// value, never a mixture.
    ///
    /// # Errors
    /// Returns `StateStorageError` if the value could not be persisted
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StateStorageError>;

    /// Remove `key`. Removing a missing key succeeds.
    async fn remove_item(&self, key: &str) -> Result<(), StateStorageError>;
}

/// Rejects keys that could escape a storage namespace (path separators,
/// parent references) or are empty.
pub fn validate_key(key: &str) -> Result<(), StateStorageError> {
    let valid = !key.is_empty()
        && key != "."
        && key != ".."
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if valid {
        Ok(())
    } else {
        Err(StateStorageError::InvalidKey(key.to_string()))
    }
}
