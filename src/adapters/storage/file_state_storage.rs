//! File-based State Storage Adapter
//!
//! Stores each key as a `<key>.json` file under a base directory.
//! Writes go to a temporary file that is renamed over the target, so a
//! crash mid-write leaves the previous value intact.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{validate_key, KeyValueStorage, StateStorageError};

/// File-based key-value storage
#[derive(Debug, Clone)]
pub struct FileStateStorage {
    base_path: PathBuf,
}

impl FileStateStorage {
    /// Create a new file storage with a base directory
    ///
    /// The directory is created on first write.
    ///
    /// # Example
    /// ```ignore
    /// let storage = FileStateStorage::new("./data");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path holding a key
    fn item_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json", key))
    }

    /// Get the scratch path used while writing a key
    fn temp_path(&self, key: &str) -> PathBuf {
        self.base_path.join(format!("{}.json.tmp", key))
    }

    /// Ensure directory exists
    async fn ensure_dir(&self) -> Result<(), StateStorageError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))
    }
}

#[async_trait]
impl KeyValueStorage for FileStateStorage {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StateStorageError> {
        validate_key(key)?;

        match fs::read_to_string(self.item_path(key)).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateStorageError::IoError(e.to_string())),
        }
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StateStorageError> {
        validate_key(key)?;
        self.ensure_dir().await?;

        let temp_path = self.temp_path(key);
        fs::write(&temp_path, value)
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        fs::rename(&temp_path, self.item_path(key))
            .await
            .map_err(|e| StateStorageError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StateStorageError> {
        validate_key(key)?;

        match fs::remove_file(self.item_path(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StateStorageError::IoError(e.to_string())),
        }
    }
}
