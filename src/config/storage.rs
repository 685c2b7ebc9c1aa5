//! Storage configuration

use serde::Deserialize;
use std::path::PathBuf;

use super::error::ValidationError;
use crate::application::DEFAULT_DOCUMENT_KEY;
use crate::ports::validate_key;

/// Where the dashboard document is kept
#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Storage backend
    #[serde(default)]
    pub backend: StorageBackend,

    /// Directory holding one JSON file per key (file backend only)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Key the dashboard document is stored under
    #[serde(default = "default_document_key")]
    pub document_key: String,
}

/// Key-value backend selection
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

impl StorageConfig {
    /// Validate storage configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.backend == StorageBackend::File && self.data_dir.as_os_str().is_empty() {
            return Err(ValidationError::EmptyDataDir);
        }
        validate_key(&self.document_key)
            .map_err(|e| ValidationError::InvalidDocumentKey(e.to_string()))?;
        Ok(())
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            data_dir: default_data_dir(),
            document_key: default_document_key(),
        }
    }
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("./data")
}

fn default_document_key() -> String {
    DEFAULT_DOCUMENT_KEY.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_config_defaults() {
        let config = StorageConfig::default();
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.data_dir, PathBuf::from("./data"));
        assert_eq!(config.document_key, "ahorro_invisible_dashboard_v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_data_dir_rejected_for_file_backend() {
        let config = StorageConfig {
            data_dir: PathBuf::new(),
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ValidationError::EmptyDataDir));
    }

    #[test]
    fn test_empty_data_dir_allowed_for_memory_backend() {
        let config = StorageConfig {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::new(),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_path_like_document_key_rejected() {
        let config = StorageConfig {
            document_key: "../outside".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidDocumentKey(_))
        ));
    }
}
