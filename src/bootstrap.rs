//! Wiring of adapters into a ready-to-use store.

use std::sync::Arc;

use crate::adapters::{FileStateStorage, InMemoryStateStorage, SystemClock};
use crate::application::DashboardStore;
use crate::config::{AppConfig, StorageBackend};
use crate::ports::KeyValueStorage;

/// Storage adapter selected by the configuration.
pub fn build_storage(config: &AppConfig) -> Arc<dyn KeyValueStorage> {
    match config.storage.backend {
        StorageBackend::File => {
            tracing::info!(data_dir = %config.storage.data_dir.display(), "using file storage");
            Arc::new(FileStateStorage::new(&config.storage.data_dir))
        }
        StorageBackend::Memory => {
            tracing::info!("using in-memory storage, data is lost on exit");
            Arc::new(InMemoryStateStorage::new())
        }
    }
}

/// Store backed by the configured storage and the system clock.
pub fn build_store(config: &AppConfig) -> DashboardStore {
    DashboardStore::new(build_storage(config), Arc::new(SystemClock))
        .with_document_key(config.storage.document_key.clone())
}
