//! DashboardStore - Single entry point for reading and changing savings data.
//!
//! Every operation is one full read-modify-write cycle of the dashboard
//! document: load it from the key-value store, apply one mutation, write
//! it back and return a fresh summary. Cycles are serialized through an
//! async mutex so two calls on the same store never interleave.
//!
//! Nothing else in the crate touches the storage port.

mod data;
mod decisions;
mod errors;
mod goals;
mod profile;

pub use errors::StoreError;

use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::dashboard::{DashboardDocument, DashboardError, DashboardSummary};
use crate::domain::decision::DecisionRuleTable;
use crate::domain::foundation::SummaryRange;
use crate::ports::{Clock, KeyValueStorage, StateStorageError};

/// Storage key the dashboard document lives under.
pub const DEFAULT_DOCUMENT_KEY: &str = "ahorro_invisible_dashboard_v1";

/// Owner of the dashboard document.
pub struct DashboardStore {
    storage: Arc<dyn KeyValueStorage>,
    clock: Arc<dyn Clock>,
    rules: Arc<DecisionRuleTable>,
    document_key: String,
    write_lock: Mutex<()>,
}

impl DashboardStore {
    /// Store using the built-in rule table and the default document key.
    pub fn new(storage: Arc<dyn KeyValueStorage>, clock: Arc<dyn Clock>) -> Self {
        Self {
            storage,
            clock,
            rules: Arc::new(DecisionRuleTable::standard().clone()),
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_rules(mut self, rules: Arc<DecisionRuleTable>) -> Self {
        self.rules = rules;
        self
    }

    pub fn with_document_key(mut self, key: impl Into<String>) -> Self {
        self.document_key = key.into();
        self
    }

    pub fn document_key(&self) -> &str {
        &self.document_key
    }

    /// Rule table used to price decisions.
    pub fn rules(&self) -> &DecisionRuleTable {
        &self.rules
    }

    /// Derives the dashboard summary.
    ///
    /// Never fails: a missing or unreadable document reads as empty.
    pub async fn build_summary(&self, range: SummaryRange) -> DashboardSummary {
        let doc = self.document().await;
        self.summarize(&doc, range)
    }

    /// Current document, seeding an empty one if none exists.
    pub async fn document(&self) -> DashboardDocument {
        let _guard = self.write_lock.lock().await;
        self.load_document().await
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn summarize(&self, doc: &DashboardDocument, range: SummaryRange) -> DashboardSummary {
        DashboardSummary::build(doc, range, self.clock.today())
    }

    /// Loads the document. Missing, unreadable or corrupt data is replaced
    /// by a freshly seeded empty document.
    async fn load_document(&self) -> DashboardDocument {
        let raw = match self.storage.get_item(&self.document_key).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.document_key, error = %e, "dashboard document unreadable, starting empty");
                None
            }
        };

        match raw {
            Some(json) => match serde_json::from_str::<DashboardDocument>(&json) {
                Ok(doc) => return doc,
                Err(e) => {
                    tracing::warn!(key = %self.document_key, error = %e, "dashboard document corrupt, reseeding");
                }
            },
            None => {
                tracing::debug!(key = %self.document_key, "no dashboard document, seeding");
            }
        }

        let doc = DashboardDocument::empty();
        if let Err(e) = self.save_document(&doc).await {
            tracing::warn!(key = %self.document_key, error = %e, "could not seed dashboard document");
        }
        doc
    }

    async fn save_document(&self, doc: &DashboardDocument) -> Result<(), StateStorageError> {
        let json = serde_json::to_string(doc)
            .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;
        self.storage.set_item(&self.document_key, &json).await
    }

    /// Runs one read-modify-write cycle.
    ///
    /// A refused mutation or a failed write returns the error and persists
    /// nothing.
    async fn mutate<T, F>(&self, operation: &'static str, apply: F) -> Result<(T, DashboardDocument), StoreError>
    where
        F: FnOnce(&mut DashboardDocument) -> Result<T, DashboardError> + Send,
        T: Send,
    {
        let _guard = self.write_lock.lock().await;
        let mut doc = self.load_document().await;

        let output = match apply(&mut doc) {
            Ok(output) => output,
            Err(e) => {
                tracing::debug!(operation, code = %e.code(), error = %e, "dashboard mutation refused");
                return Err(e.into());
            }
        };

        if let Err(e) = self.save_document(&doc).await {
            tracing::error!(operation, error = %e, "failed to persist dashboard document");
            return Err(e.into());
        }

        tracing::info!(operation, "dashboard updated");
        Ok((output, doc))
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{test_store, today};
    use super::*;
    use crate::domain::dashboard::TodayStatus;

    #[tokio::test]
    async fn build_summary_seeds_empty_document() {
        let (store, storage, _) = test_store();

        let summary = store.build_summary(SummaryRange::SevenDays).await;

        assert_eq!(summary.today, today());
        assert_eq!(summary.today_status, TodayStatus::Pending);
        assert!(summary.active_goals.is_empty());
        assert!(storage.get_item(DEFAULT_DOCUMENT_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn corrupt_document_reads_as_empty() {
        let (store, storage, _) = test_store();
        storage.set_item(DEFAULT_DOCUMENT_KEY, "{not json").await.unwrap();

        let doc = store.document().await;

        assert_eq!(doc, DashboardDocument::empty());
        let raw = storage.get_item(DEFAULT_DOCUMENT_KEY).await.unwrap().unwrap();
        assert!(serde_json::from_str::<DashboardDocument>(&raw).is_ok());
    }

    #[tokio::test]
    async fn custom_document_key_is_used() {
        let (store, storage, _) = test_store();
        let store = store.with_document_key("profile_two");

        store.build_summary(SummaryRange::ThirtyDays).await;

        assert!(storage.get_item("profile_two").await.unwrap().is_some());
        assert!(storage.get_item(DEFAULT_DOCUMENT_KEY).await.unwrap().is_none());
    }
}
