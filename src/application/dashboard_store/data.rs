//! Whole-document operations: export, import and reset.

use super::{DashboardStore, StoreError};
use crate::domain::dashboard::{DashboardDocument, DashboardError, DashboardSummary};
use crate::domain::foundation::SummaryRange;
use crate::ports::StateStorageError;

impl DashboardStore {
    /// Removes the stored document. The next read seeds an empty one.
    ///
    /// Resetting twice is the same as resetting once.
    pub async fn reset_all_data(&self) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().await;
        self.storage.remove_item(&self.document_key).await.map_err(|e| {
            tracing::error!(error = %e, "failed to reset dashboard document");
            StoreError::from(e)
        })?;
        tracing::info!(key = %self.document_key, "dashboard data reset");
        Ok(())
    }

    /// The current document as pretty-printed JSON.
    pub async fn export_data(&self) -> Result<String, StoreError> {
        let doc = self.document().await;
        let json = serde_json::to_string_pretty(&doc)
            .map_err(|e| StateStorageError::SerializationFailed(e.to_string()))?;
        Ok(json)
    }

    /// Replaces the whole document with a previously exported one.
    ///
    /// # Errors
    ///
    /// - `InvalidDocument` if the JSON does not parse or breaks an invariant
    /// - `Storage` if the document could not be written
    pub async fn import_data(&self, json: &str, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let doc: DashboardDocument = serde_json::from_str(json).map_err(|e| {
            tracing::warn!(error = %e, "rejected dashboard import");
            DashboardError::invalid_document(e.to_string())
        })?;
        doc.validate()?;

        let _guard = self.write_lock.lock().await;
        self.save_document(&doc).await.map_err(|e| {
            tracing::error!(operation = "import_data", error = %e, "failed to persist dashboard document");
            StoreError::from(e)
        })?;
        tracing::info!(
            goals = doc.goals().len(),
            decisions = doc.decisions().len(),
            "dashboard data imported"
        );
        Ok(self.summarize(&doc, range))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::super::test_support::{test_store, today};
    use super::super::DEFAULT_DOCUMENT_KEY;
    use super::*;
    use crate::adapters::{FixedClock, InMemoryStateStorage};
    use crate::domain::foundation::ErrorCode;
    use crate::domain::goal::NewGoal;
    use crate::ports::KeyValueStorage;

    #[tokio::test]
    async fn export_then_import_restores_state() {
        let (store, _, _) = test_store();
        let summary = store
            .create_goal(NewGoal::new("Japan trip", 5000.0, 12), SummaryRange::ThirtyDays)
            .await
            .unwrap();
        let goal = summary.active_goals[0].id().clone();
        store
            .submit_decision("coffee", "no", goal, SummaryRange::ThirtyDays)
            .await
            .unwrap();
        let exported = store.export_data().await.unwrap();
        let before = store.document().await;

        store.reset_all_data().await.unwrap();
        assert!(store.list_active_goals().await.is_empty());

        let summary = store.import_data(&exported, SummaryRange::ThirtyDays).await.unwrap();
        assert_eq!(summary.total_saved, 3.0);
        assert_eq!(store.document().await, before);
    }

    #[tokio::test]
    async fn export_uses_camel_case_keys() {
        let (store, _, _) = test_store();
        store
            .update_user_name("Lucía", SummaryRange::ThirtyDays)
            .await
            .unwrap();

        let exported = store.export_data().await.unwrap();

        assert!(exported.contains("\"userName\""));
        assert!(exported.contains("\"incomeRange\""));
    }

    #[tokio::test]
    async fn reset_is_idempotent() {
        let (store, storage, _) = test_store();
        store
            .create_goal(NewGoal::new("Bike", 300.0, 3), SummaryRange::ThirtyDays)
            .await
            .unwrap();

        store.reset_all_data().await.unwrap();
        store.reset_all_data().await.unwrap();

        assert!(storage.get_item(DEFAULT_DOCUMENT_KEY).await.unwrap().is_none());
        let summary = store.build_summary(SummaryRange::ThirtyDays).await;
        assert!(summary.active_goals.is_empty());
        assert_eq!(summary.hucha, 0.0);
    }

    #[tokio::test]
    async fn malformed_import_is_rejected() {
        let (store, _, _) = test_store();

        let err = store
            .import_data("{\"goals\": 3}", SummaryRange::ThirtyDays)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDocument);
    }

    #[tokio::test]
    async fn import_breaking_invariants_is_rejected() {
        let (store, _, _) = test_store();
        let json = format!(
            r#"{{"decisions": [
                {{"id": "dec_1", "date": "{d}", "questionId": "coffee", "answerKey": "no",
                  "goalId": "goal_1", "deltaAmount": 3.0, "monthlyProjection": 66.0, "yearlyProjection": 792.0}},
                {{"id": "dec_2", "date": "{d}", "questionId": "coffee", "answerKey": "no",
                  "goalId": "goal_1", "deltaAmount": 3.0, "monthlyProjection": 66.0, "yearlyProjection": 792.0}}
            ]}}"#,
            d = today()
        );

        let err = store
            .import_data(&json, SummaryRange::ThirtyDays)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDocument);
        assert!(store.document().await.decisions().is_empty());
    }

    #[tokio::test]
    async fn import_with_inverted_income_range_is_rejected() {
        let (store, _, _) = test_store();
        let before = store.document().await;
        let json = r#"{"userName": "Ana", "incomeRange": {"min": 9000, "max": 10, "currency": "EUR"},
                      "goals": [], "decisions": []}"#;

        let err = store
            .import_data(json, SummaryRange::ThirtyDays)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::InvalidDocument);
        assert_eq!(store.document().await, before);
    }

    #[tokio::test]
    async fn write_failure_is_surfaced_and_nothing_persists() {
        let storage = InMemoryStateStorage::with_quota(64);
        let clock = Arc::new(FixedClock::at_date(today()));
        let store = DashboardStore::new(Arc::new(storage.clone()), clock);

        let result = store
            .create_goal(
                NewGoal::new("A goal with a title long enough to exceed the quota", 900.0, 6),
                SummaryRange::ThirtyDays,
            )
            .await;

        assert!(matches!(result, Err(StoreError::Storage(StateStorageError::QuotaExceeded { .. }))));
        assert!(store.list_active_goals().await.is_empty());
    }
}
