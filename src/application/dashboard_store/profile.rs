//! Profile operations.

use super::{DashboardStore, StoreError};
use crate::domain::dashboard::DashboardSummary;
use crate::domain::foundation::SummaryRange;
use crate::domain::profile::IncomeRange;

impl DashboardStore {
    /// Replaces the monthly income range. `None` clears it.
    ///
    /// Only decisions recorded afterwards use the new multiplier.
    pub async fn update_income(
        &self,
        income: Option<IncomeRange>,
        range: SummaryRange,
    ) -> Result<DashboardSummary, StoreError> {
        let (_, doc) = self
            .mutate("update_income", |doc| {
                doc.set_income_range(income);
                Ok(())
            })
            .await?;
        tracing::debug!(multiplier = doc.income_multiplier(), "income range updated");
        Ok(self.summarize(&doc, range))
    }

    /// Sets the display name. Blank names are refused and the old name kept.
    pub async fn update_user_name(&self, name: &str, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let (_, doc) = self
            .mutate("update_user_name", |doc| doc.set_user_name(name))
            .await?;
        Ok(self.summarize(&doc, range))
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_store;
    use super::*;
    use crate::domain::foundation::ErrorCode;

    #[tokio::test]
    async fn income_sets_multiplier() {
        let (store, _, _) = test_store();

        let summary = store
            .update_income(Some(IncomeRange::new(3000.0, 5000.0).unwrap()), SummaryRange::ThirtyDays)
            .await
            .unwrap();

        assert_eq!(summary.income_multiplier, 1.15);
        assert!(summary.income_range.is_some());
    }

    #[tokio::test]
    async fn clearing_income_resets_multiplier() {
        let (store, _, _) = test_store();
        store
            .update_income(Some(IncomeRange::new(0.0, 1000.0).unwrap()), SummaryRange::ThirtyDays)
            .await
            .unwrap();

        let summary = store.update_income(None, SummaryRange::ThirtyDays).await.unwrap();

        assert_eq!(summary.income_multiplier, 1.0);
        assert!(summary.income_range.is_none());
    }

    #[tokio::test]
    async fn user_name_is_trimmed() {
        let (store, _, _) = test_store();

        let summary = store
            .update_user_name("  Lucía ", SummaryRange::ThirtyDays)
            .await
            .unwrap();

        assert_eq!(summary.user_name, "Lucía");
    }

    #[tokio::test]
    async fn blank_user_name_keeps_previous() {
        let (store, _, _) = test_store();
        store
            .update_user_name("Lucía", SummaryRange::ThirtyDays)
            .await
            .unwrap();

        let err = store
            .update_user_name("   ", SummaryRange::ThirtyDays)
            .await
            .unwrap_err();

        assert_eq!(err.code(), ErrorCode::ValidationFailed);
        assert_eq!(store.document().await.user_name(), "Lucía");
    }
}
