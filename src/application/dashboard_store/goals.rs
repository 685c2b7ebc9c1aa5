//! Goal operations.

use super::{DashboardStore, StoreError};
use crate::domain::dashboard::DashboardSummary;
use crate::domain::foundation::{GoalId, SummaryRange};
use crate::domain::goal::{Goal, GoalPatch, NewGoal};

impl DashboardStore {
    /// Creates a goal. The first active goal, or one created with
    /// `is_primary`, becomes the only primary goal.
    pub async fn create_goal(&self, input: NewGoal, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (id, doc) = self
            .mutate("create_goal", |doc| doc.create_goal(input, now))
            .await?;
        tracing::debug!(goal_id = %id, "goal created");
        Ok(self.summarize(&doc, range))
    }

    pub async fn update_goal(
        &self,
        id: &GoalId,
        patch: GoalPatch,
        range: SummaryRange,
    ) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (_, doc) = self
            .mutate("update_goal", |doc| doc.update_goal(id, &patch, now))
            .await?;
        Ok(self.summarize(&doc, range))
    }

    /// Archives a goal, handing the primary flag to the next active goal.
    pub async fn archive_goal(&self, id: &GoalId, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (_, doc) = self
            .mutate("archive_goal", |doc| doc.archive_goal(id, now))
            .await?;
        Ok(self.summarize(&doc, range))
    }

    /// Makes an active goal the only primary goal.
    pub async fn set_primary_goal(&self, id: &GoalId, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (_, doc) = self
            .mutate("set_primary_goal", |doc| doc.set_primary_goal(id, now))
            .await?;
        Ok(self.summarize(&doc, range))
    }

    pub async fn reactivate_goal(&self, id: &GoalId, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (_, doc) = self
            .mutate("reactivate_goal", |doc| doc.reactivate_goal(id, now))
            .await?;
        Ok(self.summarize(&doc, range))
    }

    /// Deletes an archived goal for good; its balance goes to the hucha.
    pub async fn delete_goal_permanently(
        &self,
        id: &GoalId,
        range: SummaryRange,
    ) -> Result<DashboardSummary, StoreError> {
        let (released, doc) = self
            .mutate("delete_goal_permanently", |doc| doc.delete_goal_permanently(id))
            .await?;
        tracing::info!(goal_id = %id, released, "goal deleted, balance moved to hucha");
        Ok(self.summarize(&doc, range))
    }

    pub async fn transfer_from_hucha(
        &self,
        id: &GoalId,
        amount: f64,
        range: SummaryRange,
    ) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (_, doc) = self
            .mutate("transfer_from_hucha", |doc| doc.transfer_from_hucha(id, amount, now))
            .await?;
        Ok(self.summarize(&doc, range))
    }

    pub async fn list_active_goals(&self) -> Vec<Goal> {
        self.document().await.active_goals().cloned().collect()
    }

    pub async fn list_archived_goals(&self) -> Vec<Goal> {
        self.document().await.archived_goals().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::test_store;
    use super::*;
    use crate::domain::dashboard::DashboardError;

    fn range() -> SummaryRange {
        SummaryRange::ThirtyDays
    }

    #[tokio::test]
    async fn first_goal_becomes_primary() {
        let (store, _, _) = test_store();

        let summary = store
            .create_goal(NewGoal::new("Japan trip", 5000.0, 12), range())
            .await
            .unwrap();

        let primary = summary.primary_goal.unwrap();
        assert_eq!(primary.title(), "Japan trip");
        assert!(primary.is_primary());
    }

    #[tokio::test]
    async fn goals_persist_between_calls() {
        let (store, _, _) = test_store();
        store
            .create_goal(NewGoal::new("Bike", 300.0, 3), range())
            .await
            .unwrap();

        let goals = store.list_active_goals().await;

        assert_eq!(goals.len(), 1);
        assert_eq!(goals[0].title(), "Bike");
    }

    #[tokio::test]
    async fn archive_then_list() {
        let (store, _, _) = test_store();
        let summary = store
            .create_goal(NewGoal::new("Bike", 300.0, 3), range())
            .await
            .unwrap();
        let id = summary.active_goals[0].id().clone();

        store.archive_goal(&id, range()).await.unwrap();

        assert!(store.list_active_goals().await.is_empty());
        let archived = store.list_archived_goals().await;
        assert_eq!(archived.len(), 1);
        assert!(!archived[0].is_primary());
    }

    #[tokio::test]
    async fn unknown_goal_is_reported() {
        let (store, _, _) = test_store();
        let missing = GoalId::new("goal_404").unwrap();

        let result = store.set_primary_goal(&missing, range()).await;

        assert_eq!(
            result.unwrap_err().as_dashboard(),
            Some(&DashboardError::GoalNotFound(missing))
        );
    }

    #[tokio::test]
    async fn delete_and_transfer_through_hucha() {
        let (store, _, _) = test_store();
        store
            .create_goal(NewGoal::new("Main", 1000.0, 12), range())
            .await
            .unwrap();
        let summary = store
            .create_goal(NewGoal::new("Old", 100.0, 3).with_current_amount(40.0), range())
            .await
            .unwrap();
        let main = summary.active_goals[0].id().clone();
        let old = summary.active_goals[1].id().clone();

        store.archive_goal(&old, range()).await.unwrap();
        let summary = store.delete_goal_permanently(&old, range()).await.unwrap();
        assert_eq!(summary.hucha, 40.0);
        assert_eq!(summary.archived_goals_count, 0);

        let summary = store.transfer_from_hucha(&main, 40.0, range()).await.unwrap();
        assert_eq!(summary.hucha, 0.0);
        assert_eq!(summary.primary_goal.unwrap().current_amount(), 40.0);
    }
}
