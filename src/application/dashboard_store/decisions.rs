//! Daily decision operations.

use chrono::NaiveDate;

use super::{DashboardStore, StoreError};
use crate::domain::dashboard::{DashboardError, DashboardSummary};
use crate::domain::decision::DailyDecision;
use crate::domain::foundation::{DecisionId, GoalId, SummaryRange};

impl DashboardStore {
    /// Records today's answer and credits the chosen goal.
    ///
    /// # Errors
    ///
    /// - `DecisionAlreadyRecorded` if today already has a decision
    /// - `UnknownRule` if the rule table has no entry for the answer
    /// - `Storage` if the document could not be written
    pub async fn submit_decision(
        &self,
        question_id: &str,
        answer_key: &str,
        goal_id: GoalId,
        range: SummaryRange,
    ) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let today = self.clock.today();
        let rules = self.rules.clone();

        let result = self
            .mutate("submit_decision", |doc| {
                doc.record_decision(question_id, answer_key, goal_id, &rules, today, now)
            })
            .await;

        let (recorded, doc) = match result {
            Ok(ok) => ok,
            Err(e @ StoreError::Dashboard(DashboardError::UnknownRule { .. })) => {
                tracing::error!(question_id, answer_key, "no decision rule for answer, nothing recorded");
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        if !recorded.goal_credited {
            tracing::warn!(
                goal_id = %recorded.decision.goal_id(),
                decision_id = %recorded.decision.id(),
                "decision recorded for unknown goal, no goal credited"
            );
        }
        Ok(self.summarize(&doc, range))
    }

    /// Changes the answer, and optionally the goal, of a recorded decision.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` if no decision has this id
    /// - `GoalArchived` if the new goal is archived
    /// - `UnknownRule` if the rule table has no entry for the answer
    /// - `Storage` if the document could not be written
    pub async fn update_decision(
        &self,
        id: &DecisionId,
        answer_key: &str,
        goal_id: Option<GoalId>,
        range: SummaryRange,
    ) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let rules = self.rules.clone();
        let (updated, doc) = self
            .mutate("update_decision", |doc| {
                doc.update_decision(id, answer_key, goal_id, &rules, now)
            })
            .await?;
        if !updated.goal_credited {
            tracing::warn!(
                goal_id = %updated.decision.goal_id(),
                decision_id = %updated.decision.id(),
                "decision moved to unknown goal, no goal credited"
            );
        }
        Ok(self.summarize(&doc, range))
    }

    /// Removes a decision and takes its amount back from its goal.
    pub async fn delete_decision(&self, id: &DecisionId, range: SummaryRange) -> Result<DashboardSummary, StoreError> {
        let now = self.clock.now();
        let (_, doc) = self
            .mutate("delete_decision", |doc| doc.delete_decision(id, now))
            .await?;
        Ok(self.summarize(&doc, range))
    }

    /// The decision recorded on `date`, if any.
    pub async fn get_daily_for_date(&self, date: NaiveDate) -> Option<DailyDecision> {
        self.document().await.decision_for_date(date).cloned()
    }
}
