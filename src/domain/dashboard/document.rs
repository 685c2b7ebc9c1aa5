//! Dashboard document aggregate.
//!
//! The whole persisted state of the app: profile, goals, decisions and the
//! hucha balance. Every mutation goes through this type so the cross-goal
//! rules are enforced in one place.
//!
//! # Invariants
//!
//! - At most one active goal has `is_primary = true`
//! - Archived goals are never primary
//! - At most one decision per calendar date
//! - Goal and decision ids are unique
//! - `hucha >= 0`

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::DashboardError;
use crate::domain::decision::{DailyDecision, DecisionRuleTable};
use crate::domain::foundation::{
    round_cents, saturating_sub, DecisionId, GoalId, Timestamp, ValidationError,
};
use crate::domain::goal::{Goal, GoalPatch, NewGoal};
use crate::domain::profile::{income_multiplier, normalize_user_name, IncomeRange};

/// Result of recording a daily decision.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDecision {
    pub decision: DailyDecision,
    /// False when the target goal id did not match any goal.
    pub goal_credited: bool,
}

/// The persisted dashboard state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardDocument {
    #[serde(default)]
    user_name: String,
    #[serde(default)]
    income_range: Option<IncomeRange>,
    #[serde(default)]
    goals: Vec<Goal>,
    #[serde(default)]
    decisions: Vec<DailyDecision>,
    #[serde(default)]
    hucha: f64,
}

impl DashboardDocument {
    /// A fresh document with no profile, goals or decisions.
    pub fn empty() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors & projections
    // ─────────────────────────────────────────────────────────────────────────

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub fn income_range(&self) -> Option<&IncomeRange> {
        self.income_range.as_ref()
    }

    /// Multiplier applied to new decisions.
    pub fn income_multiplier(&self) -> f64 {
        income_multiplier(self.income_range.as_ref())
    }

    /// All goals, in storage order.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// All decisions, in recording order.
    pub fn decisions(&self) -> &[DailyDecision] {
        &self.decisions
    }

    pub fn hucha(&self) -> f64 {
        self.hucha
    }

    pub fn active_goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|g| g.is_active())
    }

    pub fn archived_goals(&self) -> impl Iterator<Item = &Goal> {
        self.goals.iter().filter(|g| g.is_archived())
    }

    pub fn find_goal(&self, id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id() == id)
    }

    /// The flagged primary goal, else the first active goal.
    pub fn primary_goal(&self) -> Option<&Goal> {
        self.active_goals()
            .find(|g| g.is_primary())
            .or_else(|| self.active_goals().next())
    }

    pub fn decision_for_date(&self, date: NaiveDate) -> Option<&DailyDecision> {
        self.decisions.iter().find(|d| d.date() == date)
    }

    pub fn find_decision(&self, id: &DecisionId) -> Option<&DailyDecision> {
        self.decisions.iter().find(|d| d.id() == id)
    }

    /// Sum of every recorded delta.
    pub fn total_saved(&self) -> f64 {
        round_cents(self.decisions.iter().map(DailyDecision::delta_amount).sum())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Profile
    // ─────────────────────────────────────────────────────────────────────────

    /// Replaces the display name.
    ///
    /// # Errors
    ///
    /// - `Validation` if the name is blank; the previous name is kept
    pub fn set_user_name(&mut self, name: &str) -> Result<(), DashboardError> {
        self.user_name = normalize_user_name(name)?;
        Ok(())
    }

    pub fn set_income_range(&mut self, range: Option<IncomeRange>) {
        self.income_range = range;
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Goals
    // ─────────────────────────────────────────────────────────────────────────

    /// Appends a new goal.
    ///
    /// The goal becomes primary when requested or when there is no other
    /// active goal; in both cases every other goal is demoted first.
    pub fn create_goal(&mut self, input: NewGoal, now: Timestamp) -> Result<GoalId, DashboardError> {
        let make_primary = input.is_primary || self.active_goals().next().is_none();
        let id = self.next_goal_id(&now);
        let mut goal = Goal::new(id.clone(), input, now)?;

        if make_primary {
            self.demote_all(now);
            goal.set_primary(true, now);
        }
        self.goals.push(goal);
        Ok(id)
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` for an unknown id
    /// - `GoalArchived` if the patch promotes an archived goal
    /// - `Validation` if a patched field is invalid
    pub fn update_goal(&mut self, id: &GoalId, patch: &GoalPatch, now: Timestamp) -> Result<(), DashboardError> {
        let idx = self.goal_index(id)?;
        if patch.is_primary == Some(true) && self.goals[idx].is_archived() {
            return Err(DashboardError::GoalArchived(id.clone()));
        }

        self.goals[idx].apply_patch(patch, now)?;
        match patch.is_primary {
            Some(true) => self.promote_exclusive(idx, now),
            Some(false) => self.goals[idx].set_primary(false, now),
            None => {}
        }
        Ok(())
    }

    /// Soft-deletes a goal. If it was primary, the first other active goal
    /// (storage order) takes over.
    pub fn archive_goal(&mut self, id: &GoalId, now: Timestamp) -> Result<(), DashboardError> {
        let idx = self.goal_index(id)?;
        if self.goals[idx].is_archived() {
            return Err(DashboardError::GoalArchived(id.clone()));
        }

        let was_primary = self.goals[idx].is_primary();
        self.goals[idx].archive(now);

        if was_primary {
            if let Some(successor) = self.goals.iter_mut().find(|g| g.is_active()) {
                successor.set_primary(true, now);
            }
        }
        Ok(())
    }

    /// Makes `id` the only primary goal.
    ///
    /// # Errors
    ///
    /// - `GoalNotFound` for an unknown id
    /// - `GoalArchived` if the goal is archived
    pub fn set_primary_goal(&mut self, id: &GoalId, now: Timestamp) -> Result<(), DashboardError> {
        let idx = self.goal_index(id)?;
        if self.goals[idx].is_archived() {
            return Err(DashboardError::GoalArchived(id.clone()));
        }
        self.promote_exclusive(idx, now);
        Ok(())
    }

    /// Brings an archived goal back. It becomes primary if no active goal is.
    pub fn reactivate_goal(&mut self, id: &GoalId, now: Timestamp) -> Result<(), DashboardError> {
        let idx = self.goal_index(id)?;
        if self.goals[idx].is_active() {
            return Err(DashboardError::GoalNotArchived(id.clone()));
        }

        let has_primary = self.active_goals().any(Goal::is_primary);
        self.goals[idx].reactivate(now);
        if !has_primary {
            self.goals[idx].set_primary(true, now);
        }
        Ok(())
    }

    /// Physically removes an archived goal, moving its balance to the hucha.
    ///
    /// Returns the amount moved. Decisions keep pointing at the removed id.
    pub fn delete_goal_permanently(&mut self, id: &GoalId) -> Result<f64, DashboardError> {
        let idx = self.goal_index(id)?;
        if self.goals[idx].is_active() {
            return Err(DashboardError::GoalNotArchived(id.clone()));
        }

        let goal = self.goals.remove(idx);
        let released = goal.current_amount();
        self.hucha = round_cents(self.hucha + released);
        Ok(released)
    }

    /// Moves `amount` from the hucha into an active goal.
    pub fn transfer_from_hucha(
        &mut self,
        id: &GoalId,
        amount: f64,
        now: Timestamp,
    ) -> Result<(), DashboardError> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(ValidationError::not_positive("amount", amount).into());
        }
        let amount = round_cents(amount);
        let idx = self.goal_index(id)?;
        if self.goals[idx].is_archived() {
            return Err(DashboardError::GoalArchived(id.clone()));
        }
        if amount > self.hucha {
            return Err(DashboardError::InsufficientHucha {
                requested: amount,
                available: self.hucha,
            });
        }

        self.hucha = saturating_sub(self.hucha, amount);
        self.goals[idx].credit(amount, now);
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Decisions
    // ─────────────────────────────────────────────────────────────────────────

    /// Records today's decision and credits its goal.
    ///
    /// An unknown goal id still records the decision; `goal_credited`
    /// reports whether a goal received the amount.
    ///
    /// # Errors
    ///
    /// - `DecisionAlreadyRecorded` if `today` already has a decision
    /// - `UnknownRule` if the rule table has no entry for the answer
    pub fn record_decision(
        &mut self,
        question_id: &str,
        answer_key: &str,
        goal_id: GoalId,
        rules: &DecisionRuleTable,
        today: NaiveDate,
        now: Timestamp,
    ) -> Result<RecordedDecision, DashboardError> {
        if self.decision_for_date(today).is_some() {
            return Err(DashboardError::DecisionAlreadyRecorded(today));
        }
        let rule = rules
            .lookup(question_id, answer_key)
            .ok_or_else(|| DashboardError::unknown_rule(question_id, answer_key))?;

        let id = self.next_decision_id(&now);
        let decision = DailyDecision::from_rule(id, today, goal_id, rule, self.income_multiplier());
        let goal_credited = self.credit_goal(decision.goal_id(), decision.delta_amount(), now);
        self.decisions.push(decision.clone());

        Ok(RecordedDecision {
            decision,
            goal_credited,
        })
    }

    /// Changes the answer (and optionally the goal) of a past decision.
    ///
    /// The old amount is taken back from the old goal and the re-scored
    /// amount is credited to the new one. As with [`Self::record_decision`],
    /// `goal_credited` is false when the target goal no longer exists.
    ///
    /// # Errors
    ///
    /// - `DecisionNotFound` for an unknown decision id
    /// - `GoalArchived` if `goal_id` names an archived goal
    /// - `UnknownRule` if the rule table has no entry for the new answer
    pub fn update_decision(
        &mut self,
        id: &DecisionId,
        answer_key: &str,
        goal_id: Option<GoalId>,
        rules: &DecisionRuleTable,
        now: Timestamp,
    ) -> Result<RecordedDecision, DashboardError> {
        let idx = self.decision_index(id)?;
        if let Some(target) = goal_id.as_ref() {
            if self.find_goal(target).is_some_and(Goal::is_archived) {
                return Err(DashboardError::GoalArchived(target.clone()));
            }
        }
        let question_id = self.decisions[idx].question_id().to_string();
        let rule = rules
            .lookup(&question_id, answer_key)
            .ok_or_else(|| DashboardError::unknown_rule(&question_id, answer_key))?;

        let old_goal = self.decisions[idx].goal_id().clone();
        let old_delta = self.decisions[idx].delta_amount();
        let new_goal = goal_id.unwrap_or_else(|| old_goal.clone());
        let multiplier = self.income_multiplier();

        self.debit_goal(&old_goal, old_delta, now);
        self.decisions[idx].reassess(new_goal, rule, multiplier);
        let decision = self.decisions[idx].clone();
        let goal_credited = self.credit_goal(decision.goal_id(), decision.delta_amount(), now);
        Ok(RecordedDecision {
            decision,
            goal_credited,
        })
    }

    /// Removes a decision and takes its amount back from its goal.
    ///
    /// If the goal was permanently deleted, its balance already moved to
    /// the hucha and stays there; only the decision is removed.
    pub fn delete_decision(&mut self, id: &DecisionId, now: Timestamp) -> Result<DailyDecision, DashboardError> {
        let idx = self.decision_index(id)?;
        let removed = self.decisions.remove(idx);
        self.debit_goal(removed.goal_id(), removed.delta_amount(), now);
        Ok(removed)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Integrity
    // ─────────────────────────────────────────────────────────────────────────

    /// Checks every invariant. Used on documents that did not come from
    /// this type's own mutations (imports).
    pub fn validate(&self) -> Result<(), DashboardError> {
        if let Some(range) = &self.income_range {
            IncomeRange::new(range.min(), range.max()).map_err(|e| {
                DashboardError::invalid_document(format!("invalid income range: {}", e))
            })?;
        }

        let mut goal_ids = HashSet::new();
        for goal in &self.goals {
            if !goal_ids.insert(goal.id()) {
                return Err(DashboardError::invalid_document(format!(
                    "duplicate goal id {}",
                    goal.id()
                )));
            }
            if goal.is_archived() && goal.is_primary() {
                return Err(DashboardError::invalid_document(format!(
                    "archived goal {} is marked primary",
                    goal.id()
                )));
            }
            if let Err(e) = Goal::validate_title(goal.title()) {
                return Err(DashboardError::invalid_document(format!(
                    "goal {} has an invalid title: {}",
                    goal.id(),
                    e
                )));
            }
            if !(goal.target_amount() > 0.0) || goal.current_amount() < 0.0 || goal.horizon_months() == 0 {
                return Err(DashboardError::invalid_document(format!(
                    "goal {} has out-of-range amounts or horizon",
                    goal.id()
                )));
            }
        }
        if self.active_goals().filter(|g| g.is_primary()).count() > 1 {
            return Err(DashboardError::invalid_document("more than one primary goal"));
        }

        let mut decision_ids = HashSet::new();
        let mut dates = HashSet::new();
        for decision in &self.decisions {
            if !decision_ids.insert(decision.id()) {
                return Err(DashboardError::invalid_document(format!(
                    "duplicate decision id {}",
                    decision.id()
                )));
            }
            if !dates.insert(decision.date()) {
                return Err(DashboardError::invalid_document(format!(
                    "more than one decision on {}",
                    decision.date()
                )));
            }
        }

        if !(self.hucha >= 0.0) {
            return Err(DashboardError::invalid_document("hucha balance is negative"));
        }
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    fn goal_index(&self, id: &GoalId) -> Result<usize, DashboardError> {
        self.goals
            .iter()
            .position(|g| g.id() == id)
            .ok_or_else(|| DashboardError::GoalNotFound(id.clone()))
    }

    fn decision_index(&self, id: &DecisionId) -> Result<usize, DashboardError> {
        self.decisions
            .iter()
            .position(|d| d.id() == id)
            .ok_or_else(|| DashboardError::DecisionNotFound(id.clone()))
    }

    fn demote_all(&mut self, now: Timestamp) {
        for goal in &mut self.goals {
            goal.set_primary(false, now);
        }
    }

    fn promote_exclusive(&mut self, idx: usize, now: Timestamp) {
        self.demote_all(now);
        self.goals[idx].set_primary(true, now);
    }

    fn credit_goal(&mut self, id: &GoalId, amount: f64, now: Timestamp) -> bool {
        match self.goals.iter_mut().find(|g| g.id() == id) {
            Some(goal) => {
                goal.credit(amount, now);
                true
            }
            None => false,
        }
    }

    fn debit_goal(&mut self, id: &GoalId, amount: f64, now: Timestamp) -> bool {
        match self.goals.iter_mut().find(|g| g.id() == id) {
            Some(goal) => {
                goal.debit(amount, now);
                true
            }
            None => false,
        }
    }

    // Ids are millisecond stamps; bump until unused so two writes in the
    // same millisecond still get distinct ids. Ids of deleted goals that
    // decisions still point at count as used.
    fn next_goal_id(&self, now: &Timestamp) -> GoalId {
        let mut millis = now.as_unix_millis();
        loop {
            let id = GoalId::from_millis(millis);
            let referenced = self.decisions.iter().any(|d| d.goal_id() == &id);
            if self.find_goal(&id).is_none() && !referenced {
                return id;
            }
            millis += 1;
        }
    }

    fn next_decision_id(&self, now: &Timestamp) -> DecisionId {
        let mut millis = now.as_unix_millis();
        loop {
            let id = DecisionId::from_millis(millis);
            if self.find_decision(&id).is_none() {
                return id;
            }
            millis += 1;
        }
    }
}

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;
