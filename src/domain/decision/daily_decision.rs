//! Daily decision record.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::DecisionRule;
use crate::domain::foundation::{round_cents, DecisionId, GoalId};

/// One answer to the daily prompt, converted to money at submission time.
///
/// Amounts are frozen when the decision is recorded; changing the income
/// range later does not touch past decisions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyDecision {
    id: DecisionId,
    date: NaiveDate,
    question_id: String,
    answer_key: String,
    goal_id: GoalId,
    delta_amount: f64,
    monthly_projection: f64,
    yearly_projection: f64,
}

impl DailyDecision {
    /// Builds a decision by scaling `rule` with the income `multiplier`.
    pub fn from_rule(
        id: DecisionId,
        date: NaiveDate,
        goal_id: GoalId,
        rule: &DecisionRule,
        multiplier: f64,
    ) -> Self {
        Self {
            id,
            date,
            question_id: rule.question_id.clone(),
            answer_key: rule.answer_key.clone(),
            goal_id,
            delta_amount: round_cents(rule.immediate_delta * multiplier),
            monthly_projection: round_cents(rule.monthly_projection * multiplier),
            yearly_projection: round_cents(rule.yearly_projection * multiplier),
        }
    }

    pub fn id(&self) -> &DecisionId {
        &self.id
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn question_id(&self) -> &str {
        &self.question_id
    }

    pub fn answer_key(&self) -> &str {
        &self.answer_key
    }

    pub fn goal_id(&self) -> &GoalId {
        &self.goal_id
    }

    pub fn delta_amount(&self) -> f64 {
        self.delta_amount
    }

    pub fn monthly_projection(&self) -> f64 {
        self.monthly_projection
    }

    pub fn yearly_projection(&self) -> f64 {
        self.yearly_projection
    }

    /// Re-scores the decision with a new rule and target goal, keeping id and date.
    pub(crate) fn reassess(&mut self, goal_id: GoalId, rule: &DecisionRule, multiplier: f64) {
        *self = Self::from_rule(self.id.clone(), self.date, goal_id, rule, multiplier);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::decision::DecisionRuleTable;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn applies_multiplier_and_rounds() {
        let rule = DecisionRuleTable::standard().lookup("coffee", "no").unwrap();
        let decision = DailyDecision::from_rule(
            DecisionId::from_millis(1),
            date(),
            GoalId::from_millis(1),
            rule,
            0.8,
        );

        assert_eq!(decision.delta_amount(), 2.4);
        assert_eq!(decision.monthly_projection(), 52.8);
        assert_eq!(decision.yearly_projection(), 633.6);
    }

    #[test]
    fn reassess_keeps_identity() {
        let table = DecisionRuleTable::standard();
        let mut decision = DailyDecision::from_rule(
            DecisionId::from_millis(9),
            date(),
            GoalId::from_millis(1),
            table.lookup("lunch", "menu").unwrap(),
            1.0,
        );

        decision.reassess(GoalId::from_millis(2), table.lookup("lunch", "homemade").unwrap(), 1.0);

        assert_eq!(decision.id(), &DecisionId::from_millis(9));
        assert_eq!(decision.date(), date());
        assert_eq!(decision.answer_key(), "homemade");
        assert_eq!(decision.goal_id(), &GoalId::from_millis(2));
        assert_eq!(decision.delta_amount(), 8.0);
    }

    #[test]
    fn date_serializes_as_plain_day() {
        let rule = DecisionRuleTable::standard().lookup("coffee", "yes").unwrap();
        let decision = DailyDecision::from_rule(
            DecisionId::from_millis(1),
            date(),
            GoalId::from_millis(1),
            rule,
            1.0,
        );
        let json = serde_json::to_value(&decision).unwrap();
        assert_eq!(json["date"], "2024-06-10");
        assert_eq!(json["questionId"], "coffee");
        assert_eq!(json["deltaAmount"], 0.0);
    }
}
