//! Static rule table mapping daily answers to savings amounts.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Spending area a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleCategory {
    Food,
    Transport,
    Shopping,
    Subscriptions,
}

/// Whether an answer produced a saving or left spending unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactType {
    Saving,
    Neutral,
}

/// Savings produced by one answer to one daily question.
///
/// Amounts are base euros before the income multiplier is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DecisionRule {
    pub question_id: String,
    pub answer_key: String,
    pub immediate_delta: f64,
    pub monthly_projection: f64,
    pub yearly_projection: f64,
    pub category: RuleCategory,
    pub impact_type: ImpactType,
}

impl DecisionRule {
    pub fn new(
        question_id: impl Into<String>,
        answer_key: impl Into<String>,
        immediate_delta: f64,
        monthly_projection: f64,
        yearly_projection: f64,
        category: RuleCategory,
        impact_type: ImpactType,
    ) -> Self {
        Self {
            question_id: question_id.into(),
            answer_key: answer_key.into(),
            immediate_delta,
            monthly_projection,
            yearly_projection,
            category,
            impact_type,
        }
    }
}

/// Lookup table keyed by `(question_id, answer_key)`.
#[derive(Debug, Clone, Default)]
pub struct DecisionRuleTable {
    rules: HashMap<(String, String), DecisionRule>,
    // Question ids in first-seen order, for listing.
    questions: Vec<String>,
}

static STANDARD_RULES: Lazy<DecisionRuleTable> = Lazy::new(|| {
    use ImpactType::{Neutral, Saving};
    use RuleCategory::{Food, Shopping, Subscriptions, Transport};

    DecisionRuleTable::from_rules(vec![
        DecisionRule::new("coffee", "no", 3.0, 66.0, 792.0, Food, Saving),
        DecisionRule::new("coffee", "yes", 0.0, 0.0, 0.0, Food, Neutral),
        DecisionRule::new("lunch", "homemade", 8.0, 176.0, 2112.0, Food, Saving),
        DecisionRule::new("lunch", "menu", 2.0, 44.0, 528.0, Food, Saving),
        DecisionRule::new("lunch", "restaurant", 0.0, 0.0, 0.0, Food, Neutral),
        DecisionRule::new("transport", "walk_bike", 2.5, 55.0, 660.0, Transport, Saving),
        DecisionRule::new("transport", "public", 1.5, 33.0, 396.0, Transport, Saving),
        DecisionRule::new("transport", "car_taxi", 0.0, 0.0, 0.0, Transport, Neutral),
        DecisionRule::new("delivery", "no", 12.0, 48.0, 576.0, Food, Saving),
        DecisionRule::new("delivery", "yes", 0.0, 0.0, 0.0, Food, Neutral),
        DecisionRule::new("impulse_purchase", "no", 15.0, 60.0, 720.0, Shopping, Saving),
        DecisionRule::new("impulse_purchase", "yes", 0.0, 0.0, 0.0, Shopping, Neutral),
        DecisionRule::new("subscription", "cancelled", 10.0, 10.0, 120.0, Subscriptions, Saving),
        DecisionRule::new("subscription", "kept", 0.0, 0.0, 0.0, Subscriptions, Neutral),
    ])
});

impl DecisionRuleTable {
    /// The built-in rule table shipped with the app.
    pub fn standard() -> &'static DecisionRuleTable {
        &STANDARD_RULES
    }

    /// Builds a table from rules. Later duplicates replace earlier ones.
    pub fn from_rules(rules: Vec<DecisionRule>) -> Self {
        let mut table = Self::default();
        for rule in rules {
            if !table.questions.contains(&rule.question_id) {
                table.questions.push(rule.question_id.clone());
            }
            table
                .rules
                .insert((rule.question_id.clone(), rule.answer_key.clone()), rule);
        }
        table
    }

    pub fn lookup(&self, question_id: &str, answer_key: &str) -> Option<&DecisionRule> {
        self.rules
            .get(&(question_id.to_string(), answer_key.to_string()))
    }

    /// Question ids in definition order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }

    /// All answers configured for a question.
    pub fn answers_for(&self, question_id: &str) -> Vec<&DecisionRule> {
        let mut answers: Vec<&DecisionRule> = self
            .rules
            .values()
            .filter(|rule| rule.question_id == question_id)
            .collect();
        answers.sort_by(|a, b| a.answer_key.cmp(&b.answer_key));
        answers
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_table_has_coffee_rule() {
        let rule = DecisionRuleTable::standard().lookup("coffee", "no").unwrap();
        assert_eq!(rule.immediate_delta, 3.0);
        assert_eq!(rule.category, RuleCategory::Food);
        assert_eq!(rule.impact_type, ImpactType::Saving);
    }

    #[test]
    fn unknown_pairs_are_missing() {
        let table = DecisionRuleTable::standard();
        assert!(table.lookup("nonexistent", "x").is_none());
        assert!(table.lookup("coffee", "maybe").is_none());
    }

    #[test]
    fn questions_keep_definition_order() {
        let table = DecisionRuleTable::standard();
        assert_eq!(table.questions()[0], "coffee");
        assert_eq!(table.questions().len(), 6);
        assert_eq!(table.len(), 14);
    }

    #[test]
    fn answers_for_lists_every_answer() {
        let answers = DecisionRuleTable::standard().answers_for("lunch");
        let keys: Vec<&str> = answers.iter().map(|r| r.answer_key.as_str()).collect();
        assert_eq!(keys, vec!["homemade", "menu", "restaurant"]);
    }

    #[test]
    fn later_duplicates_replace_earlier_rules() {
        let table = DecisionRuleTable::from_rules(vec![
            DecisionRule::new("q", "a", 1.0, 0.0, 0.0, RuleCategory::Food, ImpactType::Saving),
            DecisionRule::new("q", "a", 2.0, 0.0, 0.0, RuleCategory::Food, ImpactType::Saving),
        ]);
        assert_eq!(table.len(), 1);
        assert_eq!(table.lookup("q", "a").unwrap().immediate_delta, 2.0);
    }
}
