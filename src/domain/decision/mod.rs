//! Daily decisions and the rule table that prices them.

mod daily_decision;
mod rules;

pub use daily_decision::DailyDecision;
pub use rules::{DecisionRule, DecisionRuleTable, ImpactType, RuleCategory};
