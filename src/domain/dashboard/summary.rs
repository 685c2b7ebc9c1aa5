//! Read model rendered by every dashboard screen.
//!
//! Built from a [`DashboardDocument`] and a calendar day; pure, so the
//! same document and day always give the same summary.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

use super::DashboardDocument;
use crate::domain::decision::DailyDecision;
use crate::domain::foundation::{round_cents, DecisionId, SummaryRange};
use crate::domain::goal::Goal;
use crate::domain::profile::IncomeRange;

/// Days covered by the intensity classification, today included.
pub const INTENSITY_WINDOW_DAYS: i64 = 7;

/// Days covered by the monthly savings average, today included.
pub const AVERAGE_WINDOW_DAYS: i64 = 30;

/// Weekly totals below this are `low`.
pub const LOW_INTENSITY_THRESHOLD: f64 = 10.0;

/// Weekly totals below this (and at least the low threshold) are `medium`.
pub const HIGH_INTENSITY_THRESHOLD: f64 = 40.0;

/// Whether today's question has been answered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum TodayStatus {
    Pending,
    #[serde(rename_all = "camelCase")]
    Completed { decision_id: DecisionId },
}

/// Coarse classification of the last week of savings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Unknown,
    Low,
    Medium,
    High,
}

/// One day of the savings evolution chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EvolutionPoint {
    pub date: NaiveDate,
    /// Saved on this day.
    pub amount: f64,
    /// Saved up to and including this day.
    pub cumulative: f64,
}

/// Everything the dashboard screens need, derived on every read.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub range: SummaryRange,
    pub today: NaiveDate,
    pub user_name: String,
    pub income_range: Option<IncomeRange>,
    pub income_multiplier: f64,
    pub active_goals: Vec<Goal>,
    pub archived_goals_count: usize,
    pub primary_goal: Option<Goal>,
    pub today_status: TodayStatus,
    pub evolution: Vec<EvolutionPoint>,
    pub intensity: Intensity,
    pub average_monthly_savings: f64,
    /// Months until the primary goal is reached, if there is one.
    pub eta_months: Option<u32>,
    pub total_saved: f64,
    pub hucha: f64,
}

impl DashboardSummary {
    pub fn build(doc: &DashboardDocument, range: SummaryRange, today: NaiveDate) -> Self {
        let decisions = doc.decisions();
        let average_monthly_savings = monthly_average(decisions, today);
        let primary_goal = doc.primary_goal().cloned();
        let eta_months = primary_goal
            .as_ref()
            .map(|goal| eta_months(goal, average_monthly_savings));

        let today_status = match doc.decision_for_date(today) {
            Some(decision) => TodayStatus::Completed {
                decision_id: decision.id().clone(),
            },
            None => TodayStatus::Pending,
        };

        Self {
            range,
            today,
            user_name: doc.user_name().to_string(),
            income_range: doc.income_range().copied(),
            income_multiplier: doc.income_multiplier(),
            active_goals: doc.active_goals().cloned().collect(),
            archived_goals_count: doc.archived_goals().count(),
            primary_goal,
            today_status,
            evolution: evolution_series(decisions, today, range.days()),
            intensity: weekly_intensity(decisions, today),
            average_monthly_savings,
            eta_months,
            total_saved: doc.total_saved(),
            hucha: doc.hucha(),
        }
    }
}

/// First day of a window of `days` days that ends today.
fn window_start(today: NaiveDate, days: i64) -> NaiveDate {
    today - Duration::days(days - 1)
}

fn sum_between(decisions: &[DailyDecision], from: NaiveDate, to: NaiveDate) -> Option<f64> {
    let mut in_window = decisions
        .iter()
        .filter(|d| d.date() >= from && d.date() <= to)
        .peekable();
    in_window.peek()?;
    Some(round_cents(in_window.map(DailyDecision::delta_amount).sum()))
}

/// Daily and cumulative savings for the last `days` days.
///
/// The cumulative line starts from everything saved before the window, so
/// the last point equals the total saved up to today.
pub fn evolution_series(decisions: &[DailyDecision], today: NaiveDate, days: u32) -> Vec<EvolutionPoint> {
    let start = window_start(today, i64::from(days));

    let mut per_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    let mut cumulative = 0.0;
    for decision in decisions {
        if decision.date() < start {
            cumulative += decision.delta_amount();
        } else if decision.date() <= today {
            *per_day.entry(decision.date()).or_insert(0.0) += decision.delta_amount();
        }
    }

    start
        .iter_days()
        .take(days as usize)
        .map(|date| {
            let amount = round_cents(per_day.get(&date).copied().unwrap_or(0.0));
            cumulative = round_cents(cumulative + amount);
            EvolutionPoint {
                date,
                amount,
                cumulative,
            }
        })
        .collect()
}

/// Classifies the last seven days of savings.
pub fn weekly_intensity(decisions: &[DailyDecision], today: NaiveDate) -> Intensity {
    match sum_between(decisions, window_start(today, INTENSITY_WINDOW_DAYS), today) {
        None => Intensity::Unknown,
        Some(total) if total < LOW_INTENSITY_THRESHOLD => Intensity::Low,
        Some(total) if total < HIGH_INTENSITY_THRESHOLD => Intensity::Medium,
        Some(_) => Intensity::High,
    }
}

/// Savings over the last thirty days, used as the monthly rate.
pub fn monthly_average(decisions: &[DailyDecision], today: NaiveDate) -> f64 {
    sum_between(decisions, window_start(today, AVERAGE_WINDOW_DAYS), today).unwrap_or(0.0)
}

/// Months left for `goal` at `monthly_savings` per month, rounded up.
///
/// Falls back to the goal's own horizon when nothing is being saved.
pub fn eta_months(goal: &Goal, monthly_savings: f64) -> u32 {
    let remaining = goal.remaining_amount();
    if remaining <= 0.0 {
        return 0;
    }
    if monthly_savings <= 0.0 {
        return goal.horizon_months();
    }
    (remaining / monthly_savings).ceil() as u32
}

#[cfg(test)]
#[path = "summary_test.rs"]
mod summary_test;
