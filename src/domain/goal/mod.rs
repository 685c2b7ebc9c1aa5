//! Savings goals.

mod entity;

pub use entity::{Goal, GoalPatch, NewGoal, MAX_TITLE_LENGTH};
