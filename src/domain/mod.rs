//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (ids, timestamps, money, errors)
//! - `profile` - User name and income bracket
//! - `goal` - Savings goal entity
//! - `decision` - Daily decisions and the rule table that prices them
//! - `dashboard` - The persisted document aggregate and the derived summary

pub mod dashboard;
pub mod decision;
pub mod foundation;
pub mod goal;
pub mod profile;
