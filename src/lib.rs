//! Ahorro Invisible - Daily micro-saving decisions tracked against goals
//!
//! Each day the user answers one spending question ("did you skip the
//! coffee?"). The answer is priced by a rule table, scaled by an income
//! multiplier and credited to a savings goal. Everything lives in a single
//! JSON document owned by [`application::DashboardStore`], which also
//! derives the dashboard summary (evolution, intensity, monthly average
//! and ETA) on every read.
//!
//! Layout follows a ports-and-adapters split:
//! - `domain` - Pure types and rules, no I/O
//! - `ports` - Storage and clock traits
//! - `adapters` - File and in-memory storage, system and fixed clocks
//! - `application` - The dashboard store
//! - `config`, `telemetry`, `bootstrap` - Environment loading, logging, wiring

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
