//! Application layer - Orchestrates domain operations over the ports.
//!
//! The [`DashboardStore`] is the only component that loads and persists the
//! dashboard document.

pub mod dashboard_store;

pub use dashboard_store::{DashboardStore, StoreError, DEFAULT_DOCUMENT_KEY};
