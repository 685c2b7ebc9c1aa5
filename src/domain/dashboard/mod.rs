pub mod document;
pub mod errors;
pub mod summary;

pub use document::{DashboardDocument, RecordedDecision};
pub use errors::DashboardError;
pub use summary::{DashboardSummary, EvolutionPoint, Intensity, TodayStatus};
