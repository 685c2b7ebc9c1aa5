//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `KeyValueStorage` - Persistent string store holding the dashboard document
//! - `Clock` - Current time and calendar day

mod clock;
mod state_storage;

pub use clock::Clock;
pub use state_storage::{validate_key, KeyValueStorage, StateStorageError};
