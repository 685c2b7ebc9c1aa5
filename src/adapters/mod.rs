//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `storage` - Key-value stores (file, in-memory)
//! - `clock` - Time sources (system, fixed)

pub mod clock;
pub mod storage;

pub use clock::{FixedClock, SystemClock};
pub use storage::{FileStateStorage, InMemoryStateStorage};
