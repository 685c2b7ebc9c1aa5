//! Storage Adapters
//!
//! Implementations of the KeyValueStorage port for persisting the dashboard document.
//!
//! ## Available Adapters
//!
//! - **FileStateStorage** - Stores each key as a JSON file on disk
//! - **InMemoryStateStorage** - Stores values in memory (testing/development)
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileStateStorage, InMemoryStateStorage};
//!
//! // Production: file-based storage
//! let storage = FileStateStorage::new("./data");
//!
//! // Testing: in-memory storage
//! let storage = InMemoryStateStorage::new();
//! ```

mod file_state_storage;
mod in_memory_state_storage;

pub use file_state_storage::FileStateStorage;
pub use in_memory_state_storage::InMemoryStateStorage;
