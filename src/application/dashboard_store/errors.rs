//! Errors returned by dashboard store operations.

use thiserror::Error;

use crate::domain::dashboard::DashboardError;
use crate::domain::foundation::ErrorCode;
use crate::ports::StateStorageError;

/// Why a store operation did not take effect.
///
/// Whenever an operation returns an error, nothing was persisted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    /// The mutation was refused by the domain rules.
    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    /// The document could not be written.
    #[error("Storage error: {0}")]
    Storage(#[from] StateStorageError),
}

impl StoreError {
    pub fn code(&self) -> ErrorCode {
        match self {
            StoreError::Dashboard(err) => err.code(),
            StoreError::Storage(_) => ErrorCode::StorageError,
        }
    }

    /// The domain error, if this is one.
    pub fn as_dashboard(&self) -> Option<&DashboardError> {
        match self {
            StoreError::Dashboard(err) => Some(err),
            StoreError::Storage(_) => None,
        }
    }
}
