//! Error Types
//!
//! Failures of the item store boundary and of the synchronizer on top of it.

use thiserror::Error;

/// Common result type for item store calls
pub type StoreResult<T> = Result<T, StoreError>;

/// Common result type for synchronizer operations
pub type SyncResult<T> = Result<T, SyncError>;

/// Item store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Request could not be built or sent, or the connection failed
    #[error("Transport error: {0}")]
    Transport(String),
    /// Store answered with a non-success status
    #[error("Request to {url} failed with status {status}")]
    Status { status: u16, url: String },
    /// Body is not valid JSON
    #[error("Response is not JSON: {0}")]
    Decode(String),
    /// Body is JSON but not the expected shape
    #[error("Unexpected response shape: {0}")]
    Shape(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(e: reqwest::Error) -> Self {
        match e.status() {
            Some(status) => StoreError::Status {
                status: status.as_u16(),
                url: e.url().map(|u| u.to_string()).unwrap_or_default(),
            },
            None if e.is_decode() => StoreError::Decode(e.to_string()),
            None => StoreError::Transport(e.to_string()),
        }
    }
}

/// Synchronizer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyncError {
    #[error(transparent)]
    Store(#[from] StoreError),
    /// The view was torn down while the request was in flight
    #[error("View disposed before the response arrived")]
    Disposed,
}
