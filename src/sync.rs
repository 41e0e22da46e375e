//! Boundary contract to the remote job service.
//!
//! The board depends on [`JobSource`] but never implements transport itself.
//! Failures are reported as [`NetworkError`] and translated into board errors
//! by the caller.

use async_trait::async_trait;
use thiserror::Error;

use crate::record::{JobRecord, RecordId};

/// Transport-level failures from the job service.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection, timeout or other request failure
    #[error("request failed: {0}")]
    Request(String),

    /// Job service answered with an error status
    #[error("job service returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Job does not exist (for example, already deleted)
    #[error("job {0} not found")]
    NotFound(RecordId),

    /// Body could not be decoded
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl NetworkError {
    /// A repeated delete of an already removed job may answer with this.
    pub fn is_not_found(&self) -> bool {
        matches!(self, NetworkError::NotFound(_))
    }
}

/// Remote fetch/delete contract.
///
/// `fetch_all` resolves to `None` when the service answers with an absent
/// collection, which is distinct from an empty list.
#[async_trait]
pub trait JobSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Option<Vec<JobRecord>>, NetworkError>;

    async fn delete(&self, id: RecordId) -> Result<(), NetworkError>;
}
