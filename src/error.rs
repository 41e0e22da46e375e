//! Error types for toucan
//!
//! Exit codes:
//! - 0: Success
//! - 2: User error (bad args, unknown record, bad config)
//! - 3: Blocked by the confirmation gate
//! - 4: Operation failed (load/delete failure, IO, parse)

use std::path::PathBuf;
use thiserror::Error;

use crate::record::RecordId;

/// Exit codes for the toucan CLI
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const USER_ERROR: i32 = 2;
    pub const CONFIRMATION_REQUIRED: i32 = 3;
    pub const OPERATION_FAILED: i32 = 4;
}

/// Main error type for toucan operations
#[derive(Error, Debug)]
pub enum Error {
    // User errors (exit code 2)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Job not found: {0}")]
    RecordNotFound(RecordId),

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    // Confirmation gate (exit code 3)
    #[error("Deleting job {0} requires explicit confirmation")]
    ConfirmationRequired(RecordId),

    // Operation failures (exit code 4)
    #[error("Could not load job data: {0}")]
    Load(String),

    #[error("Could not delete job {id}: {message}")]
    Delete { id: RecordId, message: String },

    #[error("No job data available")]
    EmptyCollection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl Error {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::InvalidConfig(_)
            | Error::InvalidArgument(_)
            | Error::RecordNotFound(_)
            | Error::ConfigNotFound(_) => exit_codes::USER_ERROR,

            Error::ConfirmationRequired(_) => exit_codes::CONFIRMATION_REQUIRED,

            Error::Load(_)
            | Error::Delete { .. }
            | Error::EmptyCollection
            | Error::Io(_)
            | Error::Json(_)
            | Error::TomlParse(_)
            | Error::TomlSerialize(_) => exit_codes::OPERATION_FAILED,
        }
    }

    /// Delete failures leave the board untouched and never block further use.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::Delete { .. } | Error::ConfirmationRequired(_))
    }

    /// Structured fields for the JSON error envelope.
    pub fn details(&self) -> Option<serde_json::Value> {
        match self {
            Error::InvalidConfig(message) | Error::InvalidArgument(message) => {
                Some(serde_json::json!({ "message": message }))
            }
            Error::RecordNotFound(id) | Error::ConfirmationRequired(id) => {
                Some(serde_json::json!({ "id": id }))
            }
            Error::ConfigNotFound(path) => {
                Some(serde_json::json!({ "path": path.to_string_lossy() }))
            }
            Error::Load(message) => Some(serde_json::json!({ "message": message })),
            Error::Delete { id, message } => {
                Some(serde_json::json!({ "id": id, "message": message }))
            }
            _ => None,
        }
    }
}

/// Result type alias for toucan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Wrapper for displaying errors in JSON format
#[derive(serde::Serialize)]
pub struct JsonError {
    pub error: String,
    pub code: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl From<&Error> for JsonError {
    fn from(err: &Error) -> Self {
        JsonError {
            error: err.to_string(),
            code: err.exit_code(),
            details: err.details(),
        }
    }
}
