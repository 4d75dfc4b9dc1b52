//! Client error taxonomy.

use thiserror::Error;

/// Errors surfaced by the client library.
///
/// `Validation` is resolved locally and never reaches the network layer.
/// Everything else is produced at the fetch boundary and carries a
/// human-readable message suitable for direct display.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{message}")]
    Conflict { code: String, message: String },

    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Result type alias using ClientError.
pub type ClientResult<T> = Result<T, ClientError>;
