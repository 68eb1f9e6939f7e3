//! Client Error Types

use thiserror::Error;

/// The request never produced a response.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timeout")]
    Timeout,
}

/// Failure of a single service call
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Network(#[from] TransportError),

    /// Non-2xx status
    #[error("Server error {status}: {message}")]
    Server { status: u16, message: String },

    /// Response body was not the expected JSON
    #[error("Parse error: {0}")]
    Parse(serde_json::Error),

    #[error("Request build error: {0}")]
    Encode(serde_json::Error),
}

impl ClientError {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ClientError::Network(_) => "network",
            ClientError::Server { .. } => "server",
            ClientError::Parse(_) => "parse",
            ClientError::Encode(_) => "encode",
        }
    }
}

/// Result type for service calls
pub type ClientResult<T> = Result<T, ClientError>;
