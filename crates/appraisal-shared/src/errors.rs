use reqwest_cross::reqwest::{self, StatusCode};
use thiserror::Error;

use crate::const_config::message::{
    MESSAGE_NO_CONNECTION, MESSAGE_SESSION_EXPIRED, MESSAGE_TIMEOUT,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Empty not allowed")]
    Empty,
}

/// Why no response reached the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportFailure {
    Timeout,
    NoConnection,
}

impl TransportFailure {
    pub fn message(&self) -> &'static str {
        match self {
            TransportFailure::Timeout => MESSAGE_TIMEOUT,
            TransportFailure::NoConnection => MESSAGE_NO_CONNECTION,
        }
    }
}

/// Failure of a call made through the gateway.
///
/// `Display` gives the user facing message, the variants keep what callers
/// need to handle the failure programmatically
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("{}", .failure.message())]
    Transport {
        failure: TransportFailure,
        #[source]
        source: reqwest::Error,
    },
    /// The session was invalidated by the server and has been cleared
    #[error("{}", MESSAGE_SESSION_EXPIRED)]
    SessionExpired { status: StatusCode },
    #[error("{message}")]
    Status {
        status: StatusCode,
        message: String,
        body: String,
    },
    #[error("failed to send request")]
    Request(#[source] reqwest::Error),
}

impl GatewayError {
    /// The HTTP status the server answered with, if any response was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            GatewayError::SessionExpired { status } | GatewayError::Status { status, .. } => {
                Some(*status)
            }
            GatewayError::Transport { .. } | GatewayError::Request(_) => None,
        }
    }

    /// Returns `true` if the gateway error is [`SessionExpired`].
    ///
    /// [`SessionExpired`]: GatewayError::SessionExpired
    #[must_use]
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Self::SessionExpired { .. })
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available: {0}")]
    Unavailable(String),
    #[error("storage rejected the operation: {0}")]
    Rejected(String),
    #[error("failed to access storage")]
    Io(#[from] std::io::Error),
}
