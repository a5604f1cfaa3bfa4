use thiserror::Error;

use crate::domain::DomainError;

/// Client-level errors for calls to the ledger and processor services
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Request rejected locally; nothing was sent
    #[error("Validation error: {0}")]
    Validation(#[from] DomainError),

    /// Connection-level failure (refused, reset, DNS, ...)
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-2xx status
    #[error("Service error {status}: {message}")]
    Service { status: u16, message: String },

    /// The response body did not match the expected shape
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Invalid base URL {url}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

impl ClientError {
    /// HTTP status carried by a service error
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Service { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}
