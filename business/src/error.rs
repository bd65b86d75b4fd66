use thiserror::Error;

use crate::http::{HttpError, HttpErrorKind};

/// Every failure the API client can surface, each with a message fit for display.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error(
        "Unable to connect to the server. Please check your internet connection or verify that the API endpoint is accessible."
    )]
    Network,

    #[error("Request timed out. The server is taking too long to respond. Please try again.")]
    Timeout,

    #[error("Server error: {status} - {reason}")]
    Server { status: u16, reason: String },

    #[error("No response from server. Please check if the API endpoint is correct and accessible.")]
    NoResponse,

    #[error("Record {id} was not found")]
    NotFound { id: String },

    #[error("Failed to parse server response: {0}")]
    Decode(String),

    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl ApiError {
    pub fn server(status: u16, reason: impl Into<String>) -> Self {
        Self::Server {
            status,
            reason: reason.into(),
        }
    }

    /// Whether the request never produced a usable HTTP response.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Network | Self::Timeout | Self::NoResponse)
    }
}

impl From<HttpError> for ApiError {
    fn from(err: HttpError) -> Self {
        match err.kind {
            HttpErrorKind::Connect => Self::Network,
            HttpErrorKind::Timeout => Self::Timeout,
            HttpErrorKind::NoResponse => Self::NoResponse,
            HttpErrorKind::Other => Self::Unknown(err.message),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
