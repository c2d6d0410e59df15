//! Internal error types for backend API operations.
//!
//! These errors are internal to `confab-http` and are mapped to the core
//! port's `CatalogError` at the boundary.

use confab_core::CatalogError;
use thiserror::Error;

/// Result type alias for backend API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to backend API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request completed with an HTTP error status.
    #[error("API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// The response body was not the expected shape.
    #[error("invalid response from API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// Network or HTTP client error.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl From<ApiError> for CatalogError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::RequestFailed { status, .. } => Self::Status { status },
            ApiError::InvalidResponse { message } => Self::InvalidResponse(message),
            ApiError::JsonParse(e) => Self::InvalidResponse(e.to_string()),
            ApiError::Network(e) => Self::Network(e.to_string()),
            ApiError::InvalidUrl(e) => Self::Network(e.to_string()),
        }
    }
}
