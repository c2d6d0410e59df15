//! Model catalog port for listing available models.
//!
//! This port defines the interface for fetching the list of model
//! identifiers from the backend. It provides domain-level data without
//! exposing HTTP or transport implementation details.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur while querying the model catalog.
///
/// Variants carry plain strings so that no transport crate types leak into
/// port signatures; adapters map their internal errors into these at the
/// boundary.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request completed with a non-success HTTP status.
    #[error("catalog request failed with status {status}")]
    Status {
        /// HTTP status code returned by the backend.
        status: u16,
    },

    /// The response body was absent, unparsable, or not the expected shape.
    #[error("invalid catalog response: {0}")]
    InvalidResponse(String),

    /// The request could not be completed (connection, DNS, timeout).
    #[error("network error: {0}")]
    Network(String),
}

/// Port for fetching the available model list.
///
/// Implementations perform a single request per call; retry and fallback
/// policy belong to the caller, not the port.
#[async_trait]
pub trait ModelCatalogPort: Send + Sync {
    /// List available model identifiers in backend order.
    ///
    /// An empty list is a valid response and is returned as `Ok`; whether to
    /// treat it as usable is the caller's decision.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the catalog cannot be queried or the
    /// response is malformed.
    async fn list_models(&self) -> Result<Vec<String>, CatalogError>;
}
