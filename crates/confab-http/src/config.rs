//! Configuration for the backend API client.

use std::time::Duration;

use url::Url;

use crate::error::ApiResult;

/// Default API base when the embedding application provides none.
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8080/api";

/// Default request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for [`crate::HttpModelCatalog`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the backend API; paths are joined onto this.
    pub base_url: Url,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ApiConfig {
    /// Create a configuration from a base URL string.
    ///
    /// A trailing slash on the base is trimmed so that path joining always
    /// produces exactly one separator.
    pub fn from_base_url(base: &str) -> ApiResult<Self> {
        let trimmed = base.trim();
        let normalized = trimmed.strip_suffix('/').unwrap_or(trimmed);
        let base_url = Url::parse(normalized)?;
        Ok(Self {
            base_url,
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Override the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_base_url(DEFAULT_API_BASE).expect("default API base is a valid URL")
    }
}
