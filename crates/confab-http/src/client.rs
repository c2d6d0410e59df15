//! The reqwest-backed model catalog client.

use async_trait::async_trait;
use serde::Deserialize;

use confab_core::{CatalogError, ModelCatalogPort};

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use crate::url::models_url;

/// Wire shape of the model list response.
///
/// Anything other than a JSON object carrying a `models` array of strings is
/// a protocol failure.
#[derive(Debug, Deserialize)]
pub(crate) struct ModelsResponse {
    pub(crate) models: Vec<String>,
}

/// Reqwest-backed implementation of `ModelCatalogPort`.
///
/// Performs a single `GET {base}/models` per call. Failures surface as the
/// port's `CatalogError`; the caller owns retry and fallback policy.
pub struct HttpModelCatalog {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpModelCatalog {
    /// Create a new catalog client with the given configuration.
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .expect("failed to create HTTP client");
        Self { client, config }
    }

    async fn fetch_models(&self) -> ApiResult<Vec<String>> {
        let url = models_url(&self.config);
        let response = self.client.get(url.as_str()).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        let body = response.text().await?;
        let parsed: ModelsResponse = serde_json::from_str(&body)?;
        Ok(parsed.models)
    }
}

#[async_trait]
impl ModelCatalogPort for HttpModelCatalog {
    async fn list_models(&self) -> Result<Vec<String>, CatalogError> {
        self.fetch_models().await.map_err(CatalogError::from)
    }
}
