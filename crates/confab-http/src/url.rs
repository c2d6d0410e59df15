//! URL construction helpers for the backend API.
//!
//! Pure functions for building API URLs, ensuring consistent joining
//! regardless of how the configured base is shaped.

use url::Url;

use crate::config::ApiConfig;

/// Build a URL for the model list endpoint.
pub fn models_url(config: &ApiConfig) -> Url {
    join(&config.base_url, "models")
}

/// Join a relative path onto the base with exactly one separator.
fn join(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let base_path = url.path().trim_end_matches('/');
    let suffix = path.trim_start_matches('/');
    url.set_path(&format!("{base_path}/{suffix}"));
    url
}
