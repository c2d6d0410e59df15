//! `ClientCore` - the client state composition facade.
//!
//! This is the composition root for the state stores. The embedding
//! application (GUI shell, Tauri backend, test harness) constructs one
//! `ClientCore` with concrete port implementations and shares it for the
//! process lifetime.

use std::sync::Arc;

use crate::ports::Ports;

use super::{ModelStore, SettingsStore};

/// The client state facade.
///
/// `ClientCore` owns the two long-lived stores. It is constructed exactly
/// once at the adapter's composition root; sharing the same instance is what
/// preserves the one-fetch, one-init lifecycle of the stores.
///
/// # Example
///
/// ```ignore
/// let ports = Ports::new(catalog, preferences, system_theme, theme_target);
/// let core = ClientCore::new(ports);
///
/// core.settings().init_theme().await;
/// core.models().load_models().await;
/// ```
pub struct ClientCore {
    models: Arc<ModelStore>,
    settings: Arc<SettingsStore>,
}

impl ClientCore {
    /// Create a new `ClientCore` wired to the given ports.
    #[must_use]
    pub fn new(ports: Ports) -> Self {
        Self {
            models: Arc::new(ModelStore::new(ports.catalog, ports.preferences.clone())),
            settings: Arc::new(SettingsStore::new(
                ports.preferences,
                ports.system_theme,
                ports.theme_target,
            )),
        }
    }

    /// Access the model store.
    #[must_use]
    pub const fn models(&self) -> &Arc<ModelStore> {
        &self.models
    }

    /// Access the settings store.
    #[must_use]
    pub const fn settings(&self) -> &Arc<SettingsStore> {
        &self.settings
    }
}
