//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the client state expects from its
//! surroundings: the backend model catalog, the persistent preference
//! store, the OS theme signal, and the presentation root. They contain no
//! implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No HTTP or filesystem types in any signature
//! - Errors carry strings, not transport error types
//! - Ports report failures honestly; fallback policy lives in the stores

pub mod model_catalog;
pub mod preference_repository;
pub mod system_theme;
pub mod theme_target;

use std::sync::Arc;

// Re-export port traits for convenience
pub use model_catalog::{CatalogError, ModelCatalogPort};
pub use preference_repository::{
    MemoryPreferenceRepository, PreferenceError, PreferenceRepository,
};
pub use system_theme::{FixedSystemTheme, SystemThemePort};
pub use theme_target::{NoopThemeTarget, ThemeTargetPort};

/// Container for all port trait objects.
///
/// This struct provides a consistent way to wire ports across adapters
/// without coupling them to concrete implementations. The embedding
/// application builds one at its composition root and hands it to
/// [`crate::services::ClientCore`].
#[derive(Clone)]
pub struct Ports {
    /// Model catalog for fetching the available model list.
    pub catalog: Arc<dyn ModelCatalogPort>,
    /// Preference repository for persisted scalar entries.
    pub preferences: Arc<dyn PreferenceRepository>,
    /// OS dark/light preference signal.
    pub system_theme: Arc<dyn SystemThemePort>,
    /// Presentation root that renders the effective theme.
    pub theme_target: Arc<dyn ThemeTargetPort>,
}

impl Ports {
    /// Create a new `Ports` container.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn ModelCatalogPort>,
        preferences: Arc<dyn PreferenceRepository>,
        system_theme: Arc<dyn SystemThemePort>,
        theme_target: Arc<dyn ThemeTargetPort>,
    ) -> Self {
        Self {
            catalog,
            preferences,
            system_theme,
            theme_target,
        }
    }
}
