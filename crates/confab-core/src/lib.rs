#![doc = include_str!("../README.md")]
#![deny(unused_crate_dependencies)]

pub mod ports;
pub mod services;
pub mod theme;

// Re-export commonly used types for convenience
pub use ports::{
    CatalogError, FixedSystemTheme, MemoryPreferenceRepository, ModelCatalogPort, NoopThemeTarget,
    Ports, PreferenceError, PreferenceRepository, SystemThemePort, ThemeTargetPort,
};
pub use services::{
    ClientCore, ModelState, ModelStore, SettingsState, SettingsStore, FALLBACK_MODEL,
    SELECTED_MODEL_KEY, THEME_KEY,
};
pub use theme::{resolve_theme, EffectiveTheme, ThemePreference};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
