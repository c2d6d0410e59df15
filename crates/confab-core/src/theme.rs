//! Theme domain types and resolution.
//!
//! These are pure domain types with no infrastructure dependencies. The
//! user's stored intent (`ThemePreference`) is symbolic and may defer to the
//! OS; the value actually rendered (`EffectiveTheme`) is always concrete and
//! always recomputed, never persisted.

use serde::{Deserialize, Serialize};

/// The user's raw theme intent.
///
/// `System` defers to the OS-level dark/light preference at read time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Always render light.
    Light,
    /// Always render dark.
    Dark,
    /// Follow the OS preference.
    #[default]
    System,
}

impl ThemePreference {
    /// The canonical string form, used for persistence.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Parse a persisted value.
    ///
    /// Returns `None` for anything outside the three canonical strings so
    /// that callers can apply their own default; corrupt stored values are
    /// never an error.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }
}

/// The concrete theme applied to the presentation root.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    /// Light rendering.
    Light,
    /// Dark rendering.
    Dark,
}

impl EffectiveTheme {
    /// The marker string for this theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Resolve a preference against the OS signal.
///
/// `prefers_dark` is the current OS reading; `None` means the signal cannot
/// be read (e.g. no display environment) and resolves `System` to light.
#[must_use]
pub const fn resolve_theme(
    preference: ThemePreference,
    prefers_dark: Option<bool>,
) -> EffectiveTheme {
    match preference {
        ThemePreference::Light => EffectiveTheme::Light,
        ThemePreference::Dark => EffectiveTheme::Dark,
        ThemePreference::System => match prefers_dark {
            Some(true) => EffectiveTheme::Dark,
            Some(false) | None => EffectiveTheme::Light,
        },
    }
}
