//! Theme target port for the presentation root.
//!
//! This module defines the outbound side of theme handling: pushing the
//! resolved theme onto whatever renders it (a document root class list, a
//! window chrome setting, a GUI style context).

use crate::theme::EffectiveTheme;

/// Port for applying the effective theme to the presentation root.
///
/// # Contract
///
/// Applying is an idempotent presentation-state write: the implementation
/// must clear any previously applied theme marker and leave exactly one
/// marker (`light` or `dark`) set - never both, never neither, after any
/// apply. Re-applying the current theme is a no-op in effect.
pub trait ThemeTargetPort: Send + Sync {
    /// Apply `theme` to the presentation root.
    ///
    /// This method should not block; it runs on the cooperative executor.
    fn apply_theme(&self, theme: EffectiveTheme);
}

/// A no-op theme target for tests and headless contexts.
///
/// Discards all applies, making it suitable for contexts with nothing to
/// render (CLI tooling, integration tests that only exercise state).
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopThemeTarget;

impl NoopThemeTarget {
    /// Create a new no-op target.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ThemeTargetPort for NoopThemeTarget {
    fn apply_theme(&self, _theme: EffectiveTheme) {
        // Intentionally do nothing
    }
}
