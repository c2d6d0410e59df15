//! Default locations for the preference file.

use std::path::PathBuf;

/// Relative location of the preference file inside the per-user config
/// directory.
pub const PREFS_FILE_RELATIVE: &str = "confab/preferences.json";

/// Default per-user preference file path.
///
/// Resolves under the platform config directory (e.g.
/// `~/.config/confab/preferences.json` on Linux). Returns `None` when no
/// home/config directory can be determined; callers in that situation
/// typically fall back to an in-memory repository.
#[must_use]
pub fn default_prefs_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(PREFS_FILE_RELATIVE))
}
