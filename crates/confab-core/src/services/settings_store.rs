//! Settings store - theme preference, resolution and propagation.
//!
//! The store owns the persisted theme preference, computes the effective
//! theme against the OS signal on every read, and keeps the presentation
//! root consistent whenever either input changes. An explicit OS preference
//! change never overrides a user's explicit light/dark choice.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::ports::{PreferenceRepository, SystemThemePort, ThemeTargetPort};
use crate::theme::{resolve_theme, EffectiveTheme, ThemePreference};

/// Storage key for the last explicitly chosen theme preference.
pub const THEME_KEY: &str = "confab.theme";

/// Reactive state held by the [`SettingsStore`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsState {
    /// The user's raw stored intent.
    pub preference: ThemePreference,
    /// Latched true after the first `init_theme` call.
    pub initialized: bool,
}

/// Store for the theme preference and its propagation to the presentation
/// root.
///
/// Constructed once at the composition root and shared via `Arc`. The
/// applied theme reaches the target through two deliberately redundant
/// paths: the explicit apply inside [`SettingsStore::set_theme`] /
/// [`SettingsStore::init_theme`], and a watcher task that re-applies on any
/// preference change. Both converge because applying is idempotent.
pub struct SettingsStore {
    preferences: Arc<dyn PreferenceRepository>,
    system: Arc<dyn SystemThemePort>,
    target: Arc<dyn ThemeTargetPort>,
    state: watch::Sender<SettingsState>,
}

impl SettingsStore {
    /// Create a new settings store over the given ports.
    #[must_use]
    pub fn new(
        preferences: Arc<dyn PreferenceRepository>,
        system: Arc<dyn SystemThemePort>,
        target: Arc<dyn ThemeTargetPort>,
    ) -> Self {
        let (state, _) = watch::channel(SettingsState::default());
        Self {
            preferences,
            system,
            target,
            state,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> SettingsState {
        *self.state.borrow()
    }

    /// The user's current raw preference.
    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.state.borrow().preference
    }

    /// Subscribe to state changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SettingsState> {
        self.state.subscribe()
    }

    /// The concrete theme to render right now.
    ///
    /// Always recomputed: `System` resolves against the live OS signal at
    /// call time, defaulting to light when the signal cannot be read.
    #[must_use]
    pub fn effective_theme(&self) -> EffectiveTheme {
        resolve_theme(self.preference(), self.system.prefers_dark())
    }

    /// Initialize the theme machinery, at most once per process.
    ///
    /// Idempotent: the guard is latched synchronously before the first
    /// suspension point, so racing callers short-circuit. The first call
    /// seeds the preference from storage (invalid or unreadable values fall
    /// back to `System`), applies the effective theme, and spawns the
    /// process-scoped watcher tasks for the OS signal and for preference
    /// changes.
    pub async fn init_theme(&self) {
        let mut first = false;
        self.state.send_if_modified(|s| {
            if s.initialized {
                return false;
            }
            s.initialized = true;
            first = true;
            true
        });
        if !first {
            return;
        }

        let stored = match self.preferences.get(THEME_KEY).await {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "stored theme preference unreadable, using system");
                None
            }
        };
        let preference = match stored.as_deref() {
            None => ThemePreference::default(),
            Some(raw) => ThemePreference::parse(raw).unwrap_or_else(|| {
                debug!(stored = raw, "discarding invalid stored theme");
                ThemePreference::default()
            }),
        };

        self.state.send_modify(|s| s.preference = preference);
        self.apply_current();
        self.spawn_watchers();
    }

    /// Set the preference, persist it, and apply the new effective theme.
    ///
    /// Persistence is best-effort; a storage failure is logged and
    /// swallowed.
    pub async fn set_theme(&self, preference: ThemePreference) {
        self.state.send_if_modified(|s| {
            if s.preference == preference {
                return false;
            }
            s.preference = preference;
            true
        });

        if let Err(e) = self.preferences.set(THEME_KEY, preference.as_str()).await {
            warn!(error = %e, "failed to persist theme preference");
        }

        self.apply_current();
    }

    fn apply_current(&self) {
        self.target.apply_theme(self.effective_theme());
    }

    /// Spawn the two long-lived watcher tasks.
    ///
    /// Both end on their own when the store (or the OS signal source) is
    /// dropped, since their channels close; no explicit teardown exists.
    fn spawn_watchers(&self) {
        // OS signal changes re-apply only under the `System` policy.
        let mut os_rx = self.system.subscribe();
        let state_rx = self.state.subscribe();
        let system = Arc::clone(&self.system);
        let target = Arc::clone(&self.target);
        tokio::spawn(async move {
            while os_rx.changed().await.is_ok() {
                let preference = state_rx.borrow().preference;
                if preference == ThemePreference::System {
                    target.apply_theme(resolve_theme(preference, system.prefers_dark()));
                }
            }
        });

        // Preference changes always re-apply. Redundant with the explicit
        // apply in `set_theme`, which is intentional: both paths converge
        // on the same idempotent write.
        let mut pref_rx = self.state.subscribe();
        let system = Arc::clone(&self.system);
        let target = Arc::clone(&self.target);
        tokio::spawn(async move {
            while pref_rx.changed().await.is_ok() {
                let preference = pref_rx.borrow_and_update().preference;
                target.apply_theme(resolve_theme(preference, system.prefers_dark()));
            }
        });
    }
}
