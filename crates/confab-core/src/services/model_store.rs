//! Model store - resolves and holds the available model list and selection.
//!
//! The store fetches the model list from the catalog port at most once per
//! process lifetime, falls back to a hardcoded default when the fetch yields
//! nothing usable, and seeds the selection from the persisted value. Every
//! failure mode degrades to a usable state; nothing escapes as an error.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::ports::{ModelCatalogPort, PreferenceRepository};

/// Model identifier used when no list can be obtained from the catalog.
pub const FALLBACK_MODEL: &str = "openai/gpt-4.1-mini";

/// Storage key for the last explicitly chosen model identifier.
pub const SELECTED_MODEL_KEY: &str = "confab.selectedModel";

/// Reactive state held by the [`ModelStore`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelState {
    /// Available model identifiers, in backend order (or the single
    /// fallback entry).
    pub models: Vec<String>,
    /// The active identifier; non-empty once `initialized` is true.
    pub selected_model: String,
    /// True only while the one allowed fetch is in flight.
    pub is_loading: bool,
    /// Latched true after the first load completes, success or failure.
    pub initialized: bool,
}

/// Store for the available model list and the current selection.
///
/// Constructed once at the composition root and shared via `Arc`. UI
/// components may call [`ModelStore::load_models`] freely on every view
/// mount; concurrent calls collapse into a single catalog fetch.
pub struct ModelStore {
    catalog: Arc<dyn ModelCatalogPort>,
    preferences: Arc<dyn PreferenceRepository>,
    state: watch::Sender<ModelState>,
}

impl ModelStore {
    /// Create a new model store over the given ports.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn ModelCatalogPort>,
        preferences: Arc<dyn PreferenceRepository>,
    ) -> Self {
        let (state, _) = watch::channel(ModelState::default());
        Self {
            catalog,
            preferences,
            state,
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub fn snapshot(&self) -> ModelState {
        self.state.borrow().clone()
    }

    /// Subscribe to state changes.
    ///
    /// The receiver wakes whenever the model list, selection or load flags
    /// change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<ModelState> {
        self.state.subscribe()
    }

    /// Load the model list from the catalog, at most once per process.
    ///
    /// Idempotent and concurrency-safe: the `initialized`/`is_loading` guard
    /// is checked and set synchronously before the first suspension point,
    /// so callers racing past it short-circuit and at most one fetch is ever
    /// in flight. Whatever the fetch outcome, the store finalizes with a
    /// non-empty model list and a non-empty selection.
    pub async fn load_models(&self) {
        let mut started = false;
        self.state.send_if_modified(|s| {
            if s.initialized || s.is_loading {
                return false;
            }
            s.is_loading = true;
            started = true;
            true
        });
        if !started {
            return;
        }

        let fetched = match self.catalog.list_models().await {
            Ok(models) => models,
            Err(e) => {
                warn!(error = %e, "model list fetch failed, falling back");
                Vec::new()
            }
        };

        // The persisted value is only a seed; don't touch storage when a
        // selection already exists.
        let stored = if self.state.borrow().selected_model.is_empty() {
            match self.preferences.get(SELECTED_MODEL_KEY).await {
                Ok(value) => value,
                Err(e) => {
                    warn!(error = %e, "stored model selection unreadable, ignoring");
                    None
                }
            }
        } else {
            None
        };

        self.state.send_modify(|s| {
            if !fetched.is_empty() {
                s.models = fetched;
            }
            if s.models.is_empty() {
                debug!(fallback = FALLBACK_MODEL, "model list empty, using fallback");
                s.models = vec![FALLBACK_MODEL.to_string()];
            }
            if s.selected_model.is_empty() {
                let seed = stored.filter(|v| !v.is_empty());
                s.selected_model =
                    seed.unwrap_or_else(|| s.models.first().cloned().unwrap_or_default());
            }
            s.initialized = true;
            s.is_loading = false;
        });
    }

    /// Select a model and persist the choice.
    ///
    /// The identifier is trimmed; a blank result is rejected silently.
    /// Persistence is best-effort - a storage failure is logged and
    /// swallowed, and the in-memory selection stands.
    pub async fn set_model(&self, identifier: &str) {
        let trimmed = identifier.trim();
        if trimmed.is_empty() {
            return;
        }

        self.state.send_if_modified(|s| {
            if s.selected_model == trimmed {
                return false;
            }
            s.selected_model = trimmed.to_string();
            true
        });

        if let Err(e) = self.preferences.set(SELECTED_MODEL_KEY, trimmed).await {
            warn!(error = %e, "failed to persist model selection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::{CatalogError, MemoryPreferenceRepository, PreferenceError};
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::Notify;

    struct FixedCatalog {
        result: std::sync::Mutex<Option<Result<Vec<String>, CatalogError>>>,
        calls: AtomicUsize,
    }

    impl FixedCatalog {
        fn ok(models: &[&str]) -> Self {
            Self::new(Ok(models.iter().map(ToString::to_string).collect()))
        }

        fn new(result: Result<Vec<String>, CatalogError>) -> Self {
            Self {
                result: std::sync::Mutex::new(Some(result)),
                calls: AtomicUsize::new(0),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ModelCatalogPort for FixedCatalog {
        async fn list_models(&self) -> Result<Vec<String>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.result
                .lock()
                .unwrap()
                .take()
                .expect("catalog called more than once")
        }
    }

    /// Catalog that blocks until released, for in-flight concurrency tests.
    struct GatedCatalog {
        calls: AtomicUsize,
        release: Notify,
    }

    impl GatedCatalog {
        fn new() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                release: Notify::new(),
            }
        }
    }

    #[async_trait]
    impl ModelCatalogPort for GatedCatalog {
        async fn list_models(&self) -> Result<Vec<String>, CatalogError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.release.notified().await;
            Ok(vec!["a/one".to_string(), "b/two".to_string()])
        }
    }

    /// Preference repository that counts reads, to pin down when the
    /// persisted seed is consulted.
    struct CountingPrefs {
        inner: MemoryPreferenceRepository,
        gets: AtomicUsize,
    }

    impl CountingPrefs {
        fn new() -> Self {
            Self {
                inner: MemoryPreferenceRepository::new(),
                gets: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl PreferenceRepository for CountingPrefs {
        async fn get(&self, key: &str) -> Result<Option<String>, PreferenceError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.inner.get(key).await
        }

        async fn set(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
            self.inner.set(key, value).await
        }
    }

    struct FailingPrefs;

    #[async_trait]
    impl PreferenceRepository for FailingPrefs {
        async fn get(&self, _key: &str) -> Result<Option<String>, PreferenceError> {
            Err(PreferenceError::Storage("disabled".to_string()))
        }

        async fn set(&self, _key: &str, _value: &str) -> Result<(), PreferenceError> {
            Err(PreferenceError::Storage("disabled".to_string()))
        }
    }

    fn store_with(
        catalog: Arc<dyn ModelCatalogPort>,
        prefs: Arc<dyn PreferenceRepository>,
    ) -> ModelStore {
        ModelStore::new(catalog, prefs)
    }

    #[tokio::test]
    async fn test_successful_load_adopts_backend_order() {
        let catalog = Arc::new(FixedCatalog::ok(&["b/second", "a/first"]));
        let store = store_with(catalog.clone(), Arc::new(MemoryPreferenceRepository::new()));

        store.load_models().await;

        let state = store.snapshot();
        assert_eq!(state.models, vec!["b/second", "a/first"]);
        assert_eq!(state.selected_model, "b/second");
        assert!(state.initialized);
        assert!(!state.is_loading);
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn test_load_is_idempotent() {
        let catalog = Arc::new(FixedCatalog::ok(&["a/one"]));
        let store = store_with(catalog.clone(), Arc::new(MemoryPreferenceRepository::new()));

        store.load_models().await;
        store.load_models().await;
        store.load_models().await;

        assert_eq!(catalog.calls(), 1);
        assert!(store.snapshot().initialized);
    }

    #[tokio::test]
    async fn test_concurrent_loads_collapse_into_one_fetch() {
        let catalog = Arc::new(GatedCatalog::new());
        let store = Arc::new(store_with(
            catalog.clone(),
            Arc::new(MemoryPreferenceRepository::new()),
        ));

        let first = tokio::spawn({
            let store = Arc::clone(&store);
            async move { store.load_models().await }
        });

        // Wait until the first call is inside the fetch.
        for _ in 0..100 {
            if catalog.calls.load(Ordering::SeqCst) == 1 {
                break;
            }
            tokio::task::yield_now().await;
        }
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
        assert!(store.snapshot().is_loading);

        // A second caller short-circuits while the fetch is in flight.
        store.load_models().await;
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);

        catalog.release.notify_one();
        first.await.unwrap();

        let state = store.snapshot();
        assert_eq!(catalog.calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.models, vec!["a/one", "b/two"]);
        assert!(state.initialized);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn test_fetch_failure_falls_back_to_default_model() {
        for result in [
            Err(CatalogError::Status { status: 500 }),
            Err(CatalogError::Network("connection refused".to_string())),
            Err(CatalogError::InvalidResponse("not json".to_string())),
            Ok(vec![]),
        ] {
            let catalog = Arc::new(FixedCatalog::new(result));
            let store = store_with(catalog, Arc::new(MemoryPreferenceRepository::new()));

            store.load_models().await;

            let state = store.snapshot();
            assert_eq!(state.models, vec![FALLBACK_MODEL]);
            assert_eq!(state.selected_model, FALLBACK_MODEL);
            assert!(state.initialized);
            assert!(!state.is_loading);
        }
    }

    #[tokio::test]
    async fn test_persisted_selection_seeds_over_first_entry() {
        let prefs = Arc::new(MemoryPreferenceRepository::with_entries([(
            SELECTED_MODEL_KEY,
            "claude-3",
        )]));
        let catalog = Arc::new(FixedCatalog::ok(&["a/one", "b/two"]));
        let store = store_with(catalog, prefs);

        store.load_models().await;
        assert_eq!(store.snapshot().selected_model, "claude-3");
    }

    #[tokio::test]
    async fn test_persisted_selection_survives_empty_fetch() {
        let prefs = Arc::new(MemoryPreferenceRepository::with_entries([(
            SELECTED_MODEL_KEY,
            "claude-3",
        )]));
        let store = store_with(Arc::new(FixedCatalog::new(Ok(vec![]))), prefs);

        store.load_models().await;

        let state = store.snapshot();
        assert_eq!(state.models, vec![FALLBACK_MODEL]);
        assert_eq!(state.selected_model, "claude-3");
    }

    #[tokio::test]
    async fn test_seed_is_not_read_when_selection_already_exists() {
        let prefs = Arc::new(CountingPrefs::new());
        let store = store_with(Arc::new(FixedCatalog::ok(&["a/one", "b/two"])), prefs.clone());

        store.set_model("claude-3").await;
        store.load_models().await;

        assert_eq!(prefs.gets.load(Ordering::SeqCst), 0);
        assert_eq!(store.snapshot().selected_model, "claude-3");
    }

    #[tokio::test]
    async fn test_set_model_trims_and_persists() {
        let prefs = Arc::new(MemoryPreferenceRepository::new());
        let catalog = Arc::new(FixedCatalog::ok(&["a/one"]));
        let store = store_with(catalog, prefs.clone());
        store.load_models().await;

        store.set_model("  claude-3  ").await;

        assert_eq!(store.snapshot().selected_model, "claude-3");
        assert_eq!(
            prefs.get(SELECTED_MODEL_KEY).await.unwrap(),
            Some("claude-3".to_string())
        );
    }

    #[tokio::test]
    async fn test_blank_selection_is_rejected() {
        let store = store_with(
            Arc::new(FixedCatalog::ok(&["a/one"])),
            Arc::new(MemoryPreferenceRepository::new()),
        );
        store.load_models().await;

        store.set_model("").await;
        store.set_model("   ").await;

        assert_eq!(store.snapshot().selected_model, "a/one");
    }

    #[tokio::test]
    async fn test_storage_failures_are_swallowed() {
        let store = store_with(Arc::new(FixedCatalog::ok(&["a/one"])), Arc::new(FailingPrefs));

        // Unreadable storage behaves as "nothing stored".
        store.load_models().await;
        assert_eq!(store.snapshot().selected_model, "a/one");

        // Unwritable storage still updates the in-memory selection.
        store.set_model("b/two").await;
        assert_eq!(store.snapshot().selected_model, "b/two");
    }

    #[tokio::test]
    async fn test_subscribe_sees_selection_change() {
        let store = store_with(
            Arc::new(FixedCatalog::ok(&["a/one"])),
            Arc::new(MemoryPreferenceRepository::new()),
        );
        store.load_models().await;

        let mut rx = store.subscribe();
        rx.mark_unchanged();

        store.set_model("b/two").await;
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().selected_model, "b/two");
    }
}
