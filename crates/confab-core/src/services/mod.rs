//! Client state stores - the application's stateful layer.
//!
//! This module contains the two long-lived stores built on top of the port
//! traits, plus the `ClientCore` facade that composes them. Stores are pure
//! orchestrators over injected ports; they don't know about concrete
//! implementations.

mod client_core;
mod model_store;
mod settings_store;

pub use client_core::ClientCore;
pub use model_store::{ModelState, ModelStore, FALLBACK_MODEL, SELECTED_MODEL_KEY};
pub use settings_store::{SettingsState, SettingsStore, THEME_KEY};
