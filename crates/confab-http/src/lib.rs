#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod client;
mod config;
mod error;
mod url;

// ============================================================================
// Public API
// ============================================================================

// Client
pub use client::HttpModelCatalog;

// Configuration
pub use config::{ApiConfig, DEFAULT_API_BASE, DEFAULT_TIMEOUT};

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
