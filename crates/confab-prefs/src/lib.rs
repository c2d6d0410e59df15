#![doc = include_str!("../README.md")]
#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

mod paths;
mod repository;

pub use paths::{default_prefs_path, PREFS_FILE_RELATIVE};
pub use repository::JsonPreferenceRepository;

// Silence unused dev-dependency warnings
#[cfg(test)]
use tokio_test as _;
