//! Settings of the `lds-args` tool
//!
//! Hierarchical settings using figment:
//! - YAML file loading
//! - Environment variable overrides
//! - Settings validation

pub mod loader;

pub use loader::{SettingsError, SettingsLoader, DEFAULT_SETTINGS_FILE, ENV_PREFIX};
