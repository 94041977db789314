use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::Path;
use thiserror::Error;

use crate::domain::models::Settings;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_FILE: &str = "lds-args.yaml";

/// Prefix of environment overrides, e.g. `LDS_ARGS_LOGGING__LEVEL`
pub const ENV_PREFIX: &str = "LDS_ARGS_";

/// Settings validation errors
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidRotation(String),

    #[error("Invalid max_field_len: {0}. Must be at least 1")]
    InvalidMaxFieldLen(usize),
}

/// Settings loader with hierarchical merging
pub struct SettingsLoader;

impl SettingsLoader {
    /// Load settings with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. `lds-args.yaml` in the working directory (optional)
    /// 3. `extra`, typically from `--settings` (optional)
    /// 4. Environment variables (`LDS_ARGS_*` prefix, highest priority)
    pub fn load(extra: Option<&Path>) -> Result<Settings> {
        let mut figment = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(DEFAULT_SETTINGS_FILE));

        if let Some(path) = extra {
            if !path.exists() {
                anyhow::bail!("Settings file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        let settings: Settings = figment
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
            .extract()
            .context("Failed to extract settings from figment")?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Load settings from a specific file, without env overrides
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Settings> {
        let settings: Settings = Figment::new()
            .merge(Serialized::defaults(Settings::default()))
            .merge(Yaml::file(path.as_ref()))
            .extract()
            .with_context(|| format!("Failed to load settings from {}", path.as_ref().display()))?;

        Self::validate(&settings)?;
        Ok(settings)
    }

    /// Validate settings after loading
    pub fn validate(settings: &Settings) -> Result<(), SettingsError> {
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&settings.logging.level.as_str()) {
            return Err(SettingsError::InvalidLogLevel(settings.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&settings.logging.format.as_str()) {
            return Err(SettingsError::InvalidLogFormat(settings.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&settings.logging.rotation.as_str()) {
            return Err(SettingsError::InvalidRotation(settings.logging.rotation.clone()));
        }

        if settings.loader.max_field_len == 0 {
            return Err(SettingsError::InvalidMaxFieldLen(0));
        }

        Ok(())
    }
}
