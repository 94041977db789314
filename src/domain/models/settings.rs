use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Settings for the `lds-args` tool itself
///
/// These never come from the positional input file; they are layered
/// from defaults, an optional YAML file and `LDS_ARGS_*` environment
/// variables by [`crate::SettingsLoader`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Settings {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,

    /// Input file loader configuration
    #[serde(default)]
    pub loader: LoaderSettings,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingSettings {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stderr only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// Rotation of log files: daily, hourly, never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Input file loader configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoaderSettings {
    /// Longest accepted value, in bytes
    #[serde(default = "default_max_field_len")]
    pub max_field_len: usize,

    /// Reject non-numeric integer values instead of storing zero
    #[serde(default)]
    pub strict_integers: bool,
}

const fn default_max_field_len() -> usize {
    super::schema::DEFAULT_MAX_FIELD_LEN
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            max_field_len: default_max_field_len(),
            strict_integers: false,
        }
    }
}
