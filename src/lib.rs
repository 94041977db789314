//! lds-args - positional input file loader for the land data system
//!
//! An input file lists the run's integer parameters and its directory and
//! file names, one value per line, in a fixed order. Blank lines and `#`
//! comments are ignored. [`ConfigLoader`] reads such a file into a
//! [`ConfigRecord`], or fails without handing out a partial record.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain`): the record, the positional schema, tool settings
//! - **Infrastructure Layer** (`infrastructure`): file loading, rendering, settings, logging
//! - **CLI Layer** (`cli`): the `lds-args` command-line interface
//!
//! # Example
//!
//! ```no_run
//! use lds_args::ConfigLoader;
//!
//! let record = ConfigLoader::load("input/moirai_input.txt")?;
//! println!("output year: {}", record.out_year_prod_ha_lr);
//! # Ok::<(), lds_args::ConfigError>(())
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;

// Re-export commonly used types for convenience
pub use domain::models::{
    ConfigRecord, FieldAccess, FieldKind, FieldSpec, FieldValue, LoaderSettings, LoggingSettings,
    Settings, DEFAULT_MAX_FIELD_LEN, SCHEMA, SCHEMA_LEN,
};
pub use infrastructure::config::{
    render_record, render_template, ConfigError, ConfigLoader, IntegerPolicy, LineSanitizer,
    LoaderOptions, WhitespaceStripper,
};
pub use infrastructure::logging::{LogConfig, LogFormat, LoggerImpl, RotationPolicy};
pub use infrastructure::settings::{SettingsError, SettingsLoader};
