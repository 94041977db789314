//! Command-line interface for `lds-args`.

pub mod commands;
pub mod output;
pub mod types;

use std::process::ExitCode;

pub use types::{Cli, Commands};

use crate::infrastructure::config::ConfigError;

/// Report a failed command and pick the process exit status.
///
/// Input file errors keep their own status codes; anything else exits 1.
pub fn handle_error(err: &anyhow::Error, json_mode: bool) -> ExitCode {
    let config_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ConfigError>());

    if json_mode {
        let mut body = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        if let Some(config_error) = config_error {
            body["path"] = config_error.path().display().to_string().into();
        }
        println!("{}", serde_json::to_string_pretty(&body).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }

    ExitCode::from(config_error.map_or(1, ConfigError::exit_code))
}
