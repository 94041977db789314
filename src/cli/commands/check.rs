//! Implementation of the `lds-args check` command.

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

use super::build_loader;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Settings, SCHEMA_LEN};

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Input file to check
    pub file: PathBuf,

    /// Reject non-numeric values in integer slots
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct CheckOutput {
    pub success: bool,
    pub path: PathBuf,
    pub records: usize,
    pub diagnostics: bool,
}

impl CommandOutput for CheckOutput {
    fn to_human(&self) -> String {
        let mut line = format!("{}: {} input arguments OK", self.path.display(), self.records);
        if self.diagnostics {
            line.push_str(" (diagnostics on)");
        }
        line
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: CheckArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let record = build_loader(settings, args.strict).load_file(&args.file)?;

    output(
        &CheckOutput {
            success: true,
            path: args.file,
            records: SCHEMA_LEN,
            diagnostics: record.diagnostics_enabled(),
        },
        json_mode,
    );
    Ok(())
}
