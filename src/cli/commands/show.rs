//! Implementation of the `lds-args show` command.

use anyhow::{anyhow, Result};
use clap::Args;
use comfy_table::Cell;
use std::path::PathBuf;

use super::build_loader;
use crate::cli::output::{base_table, output, CommandOutput};
use crate::domain::models::{schema, ConfigRecord, Settings};

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Input file to load
    pub file: PathBuf,

    /// Print a single field by name
    #[arg(short, long)]
    pub field: Option<String>,

    /// Reject non-numeric values in integer slots
    #[arg(long)]
    pub strict: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct ShowOutput {
    pub path: PathBuf,
    pub record: ConfigRecord,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        let mut table = base_table(&["Slot", "Field", "Kind", "Value"]);
        for (spec, value) in self.record.fields() {
            table.add_row(vec![
                Cell::new(spec.slot),
                Cell::new(spec.name),
                Cell::new(spec.kind()),
                Cell::new(value),
            ]);
        }
        format!("{}\n{table}", self.path.display())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(&self.record).unwrap_or_default()
    }
}

#[derive(Debug, serde::Serialize)]
pub struct FieldOutput {
    pub field: &'static str,
    pub slot: usize,
    pub value: serde_json::Value,
}

impl CommandOutput for FieldOutput {
    fn to_human(&self) -> String {
        match &self.value {
            serde_json::Value::String(text) => text.clone(),
            other => other.to_string(),
        }
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: ShowArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    // Resolve the field name before touching the file
    let spec = args
        .field
        .as_deref()
        .map(|name| schema::by_name(name).ok_or_else(|| anyhow!("Unknown field: {name}. Run `lds-args schema` for the list")))
        .transpose()?;

    let record = build_loader(settings, args.strict).load_file(&args.file)?;

    match spec {
        Some(spec) => output(
            &FieldOutput {
                field: spec.name,
                slot: spec.slot,
                value: serde_json::to_value(spec.read(&record))?,
            },
            json_mode,
        ),
        None => output(
            &ShowOutput {
                path: args.file,
                record,
            },
            json_mode,
        ),
    }
    Ok(())
}
