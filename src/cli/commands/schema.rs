//! Implementation of the `lds-args schema` command.

use anyhow::Result;
use comfy_table::Cell;

use crate::cli::output::{base_table, output, CommandOutput};
use crate::domain::models::{FieldSpec, SCHEMA};

#[derive(Debug, serde::Serialize)]
pub struct SchemaOutput {
    pub fields: &'static [FieldSpec],
}

impl CommandOutput for SchemaOutput {
    fn to_human(&self) -> String {
        let mut table = base_table(&["Slot", "Field", "Kind", "Description"]);
        for spec in self.fields {
            table.add_row(vec![
                Cell::new(spec.slot),
                Cell::new(spec.name),
                Cell::new(spec.kind()),
                Cell::new(spec.description),
            ]);
        }
        table.to_string()
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self.fields).unwrap_or_default()
    }
}

pub fn execute(json_mode: bool) -> Result<()> {
    output(&SchemaOutput { fields: &SCHEMA }, json_mode);
    Ok(())
}
