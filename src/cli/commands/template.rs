//! Implementation of the `lds-args template` command.

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use super::build_loader;
use crate::cli::output::{output, CommandOutput};
use crate::domain::models::{Settings, SCHEMA_LEN};
use crate::infrastructure::config::{render_record, render_template};

#[derive(Args, Debug)]
pub struct TemplateArgs {
    /// Re-render the values of an existing input file instead of placeholders
    #[arg(long)]
    pub from: Option<PathBuf>,

    /// Write to this path instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Overwrite the output path if it exists
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Debug, serde::Serialize)]
pub struct TemplateOutput {
    pub success: bool,
    pub message: String,
    pub path: Option<PathBuf>,
    pub slots: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl CommandOutput for TemplateOutput {
    fn to_human(&self) -> String {
        self.content.clone().unwrap_or_else(|| self.message.clone())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

pub fn execute(args: TemplateArgs, settings: &Settings, json_mode: bool) -> Result<()> {
    let content = match args.from {
        Some(ref source) => render_record(&build_loader(settings, false).load_file(source)?),
        None => render_template(),
    };

    let Some(target) = args.output else {
        output(
            &TemplateOutput {
                success: true,
                message: "Rendered input file".to_string(),
                path: None,
                slots: SCHEMA_LEN,
                content: Some(content),
            },
            json_mode,
        );
        return Ok(());
    };

    if target.exists() && !args.force {
        output(
            &TemplateOutput {
                success: false,
                message: format!("{} already exists. Use --force to overwrite.", target.display()),
                path: Some(target),
                slots: 0,
                content: None,
            },
            json_mode,
        );
        return Ok(());
    }

    fs::write(&target, &content)
        .with_context(|| format!("Failed to write input file {}", target.display()))?;
    info!(path = %target.display(), "Wrote input file");

    output(
        &TemplateOutput {
            success: true,
            message: format!("Wrote {SCHEMA_LEN} input slots to {}", target.display()),
            path: Some(target),
            slots: SCHEMA_LEN,
            content: None,
        },
        json_mode,
    );
    Ok(())
}
