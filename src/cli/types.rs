//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{check::CheckArgs, show::ShowArgs, template::TemplateArgs};

#[derive(Parser)]
#[command(name = "lds-args")]
#[command(about = "Check, inspect and scaffold land data system input files", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Settings file merged over `lds-args.yaml`
    #[arg(long, global = true, env = "LDS_ARGS_SETTINGS")]
    pub settings: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load an input file and report whether it is valid
    Check(CheckArgs),

    /// Load an input file and print its values
    Show(ShowArgs),

    /// Print the positional schema
    Schema,

    /// Write a commented input file skeleton
    Template(TemplateArgs),
}
