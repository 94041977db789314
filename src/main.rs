//! lds-args CLI entry point.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use lds_args::cli::{commands, handle_error, Cli, Commands};
use lds_args::{LogConfig, LoggerImpl, SettingsLoader};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let settings = match SettingsLoader::load(cli.settings.as_deref()) {
        Ok(settings) => settings,
        Err(err) => return handle_error(&err, cli.json),
    };

    let _logger = match LogConfig::try_from(&settings.logging)
        .context("Invalid logging settings")
        .and_then(|config| LoggerImpl::init(&config))
    {
        Ok(logger) => logger,
        Err(err) => return handle_error(&err, cli.json),
    };

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args, &settings, cli.json),
        Commands::Show(args) => commands::show::execute(args, &settings, cli.json),
        Commands::Schema => commands::schema::execute(cli.json),
        Commands::Template(args) => commands::template::execute(args, &settings, cli.json),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => handle_error(&err, cli.json),
    }
}
