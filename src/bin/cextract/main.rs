//! cextract CLI - Extract declarations from C headers

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cextract::util::config::{global_config_path, load_config, project_config_path};
use cextract::util::diagnostic::{emit, suggestions, Diagnostic};
use cextract::{Config, ExtractError, HeaderContext};
use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    let color = !cli.no_color;

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("cextract=debug")
    } else {
        EnvFilter::new("cextract=info")
    };

    // stdout carries the JSON output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(color)
        .with_target(false)
        .without_time()
        .init();

    let config = match load_cli_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            let diag = error_diagnostic(&e).with_suggestion(suggestions::BAD_CONFIG);
            emit(&diag, color);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(cli.command, &config) {
        let diag = match e.downcast_ref::<ExtractError>() {
            Some(extract_err) => extract_context(extract_err.to_diagnostic(), &e),
            None => error_diagnostic(&e),
        };
        emit(&with_header_location(diag, &e), color);
        std::process::exit(1);
    }
}

fn run(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Parse(args) => commands::parse::execute(args, config),
        Commands::Structs(args) => commands::structs::execute(args, config),
        Commands::Enums(args) => commands::enums::execute(args, config),
        Commands::Defines(args) => commands::defines::execute(args, config),
        Commands::SplitType(args) => commands::split_type::execute(args, config),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}

fn load_cli_config(explicit: Option<&Path>) -> Result<Config> {
    let global = global_config_path();
    let project = match explicit {
        Some(path) => path.to_path_buf(),
        None => project_config_path(&std::env::current_dir()?),
    };

    load_config(global.as_deref(), &project, explicit.is_some())
        .context("invalid configuration")
}

/// Top-level message plus one context line per cause.
fn error_diagnostic(err: &anyhow::Error) -> Diagnostic {
    err.chain()
        .skip(1)
        .fold(Diagnostic::error(err.to_string()), |diag, cause| {
            diag.with_context(cause.to_string())
        })
}

/// Attach the causes outside the extraction error to an extraction
/// diagnostic. The header path is left to the location line.
fn extract_context(diag: Diagnostic, err: &anyhow::Error) -> Diagnostic {
    let header = err.downcast_ref::<HeaderContext>().map(|h| h.to_string());
    err.chain()
        .filter(|cause| cause.downcast_ref::<ExtractError>().is_none())
        .map(|cause| cause.to_string())
        .filter(|msg| Some(msg) != header.as_ref())
        .fold(diag, |diag, msg| diag.with_context(msg))
}

fn with_header_location(diag: Diagnostic, err: &anyhow::Error) -> Diagnostic {
    match err.downcast_ref::<HeaderContext>() {
        Some(header) => diag.with_location(header.path()),
        None => diag,
    }
}
