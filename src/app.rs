//! Application startup and utilities.
//!
//! This module contains exit codes, tracing setup, and error hints
//! that support the main entry point.

use clap::CommandFactory;
use gps_atlas::config::{Cli, ConfigError, help, schema};
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Application exit codes.
pub mod exit_code {
    use std::process::ExitCode;

    /// Success (exit code 0), also used after printing the help sheet or version.
    pub const SUCCESS: ExitCode = ExitCode::SUCCESS;

    /// Configuration error (exit code 1) - rejected options, unreadable config file, etc.
    pub const CONFIG_ERROR: ExitCode = ExitCode::FAILURE;
}

/// Prints helpful hints for common configuration errors.
pub fn print_config_hint(error: &ConfigError) {
    if error.is_file_error() {
        eprintln!("\nRun 'gps-atlas init' to generate a configuration template.");
    } else {
        eprintln!("\nRun 'gps-atlas --help' to list the available options.");
    }
}

/// Prints the help sheet rendered from the option schema.
pub fn print_help_sheet() {
    print!("{}", help::render(schema::OPTIONS, schema::COMMANDS));
}

/// Prints the program name and version.
pub fn print_version() {
    print!("{}", Cli::command().render_version());
}

/// Maps the verbosity switches to a default log level.
///
/// Validation guarantees `silent` and `verbose` are never both set.
const fn log_level(verbose: bool, silent: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if silent {
        Level::ERROR
    } else {
        Level::INFO
    }
}

/// Sets up the tracing subscriber for logging.
///
/// Logs go to standard error so that `--silent` keeps standard out empty.
pub fn setup_tracing(verbose: bool, silent: bool) {
    let filter = EnvFilter::builder()
        .with_default_directive(log_level(verbose, silent).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
