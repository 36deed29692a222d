//! GPS Atlas: run configuration for GPS serial readers.
//!
//! Entry point for the gps-atlas application.

use gps_atlas::config::{Cli, Command, ValidatedConfig, write_default_config};
use std::process::ExitCode;

mod app;

use app::{exit_code, print_config_hint, print_help_sheet, print_version, setup_tracing};

/// Main entry point.
///
/// Excluded from coverage as it's the thin wrapper around testable components.
#[cfg(not(tarpaulin_include))]
fn main() -> ExitCode {
    let cli = Cli::parse_args();

    // Help and version short-circuit before any config file is read
    if cli.help {
        print_help_sheet();
        return exit_code::SUCCESS;
    }
    if cli.version {
        print_version();
        return exit_code::SUCCESS;
    }

    // Handle init subcommand
    if let Some(Command::Init { output }) = &cli.command {
        return handle_init(output);
    }

    // Load, normalize and validate configuration
    let resolved = match ValidatedConfig::load(&cli) {
        Ok(resolved) => resolved,
        Err(rejected) => {
            // Tracing is not set up yet; the advisory may explain the error
            for advisory in &rejected.advisories {
                eprintln!("Warning: {advisory}");
            }
            eprintln!("Configuration error: {}", rejected.error);
            print_config_hint(&rejected.error);
            return exit_code::CONFIG_ERROR;
        }
    };

    let config = resolved.config;
    setup_tracing(config.verbose(), config.silent());

    for advisory in &resolved.advisories {
        tracing::warn!("{advisory}");
    }
    tracing::info!("{config}");

    hand_off(&config)
}

/// Handles the `init` subcommand.
fn handle_init(output: &std::path::Path) -> ExitCode {
    match write_default_config(output) {
        Ok(()) => {
            println!("Configuration template written to: {}", output.display());
            exit_code::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            exit_code::CONFIG_ERROR
        }
    }
}

/// Passes the frozen configuration on to the device and output layers.
///
/// Those layers live outside this crate; here the resolved plan is logged
/// so the decision is visible with `--verbose`.
fn hand_off(config: &ValidatedConfig) -> ExitCode {
    tracing::debug!(serial = %config.serial(), "serial connection");
    tracing::debug!(
        interval_secs = config.plot_interval().as_secs(),
        timeout_secs = config.timeout().as_secs(),
        "sampling"
    );

    for (kind, path) in config.write_paths().enabled() {
        tracing::debug!(kind, path = %path.display(), "file output enabled");
    }

    if config.daemon() {
        tracing::debug!("daemon mode requested");
    }

    exit_code::SUCCESS
}
