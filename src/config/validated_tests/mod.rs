//! Tests for validation and the full resolution pipeline.

use super::{ConfigError, ResolveError};
use super::cli::Cli;
use super::normalize::{Advisory, normalize};
use super::options::RunOptions;
use super::toml::TomlConfig;
use super::validate::{Platform, validate};
use super::validated::{Resolved, SerialSettings, ValidatedConfig};

/// Helper to create CLI args from a slice
fn cli(args: &[&str]) -> Cli {
    let mut full_args = vec!["gps-atlas"];
    full_args.extend(args);
    Cli::parse_from_iter(full_args)
}

/// Helper to parse TOML config
fn toml(content: &str) -> TomlConfig {
    TomlConfig::parse(content).unwrap()
}

/// Resolves CLI args alone on a non-Windows host
fn resolve(args: &[&str]) -> Result<Resolved, ConfigError> {
    ValidatedConfig::resolve(&cli(args), None, Platform::Other)
        .map_err(|rejected| rejected.error)
}

/// Resolves CLI args alone as if running on Windows
fn resolve_on_windows(args: &[&str]) -> Result<Resolved, ConfigError> {
    ValidatedConfig::resolve(&cli(args), None, Platform::Windows)
        .map_err(|rejected| rejected.error)
}

mod precedence_tests;
