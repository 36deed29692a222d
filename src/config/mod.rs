//! Configuration layer for GPS Atlas.
//!
//! This module provides:
//! - The option catalog ([`schema`]) and its help sheet ([`help`])
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - TOML configuration file parsing ([`TomlConfig`])
//! - Merged options ([`RunOptions`]), normalization ([`normalize()`]) and
//!   validation ([`validate()`])
//! - Validated configuration ([`ValidatedConfig`])
//! - Default values ([`defaults`])
//!
//! # Pipeline
//!
//! parse → merge → normalize → validate. Each stage takes the previous
//! stage's output by value; only the last one produces a
//! [`ValidatedConfig`], which is read-only.
//!
//! # Priority
//!
//! Values are resolved with the following priority (highest to lowest):
//!
//! 1. **Explicit CLI arguments**
//! 2. **TOML config file** (`--config`)
//! 3. **Built-in defaults**
//!
//! Switches such as `--silent` or `--print-gps` use OR semantics: set in
//! either source, the result is `true`. `--autodetect` takes an optional
//! value (`--autodetect=false`) so the CLI can override the file both ways.
//!
//! # Auto-detection
//!
//! Auto-detection is turned off only when **both** a baud rate and a port
//! are given as non-negative values. Giving just one of them leaves it on.
//!
//! # Default output
//!
//! When no print flag and no write path is set, `print-gps` is enabled and
//! an [`Advisory`] is returned for the caller to log. Advisories are kept on
//! the error path too ([`ResolveError`]), since the defaulted output can be
//! what a validation rule rejects.

mod cli;
pub mod defaults;
mod error;
pub mod help;
mod normalize;
mod options;
pub mod schema;
mod toml;
mod validate;
mod validated;

#[cfg(test)]
mod schema_tests;
#[cfg(test)]
mod validated_tests;

pub use cli::{Cli, Command};
pub use error::{ConfigError, ResolveError};
pub use normalize::{Advisory, Normalized, normalize};
pub use options::{DerivedMetrics, RunOptions, WritePaths};
pub use toml::{TomlConfig, default_config_template};
pub use validate::{Platform, validate};
pub use validated::{Resolved, SerialSettings, ValidatedConfig, write_default_config};
