//! Validated configuration after merging, normalizing and validating.
//!
//! This module contains the final, read-only configuration that is handed
//! to the rest of the application. It can only be built by
//! [`validate`](super::validate::validate).

use std::fmt;
use std::path::Path;
use std::time::Duration;

use super::cli::Cli;
use super::error::{ConfigError, ResolveError};
use super::normalize::{Advisory, Normalized, normalize};
use super::options::{DerivedMetrics, RunOptions, WritePaths};
use super::toml::TomlConfig;
use super::validate::{Platform, validate};

/// How the serial connection is established.
///
/// Auto-detection and manual parameters are mutually exclusive, so there is
/// no partially manual state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerialSettings {
    /// Discover port and baud rate automatically
    AutoDetect,
    /// Use the given port and baud rate
    Manual {
        /// Serial port index
        port: u32,
        /// Baud rate, always positive
        baud_rate: u32,
    },
}

impl SerialSettings {
    /// Returns true for automatic discovery.
    #[must_use]
    pub const fn is_auto_detect(&self) -> bool {
        matches!(self, Self::AutoDetect)
    }
}

impl fmt::Display for SerialSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AutoDetect => f.write_str("autodetect"),
            Self::Manual { port, baud_rate } => write!(f, "port {port} @ {baud_rate} baud"),
        }
    }
}

/// Fully validated configuration ready for use by the application.
///
/// All invariants hold on construction and the fields cannot be changed
/// afterwards. Consumers receive it by reference.
///
/// # Construction
///
/// Use [`ValidatedConfig::load`] from the binary, or
/// [`ValidatedConfig::resolve`] when the config file is already parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct ValidatedConfig {
    serial: SerialSettings,
    daemon: bool,
    plot_interval: Duration,
    print_gps: bool,
    print_nmea: bool,
    silent: bool,
    timeout: Duration,
    verbose: bool,
    write: WritePaths,
    metrics: DerivedMetrics,
    timezone_local: bool,
}

/// A validated configuration with the advisories raised while producing it.
#[derive(Debug)]
pub struct Resolved {
    /// The final configuration
    pub config: ValidatedConfig,
    /// Non-fatal notes from normalization, to be logged as warnings
    pub advisories: Vec<Advisory>,
}

impl ValidatedConfig {
    /// Builds the frozen configuration. Callers must have checked every rule.
    #[allow(clippy::cast_sign_loss)] // timeout >= 0 and plot_interval > 0 after validation
    pub(super) fn new(options: RunOptions, serial: SerialSettings) -> Self {
        Self {
            serial,
            daemon: options.daemon,
            plot_interval: Duration::from_secs(options.plot_interval as u64),
            print_gps: options.print_gps,
            print_nmea: options.print_nmea,
            silent: options.silent,
            timeout: Duration::from_secs(options.timeout as u64),
            verbose: options.verbose,
            write: options.write,
            metrics: options.metrics,
            timezone_local: options.timezone_local,
        }
    }

    /// Resolves CLI arguments and an optional TOML config for the given platform.
    ///
    /// Runs merge, normalization and validation in that order.
    ///
    /// # Errors
    ///
    /// Returns the first validation rule the normalized options violate,
    /// along with the advisories normalization raised.
    pub fn resolve(
        cli: &Cli,
        toml: Option<&TomlConfig>,
        platform: Platform,
    ) -> Result<Resolved, ResolveError> {
        let Normalized {
            options,
            advisories,
        } = normalize(RunOptions::from_raw(cli, toml));

        match validate(options, platform) {
            Ok(config) => Ok(Resolved { config, advisories }),
            Err(error) => Err(ResolveError { error, advisories }),
        }
    }

    /// Loads the config file named by `cli.config`, if any, and resolves
    /// the configuration for the host platform.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration violates a validation rule
    pub fn load(cli: &Cli) -> Result<Resolved, ResolveError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::resolve(cli, toml.as_ref(), Platform::current())
    }

    /// Serial connection settings.
    #[must_use]
    pub const fn serial(&self) -> SerialSettings {
        self.serial
    }

    /// Run detached from the terminal.
    #[must_use]
    pub const fn daemon(&self) -> bool {
        self.daemon
    }

    /// Time between location samples.
    #[must_use]
    pub const fn plot_interval(&self) -> Duration {
        self.plot_interval
    }

    /// Print decoded coordinates to standard out.
    #[must_use]
    pub const fn print_gps(&self) -> bool {
        self.print_gps
    }

    /// Print NMEA sentences to standard out.
    #[must_use]
    pub const fn print_nmea(&self) -> bool {
        self.print_nmea
    }

    /// Suppress all standard out writes.
    #[must_use]
    pub const fn silent(&self) -> bool {
        self.silent
    }

    /// Inactivity period before disconnecting.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Extra diagnostic output.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// File output paths.
    #[must_use]
    pub const fn write_paths(&self) -> &WritePaths {
        &self.write
    }

    /// Derived metric switches.
    #[must_use]
    pub const fn metrics(&self) -> DerivedMetrics {
        self.metrics
    }

    /// Report timestamps in the local timezone.
    #[must_use]
    pub const fn timezone_local(&self) -> bool {
        self.timezone_local
    }
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let outputs = self
            .write
            .enabled()
            .map(|(kind, path)| format!("{kind}={}", path.display()))
            .collect::<Vec<_>>();

        let outputs_str = if outputs.is_empty() {
            "none".to_string()
        } else {
            outputs.join(", ")
        };

        write!(
            f,
            "Config {{ serial: {}, interval: {}s, timeout: {}s, print_gps: {}, print_nmea: {}, \
             silent: {}, verbose: {}, daemon: {}, writes: [{}] }}",
            self.serial,
            self.plot_interval.as_secs(),
            self.timeout.as_secs(),
            self.print_gps,
            self.print_nmea,
            self.silent,
            self.verbose,
            self.daemon,
            outputs_str,
        )
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

