//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Serial connection section
    #[serde(default)]
    pub serial: SerialSection,

    /// Sampling section
    #[serde(default)]
    pub sampling: SamplingSection,

    /// Output destinations section
    #[serde(default)]
    pub output: OutputSection,

    /// Derived metrics section
    #[serde(default)]
    pub metrics: MetricsSection,

    /// Process lifecycle section
    #[serde(default)]
    pub process: ProcessSection,
}

/// Serial connection section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SerialSection {
    /// Auto-detect port and baud rate
    pub autodetect: Option<bool>,

    /// Explicit baud rate
    pub baudrate: Option<i64>,

    /// Explicit serial port index
    pub port: Option<i64>,

    /// Inactivity timeout in seconds
    pub timeout: Option<i64>,
}

/// Sampling section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SamplingSection {
    /// Seconds between location samples
    pub interval: Option<i64>,
}

/// Output destinations section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct OutputSection {
    /// Print GPS coordinates to standard out
    #[serde(default)]
    pub print_gps: bool,

    /// Print NMEA messages to standard out
    #[serde(default)]
    pub print_nmea: bool,

    /// Suppress standard out
    #[serde(default)]
    pub silent: bool,

    /// Extra diagnostics
    #[serde(default)]
    pub verbose: bool,

    /// CSV output path
    pub write_csv: Option<PathBuf>,

    /// Raw GPS coordinates output path
    pub write_gps: Option<PathBuf>,

    /// KML output path
    pub write_kml: Option<PathBuf>,

    /// Raw NMEA output path
    pub write_nmea: Option<PathBuf>,
}

/// Derived metrics section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
#[allow(clippy::struct_excessive_bools)]
pub struct MetricsSection {
    #[serde(default)]
    pub bearing: bool,

    #[serde(default)]
    pub signal: bool,

    #[serde(default)]
    pub speed_knots: bool,

    #[serde(default)]
    pub speed_kph: bool,

    #[serde(default)]
    pub speed_mph: bool,

    /// Report timestamps in the local timezone instead of UTC
    #[serde(default)]
    pub timezone_local: bool,
}

/// Process lifecycle section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProcessSection {
    /// Run as a background task
    #[serde(default)]
    pub daemon: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# GPS Atlas Configuration File
# Command-line options override values in this file.
# Switches set to true here (print_*, silent, verbose, metrics, daemon)
# stay on: a command-line flag can turn a switch on but never off.

[serial]
# Auto detect the serial port and baud rate (default: true).
# Turned off automatically when both baudrate and port are set.
# autodetect = true

# Baud rate for the serial port
# baudrate = 9600

# Serial port index (COM ports on Windows must be 1-256)
# port = 3

# Seconds before disconnecting on error or inactivity (default: 60)
timeout = 60

[sampling]
# Seconds between GPS location samples (default: 30)
interval = 30

[output]
# When no print or write option is set, GPS coordinates are printed.
# print_gps = false
# print_nmea = false

# Silent cannot be combined with verbose or any print option.
# With verbose = true here, every --silent run is rejected.
# silent = false
# verbose = false

# write_csv = "track.csv"
# write_gps = "coords.txt"
# write_kml = "track.kml"
# write_nmea = "raw.nmea"

[metrics]
# bearing = false
# signal = false
# speed_knots = false
# speed_kph = false
# speed_mph = false
# timezone_local = false

[process]
# Run as a background task
# daemon = false
"#
    .to_string()
}
