//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use super::normalize::Advisory;

/// Error type for configuration operations.
///
/// Covers config file handling and every validation rule. Each rule has its
/// own variant so callers can tell them apart without parsing messages.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Manual COM port outside the range Windows accepts.
    #[error("COM serial ports should be between 1-{max}, got {}", display_value(.port.as_ref()))]
    ComPortOutOfRange {
        /// The port given, if any
        port: Option<i64>,
        /// Highest accepted port
        max: i64,
    },

    /// Manual serial port missing, negative, or too large.
    #[error("Serial port must be valid when autodetect is off, got {}", display_value(.port.as_ref()))]
    InvalidSerialPort {
        /// The port given, if any
        port: Option<i64>,
    },

    /// Manual baud rate missing, not positive, or too large.
    #[error("Baud rate must be valid when autodetect is off, got {}", display_value(.baud_rate.as_ref()))]
    InvalidBaudRate {
        /// The baud rate given, if any
        baud_rate: Option<i64>,
    },

    /// `silent` combined with `verbose`.
    #[error("Silent and verbose flags can't both be set")]
    SilentWithVerbose,

    /// `silent` combined with a print-to-stdout flag.
    #[error("Can't be silent and paired with a flag that prints to standard out")]
    SilentWithPrint,

    /// Negative inactivity timeout.
    #[error("Timeout cannot be negative, got {0}")]
    NegativeTimeout(i64),

    /// Zero or negative plot interval.
    #[error("Plot interval must be greater than 0, got {0}")]
    NonPositiveInterval(i64),
}

impl ConfigError {
    /// Returns true for errors caused by the config file rather than option values.
    #[must_use]
    pub const fn is_file_error(&self) -> bool {
        matches!(
            self,
            Self::FileRead { .. } | Self::TomlParse(_) | Self::FileWrite { .. }
        )
    }
}

/// A failed resolution together with the advisories raised before it failed.
///
/// Normalization runs before validation, so a defaulted value can be the
/// one a rule rejects (`--silent` alone selects `print-gps`). The advisories
/// let the caller explain where that value came from.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ResolveError {
    /// The first error encountered
    pub error: ConfigError,
    /// Advisories from normalization; empty if it never ran
    pub advisories: Vec<Advisory>,
}

impl From<ConfigError> for ResolveError {
    fn from(error: ConfigError) -> Self {
        Self {
            error,
            advisories: Vec::new(),
        }
    }
}

fn display_value(value: Option<&i64>) -> String {
    value.map_or_else(|| "unset".to_string(), ToString::to_string)
}
