//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Auto-detection of port and baud rate is on unless explicitly disabled.
pub const AUTO_DETECT: bool = true;

/// Default plot interval in seconds.
pub const PLOT_INTERVAL_SECS: i64 = 30;

/// Default inactivity timeout in seconds.
pub const TIMEOUT_SECS: i64 = 60;

/// Highest COM port number accepted on Windows.
pub const MAX_COM_PORT: i64 = 256;

/// Default output path for the `init` subcommand.
pub const CONFIG_TEMPLATE_PATH: &str = "gps-atlas.toml";

/// Default plot interval as Duration.
#[must_use]
#[allow(clippy::cast_sign_loss)] // constant is positive
pub const fn plot_interval() -> Duration {
    Duration::from_secs(PLOT_INTERVAL_SECS as u64)
}

/// Default timeout as Duration.
#[must_use]
#[allow(clippy::cast_sign_loss)] // constant is positive
pub const fn timeout() -> Duration {
    Duration::from_secs(TIMEOUT_SECS as u64)
}
