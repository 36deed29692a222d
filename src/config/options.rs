//! Merged, not yet validated run options.
//!
//! [`RunOptions`] is the single typed view of what the user asked for after
//! the CLI, the optional config file and the built-in defaults have been
//! combined. Normalization and validation both take it by value.

use std::path::{Path, PathBuf};

use super::cli::Cli;
use super::defaults;
use super::toml::TomlConfig;

/// Derived-metric switches. They pass through resolution untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct DerivedMetrics {
    /// Directional bearing from consecutive positions
    pub bearing: bool,
    /// Signal strength and accuracy
    pub signal: bool,
    /// Speed in knots
    pub speed_knots: bool,
    /// Speed in kilometers per hour
    pub speed_kph: bool,
    /// Speed in miles per hour
    pub speed_mph: bool,
}

/// File output paths. `None` means the output is disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WritePaths {
    /// Timestamp, coordinates and NMEA sentences as CSV
    pub csv: Option<PathBuf>,
    /// Raw GPS coordinates
    pub gps: Option<PathBuf>,
    /// KML waypoint track
    pub kml: Option<PathBuf>,
    /// Raw NMEA sentences
    pub nmea: Option<PathBuf>,
}

impl WritePaths {
    /// Returns true if at least one file output is enabled.
    #[must_use]
    pub const fn any(&self) -> bool {
        self.csv.is_some() || self.gps.is_some() || self.kml.is_some() || self.nmea.is_some()
    }

    /// Iterates over enabled outputs as `(format, path)` pairs.
    pub fn enabled(&self) -> impl Iterator<Item = (&'static str, &Path)> {
        [
            ("csv", &self.csv),
            ("gps", &self.gps),
            ("kml", &self.kml),
            ("nmea", &self.nmea),
        ]
        .into_iter()
        .filter_map(|(kind, path)| path.as_deref().map(|p| (kind, p)))
    }
}

/// Options as requested, before normalization and validation.
///
/// Unset port, baud rate and paths are `None`. Integers stay signed so a
/// negative value reaches the validator and is rejected with a reason.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::struct_excessive_bools)]
pub struct RunOptions {
    pub auto_detect: bool,
    pub baud_rate: Option<i64>,
    pub serial_port: Option<i64>,
    pub daemon: bool,
    pub plot_interval: i64,
    pub print_gps: bool,
    pub print_nmea: bool,
    pub silent: bool,
    pub timeout: i64,
    pub verbose: bool,
    pub write: WritePaths,
    pub metrics: DerivedMetrics,
    pub timezone_local: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            auto_detect: defaults::AUTO_DETECT,
            baud_rate: None,
            serial_port: None,
            daemon: false,
            plot_interval: defaults::PLOT_INTERVAL_SECS,
            print_gps: false,
            print_nmea: false,
            silent: false,
            timeout: defaults::TIMEOUT_SECS,
            verbose: false,
            write: WritePaths::default(),
            metrics: DerivedMetrics::default(),
            timezone_local: false,
        }
    }
}

impl RunOptions {
    /// Merges CLI arguments and an optional TOML config into one value.
    ///
    /// Explicit CLI values win over TOML, which wins over built-in defaults.
    /// Switches use OR semantics across both sources, except `autodetect`,
    /// which the CLI can set either way.
    #[must_use]
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Self {
        let serial = toml.map(|t| &t.serial);
        let output = toml.map(|t| &t.output);
        let metrics = toml.map(|t| &t.metrics);

        let auto_detect = cli
            .autodetect
            .or_else(|| serial.and_then(|s| s.autodetect))
            .unwrap_or(defaults::AUTO_DETECT);

        let plot_interval = cli
            .interval
            .or_else(|| toml.and_then(|t| t.sampling.interval))
            .unwrap_or(defaults::PLOT_INTERVAL_SECS);

        let timeout = cli
            .timeout
            .or_else(|| serial.and_then(|s| s.timeout))
            .unwrap_or(defaults::TIMEOUT_SECS);

        Self {
            auto_detect,
            baud_rate: cli.baudrate.or_else(|| serial.and_then(|s| s.baudrate)),
            serial_port: cli.port.or_else(|| serial.and_then(|s| s.port)),
            daemon: cli.daemon || toml.is_some_and(|t| t.process.daemon),
            plot_interval,
            print_gps: cli.print_gps || output.is_some_and(|o| o.print_gps),
            print_nmea: cli.print_nmea || output.is_some_and(|o| o.print_nmea),
            silent: cli.silent || output.is_some_and(|o| o.silent),
            timeout,
            verbose: cli.verbose || output.is_some_and(|o| o.verbose),
            write: WritePaths {
                csv: resolve_path(cli.write_csv.as_deref(), output.map(|o| &o.write_csv)),
                gps: resolve_path(cli.write_gps.as_deref(), output.map(|o| &o.write_gps)),
                kml: resolve_path(cli.write_kml.as_deref(), output.map(|o| &o.write_kml)),
                nmea: resolve_path(cli.write_nmea.as_deref(), output.map(|o| &o.write_nmea)),
            },
            metrics: DerivedMetrics {
                bearing: cli.calculate_bearing || metrics.is_some_and(|m| m.bearing),
                signal: cli.calculate_signal || metrics.is_some_and(|m| m.signal),
                speed_knots: cli.calculate_speed_knots || metrics.is_some_and(|m| m.speed_knots),
                speed_kph: cli.calculate_speed_kph || metrics.is_some_and(|m| m.speed_kph),
                speed_mph: cli.calculate_speed_mph || metrics.is_some_and(|m| m.speed_mph),
            },
            timezone_local: cli.timezone_local || metrics.is_some_and(|m| m.timezone_local),
        }
    }

    /// Returns true if any output reaches standard out or a file.
    #[must_use]
    pub const fn has_effective_output(&self) -> bool {
        self.print_gps || self.print_nmea || self.write.any()
    }
}

/// CLI path wins over TOML path. An empty path disables the output.
fn resolve_path(cli: Option<&Path>, toml: Option<&Option<PathBuf>>) -> Option<PathBuf> {
    cli.map(Path::to_path_buf)
        .or_else(|| toml.and_then(Clone::clone))
        .filter(|path| !path.as_os_str().is_empty())
}
