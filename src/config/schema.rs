//! Static catalog of every recognized option.
//!
//! The CLI parser takes its names and help strings from these entries, and
//! the help renderer prints them, so adding an option or subcommand starts
//! here.

use std::fmt;

use super::defaults;

/// Value type of an option.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// A switch.
    Bool,
    /// A signed integer.
    Int,
    /// A string, used for file paths.
    String,
}

impl OptionKind {
    /// Type name shown in usage text.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::String => "string",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Default value of an option.
///
/// `Unset` replaces the `-1` and `""` sentinels: the option has no value
/// unless the user provides one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionDefault {
    /// Boolean default.
    Bool(bool),
    /// Integer default.
    Int(i64),
    /// No value unless provided.
    Unset,
}

impl OptionDefault {
    /// Whether the default is worth showing in usage text.
    ///
    /// Mirrors the usual flag-library convention of hiding zero values.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Bool(true) | Self::Int(_))
    }
}

impl fmt::Display for OptionDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Int(value) => write!(f, "{value}"),
            Self::Unset => f.write_str("unset"),
        }
    }
}

/// One entry of the option schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    /// Long option name, without leading dashes.
    pub name: &'static str,
    /// Single-letter alias, if any.
    pub short: Option<char>,
    /// Value type.
    pub kind: OptionKind,
    /// Value used when the option is not given.
    pub default: OptionDefault,
    /// One-line description for usage text.
    pub description: &'static str,
}

impl OptionSpec {
    const fn bool(name: &'static str, default: bool, description: &'static str) -> Self {
        Self {
            name,
            short: None,
            kind: OptionKind::Bool,
            default: OptionDefault::Bool(default),
            description,
        }
    }

    const fn int(name: &'static str, default: OptionDefault, description: &'static str) -> Self {
        Self {
            name,
            short: None,
            kind: OptionKind::Int,
            default,
            description,
        }
    }

    const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            short: None,
            kind: OptionKind::String,
            default: OptionDefault::Unset,
            description,
        }
    }

    const fn with_short(self, short: char) -> Self {
        Self {
            short: Some(short),
            ..self
        }
    }
}

/// One subcommand shown in the help sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandSpec {
    /// Subcommand name.
    pub name: &'static str,
    /// Arguments the subcommand takes, as shown after its name.
    pub usage: &'static str,
    /// One-line description for usage text.
    pub description: &'static str,
}

pub const AUTODETECT: OptionSpec = OptionSpec::bool(
    "autodetect",
    defaults::AUTO_DETECT,
    "Auto detect the serial port and baud rate for the connected GPS device. \
     Disabled if both baud rate and port are manually set.",
);

pub const BAUDRATE: OptionSpec = OptionSpec::int(
    "baudrate",
    OptionDefault::Unset,
    "Set the baud rate for the serial port.",
);

pub const CALCULATE_BEARING: OptionSpec = OptionSpec::bool(
    "calculate-bearing",
    false,
    "Calculate directional bearing based on GPS position signals and print or write data, \
     pair with other options.",
);

pub const CALCULATE_SIGNAL: OptionSpec = OptionSpec::bool(
    "calculate-signal",
    false,
    "Calculate signal strength and accuracy; print or write data, pair with other options.",
);

pub const CALCULATE_SPEED_KNOTS: OptionSpec = OptionSpec::bool(
    "calculate-speed-knots",
    false,
    "Calculate speed in knots (nautical miles per hour) and print or write data, \
     pair with other options.",
);

pub const CALCULATE_SPEED_KPH: OptionSpec = OptionSpec::bool(
    "calculate-speed-kph",
    false,
    "Calculate speed in kilometers per hour and print or write data, pair with other options.",
);

pub const CALCULATE_SPEED_MPH: OptionSpec = OptionSpec::bool(
    "calculate-speed-mph",
    false,
    "Calculate speed in miles per hour and print or write data, pair with other options.",
);

pub const CONFIG: OptionSpec = OptionSpec::path(
    "config",
    "Read options from the TOML configuration file at path provided.",
)
.with_short('c');

pub const DAEMON: OptionSpec = OptionSpec::bool("daemon", false, "Run as a background task.");

pub const HELP: OptionSpec =
    OptionSpec::bool("help", false, "Print help sheet.").with_short('h');

pub const INTERVAL: OptionSpec = OptionSpec::int(
    "interval",
    OptionDefault::Int(defaults::PLOT_INTERVAL_SECS),
    "Set the plot interval (seconds) for returning a GPS location from device.",
);

pub const PORT: OptionSpec = OptionSpec::int(
    "port",
    OptionDefault::Unset,
    "Set the serial port to connect.",
);

pub const PRINT_GPS: OptionSpec = OptionSpec::bool(
    "print-gps",
    false,
    "Print the GPS coordinates to standard out.",
);

pub const PRINT_NMEA: OptionSpec = OptionSpec::bool(
    "print-nmea",
    false,
    "Print NMEA messages to standard out.",
);

pub const SILENT: OptionSpec = OptionSpec::bool(
    "silent",
    false,
    "No output will be sent to standard out. \
     Cannot be used with flags that write to standard out.",
);

pub const TIMEOUT: OptionSpec = OptionSpec::int(
    "timeout",
    OptionDefault::Int(defaults::TIMEOUT_SECS),
    "Set the timeout (seconds) before disconnecting on error or inactivity.",
);

pub const TIMEZONE_LOCAL: OptionSpec = OptionSpec::bool(
    "timezone-local",
    false,
    "Use local timezone instead of default UTC.",
);

pub const VERBOSE: OptionSpec = OptionSpec::bool(
    "verbose",
    false,
    "Extra information provided in standard out.",
);

pub const VERSION: OptionSpec =
    OptionSpec::bool("version", false, "Print version and exit.").with_short('V');

pub const WRITE_CSV: OptionSpec = OptionSpec::path(
    "write-csv",
    "Write timestamp, GPS coordinates, and NMEA message(s) for location to CSV file \
     at path provided.",
);

pub const WRITE_GPS: OptionSpec = OptionSpec::path(
    "write-gps",
    "Write raw GPS coordinates to file at path provided.",
);

pub const WRITE_KML: OptionSpec = OptionSpec::path(
    "write-kml",
    "Write Google Maps / Earth KML format as a waypoint workflow to file at path provided.",
);

pub const WRITE_NMEA: OptionSpec = OptionSpec::path(
    "write-nmea",
    "Write raw NMEA messages to file at path provided.",
);

/// Every option, in the order shown by the help sheet.
pub const OPTIONS: &[OptionSpec] = &[
    AUTODETECT,
    BAUDRATE,
    CALCULATE_BEARING,
    CALCULATE_SIGNAL,
    CALCULATE_SPEED_KNOTS,
    CALCULATE_SPEED_KPH,
    CALCULATE_SPEED_MPH,
    CONFIG,
    DAEMON,
    HELP,
    INTERVAL,
    PORT,
    PRINT_GPS,
    PRINT_NMEA,
    SILENT,
    TIMEOUT,
    TIMEZONE_LOCAL,
    VERBOSE,
    VERSION,
    WRITE_CSV,
    WRITE_GPS,
    WRITE_KML,
    WRITE_NMEA,
];

pub const INIT: CommandSpec = CommandSpec {
    name: "init",
    usage: "[-o, --output path]",
    description: "Write a commented configuration template (default path gps-atlas.toml).",
};

/// Every subcommand, in the order shown by the help sheet.
pub const COMMANDS: &[CommandSpec] = &[INIT];

/// Looks up a schema entry by long name.
#[must_use]
pub fn find(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.name == name)
}
