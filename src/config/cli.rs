//! CLI argument parsing using clap.
//!
//! Names and help strings come from [`schema`](super::schema), so the
//! parser and the help sheet cannot drift apart.

use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::{ArgAction, Parser, Subcommand};

use super::schema;

/// GPS Atlas: auto-detect, plot, and map with common GPS USB serial devices.
///
/// clap's generated help and version flags are disabled; `--help` and
/// `--version` are ordinary flags handled by the application, so the help
/// sheet rendered from the schema lists them like any other option.
#[derive(Debug, Parser)]
#[command(name = "gps-atlas")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
#[allow(clippy::struct_excessive_bools)] // CLI flags are naturally boolean
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    #[arg(
        long = schema::AUTODETECT.name,
        help = schema::AUTODETECT.description,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub autodetect: Option<bool>,

    #[arg(
        long = schema::BAUDRATE.name,
        help = schema::BAUDRATE.description,
        allow_negative_numbers = true
    )]
    pub baudrate: Option<i64>,

    #[arg(long = schema::CALCULATE_BEARING.name, help = schema::CALCULATE_BEARING.description)]
    pub calculate_bearing: bool,

    #[arg(long = schema::CALCULATE_SIGNAL.name, help = schema::CALCULATE_SIGNAL.description)]
    pub calculate_signal: bool,

    #[arg(
        long = schema::CALCULATE_SPEED_KNOTS.name,
        help = schema::CALCULATE_SPEED_KNOTS.description
    )]
    pub calculate_speed_knots: bool,

    #[arg(
        long = schema::CALCULATE_SPEED_KPH.name,
        help = schema::CALCULATE_SPEED_KPH.description
    )]
    pub calculate_speed_kph: bool,

    #[arg(
        long = schema::CALCULATE_SPEED_MPH.name,
        help = schema::CALCULATE_SPEED_MPH.description
    )]
    pub calculate_speed_mph: bool,

    #[arg(
        short = schema::CONFIG.short,
        long = schema::CONFIG.name,
        help = schema::CONFIG.description
    )]
    pub config: Option<PathBuf>,

    #[arg(long = schema::DAEMON.name, help = schema::DAEMON.description)]
    pub daemon: bool,

    #[arg(
        short = schema::HELP.short,
        long = schema::HELP.name,
        help = schema::HELP.description,
        action = ArgAction::SetTrue
    )]
    pub help: bool,

    #[arg(
        long = schema::INTERVAL.name,
        help = schema::INTERVAL.description,
        allow_negative_numbers = true
    )]
    pub interval: Option<i64>,

    #[arg(
        long = schema::PORT.name,
        help = schema::PORT.description,
        allow_negative_numbers = true
    )]
    pub port: Option<i64>,

    #[arg(long = schema::PRINT_GPS.name, help = schema::PRINT_GPS.description)]
    pub print_gps: bool,

    #[arg(long = schema::PRINT_NMEA.name, help = schema::PRINT_NMEA.description)]
    pub print_nmea: bool,

    #[arg(long = schema::SILENT.name, help = schema::SILENT.description)]
    pub silent: bool,

    #[arg(
        long = schema::TIMEOUT.name,
        help = schema::TIMEOUT.description,
        allow_negative_numbers = true
    )]
    pub timeout: Option<i64>,

    #[arg(long = schema::TIMEZONE_LOCAL.name, help = schema::TIMEZONE_LOCAL.description)]
    pub timezone_local: bool,

    #[arg(long = schema::VERBOSE.name, help = schema::VERBOSE.description)]
    pub verbose: bool,

    #[arg(
        short = schema::VERSION.short,
        long = schema::VERSION.name,
        help = schema::VERSION.description,
        action = ArgAction::SetTrue
    )]
    pub version: bool,

    #[arg(
        long = schema::WRITE_CSV.name,
        help = schema::WRITE_CSV.description,
        value_parser = path_or_empty()
    )]
    pub write_csv: Option<PathBuf>,

    #[arg(
        long = schema::WRITE_GPS.name,
        help = schema::WRITE_GPS.description,
        value_parser = path_or_empty()
    )]
    pub write_gps: Option<PathBuf>,

    #[arg(
        long = schema::WRITE_KML.name,
        help = schema::WRITE_KML.description,
        value_parser = path_or_empty()
    )]
    pub write_kml: Option<PathBuf>,

    #[arg(
        long = schema::WRITE_NMEA.name,
        help = schema::WRITE_NMEA.description,
        value_parser = path_or_empty()
    )]
    pub write_nmea: Option<PathBuf>,
}

/// Subcommands for gps-atlas
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a default configuration file
    #[command(name = schema::INIT.name, about = schema::INIT.description)]
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = super::defaults::CONFIG_TEMPLATE_PATH)]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }

    /// Parses CLI arguments from an iterator, returning clap's error instead of exiting.
    ///
    /// # Errors
    ///
    /// Returns the clap error for unknown options or malformed values.
    pub fn try_parse_from_iter<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::try_parse_from(iter)
    }

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Some(Command::Init { .. }))
    }
}

/// Path parser that keeps empty values, which disable the matching output.
///
/// clap's `PathBuf` parser rejects an empty string.
fn path_or_empty() -> impl TypedValueParser<Value = PathBuf> {
    OsStringValueParser::new().map(PathBuf::from)
}
