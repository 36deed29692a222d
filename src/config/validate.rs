//! Cross-field validation of normalized options.
//!
//! Rules run in a fixed order and the first violation is returned.

use super::defaults;
use super::error::ConfigError;
use super::options::RunOptions;
use super::validated::{SerialSettings, ValidatedConfig};

/// Host platform, for platform-specific rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// COM ports are numbered 1-256.
    Windows,
    /// Any other operating system.
    Other,
}

impl Platform {
    /// The platform this binary was built for.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Other
        }
    }
}

/// Validates normalized options and freezes them into a [`ValidatedConfig`].
///
/// Rule order:
/// 1. Windows COM port range (manual mode only)
/// 2. Manual serial port present and non-negative
/// 3. Manual baud rate present and positive
/// 4. `silent` excludes `verbose`
/// 5. `silent` excludes the print flags
/// 6. Timeout non-negative
/// 7. Plot interval positive
///
/// # Errors
///
/// Returns the [`ConfigError`] of the first rule that fails.
pub fn validate(options: RunOptions, platform: Platform) -> Result<ValidatedConfig, ConfigError> {
    check_com_port_range(&options, platform)?;
    check_serial_port(&options)?;
    check_baud_rate(&options)?;

    if options.silent && options.verbose {
        return Err(ConfigError::SilentWithVerbose);
    }

    if options.silent && (options.print_gps || options.print_nmea) {
        return Err(ConfigError::SilentWithPrint);
    }

    if options.timeout < 0 {
        return Err(ConfigError::NegativeTimeout(options.timeout));
    }

    if options.plot_interval <= 0 {
        return Err(ConfigError::NonPositiveInterval(options.plot_interval));
    }

    let serial = serial_settings(&options)?;
    Ok(ValidatedConfig::new(options, serial))
}

fn check_com_port_range(options: &RunOptions, platform: Platform) -> Result<(), ConfigError> {
    if platform != Platform::Windows || options.auto_detect {
        return Ok(());
    }

    match options.serial_port {
        Some(port) if port > 0 && port <= defaults::MAX_COM_PORT => Ok(()),
        port => Err(ConfigError::ComPortOutOfRange {
            port,
            max: defaults::MAX_COM_PORT,
        }),
    }
}

fn check_serial_port(options: &RunOptions) -> Result<(), ConfigError> {
    if options.auto_detect {
        return Ok(());
    }

    match options.serial_port {
        Some(port) if port >= 0 => Ok(()),
        port => Err(ConfigError::InvalidSerialPort { port }),
    }
}

fn check_baud_rate(options: &RunOptions) -> Result<(), ConfigError> {
    if options.auto_detect {
        return Ok(());
    }

    match options.baud_rate {
        Some(baud_rate) if baud_rate > 0 => Ok(()),
        baud_rate => Err(ConfigError::InvalidBaudRate { baud_rate }),
    }
}

/// Converts checked serial values into their validated form.
///
/// Values that passed the sign checks but do not fit `u32` are rejected
/// with the same errors as rules 2 and 3.
fn serial_settings(options: &RunOptions) -> Result<SerialSettings, ConfigError> {
    if options.auto_detect {
        return Ok(SerialSettings::AutoDetect);
    }

    let port = options
        .serial_port
        .and_then(|p| u32::try_from(p).ok())
        .ok_or(ConfigError::InvalidSerialPort {
            port: options.serial_port,
        })?;

    let baud_rate = options
        .baud_rate
        .and_then(|b| u32::try_from(b).ok())
        .ok_or(ConfigError::InvalidBaudRate {
            baud_rate: options.baud_rate,
        })?;

    Ok(SerialSettings::Manual { port, baud_rate })
}
