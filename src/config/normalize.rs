//! Reconciles interacting options before validation.
//!
//! Normalization never fails. It only adjusts values and reports what it
//! chose on the user's behalf as [`Advisory`] values.

use std::fmt;

use super::options::RunOptions;

/// A non-fatal note about a value chosen during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    /// No print or write option was set, so GPS coordinates are printed.
    DefaultOutputSelected,
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DefaultOutputSelected => {
                f.write_str("no print or write option has been set; printing GPS coordinates")
            }
        }
    }
}

/// Result of normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    /// The reconciled options
    pub options: RunOptions,
    /// Defaults that were chosen on the user's behalf
    pub advisories: Vec<Advisory>,
}

/// Applies auto-detect suppression and default output selection.
///
/// Idempotent: normalizing the returned options again changes nothing and
/// yields no advisories.
#[must_use]
pub fn normalize(mut options: RunOptions) -> Normalized {
    let mut advisories = Vec::new();

    if options.auto_detect && has_manual_serial(&options) {
        options.auto_detect = false;
    }

    if !options.has_effective_output() {
        options.print_gps = true;
        advisories.push(Advisory::DefaultOutputSelected);
    }

    Normalized {
        options,
        advisories,
    }
}

/// Both port and baud rate were given as non-negative values.
///
/// Giving only one of them keeps auto-detection on.
const fn has_manual_serial(options: &RunOptions) -> bool {
    matches!(
        (options.baud_rate, options.serial_port),
        (Some(baud), Some(port)) if baud >= 0 && port >= 0
    )
}
