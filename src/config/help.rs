//! Usage text rendered from the option schema.

use std::fmt::Write as _;

use super::schema::{CommandSpec, OptionKind, OptionSpec};

/// First line of the help sheet.
pub const BANNER: &str = "GPS Atlas / gps-atlas";

/// Second line of the help sheet.
pub const TAGLINE: &str = "Auto-detect, plot, and map with common GPS USB serial devices";

/// Renders the help sheet for the given options and subcommands.
///
/// Each option gets a `-s, --name type` line (switches omit the type,
/// options without an alias omit `-s, `) followed by its indented
/// description. Non-trivial defaults are appended. Subcommands follow under
/// `COMMANDS:` when there are any.
#[must_use]
pub fn render(options: &[OptionSpec], commands: &[CommandSpec]) -> String {
    let mut out = format!("{BANNER}\n{TAGLINE}\n\nARGUMENTS:\n\n");

    for spec in options {
        render_option(&mut out, spec);
    }

    if !commands.is_empty() {
        out.push_str("\nCOMMANDS:\n\n");
        for command in commands {
            render_command(&mut out, command);
        }
    }

    out
}

fn render_option(out: &mut String, spec: &OptionSpec) {
    // Writing to a String cannot fail.
    let _ = match spec.short {
        Some(short) => write!(out, "  -{short}, --{}", spec.name),
        None => write!(out, "  --{}", spec.name),
    };

    let _ = match spec.kind {
        OptionKind::Bool => writeln!(out),
        kind => writeln!(out, " {kind}"),
    };

    let _ = if spec.default.is_shown() {
        writeln!(out, "        {} (default {})", spec.description, spec.default)
    } else {
        writeln!(out, "        {}", spec.description)
    };
}

fn render_command(out: &mut String, command: &CommandSpec) {
    let _ = if command.usage.is_empty() {
        writeln!(out, "  {}", command.name)
    } else {
        writeln!(out, "  {} {}", command.name, command.usage)
    };
    let _ = writeln!(out, "        {}", command.description);
}
