//! Tests keeping the option schema and the CLI parser in sync.

use std::collections::HashSet;

use clap::CommandFactory;

use super::cli::Cli;
use super::defaults;
use super::schema::{self, COMMANDS, OPTIONS, OptionDefault, OptionKind};

/// Long names of every CLI argument.
fn cli_long_names() -> Vec<String> {
    Cli::command()
        .get_arguments()
        .filter_map(|arg| arg.get_long().map(str::to_string))
        .collect()
}

mod catalog {
    use super::*;

    #[test]
    fn names_are_unique() {
        let names: HashSet<_> = OPTIONS.iter().map(|spec| spec.name).collect();
        assert_eq!(names.len(), OPTIONS.len());
    }

    #[test]
    fn names_are_sorted_for_the_help_sheet() {
        let names: Vec<_> = OPTIONS.iter().map(|spec| spec.name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn every_description_is_filled() {
        for spec in OPTIONS {
            assert!(!spec.description.is_empty(), "{} has no description", spec.name);
        }
    }

    #[test]
    fn defaults_match_kinds() {
        for spec in OPTIONS {
            match (spec.kind, spec.default) {
                (OptionKind::Bool, OptionDefault::Bool(_))
                | (OptionKind::Int, OptionDefault::Int(_) | OptionDefault::Unset)
                | (OptionKind::String, OptionDefault::Unset) => {}
                (kind, default) => panic!("{}: {kind} option with default {default}", spec.name),
            }
        }
    }

    #[test]
    fn documented_defaults() {
        assert_eq!(schema::AUTODETECT.default, OptionDefault::Bool(true));
        assert_eq!(schema::BAUDRATE.default, OptionDefault::Unset);
        assert_eq!(schema::PORT.default, OptionDefault::Unset);
        assert_eq!(
            schema::INTERVAL.default,
            OptionDefault::Int(defaults::PLOT_INTERVAL_SECS)
        );
        assert_eq!(schema::TIMEOUT.default, OptionDefault::Int(defaults::TIMEOUT_SECS));
        assert_eq!(defaults::plot_interval().as_secs(), 30);
        assert_eq!(defaults::timeout().as_secs(), 60);
    }

    #[test]
    fn find_by_name() {
        assert_eq!(schema::find("port"), Some(&schema::PORT));
        assert_eq!(schema::find("no-such-option"), None);
    }
}

mod cli_sync {
    use super::*;

    #[test]
    fn every_cli_argument_has_a_schema_entry() {
        for name in cli_long_names() {
            assert!(schema::find(&name).is_some(), "--{name} missing from schema");
        }
    }

    #[test]
    fn every_schema_entry_is_a_cli_argument() {
        let names = cli_long_names();
        for spec in OPTIONS {
            assert!(
                names.iter().any(|n| n == spec.name),
                "{} missing from CLI",
                spec.name
            );
        }
    }

    #[test]
    fn cli_help_matches_schema_description() {
        let command = Cli::command();
        for arg in command.get_arguments() {
            let Some(name) = arg.get_long() else { continue };
            let Some(spec) = schema::find(name) else { continue };

            let help = arg.get_help().map(ToString::to_string);
            assert_eq!(help.as_deref(), Some(spec.description), "--{name}");
        }
    }

    #[test]
    fn cli_short_aliases_match_schema() {
        let command = Cli::command();
        for arg in command.get_arguments() {
            let Some(name) = arg.get_long() else { continue };
            let Some(spec) = schema::find(name) else { continue };

            assert_eq!(arg.get_short(), spec.short, "--{name}");
        }
    }

    #[test]
    fn subcommands_match_schema() {
        let command = Cli::command();
        let subcommands: Vec<_> = command
            .get_subcommands()
            .filter(|sub| sub.get_name() != "help")
            .collect();

        assert_eq!(subcommands.len(), COMMANDS.len());
        for spec in COMMANDS {
            let sub = subcommands
                .iter()
                .find(|sub| sub.get_name() == spec.name)
                .unwrap_or_else(|| panic!("{} missing from CLI", spec.name));
            let about = sub.get_about().map(ToString::to_string);
            assert_eq!(about.as_deref(), Some(spec.description), "{}", spec.name);
        }
    }

    #[test]
    fn options_used_by_resolution_are_declared() {
        for name in [
            "autodetect",
            "baudrate",
            "port",
            "interval",
            "print-gps",
            "print-nmea",
            "silent",
            "timeout",
            "verbose",
            "write-csv",
            "write-gps",
            "write-kml",
            "write-nmea",
        ] {
            assert!(schema::find(name).is_some(), "{name} missing from schema");
        }
    }
}
