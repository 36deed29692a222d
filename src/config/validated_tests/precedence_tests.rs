//! Tests for CLI vs TOML precedence rules.

use std::path::PathBuf;
use std::time::Duration;

use super::*;

mod cli_precedence {
    use super::*;

    #[test]
    fn cli_serial_values_override_toml() {
        let cli = cli(&["--port", "5", "--baudrate", "115200"]);
        let toml = toml(
            r"
            [serial]
            port = 2
            baudrate = 4800
        ",
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();

        assert_eq!(
            resolved.config.serial(),
            SerialSettings::Manual {
                port: 5,
                baud_rate: 115_200
            }
        );
    }

    #[test]
    fn cli_timeout_and_interval_override_toml() {
        let cli = cli(&["--timeout", "10", "--interval", "5"]);
        let toml = toml(
            r"
            [serial]
            timeout = 90

            [sampling]
            interval = 60
        ",
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();

        assert_eq!(resolved.config.timeout(), Duration::from_secs(10));
        assert_eq!(resolved.config.plot_interval(), Duration::from_secs(5));
    }

    #[test]
    fn cli_autodetect_false_overrides_toml_true() {
        let cli = cli(&["--autodetect=false", "--port", "3", "--baudrate", "9600"]);
        let toml = toml(
            r"
            [serial]
            autodetect = true
        ",
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();
        assert!(!resolved.config.serial().is_auto_detect());
    }

    #[test]
    fn cli_write_path_overrides_toml() {
        let cli = cli(&["--write-csv", "cli.csv"]);
        let toml = toml(
            r#"
            [output]
            write_csv = "toml.csv"
        "#,
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();

        assert_eq!(
            resolved.config.write_paths().csv,
            Some(PathBuf::from("cli.csv"))
        );
    }

    #[test]
    fn empty_cli_write_path_disables_toml_path() {
        let cli = cli(&["--write-csv", "", "--print-nmea"]);
        let toml = toml(
            r#"
            [output]
            write_csv = "toml.csv"
        "#,
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();
        assert_eq!(resolved.config.write_paths().csv, None);
    }
}

mod toml_fallback {
    use super::*;

    #[test]
    fn toml_values_used_when_cli_silent() {
        let cli = cli(&[]);
        let toml = toml(
            r#"
            [serial]
            timeout = 0

            [sampling]
            interval = 15

            [output]
            write_kml = "track.kml"

            [metrics]
            bearing = true
            speed_kph = true
            timezone_local = true

            [process]
            daemon = true
        "#,
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();
        let config = resolved.config;

        assert_eq!(config.timeout(), Duration::ZERO);
        assert_eq!(config.plot_interval(), Duration::from_secs(15));
        assert_eq!(config.write_paths().kml, Some(PathBuf::from("track.kml")));
        assert!(!config.print_gps());
        assert!(config.metrics().bearing);
        assert!(config.metrics().speed_kph);
        assert!(!config.metrics().speed_mph);
        assert!(config.timezone_local());
        assert!(config.daemon());
    }

    #[test]
    fn toml_autodetect_false_requires_manual_values() {
        let cli = cli(&[]);
        let toml = toml(
            r"
            [serial]
            autodetect = false
        ",
        );

        let result = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other);
        assert!(matches!(
            result,
            Err(ResolveError {
                error: ConfigError::InvalidSerialPort { port: None },
                ..
            })
        ));
    }

    #[test]
    fn port_from_cli_and_baud_from_toml_disable_auto_detect() {
        let cli = cli(&["--port", "4"]);
        let toml = toml(
            r"
            [serial]
            baudrate = 38400
        ",
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();

        assert_eq!(
            resolved.config.serial(),
            SerialSettings::Manual {
                port: 4,
                baud_rate: 38_400
            }
        );
    }
}

mod boolean_or_semantics {
    use super::*;

    #[test]
    fn toml_silent_conflicts_with_cli_verbose() {
        let cli = cli(&["--verbose", "--write-gps", "coords.txt"]);
        let toml = toml(
            r"
            [output]
            silent = true
        ",
        );

        let result = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other);
        assert!(matches!(
            result,
            Err(ResolveError {
                error: ConfigError::SilentWithVerbose,
                ..
            })
        ));
    }

    #[test]
    fn toml_verbose_cannot_be_cleared_by_cli_silent() {
        let cli = cli(&["--silent", "--write-csv", "track.csv"]);
        let toml = toml(
            r"
            [output]
            verbose = true
        ",
        );

        let result = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other);
        assert!(matches!(
            result,
            Err(ResolveError {
                error: ConfigError::SilentWithVerbose,
                ..
            })
        ));
    }

    #[test]
    fn cli_flag_enables_even_if_toml_false() {
        let cli = cli(&["--print-nmea"]);
        let toml = toml(
            r"
            [output]
            print_nmea = false
        ",
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();
        assert!(resolved.config.print_nmea());
    }

    #[test]
    fn toml_print_flag_suppresses_default_advisory() {
        let cli = cli(&[]);
        let toml = toml(
            r"
            [output]
            print_gps = true
        ",
        );

        let resolved = ValidatedConfig::resolve(&cli, Some(&toml), Platform::Other).unwrap();

        assert!(resolved.config.print_gps());
        assert!(resolved.advisories.is_empty());
    }
}
