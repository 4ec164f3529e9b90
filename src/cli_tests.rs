//! Tests for CLI argument parsing.

use clap::Parser;

use super::*;

#[test]
fn run_parses_with_defaults() {
    let cli = Cli::parse_from(["ghg-charts", "run"]);

    assert!(!cli.quiet);
    assert_eq!(cli.verbose, 0);
    match cli.command {
        Commands::Run(args) => {
            assert!(args.config.is_none());
            assert!(args.data_dir.is_none());
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn run_accepts_overrides() {
    let cli = Cli::parse_from([
        "ghg-charts",
        "run",
        "--data-dir",
        "inputs",
        "--results-dir",
        "out",
        "--input",
        "proxy.xlsx",
        "--sheet",
        "data",
    ]);

    match cli.command {
        Commands::Run(args) => {
            assert_eq!(args.data_dir.unwrap().to_str(), Some("inputs"));
            assert_eq!(args.results_dir.unwrap().to_str(), Some("out"));
            assert_eq!(args.input.as_deref(), Some("proxy.xlsx"));
            assert_eq!(args.sheet.as_deref(), Some("data"));
        }
        _ => panic!("expected run command"),
    }
}

#[test]
fn quiet_flag_is_global() {
    let cli = Cli::parse_from(["ghg-charts", "run", "--quiet"]);
    assert!(cli.quiet);
}

#[test]
fn verbose_flag_counts() {
    let cli = Cli::parse_from(["ghg-charts", "-vv", "run"]);
    assert_eq!(cli.verbose, 2);
}

#[test]
fn init_defaults_to_local_file() {
    let cli = Cli::parse_from(["ghg-charts", "init"]);

    match cli.command {
        Commands::Init(args) => {
            assert_eq!(args.output.to_str(), Some("ghg-charts.toml"));
            assert!(!args.force);
        }
        _ => panic!("expected init command"),
    }
}

#[test]
fn config_validate_requires_a_path() {
    let result = Cli::try_parse_from(["ghg-charts", "config", "validate"]);
    assert!(result.is_err());
}

#[test]
fn config_show_accepts_json_format() {
    let cli = Cli::parse_from(["ghg-charts", "config", "show", "--format", "json"]);

    match cli.command {
        Commands::Config(args) => match args.action {
            ConfigAction::Show { format, .. } => assert_eq!(format, "json"),
            ConfigAction::Validate { .. } => panic!("expected show"),
        },
        _ => panic!("expected config command"),
    }
}
