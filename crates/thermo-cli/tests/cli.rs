//! Argument parsing for `thermo-rename`.

use clap::Parser;
use thermo_cli::cli::{Cli, Command};
use thermo_model::ProfileId;

#[test]
fn run_accepts_selector_and_peak_label() {
    let cli = Cli::try_parse_from(["thermo-rename", "run", "/data/cycle", "--profile", "a"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.profile, ProfileId::Steps23);
    assert_eq!(args.folder.to_str(), Some("/data/cycle"));
    assert!(args.rules.is_none());

    let cli = Cli::try_parse_from(["thermo-rename", "run", ".", "-p", "180C"]).unwrap();
    let Command::Run(args) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.profile, ProfileId::Steps9A);
}

#[test]
fn run_requires_a_known_profile() {
    assert!(Cli::try_parse_from(["thermo-rename", "run", "."]).is_err());
    assert!(Cli::try_parse_from(["thermo-rename", "run", ".", "--profile", "d"]).is_err());
}

#[test]
fn global_log_flags_follow_the_subcommand() {
    let cli = Cli::try_parse_from([
        "thermo-rename",
        "profiles",
        "--log-format",
        "json",
        "--log-level",
        "debug",
    ])
    .unwrap();
    assert!(matches!(cli.command, Command::Profiles));
    assert!(cli.log_level.is_some());
}
