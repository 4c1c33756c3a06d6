//! Clap command tree for the `careerlog` binary.

use clap::{Arg, ArgAction, Command};

/// Build the top-level command.
pub fn build_cli() -> Command {
    Command::new("careerlog")
        .about("Inspect and edit career logs")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .global(true)
                .help("TOML settings file"),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .value_name("DIR")
                .global(true)
                .help("Data directory (overrides the settings file)"),
        )
        .arg(
            Arg::new("strict")
                .long("strict")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("fsync the journal on every write"),
        )
        .subcommand(Command::new("list").about("Print every career log"))
        .subcommand(Command::new("summaries").about("Print id, name and bounds of every career"))
        .subcommand(
            Command::new("show")
                .about("Print one career log")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("timeline")
                .about("Print the completed milestones of a career, oldest first")
                .arg(Arg::new("id").required(true)),
        )
        .subcommand(
            Command::new("create")
                .about("Store a new career log read from a JSON file")
                .arg(Arg::new("file").required(true).help("JSON career log, '-' for stdin")),
        )
        .subcommand(
            Command::new("update")
                .about("Replace periods and events of the career holding TOKEN")
                .arg(Arg::new("token").required(true))
                .arg(Arg::new("file").required(true).help("JSON update, '-' for stdin")),
        )
        .subcommand(Command::new("catalog").about("Print the milestone catalog"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let matches = build_cli()
            .try_get_matches_from(["careerlog", "list", "--data-dir", "/tmp/x"])
            .unwrap();
        assert_eq!(
            matches.get_one::<String>("data-dir").map(String::as_str),
            Some("/tmp/x")
        );
    }

    #[test]
    fn test_update_requires_file() {
        assert!(build_cli()
            .try_get_matches_from(["careerlog", "update", "abc"])
            .is_err());
    }
}
