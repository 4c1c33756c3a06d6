//! ArgMatches → action conversion.
//!
//! Translates clap's parsed arguments into a [`CliAction`]. Input files are
//! read and decoded here so that execution only sees typed values.

use std::io::Read;
use std::path::PathBuf;

use careerlog::{CareerLog, CareerLogDatabaseSettings, CareerLogDto, RecordId, Token};
use clap::ArgMatches;
use serde::de::DeserializeOwned;

/// The result of parsing the command line.
#[derive(Debug)]
pub enum CliAction {
    List,
    Summaries,
    Show { id: RecordId },
    Timeline { id: RecordId },
    Create { input: CareerLog },
    Update { token: Token, dto: CareerLogDto },
    Catalog,
}

/// Resolve database settings from `--config`, `--data-dir` and `--strict`.
pub fn matches_to_settings(matches: &ArgMatches) -> Result<CareerLogDatabaseSettings, String> {
    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => CareerLogDatabaseSettings::load(path).map_err(|e| e.to_string())?,
        None => CareerLogDatabaseSettings::default(),
    };
    if let Some(dir) = matches.get_one::<String>("data-dir") {
        settings.data_dir = Some(PathBuf::from(dir));
    }
    if matches.get_flag("strict") {
        settings.durability = careerlog::DurabilityMode::Strict;
    }
    Ok(settings)
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, m) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    match sub_name {
        "list" => Ok(CliAction::List),
        "summaries" => Ok(CliAction::Summaries),
        "catalog" => Ok(CliAction::Catalog),
        "show" => Ok(CliAction::Show {
            id: parse_id(required(m, "id")?)?,
        }),
        "timeline" => Ok(CliAction::Timeline {
            id: parse_id(required(m, "id")?)?,
        }),
        "create" => Ok(CliAction::Create {
            input: read_json(required(m, "file")?)?,
        }),
        "update" => Ok(CliAction::Update {
            token: Token::from(required(m, "token")?),
            dto: read_json(required(m, "file")?)?,
        }),
        other => Err(format!("Unknown command: {}", other)),
    }
}

fn required<'a>(m: &'a ArgMatches, name: &str) -> Result<&'a str, String> {
    m.get_one::<String>(name)
        .map(String::as_str)
        .ok_or_else(|| format!("missing argument <{}>", name))
}

fn parse_id(raw: &str) -> Result<RecordId, String> {
    raw.parse()
        .map_err(|e| format!("invalid career id {:?}: {}", raw, e))
}

fn read_json<T: DeserializeOwned>(source: &str) -> Result<T, String> {
    let text = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| format!("stdin: {}", e))?;
        buf
    } else {
        std::fs::read_to_string(source).map_err(|e| format!("{}: {}", source, e))?
    };
    serde_json::from_str(&text).map_err(|e| format!("{}: {}", source, e))
}
