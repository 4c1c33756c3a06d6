//! careerlog CLI: inspect and edit career logs from the shell.
//!
//! `careerlog [--config FILE] [--data-dir DIR] [--strict] COMMAND`
//!
//! Results are printed as pretty JSON on stdout. Logs go to stderr and are
//! filtered with `RUST_LOG` (default `warn`).
//!
//! Exit codes: 0 on success, 1 when the requested career does not exist,
//! 2 on any error.

mod commands;
mod format;
mod parse;

use std::process;

use careerlog::{CareerLogs, MilestoneCatalog};
use tracing::debug;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use commands::build_cli;
use format::{catalog_json, format_json};
use parse::{matches_to_action, matches_to_settings, CliAction};

/// Outcome of a single command.
enum Outcome {
    Printed(String),
    NotFound(String),
}

fn main() {
    init_tracing();

    let matches = build_cli().get_matches();

    let action = match matches_to_action(&matches) {
        Ok(action) => action,
        Err(e) => fail(&e),
    };

    let settings = match matches_to_settings(&matches) {
        Ok(settings) => settings,
        Err(e) => fail(&e),
    };

    let db = match CareerLogs::from_settings(&settings) {
        Ok(db) => db,
        Err(e) => fail(&format!("Failed to open database: {}", e)),
    };

    let result = execute(&db, action);
    if let Err(e) = db.close() {
        fail(&format!("Failed to flush database: {}", e));
    }

    match result {
        Ok(Outcome::Printed(text)) => println!("{}", text),
        Ok(Outcome::NotFound(msg)) => {
            eprintln!("(not found) {}", msg);
            process::exit(1);
        }
        Err(e) => fail(&e),
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn fail(msg: &str) -> ! {
    eprintln!("(error) {}", msg);
    process::exit(2);
}

fn execute(db: &CareerLogs, action: CliAction) -> Result<Outcome, String> {
    debug!(?action, "executing");
    let careers = &db.careers;
    let err = |e: careerlog::Error| e.to_string();

    let text = match action {
        CliAction::List => format_json(&careers.list_all().map_err(err)?)?,
        CliAction::Summaries => format_json(&careers.list_summaries().map_err(err)?)?,
        CliAction::Show { id } => match careers.get_by_id(&id).map_err(err)? {
            Some(log) => format_json(&log)?,
            None => return Ok(Outcome::NotFound(format!("no career {}", id))),
        },
        CliAction::Timeline { id } => match careers.get_milestone_timeline(&id).map_err(err)? {
            Some(timeline) => format_json(&timeline)?,
            None => return Ok(Outcome::NotFound(format!("no career {}", id))),
        },
        CliAction::Create { input } => format_json(&careers.create(input).map_err(err)?)?,
        CliAction::Update { token, dto } => match careers.update(&token, dto).map_err(err)? {
            Some(log) => format_json(&log)?,
            None => return Ok(Outcome::NotFound("no career holds that token".to_string())),
        },
        CliAction::Catalog => format_json(&catalog_json(MilestoneCatalog::builtin()))?,
    };
    Ok(Outcome::Printed(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerlog::{CareerLog, CareerLogDto, CareerLogEntry, RecordId, Token};

    fn printed(outcome: Outcome) -> serde_json::Value {
        match outcome {
            Outcome::Printed(text) => serde_json::from_str(&text).unwrap(),
            Outcome::NotFound(msg) => panic!("not found: {}", msg),
        }
    }

    #[test]
    fn test_create_then_show() {
        let db = CareerLogs::ephemeral().unwrap();
        let created = printed(
            execute(
                &db,
                CliAction::Create {
                    input: CareerLog {
                        name: "Kerbin Space Program".into(),
                        ..CareerLog::default()
                    },
                },
            )
            .unwrap(),
        );
        let id: RecordId = created["id"].as_str().unwrap().parse().unwrap();

        let shown = printed(execute(&db, CliAction::Show { id }).unwrap());
        assert_eq!(shown["name"], "Kerbin Space Program");
        assert_eq!(shown["token"], created["token"]);
    }

    #[test]
    fn test_unknown_id_is_not_found() {
        let db = CareerLogs::ephemeral().unwrap();
        let outcome = execute(&db, CliAction::Timeline { id: RecordId::new() }).unwrap();
        assert!(matches!(outcome, Outcome::NotFound(_)));
    }

    #[test]
    fn test_update_with_unknown_token_is_not_found() {
        let db = CareerLogs::ephemeral().unwrap();
        let start = "2024-01-01T00:00:00Z".parse().unwrap();
        let end = "2024-02-01T00:00:00Z".parse().unwrap();
        let dto = CareerLogDto {
            periods: vec![CareerLogEntry::new(start, end)],
            ..CareerLogDto::default()
        };
        let outcome = execute(
            &db,
            CliAction::Update {
                token: Token::from("missing"),
                dto,
            },
        )
        .unwrap();
        assert!(matches!(outcome, Outcome::NotFound(_)));
    }

    #[test]
    fn test_empty_update_is_error() {
        let db = CareerLogs::ephemeral().unwrap();
        let result = execute(
            &db,
            CliAction::Update {
                token: Token::from("any"),
                dto: CareerLogDto::default(),
            },
        );
        assert!(result.is_err());
    }
}
