//! Database settings.
//!
//! Settings name where the career log collection lives. They can be built in
//! code, through [`CareerLogsBuilder`](crate::CareerLogsBuilder), or loaded
//! from a TOML file:
//!
//! ```toml
//! data_dir = "/var/lib/careerlog"
//! database_name = "rp1"
//! collection_name = "careerLogs"
//! durability = "strict"
//! ```
//!
//! Without `data_dir` the collection is kept in memory only.

use crate::error::{Error, Result};
use careerlog_storage::DurabilityMode;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where and how career logs are stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CareerLogDatabaseSettings {
    /// Root directory for journals; `None` keeps everything in memory
    pub data_dir: Option<PathBuf>,
    /// Subdirectory of `data_dir` holding this database's collections
    pub database_name: String,
    /// Journal file stem for the career log collection
    pub collection_name: String,
    /// fsync policy for journal writes
    pub durability: DurabilityMode,
}

impl Default for CareerLogDatabaseSettings {
    fn default() -> Self {
        Self {
            data_dir: None,
            database_name: "rp1".to_string(),
            collection_name: "careerLogs".to_string(),
            durability: DurabilityMode::default(),
        }
    }
}

impl CareerLogDatabaseSettings {
    /// Parse settings from TOML text; missing keys take their defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self = toml::from_str(text)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading settings from {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    /// Check that database and collection names are usable as path segments
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("database_name", &self.database_name),
            ("collection_name", &self.collection_name),
        ] {
            if value.is_empty() {
                return Err(Error::Config(format!("{} must not be empty", field)));
            }
            if value.contains(['/', '\\']) || value == "." || value == ".." {
                return Err(Error::Config(format!(
                    "{} must be a single path segment, got {:?}",
                    field, value
                )));
            }
        }
        Ok(())
    }

    /// Journal file for the collection, if the settings are disk-backed
    pub fn journal_path(&self) -> Option<PathBuf> {
        self.data_dir.as_ref().map(|dir| {
            dir.join(&self.database_name)
                .join(format!("{}.jsonl", self.collection_name))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_in_memory() {
        let settings = CareerLogDatabaseSettings::default();
        assert_eq!(settings.data_dir, None);
        assert_eq!(settings.journal_path(), None);
        assert_eq!(settings.durability, DurabilityMode::Buffered);
    }

    #[test]
    fn test_parse_full_file() {
        let settings = CareerLogDatabaseSettings::from_toml_str(
            r#"
            data_dir = "/srv/careers"
            database_name = "rp1-prod"
            collection_name = "logs"
            durability = "strict"
            "#,
        )
        .unwrap();

        assert_eq!(settings.durability, DurabilityMode::Strict);
        assert_eq!(
            settings.journal_path(),
            Some(PathBuf::from("/srv/careers/rp1-prod/logs.jsonl"))
        );
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let settings = CareerLogDatabaseSettings::from_toml_str("data_dir = \"/tmp/x\"").unwrap();
        assert_eq!(settings.database_name, "rp1");
        assert_eq!(settings.collection_name, "careerLogs");
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        let err = CareerLogDatabaseSettings::from_toml_str("connection_string = \"mongodb://\"")
            .unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_path_like_names_are_rejected() {
        for text in [
            "collection_name = \"../escape\"",
            "database_name = \"\"",
            "database_name = \"..\"",
        ] {
            assert!(
                CareerLogDatabaseSettings::from_toml_str(text).is_err(),
                "accepted {}",
                text
            );
        }
    }

    #[test]
    fn test_load_missing_file_is_config_error() {
        let err = CareerLogDatabaseSettings::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
