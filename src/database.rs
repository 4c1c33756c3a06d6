//! Main database entry point for careerlog.
//!
//! This module provides the `CareerLogs` struct, the handle applications open
//! once and share across requests.

use crate::config::CareerLogDatabaseSettings;
use crate::error::Result;
use crate::repository::CareerLogRepository;
use careerlog_storage::{CareerLogStore, DurabilityMode, JournalStore, MemoryStore, ReplayStats};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

/// The career log database.
///
/// Create one using [`CareerLogs::open`], [`CareerLogs::ephemeral`] or
/// [`CareerLogs::builder`].
///
/// # Example
///
/// ```ignore
/// use careerlog::prelude::*;
///
/// let db = CareerLogs::open("./data")?;
/// let created = db.careers.create(input)?;
/// let timeline = db.careers.get_milestone_timeline(&created.id.unwrap())?;
/// db.close()?;
/// ```
pub struct CareerLogs {
    journal: Option<Arc<JournalStore>>,

    /// Career log operations
    pub careers: CareerLogRepository,
}

impl std::fmt::Debug for CareerLogs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareerLogs")
            .field("path", &self.path())
            .field("durability", &self.durability_mode())
            .finish_non_exhaustive()
    }
}

impl CareerLogs {
    /// Open a disk-backed database under `path` with default settings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::builder().path(path).open()
    }

    /// Create an ephemeral database with no disk I/O.
    ///
    /// All data is lost when the handle is dropped.
    pub fn ephemeral() -> Result<Self> {
        Self::from_settings(&CareerLogDatabaseSettings::default())
    }

    /// Open the database described by `settings`.
    pub fn from_settings(settings: &CareerLogDatabaseSettings) -> Result<Self> {
        settings.validate()?;

        match settings.journal_path() {
            Some(path) => {
                let journal = Arc::new(JournalStore::open(&path, settings.durability)?);
                info!(
                    "Opened career log collection {} ({})",
                    path.display(),
                    settings.durability.description()
                );
                let store: Arc<dyn CareerLogStore> = journal.clone();
                Ok(Self {
                    journal: Some(journal),
                    careers: CareerLogRepository::new(store),
                })
            }
            None => {
                info!("Opened ephemeral career log collection");
                Ok(Self {
                    journal: None,
                    careers: CareerLogRepository::new(Arc::new(MemoryStore::new())),
                })
            }
        }
    }

    /// Create a builder for database configuration.
    pub fn builder() -> CareerLogsBuilder {
        CareerLogsBuilder::new()
    }

    /// Force all journal writes to disk.
    ///
    /// In buffered mode writes reach the OS but are not fsynced; call
    /// `flush()` to make them durable. No-op for ephemeral databases.
    pub fn flush(&self) -> Result<()> {
        match &self.journal {
            Some(journal) => Ok(journal.sync()?),
            None => Ok(()),
        }
    }

    /// Gracefully close the database.
    ///
    /// Flushes pending writes. The handle should not be used afterwards.
    pub fn close(&self) -> Result<()> {
        self.flush()
    }

    /// Journal file path, or `None` for ephemeral databases.
    pub fn path(&self) -> Option<&Path> {
        self.journal.as_ref().map(|j| j.path())
    }

    /// Check if this is an ephemeral (no-disk) database.
    pub fn is_ephemeral(&self) -> bool {
        self.journal.is_none()
    }

    /// Durability mode of the journal, `None` for ephemeral databases.
    pub fn durability_mode(&self) -> Option<DurabilityMode> {
        self.journal.as_ref().map(|j| j.durability_mode())
    }

    /// What the journal replay found when the database was opened.
    pub fn replay_stats(&self) -> Option<&ReplayStats> {
        self.journal.as_ref().map(|j| j.replay_stats())
    }
}

/// Builder for database configuration.
///
/// # Example
///
/// ```ignore
/// // Production: disk-backed, fsync on every write
/// let db = CareerLogs::builder()
///     .path("/var/lib/careerlog")
///     .database("rp1")
///     .collection("careerLogs")
///     .strict()
///     .open()?;
///
/// // Tests: nothing on disk
/// let db = CareerLogs::builder().open()?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct CareerLogsBuilder {
    settings: CareerLogDatabaseSettings,
}

impl CareerLogsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the data directory; without one the database is ephemeral.
    pub fn path(mut self, path: impl AsRef<Path>) -> Self {
        self.settings.data_dir = Some(PathBuf::from(path.as_ref()));
        self
    }

    /// Set the database name (subdirectory of the data directory).
    pub fn database(mut self, name: impl Into<String>) -> Self {
        self.settings.database_name = name.into();
        self
    }

    /// Set the collection name (journal file stem).
    pub fn collection(mut self, name: impl Into<String>) -> Self {
        self.settings.collection_name = name.into();
        self
    }

    /// Use strict mode (fsync on every write).
    pub fn strict(mut self) -> Self {
        self.settings.durability = DurabilityMode::Strict;
        self
    }

    /// Open the database.
    pub fn open(self) -> Result<CareerLogs> {
        CareerLogs::from_settings(&self.settings)
    }
}
