//! Journal-backed career log collection
//!
//! Every insert and update is appended to a JSON-lines journal before it
//! becomes visible; opening the store replays the journal into memory.
//!
//! ## Record format
//!
//! One JSON object per line, tagged by `op`:
//!
//! ```text
//! {"op":"insert","document":{...}}
//! {"op":"update","id":"<record id>","set":{...}}
//! ```
//!
//! Updates are journaled against the id resolved under the write lock, so
//! replay does not depend on token lookups.
//!
//! ## Recovery
//!
//! - A final line without its newline is a torn write: it was never
//!   acknowledged, so it is dropped and the file is truncated before it
//! - Any other unreadable line is corruption and fails the open
//! - A failed append is rolled back to the last complete record, so a later
//!   append never lands behind a partial line

use crate::durability::DurabilityMode;
use crate::memory::Collection;
use crate::store::{CareerLogStore, Filter};
use careerlog_core::{CareerLog, CareerLogUpdate, Error, RecordId, Result};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Journal line as written
#[derive(Serialize)]
#[serde(tag = "op", rename_all = "camelCase")]
enum JournalRecordRef<'a> {
    Insert { document: &'a CareerLog },
    Update { id: RecordId, set: &'a CareerLogUpdate },
}

/// Journal line as read back
#[derive(Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
enum JournalRecord {
    Insert { document: CareerLog },
    Update { id: RecordId, set: CareerLogUpdate },
}

/// What replaying the journal found
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayStats {
    /// Insert records applied
    pub inserts: usize,
    /// Update records applied
    pub updates: usize,
    /// Whether a torn final line was dropped
    pub truncated_tail: bool,
}

impl ReplayStats {
    /// Total records applied
    pub fn records(&self) -> usize {
        self.inserts + self.updates
    }

    /// One-line summary for logs
    pub fn summary(&self) -> String {
        format!(
            "replayed {} records ({} inserts, {} updates){}",
            self.records(),
            self.inserts,
            self.updates,
            if self.truncated_tail { ", dropped torn tail" } else { "" }
        )
    }
}

struct JournalState {
    collection: Collection,
    file: File,
    /// Byte length of the complete records in `file`
    len: u64,
}

impl JournalState {
    /// Append one record, truncating back to `len` if the write fails
    fn append(&mut self, record: &JournalRecordRef<'_>, mode: DurabilityMode) -> Result<()> {
        let mut line = serde_json::to_vec(record)?;
        line.push(b'\n');

        let on_disk = self.file.metadata()?.len();
        if on_disk != self.len {
            warn!(
                "Journal is {} bytes past its last complete record, truncating",
                on_disk.saturating_sub(self.len)
            );
            self.file.set_len(self.len)?;
        }

        let written = match self.file.write_all(&line) {
            Ok(()) if mode.requires_immediate_fsync() => self.file.sync_data(),
            other => other,
        };
        if let Err(e) = written {
            if let Err(rollback) = self.file.set_len(self.len) {
                warn!("Failed to roll back partial journal write: {}", rollback);
            }
            return Err(e.into());
        }

        self.len += line.len() as u64;
        Ok(())
    }
}

/// Career log store persisted to an append-only journal
///
/// Reads are served from memory. Writes hold the write lock while the
/// journal append (and fsync in [`DurabilityMode::Strict`]) happens, so the
/// journal order is the order writes became visible.
pub struct JournalStore {
    path: PathBuf,
    mode: DurabilityMode,
    state: RwLock<JournalState>,
    stats: ReplayStats,
}

impl JournalStore {
    /// Open (or create) the journal at `path` and replay it
    ///
    /// Parent directories are created as needed.
    pub fn open(path: impl AsRef<Path>, mode: DurabilityMode) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        info!("Opening career log journal at {}", path.display());
        let (collection, stats, valid_len) = replay(&path)?;

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        if stats.truncated_tail {
            file.set_len(valid_len)?;
            file.sync_data()?;
        }
        info!("{}", stats.summary());

        Ok(Self {
            path,
            mode,
            state: RwLock::new(JournalState {
                collection,
                file,
                len: valid_len,
            }),
            stats,
        })
    }

    /// Journal file location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Configured durability mode
    pub fn durability_mode(&self) -> DurabilityMode {
        self.mode
    }

    /// What the open-time replay found
    pub fn replay_stats(&self) -> &ReplayStats {
        &self.stats
    }

    /// Force journal contents to disk
    pub fn sync(&self) -> Result<()> {
        self.state.write().file.sync_data()?;
        Ok(())
    }
}

impl std::fmt::Debug for JournalStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JournalStore")
            .field("path", &self.path)
            .field("mode", &self.mode)
            .field("stats", &self.stats)
            .finish()
    }
}

impl CareerLogStore for JournalStore {
    fn find(&self, filter: &Filter) -> Result<Vec<CareerLog>> {
        Ok(self.state.read().collection.find(filter))
    }

    fn find_one(&self, filter: &Filter) -> Result<Option<CareerLog>> {
        let guard = self.state.read();
        Ok(guard
            .collection
            .position(filter)
            .map(|i| guard.collection.docs()[i].clone()))
    }

    fn scan(&self, visit: &mut dyn FnMut(&CareerLog)) -> Result<()> {
        self.state.read().collection.docs().iter().for_each(visit);
        Ok(())
    }

    fn insert(&self, mut log: CareerLog) -> Result<CareerLog> {
        let id = RecordId::new();
        log.id = Some(id);

        let mut guard = self.state.write();
        let state = &mut *guard;
        state.collection.check_insertable(&log)?;
        state.append(&JournalRecordRef::Insert { document: &log }, self.mode)?;
        state.collection.insert(log.clone())?;

        debug!(%id, "journaled career log insert");
        Ok(log)
    }

    fn find_one_and_update(
        &self,
        filter: &Filter,
        update: &CareerLogUpdate,
    ) -> Result<Option<CareerLog>> {
        let mut guard = self.state.write();
        let state = &mut *guard;
        let Some(position) = state.collection.position(filter) else {
            return Ok(None);
        };

        let log = state.collection.updated(position, update);
        let id = log
            .id
            .ok_or_else(|| Error::StoreUnavailable("stored document has no id".to_string()))?;
        state.append(&JournalRecordRef::Update { id, set: update }, self.mode)?;
        state.collection.replace(position, log.clone());

        debug!(%id, "journaled career log update");
        Ok(Some(log))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.state.read().collection.len())
    }
}

/// Rebuild the collection from the journal at `path`
///
/// Returns the collection, what was applied, and the byte length of the
/// valid prefix.
fn replay(path: &Path) -> Result<(Collection, ReplayStats, u64)> {
    let mut collection = Collection::default();
    let mut stats = ReplayStats::default();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok((collection, stats, 0)),
        Err(e) => return Err(e.into()),
    };

    let mut valid_len = 0u64;
    for (index, chunk) in bytes.split_inclusive(|&b| b == b'\n').enumerate() {
        let line_no = index + 1;
        let Some(line) = chunk.strip_suffix(b"\n") else {
            warn!(
                "Dropping torn journal line {} in {} ({} bytes)",
                line_no,
                path.display(),
                chunk.len()
            );
            stats.truncated_tail = true;
            break;
        };

        if !line.iter().all(u8::is_ascii_whitespace) {
            let record: JournalRecord = serde_json::from_slice(line).map_err(|e| {
                Error::Corruption(format!("{} line {}: {}", path.display(), line_no, e))
            })?;
            apply(&mut collection, &mut stats, record)
                .map_err(|e| Error::Corruption(format!("{} line {}: {}", path.display(), line_no, e)))?;
        }
        valid_len += chunk.len() as u64;
    }

    Ok((collection, stats, valid_len))
}

fn apply(collection: &mut Collection, stats: &mut ReplayStats, record: JournalRecord) -> Result<()> {
    match record {
        JournalRecord::Insert { document } => {
            collection.insert(document)?;
            stats.inserts += 1;
        }
        JournalRecord::Update { id, set } => {
            let position = collection
                .position(&Filter::Id(id))
                .ok_or_else(|| Error::Corruption(format!("update for unknown id {}", id)))?;
            let log = collection.updated(position, &set);
            collection.replace(position, log);
            stats.updates += 1;
        }
    }
    Ok(())
}
