//! In-memory career log collection
//!
//! Documents live in insertion order behind one `parking_lot::RwLock`, with
//! FxHashMap indexes by id and by token.
//!
//! # Design
//!
//! - Reads (`find`, `scan`) take the read lock and run concurrently
//! - Writes (`insert`, `find_one_and_update`) take the write lock, so the
//!   match and the write of an update are one step
//! - Insertion order is the natural order returned by `find(All)`

use crate::store::{CareerLogStore, Filter};
use careerlog_core::{CareerLog, CareerLogUpdate, Error, RecordId, Result, Token};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Documents plus lookup indexes
///
/// Shared by [`MemoryStore`] and the journal-backed store, which replays its
/// journal into one of these.
#[derive(Debug, Default)]
pub(crate) struct Collection {
    docs: Vec<CareerLog>,
    by_id: FxHashMap<RecordId, usize>,
    /// First document carrying each token
    by_token: FxHashMap<Token, usize>,
}

impl Collection {
    pub(crate) fn len(&self) -> usize {
        self.docs.len()
    }

    pub(crate) fn docs(&self) -> &[CareerLog] {
        &self.docs
    }

    /// Position of the first document matching `filter`
    pub(crate) fn position(&self, filter: &Filter) -> Option<usize> {
        match filter {
            Filter::All => (!self.docs.is_empty()).then_some(0),
            Filter::Id(id) => self.by_id.get(id).copied(),
            Filter::Token(token) => self.by_token.get(token).copied(),
        }
    }

    pub(crate) fn find(&self, filter: &Filter) -> Vec<CareerLog> {
        match filter {
            Filter::All => self.docs.clone(),
            _ => self
                .position(filter)
                .map(|i| vec![self.docs[i].clone()])
                .unwrap_or_default(),
        }
    }

    /// Reject documents without an id or with an id already stored
    pub(crate) fn check_insertable(&self, log: &CareerLog) -> Result<RecordId> {
        let id = log
            .id
            .ok_or_else(|| Error::StoreUnavailable("document has no id".to_string()))?;
        if self.by_id.contains_key(&id) {
            return Err(Error::StoreUnavailable(format!("duplicate id {}", id)));
        }
        Ok(id)
    }

    /// Add a document that already carries its id
    pub(crate) fn insert(&mut self, log: CareerLog) -> Result<()> {
        let id = self.check_insertable(&log)?;

        let position = self.docs.len();
        self.by_id.insert(id, position);
        if let Some(token) = &log.token {
            self.by_token.entry(token.clone()).or_insert(position);
        }
        self.docs.push(log);
        Ok(())
    }

    /// Replace the document at `position`; id and token are not re-indexed
    pub(crate) fn replace(&mut self, position: usize, log: CareerLog) {
        self.docs[position] = log;
    }

    /// The document at `position` with `update` applied, without storing it
    pub(crate) fn updated(&self, position: usize, update: &CareerLogUpdate) -> CareerLog {
        let mut log = self.docs[position].clone();
        update.apply(&mut log);
        log
    }
}

/// Thread-safe in-memory store
///
/// Loses everything when dropped. Used for ephemeral databases and tests.
///
/// # Example
///
/// ```ignore
/// use careerlog_storage::{CareerLogStore, MemoryStore, Filter};
///
/// let store = MemoryStore::new();
/// let stored = store.insert(log)?;
/// assert!(store.find_one(&Filter::Id(stored.id.unwrap()))?.is_some());
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Collection>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

impl CareerLogStore for MemoryStore {
    fn find(&self, filter: &Filter) -> Result<Vec<CareerLog>> {
        Ok(self.inner.read().find(filter))
    }

    fn find_one(&self, filter: &Filter) -> Result<Option<CareerLog>> {
        let guard = self.inner.read();
        Ok(guard.position(filter).map(|i| guard.docs()[i].clone()))
    }

    fn scan(&self, visit: &mut dyn FnMut(&CareerLog)) -> Result<()> {
        self.inner.read().docs().iter().for_each(visit);
        Ok(())
    }

    fn insert(&self, mut log: CareerLog) -> Result<CareerLog> {
        let id = RecordId::new();
        log.id = Some(id);
        self.inner.write().insert(log.clone())?;
        debug!(%id, "inserted career log");
        Ok(log)
    }

    fn find_one_and_update(
        &self,
        filter: &Filter,
        update: &CareerLogUpdate,
    ) -> Result<Option<CareerLog>> {
        let mut guard = self.inner.write();
        let Some(position) = guard.position(filter) else {
            return Ok(None);
        };
        let log = guard.updated(position, update);
        guard.replace(position, log.clone());
        Ok(Some(log))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.inner.read().len())
    }
}
