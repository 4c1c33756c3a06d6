//! Career log repository.
//!
//! The repository is a stateless facade over a [`CareerLogStore`]: it holds
//! only an `Arc` to the store and derives everything else per call.

use crate::error::Result;
use careerlog_core::{
    milestone_timeline, CareerListItem, CareerLog, CareerLogDto, CareerLogUpdate, ContractEvent,
    MilestoneCatalog, RecordId, Token,
};
use careerlog_storage::{project, CareerLogStore, Filter};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Career log operations.
///
/// Access via `db.careers`, or build one directly over any store.
///
/// # Example
///
/// ```ignore
/// let repo = CareerLogRepository::new(Arc::new(MemoryStore::new()));
/// let created = repo.create(input)?;
/// let token = created.token.clone().unwrap();
/// repo.update(&token, dto)?;
/// ```
#[derive(Clone)]
pub struct CareerLogRepository {
    store: Arc<dyn CareerLogStore>,
}

impl CareerLogRepository {
    /// Create a repository over `store`
    pub fn new(store: Arc<dyn CareerLogStore>) -> Self {
        Self { store }
    }

    /// Every stored career log, in store order
    pub fn list_all(&self) -> Result<Vec<CareerLog>> {
        debug!("listing all career logs");
        Ok(self.store.find(&Filter::All)?)
    }

    /// The career log with `id`, or `None`
    pub fn get_by_id(&self, id: &RecordId) -> Result<Option<CareerLog>> {
        debug!(%id, "fetching career log");
        Ok(self.store.find_one(&Filter::Id(*id))?)
    }

    /// Completed catalog milestones of career `id`, oldest first
    ///
    /// `None` when the career does not exist; an empty timeline when it has
    /// no contract events.
    pub fn get_milestone_timeline(&self, id: &RecordId) -> Result<Option<Vec<ContractEvent>>> {
        debug!(%id, "deriving milestone timeline");
        let Some(log) = self.store.find_one(&Filter::Id(*id))? else {
            return Ok(None);
        };
        Ok(Some(milestone_timeline(
            MilestoneCatalog::builtin(),
            log.contract_event_entries.as_deref(),
        )))
    }

    /// Summary rows for every career
    ///
    /// Rows are projected inside the store; entry and event histories are
    /// never copied out.
    pub fn list_summaries(&self) -> Result<Vec<CareerListItem>> {
        debug!("listing career summaries");
        Ok(project(self.store.as_ref(), |log| CareerListItem::from(log))?)
    }

    /// Store a new career log
    ///
    /// A fresh token is generated and the bounds are derived from the
    /// entries. Returns the stored record with its id and token.
    pub fn create(&self, input: CareerLog) -> Result<CareerLog> {
        let log = CareerLog::shape_new(input, Token::generate());
        let stored = self.store.insert(log)?;
        info!(
            id = ?stored.id,
            entries = stored.entries().len(),
            "created career log"
        );
        Ok(stored)
    }

    /// Replace the periods and events of the career holding `token`
    ///
    /// The DTO is normalized first; an update left with no periods is
    /// rejected as malformed without touching the store. Returns the updated
    /// record, or `None` if no career holds the token.
    pub fn update(&self, token: &Token, dto: CareerLogDto) -> Result<Option<CareerLog>> {
        let update = CareerLogUpdate::from_dto(dto).map_err(|e| {
            warn!("rejected career log update: {}", e);
            e
        })?;

        let updated = self
            .store
            .find_one_and_update(&Filter::Token(token.clone()), &update)?;
        match &updated {
            Some(log) => info!(id = ?log.id, "updated career log"),
            None => debug!("no career log holds the update token"),
        }
        Ok(updated)
    }
}

impl std::fmt::Debug for CareerLogRepository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CareerLogRepository").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use careerlog_storage::MemoryStore;

    #[test]
    fn test_repository_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CareerLogRepository>();
    }

    #[test]
    fn test_repository_clones_share_the_store() {
        let repo = CareerLogRepository::new(Arc::new(MemoryStore::new()));
        let clone = repo.clone();
        repo.create(CareerLog::default()).unwrap();
        assert_eq!(clone.list_all().unwrap().len(), 1);
    }
}
