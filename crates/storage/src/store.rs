//! Store contract for the career log collection
//!
//! The repository talks to storage only through [`CareerLogStore`]. Every
//! method is one store round trip; in particular
//! [`CareerLogStore::find_one_and_update`] matches and writes under a single
//! lock, so concurrent updates to the same record never interleave.

use careerlog_core::{CareerLog, CareerLogUpdate, RecordId, Result, Token};

/// Which documents an operation addresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Every document
    All,
    /// The document with this id
    Id(RecordId),
    /// The document carrying this update token
    Token(Token),
}

impl Filter {
    /// Check a document against the filter
    pub fn matches(&self, log: &CareerLog) -> bool {
        match self {
            Filter::All => true,
            Filter::Id(id) => log.id.as_ref() == Some(id),
            Filter::Token(token) => log.token.as_ref() == Some(token),
        }
    }
}

/// A collection of career log documents
///
/// Implementations must be `Send + Sync`; one handle is shared by every
/// request.
pub trait CareerLogStore: Send + Sync {
    /// All documents matching `filter`, in insertion order
    fn find(&self, filter: &Filter) -> Result<Vec<CareerLog>>;

    /// First document matching `filter`
    fn find_one(&self, filter: &Filter) -> Result<Option<CareerLog>> {
        Ok(self.find(filter)?.into_iter().next())
    }

    /// Visit every document in place without copying it out
    fn scan(&self, visit: &mut dyn FnMut(&CareerLog)) -> Result<()>;

    /// Store a new document, assigning its id
    ///
    /// Returns the stored document.
    fn insert(&self, log: CareerLog) -> Result<CareerLog>;

    /// Atomically apply `update` to the first document matching `filter`
    ///
    /// Returns the document as it is after the update, or `None` when nothing
    /// matched. Never inserts.
    fn find_one_and_update(
        &self,
        filter: &Filter,
        update: &CareerLogUpdate,
    ) -> Result<Option<CareerLog>>;

    /// Number of stored documents
    fn count(&self) -> Result<usize> {
        let mut n = 0;
        self.scan(&mut |_| n += 1)?;
        Ok(n)
    }
}

/// Project every document through `projection` inside the store
///
/// Only the projected values leave the store.
pub fn project<S, T, F>(store: &S, projection: F) -> Result<Vec<T>>
where
    S: CareerLogStore + ?Sized,
    F: Fn(&CareerLog) -> T,
{
    let mut out = Vec::new();
    store.scan(&mut |log| out.push(projection(log)))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_matching() {
        let id = RecordId::new();
        let token = Token::generate();
        let log = CareerLog {
            id: Some(id),
            token: Some(token.clone()),
            ..CareerLog::default()
        };

        assert!(Filter::All.matches(&log));
        assert!(Filter::Id(id).matches(&log));
        assert!(!Filter::Id(RecordId::new()).matches(&log));
        assert!(Filter::Token(token).matches(&log));
        assert!(!Filter::Token(Token::from("other")).matches(&log));
    }

    #[test]
    fn test_unsaved_document_matches_no_key() {
        let log = CareerLog::default();
        assert!(!Filter::Id(RecordId::new()).matches(&log));
        assert!(!Filter::Token(Token::from("")).matches(&log));
    }
}
