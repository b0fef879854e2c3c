//! Record repository contract and in-memory implementation.
//!
//! # Responsibility
//! - Provide upsert/fetch/load over an ordered record collection.
//! - Own the id allocator used by callers before saving new records.
//!
//! # Invariants
//! - Insertion order is preserved; a replaced record keeps its slot.
//! - `upsert` matches by id only, never by title.
//! - Lookups reject `RecordId::UNSET` before scanning.

use crate::model::id::{IdGenerator, RecordId};
use crate::model::record::{validate_lookup_id, Record, RecordValidationError};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Title of the record every seeded store starts with.
pub const SEED_TITLE: &str = "Some cool computer book";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for record lookups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    Validation(RecordValidationError),
    NotFound(RecordId),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "record not found: {id}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<RecordValidationError> for RepoError {
    fn from(value: RecordValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Repository interface for catalog records.
pub trait RecordRepository {
    /// Replaces the record with the same id in place, or appends it.
    fn upsert(&mut self, record: Record);
    /// Returns a copy of the record stored under `id`.
    fn fetch(&self, id: RecordId) -> RepoResult<Record>;
    /// Copies the stored record keyed by `target.id` into `target`.
    ///
    /// `target` is left untouched on error.
    fn load(&self, target: &mut Record) -> RepoResult<()> {
        // Why: fetch into a temporary first so a failed lookup cannot leave
        // `target` half-overwritten.
        let stored = self.fetch(target.id)?;
        target.id = stored.id;
        target.title = stored.title;
        Ok(())
    }
    /// Allocates the next id from the repository's generator.
    fn next_id(&mut self) -> RecordId;
    /// Returns a snapshot of stored records in store order.
    fn records(&self) -> Vec<Record>;
}

/// Vec-backed record repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordRepository {
    records: Vec<Record>,
    ids: IdGenerator,
}

impl InMemoryRecordRepository {
    /// Creates a store with no records and a fresh id generator.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates the canonical store holding one seed record with id `1`.
    pub fn seeded() -> Self {
        let mut repo = Self::empty();
        let id = repo.ids.next_id();
        repo.records.push(Record::with_id(id, SEED_TITLE));
        info!(
            "event=store_init module=repo status=ok seed_id={id} records={} next_id={}",
            repo.records.len(),
            id.get().saturating_add(1)
        );
        repo
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn position_of(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|record| record.id == id)
    }
}

impl RecordRepository for InMemoryRecordRepository {
    fn upsert(&mut self, record: Record) {
        let id = record.id;
        if id.is_unset() {
            warn!("event=record_upsert module=repo status=warn reason=unset_id");
        }

        match self.position_of(id) {
            Some(position) => {
                self.records[position] = record;
                debug!(
                    "event=record_upsert module=repo status=ok mode=replace id={id} position={position}"
                );
            }
            None => {
                self.records.push(record);
                debug!(
                    "event=record_upsert module=repo status=ok mode=append id={id} position={}",
                    self.records.len() - 1
                );
            }
        }
    }

    fn fetch(&self, id: RecordId) -> RepoResult<Record> {
        if let Err(err) = validate_lookup_id(id) {
            debug!("event=record_fetch module=repo status=error error_code=unset_id");
            return Err(err.into());
        }

        match self.position_of(id) {
            Some(position) => Ok(self.records[position].clone()),
            None => {
                debug!("event=record_fetch module=repo status=error error_code=not_found id={id}");
                Err(RepoError::NotFound(id))
            }
        }
    }

    fn next_id(&mut self) -> RecordId {
        self.ids.next_id()
    }

    fn records(&self) -> Vec<Record> {
        self.records.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemoryRecordRepository, RecordRepository, SEED_TITLE};
    use crate::model::id::RecordId;
    use crate::model::record::Record;

    #[test]
    fn empty_store_allocates_from_one() {
        let mut repo = InMemoryRecordRepository::empty();
        assert!(repo.is_empty());
        assert_eq!(repo.next_id(), RecordId::new(1));
    }

    #[test]
    fn seeded_store_consumes_first_id() {
        let mut repo = InMemoryRecordRepository::seeded();
        assert_eq!(repo.len(), 1);
        assert_eq!(repo.records()[0], Record::with_id(RecordId::new(1), SEED_TITLE));
        assert_eq!(repo.next_id(), RecordId::new(2));
    }

    #[test]
    fn upsert_with_unset_id_is_stored_but_not_fetchable() {
        let mut repo = InMemoryRecordRepository::empty();
        repo.upsert(Record::new(Some("orphan".to_string())));

        assert_eq!(repo.len(), 1);
        assert!(repo.fetch(RecordId::UNSET).is_err());
    }
}
