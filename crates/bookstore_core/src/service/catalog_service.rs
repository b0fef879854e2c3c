//! Catalog use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for registering, saving and loading books.
//! - Make id allocation an explicit step before persistence.
//!
//! # Invariants
//! - Service APIs never bypass repository upsert/lookup contracts.
//! - Service layer remains storage-agnostic.

use crate::model::id::RecordId;
use crate::model::record::Record;
use crate::repo::record_repo::{RecordRepository, RepoResult};
use log::info;

/// Use-case service wrapper for catalog records.
pub struct CatalogService<R: RecordRepository> {
    repo: R,
}

impl<R: RecordRepository> CatalogService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn repo(&self) -> &R {
        &self.repo
    }

    pub fn into_repo(self) -> R {
        self.repo
    }

    /// Allocates a fresh id, stores a record with `title`, and returns it.
    ///
    /// # Contract
    /// - The id comes from `RecordRepository::next_id`.
    /// - The returned record equals the stored one.
    pub fn register(&mut self, title: impl Into<String>) -> Record {
        let id = self.repo.next_id();
        let record = Record::with_id(id, title);
        self.repo.upsert(record.clone());
        info!("event=record_register module=service status=ok id={id}");
        record
    }

    /// Saves a caller-built record with insert-or-replace semantics.
    pub fn save(&mut self, record: Record) {
        let id = record.id;
        self.repo.upsert(record);
        info!("event=record_save module=service status=ok id={id}");
    }

    /// Allocates an id without storing anything.
    pub fn next_id(&mut self) -> RecordId {
        self.repo.next_id()
    }

    /// Gets one record by id. Repository errors are returned unchanged.
    pub fn fetch(&self, id: RecordId) -> RepoResult<Record> {
        self.repo.fetch(id)
    }

    /// Fills `target` from the record stored under `target.id`.
    pub fn load(&self, target: &mut Record) -> RepoResult<()> {
        self.repo.load(target)
    }

    /// Returns an ordered snapshot of the catalog.
    pub fn list(&self) -> Vec<Record> {
        self.repo.records()
    }
}
