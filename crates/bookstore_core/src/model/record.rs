//! Catalog record model.
//!
//! # Responsibility
//! - Define the canonical book record stored by the repository.
//!
//! # Invariants
//! - A record built with `Record::new` has `RecordId::UNSET` until the caller
//!   assigns an allocated id.
//! - `title` is optional; an absent title is distinct from an empty one.

use crate::model::id::RecordId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Canonical catalog record (a book).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Lookup key. `RecordId::UNSET` until assigned.
    pub id: RecordId,
    /// Display title.
    pub title: Option<String>,
}

impl Record {
    /// Creates a record without an id.
    ///
    /// Callers allocate an id explicitly (`RecordRepository::next_id`) before
    /// saving it.
    pub fn new(title: Option<String>) -> Self {
        Self {
            id: RecordId::UNSET,
            title,
        }
    }

    /// Creates a record with a caller-provided id.
    pub fn with_id(id: RecordId, title: impl Into<String>) -> Self {
        Self {
            id,
            title: Some(title.into()),
        }
    }

    /// Creates a lookup target carrying only an id, for `load`.
    pub fn key(id: RecordId) -> Self {
        Self { id, title: None }
    }
}

/// Validation failures for record lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordValidationError {
    /// Lookup attempted with `RecordId::UNSET`.
    UnsetId,
}

impl Display for RecordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsetId => write!(f, "record id must be set before it can be loaded"),
        }
    }
}

impl Error for RecordValidationError {}

/// Rejects `RecordId::UNSET` as a lookup key.
pub fn validate_lookup_id(id: RecordId) -> Result<(), RecordValidationError> {
    if id.is_unset() {
        return Err(RecordValidationError::UnsetId);
    }
    Ok(())
}
