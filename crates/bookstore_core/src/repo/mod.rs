//! Repository layer abstractions and in-memory storage.
//!
//! # Responsibility
//! - Define the data access contract for catalog records.
//! - Keep storage details out of service and presentation code.
//!
//! # Invariants
//! - No two stored records share an id.
//! - Lookups return semantic errors (`Validation`, `NotFound`).

pub mod record_repo;
