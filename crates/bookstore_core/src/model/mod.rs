//! Plain data model for catalog records.
//!
//! # Responsibility
//! - Define the record shape shared by repository, service and presenter.
//! - Own identifier semantics (`RecordId`, `IdGenerator`).
//!
//! # Invariants
//! - Model types carry data only; persistence and display live elsewhere.
//! - `RecordId::UNSET` means "no id assigned yet" and is never a valid key.

pub mod id;
pub mod record;
