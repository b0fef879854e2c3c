//! Record identifiers and their allocator.
//!
//! # Invariants
//! - `RecordId::UNSET` (`0`) is the default value and marks a missing id.
//! - `IdGenerator` pre-increments, so its first issued id is `1`.
//! - Issued ids are strictly increasing for one generator instance.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Integer identifier of a catalog record.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(u64);

impl RecordId {
    /// Zero value: the caller has not assigned an id.
    pub const UNSET: RecordId = RecordId(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }

    pub const fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl Display for RecordId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id allocator.
///
/// Not aware of ids assigned manually through `Record::with_id`; mixing both
/// sources can produce collisions, which the store resolves by replacement.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: u64,
}

impl IdGenerator {
    /// Creates a generator whose first `next_id` call returns `1`.
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Pre-increments the counter and returns the new value.
    pub fn next_id(&mut self) -> RecordId {
        match self.last.checked_add(1) {
            Some(next) => self.last = next,
            None => {
                // Why: wrapping back to 0 would hand out `UNSET`, and a panic
                // would take the whole catalog down for an unreachable case.
                warn!("event=id_alloc module=model status=saturated last={}", self.last);
            }
        }
        RecordId(self.last)
    }

    /// Returns the most recently issued id, or `RecordId::UNSET` before the
    /// first allocation.
    pub fn last_issued(&self) -> RecordId {
        RecordId(self.last)
    }
}
