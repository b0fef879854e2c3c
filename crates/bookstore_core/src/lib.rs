//! Core domain logic for the bookstore catalog.
//! Data, data access and presentation live in separate modules.

pub mod logging;
pub mod model;
pub mod presenter;
pub mod repo;
pub mod service;

pub use logging::{
    default_level, init_logging, logging_status, parse_level, LogSettings, LoggingError,
};
pub use model::id::{IdGenerator, RecordId};
pub use model::record::{Record, RecordValidationError};
pub use presenter::{display, render, write_record};
pub use repo::record_repo::{
    InMemoryRecordRepository, RecordRepository, RepoError, RepoResult, SEED_TITLE,
};
pub use service::catalog_service::CatalogService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
