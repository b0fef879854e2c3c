use bookstore_core::{
    render, CatalogService, IdGenerator, InMemoryRecordRepository, Record, RecordId,
    RecordRepository, RecordValidationError, RepoError, RepoResult,
};
use std::collections::HashMap;

/// Keyed storage with a separate slot order, no contiguous record slice.
#[derive(Default)]
struct KeyedRecordRepository {
    titles: HashMap<RecordId, Option<String>>,
    order: Vec<RecordId>,
    ids: IdGenerator,
}

impl RecordRepository for KeyedRecordRepository {
    fn upsert(&mut self, record: Record) {
        if self.titles.insert(record.id, record.title).is_none() {
            self.order.push(record.id);
        }
    }

    fn fetch(&self, id: RecordId) -> RepoResult<Record> {
        if id.is_unset() {
            return Err(RecordValidationError::UnsetId.into());
        }
        self.titles
            .get(&id)
            .map(|title| Record {
                id,
                title: title.clone(),
            })
            .ok_or(RepoError::NotFound(id))
    }

    fn next_id(&mut self) -> RecordId {
        self.ids.next_id()
    }

    fn records(&self) -> Vec<Record> {
        self.order
            .iter()
            .map(|id| Record {
                id: *id,
                title: self.titles[id].clone(),
            })
            .collect()
    }
}

#[test]
fn register_allocates_id_and_stores_record() {
    let mut service = CatalogService::new(InMemoryRecordRepository::seeded());

    let created = service.register("New Book");
    assert_eq!(created.id, RecordId::new(2));
    assert_eq!(service.fetch(created.id).unwrap(), created);
    assert_eq!(render(&created), "Book: New Book (2)");
}

#[test]
fn list_keeps_store_order_across_saves() {
    let mut service = CatalogService::new(InMemoryRecordRepository::seeded());
    let first = service.register("first");
    service.register("second");

    service.save(Record::with_id(first.id, "first, revised"));

    let rendered: Vec<String> = service.list().iter().map(render).collect();
    assert_eq!(
        rendered,
        vec![
            "Book: Some cool computer book (1)",
            "Book: first, revised (2)",
            "Book: second (3)",
        ]
    );
}

#[test]
fn explicit_two_step_creation() {
    let mut service = CatalogService::new(InMemoryRecordRepository::empty());

    let mut record = Record::new(Some("Draft".to_string()));
    assert!(record.id.is_unset());
    record.id = service.next_id();
    service.save(record.clone());

    let mut target = Record::key(record.id);
    service.load(&mut target).unwrap();
    assert_eq!(target, record);
}

#[test]
fn errors_pass_through_unchanged() {
    let service = CatalogService::new(InMemoryRecordRepository::seeded());

    assert!(matches!(
        service.fetch(RecordId::UNSET),
        Err(RepoError::Validation(_))
    ));
    assert!(matches!(
        service.fetch(RecordId::new(42)),
        Err(RepoError::NotFound(_))
    ));
}

#[test]
fn into_repo_returns_mutated_store() {
    let mut service = CatalogService::new(InMemoryRecordRepository::seeded());
    service.register("kept");

    let repo = service.into_repo();
    assert_eq!(repo.len(), 2);
}

#[test]
fn service_runs_over_keyed_repository() {
    let mut service = CatalogService::new(KeyedRecordRepository::default());
    let first = service.register("first");
    service.register("second");
    service.save(Record::with_id(first.id, "first, revised"));

    let rendered: Vec<String> = service.list().iter().map(render).collect();
    assert_eq!(rendered, vec!["Book: first, revised (1)", "Book: second (2)"]);

    let mut target = Record::key(first.id);
    service.load(&mut target).unwrap();
    assert_eq!(target.title.as_deref(), Some("first, revised"));
    assert!(matches!(
        service.fetch(RecordId::UNSET),
        Err(RepoError::Validation(_))
    ));
}
