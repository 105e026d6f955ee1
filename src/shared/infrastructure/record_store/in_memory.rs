// In memory implementation of the RecordStore port.
//
// Purpose
// - Support store tests and local development without a hosted database.
//
// Responsibilities
// - Keep rows in insertion order and generate identifiers on insert.
// - Simulate an unreachable backend through an offline toggle.

use crate::shared::infrastructure::record_store::{Record, RecordStore, RecordStoreError};
use tokio::sync::RwLock;
use uuid::Uuid;

pub struct InMemoryRecordStore<TRow: Record> {
    rows: RwLock<Vec<TRow>>,
    is_offline: bool,
}

impl<TRow: Record> Default for InMemoryRecordStore<TRow> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            is_offline: false,
        }
    }
}

impl<TRow: Record> InMemoryRecordStore<TRow> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds rows as they would already exist in the backing table.
    pub fn with_rows(rows: Vec<TRow>) -> Self {
        Self {
            rows: RwLock::new(rows),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), RecordStoreError> {
        if self.is_offline {
            return Err(RecordStoreError::Unavailable("Record store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<TRow: Record> RecordStore<TRow> for InMemoryRecordStore<TRow> {
    async fn insert(&self, mut row: TRow) -> Result<TRow, RecordStoreError> {
        self.ensure_online()?;
        row.assign_id(Uuid::now_v7().to_string());
        self.rows.write().await.push(row.clone());
        Ok(row)
    }

    async fn update(&self, row: TRow) -> Result<TRow, RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let existing = guard
            .iter_mut()
            .find(|r| r.id() == row.id())
            .ok_or_else(|| RecordStoreError::NotFound(row.id().to_string()))?;
        *existing = row.clone();
        Ok(row)
    }

    async fn delete(&self, id: &str) -> Result<(), RecordStoreError> {
        self.ensure_online()?;
        let mut guard = self.rows.write().await;
        let before = guard.len();
        guard.retain(|r| r.id() != id);
        if guard.len() == before {
            return Err(RecordStoreError::NotFound(id.to_string()));
        }
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<TRow>, RecordStoreError> {
        self.ensure_online()?;
        let mut rows = self.rows.read().await.clone();
        rows.sort_by_key(|r| std::cmp::Reverse(r.created_at()));
        Ok(rows)
    }
}

#[cfg(test)]
mod in_memory_record_store_tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Note {
        id: String,
        body: &'static str,
        created_at: i64,
    }

    impl Record for Note {
        fn id(&self) -> &str {
            &self.id
        }

        fn assign_id(&mut self, id: String) {
            self.id = id;
        }

        fn created_at(&self) -> i64 {
            self.created_at
        }
    }

    fn note(body: &'static str, created_at: i64) -> Note {
        Note {
            id: String::new(),
            body,
            created_at,
        }
    }

    #[fixture]
    fn store() -> InMemoryRecordStore<Note> {
        InMemoryRecordStore::new()
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_assign_distinct_ids_on_insert(store: InMemoryRecordStore<Note>) {
        let first = store.insert(note("a", 1)).await.unwrap();
        let second = store.insert(note("b", 2)).await.unwrap();
        assert!(!first.id.is_empty());
        assert_ne!(first.id, second.id);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_list_rows_newest_first(store: InMemoryRecordStore<Note>) {
        store.insert(note("old", 1)).await.unwrap();
        store.insert(note("new", 3)).await.unwrap();
        store.insert(note("mid", 2)).await.unwrap();
        let bodies: Vec<_> = store
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|n| n.body)
            .collect();
        assert_eq!(bodies, vec!["new", "mid", "old"]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_update_a_row_in_place(store: InMemoryRecordStore<Note>) {
        let mut row = store.insert(note("draft", 1)).await.unwrap();
        row.body = "final";
        store.update(row.clone()).await.unwrap();
        assert_eq!(store.list_all().await.unwrap(), vec![row]);
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_to_update_an_unknown_row(store: InMemoryRecordStore<Note>) {
        let mut row = note("ghost", 1);
        row.id = "missing".into();
        let result = store.update(row).await;
        assert_eq!(result, Err(RecordStoreError::NotFound("missing".into())));
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_delete_and_then_report_not_found(store: InMemoryRecordStore<Note>) {
        let row = store.insert(note("gone", 1)).await.unwrap();
        store.delete(&row.id).await.unwrap();
        assert!(store.list_all().await.unwrap().is_empty());
        assert_eq!(
            store.delete(&row.id).await,
            Err(RecordStoreError::NotFound(row.id.clone()))
        );
    }

    #[rstest]
    #[tokio::test]
    async fn it_should_fail_every_operation_when_offline(mut store: InMemoryRecordStore<Note>) {
        store.toggle_offline();
        let offline = RecordStoreError::Unavailable("Record store offline".into());
        assert_eq!(store.insert(note("x", 1)).await, Err(offline.clone()));
        assert_eq!(store.delete("x").await, Err(offline.clone()));
        assert_eq!(store.list_all().await, Err(offline));
    }
}
