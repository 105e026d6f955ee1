use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordStoreError {
    #[error("record {0} not found")]
    NotFound(String),

    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("corrupt record: {0}")]
    Corrupt(String),
}

/// A flat row kept by a [`RecordStore`].
pub trait Record: Clone + Send + Sync + 'static {
    fn id(&self) -> &str;
    fn assign_id(&mut self, id: String);
    fn created_at(&self) -> i64;
}

#[async_trait]
pub trait RecordStore<TRow: Record>: Send + Sync {
    /// Persists a new row and returns it with its generated identifier.
    async fn insert(&self, row: TRow) -> Result<TRow, RecordStoreError>;
    async fn update(&self, row: TRow) -> Result<TRow, RecordStoreError>;
    async fn delete(&self, id: &str) -> Result<(), RecordStoreError>;
    /// All rows, newest `created_at` first.
    async fn list_all(&self) -> Result<Vec<TRow>, RecordStoreError>;
}

pub mod in_memory;
