//! Port definitions (traits) for external dependencies
//!
//! These traits define the boundaries between the domain and external systems.
//! Adapters implement these traits to connect to real infrastructure.

use async_trait::async_trait;
use serde_json::{Map, Value};
use thiserror::Error;
use time::OffsetDateTime;

/// Error type for document store operations
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

/// Field equalities a listed document must satisfy
///
/// Keys are top-level document fields. An empty filter matches everything.
pub type RecordFilter = Map<String, Value>;

/// A stored document together with its store-assigned identifier
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: String,
    pub document: Value,
}

/// Port for a schemaless document database
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a document into a collection, returning its identifier
    async fn create_record(
        &self,
        collection: &str,
        document: &Value,
    ) -> Result<String, StorageError>;

    /// List documents matching the filter, in insertion order, up to `limit`
    async fn list_records(
        &self,
        collection: &str,
        filter: &RecordFilter,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError>;

    /// Names of the collections that currently hold documents
    async fn collection_names(&self) -> Result<Vec<String>, StorageError>;

    /// Short name of the backing technology (e.g. "sqlite")
    fn backend(&self) -> &'static str;

    /// Logical database name, for status reporting
    fn database_name(&self) -> &str;
}

/// Returns true when every filter entry equals the document's field
pub fn matches_filter(document: &Value, filter: &RecordFilter) -> bool {
    filter
        .iter()
        .all(|(key, expected)| document.get(key) == Some(expected))
}

/// Port for time/clock operations (enables deterministic testing)
pub trait Clock: Send + Sync {
    /// Get the current time
    fn now(&self) -> OffsetDateTime;
}

/// Real clock implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
