//! In-memory document store for testing and ephemeral mode

use async_trait::async_trait;
use creator_studio_domain::{DocumentStore, Record, RecordFilter, StorageError, matches_filter};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::RwLock;
use uuid::Uuid;

/// In-memory document store implementation
pub struct InMemoryDocumentStore {
    database_name: String,
    collections: RwLock<BTreeMap<String, Vec<Record>>>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::named("memory")
    }

    pub fn named(database_name: impl Into<String>) -> Self {
        Self {
            database_name: database_name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }
}

impl Default for InMemoryDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn create_record(
        &self,
        collection: &str,
        document: &Value,
    ) -> Result<String, StorageError> {
        if !document.is_object() {
            return Err(StorageError::Serialization(
                "documents must be JSON objects".to_string(),
            ));
        }

        let id = Uuid::new_v4().to_string();
        let mut collections = self
            .collections
            .write()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        collections
            .entry(collection.to_string())
            .or_default()
            .push(Record {
                id: id.clone(),
                document: document.clone(),
            });
        Ok(id)
    }

    async fn list_records(
        &self,
        collection: &str,
        filter: &RecordFilter,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .iter()
                    .filter(|r| matches_filter(&r.document, filter))
                    .take(limit)
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        let collections = self
            .collections
            .read()
            .map_err(|e| StorageError::Database(e.to_string()))?;
        Ok(collections.keys().cloned().collect())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }
}
