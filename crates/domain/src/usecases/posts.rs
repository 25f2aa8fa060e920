//! Creator post persistence use case

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;

use crate::model::{CreatorPost, POSTS_COLLECTION, PostStatus, StoredPost, ValidationError};
use crate::ports::{Clock, DocumentStore, Record, RecordFilter, StorageError};

/// Error type for the post catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Invalid post: {0}")]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Limits applied when listing posts
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Limit used when the caller does not give one
    pub default_limit: usize,
    /// Upper bound on any requested limit
    pub max_limit: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            default_limit: 50,
            max_limit: 500,
        }
    }
}

/// Stores and lists creator posts through a [`DocumentStore`]
#[derive(Clone)]
pub struct PostCatalog {
    store: Arc<dyn DocumentStore>,
    clock: Arc<dyn Clock>,
    config: CatalogConfig,
}

impl PostCatalog {
    pub fn new(store: Arc<dyn DocumentStore>, clock: Arc<dyn Clock>, config: CatalogConfig) -> Self {
        Self {
            store,
            clock,
            config,
        }
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Validate and persist a post, returning the new record's id
    pub async fn save(&self, post: &CreatorPost) -> Result<String, CatalogError> {
        post.validate()?;

        let now = self
            .clock
            .now()
            .format(&Rfc3339)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        let mut document =
            serde_json::to_value(post).map_err(|e| StorageError::Serialization(e.to_string()))?;
        if let Value::Object(fields) = &mut document {
            fields.insert("created_at".to_string(), Value::String(now.clone()));
            fields.insert("updated_at".to_string(), Value::String(now));
        }

        let id = self.store.create_record(POSTS_COLLECTION, &document).await?;

        tracing::info!(
            post_id = %id,
            status = %post.status,
            backend = self.store.backend(),
            "Saved creator post"
        );

        Ok(id)
    }

    /// List stored posts in insertion order, optionally by status
    pub async fn list(
        &self,
        status: Option<PostStatus>,
        limit: Option<usize>,
    ) -> Result<Vec<StoredPost>, CatalogError> {
        let limit = self.effective_limit(limit);

        let mut filter = RecordFilter::new();
        if let Some(status) = status {
            filter.insert(
                "status".to_string(),
                Value::String(status.as_str().to_string()),
            );
        }

        let records = self
            .store
            .list_records(POSTS_COLLECTION, &filter, limit)
            .await?;

        tracing::debug!(
            count = records.len(),
            limit,
            status = ?status,
            "Listed creator posts"
        );

        records
            .into_iter()
            .map(|record| decode_post(record).map_err(CatalogError::from))
            .collect()
    }

    fn effective_limit(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.config.default_limit)
            .min(self.config.max_limit)
    }
}

fn decode_post(record: Record) -> Result<StoredPost, StorageError> {
    let mut document = record.document;
    if let Value::Object(fields) = &mut document {
        fields.insert("id".to_string(), Value::String(record.id.clone()));
    }

    serde_json::from_value(document).map_err(|e| {
        StorageError::Serialization(format!("record {}: {}", record.id, e))
    })
}
