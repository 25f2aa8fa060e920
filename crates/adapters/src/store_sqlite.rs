//! SQLite document store implementation
//!
//! Documents are kept as JSON text in a single `documents` table keyed by
//! collection. Filters are evaluated with SQLite's `json_extract`.

use async_trait::async_trait;
use creator_studio_domain::{DocumentStore, Record, RecordFilter, StorageError};
use serde_json::Value;
use sqlx::{Sqlite, SqlitePool, sqlite::SqlitePoolOptions};
use std::path::Path;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use uuid::Uuid;

/// SQLite-backed document store
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    database_name: String,
}

/// A positional value bound into the list query
enum Bind {
    Text(String),
    Integer(i64),
    Real(f64),
}

impl SqliteDocumentStore {
    /// Open (or create) a database file, initializing the schema if needed
    pub async fn new(
        db_path: impl AsRef<Path>,
        database_name: impl Into<String>,
    ) -> Result<Self, StorageError> {
        let db_path = db_path.as_ref();

        if let Some(parent) = db_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    StorageError::Unavailable(format!("Failed to create directory: {}", e))
                })?;
            }
        }

        let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        let store = Self {
            pool,
            database_name: database_name.into(),
        };
        store.run_migrations().await?;

        tracing::debug!(path = %db_path.display(), "Opened SQLite document store");

        Ok(store)
    }

    /// Create an in-memory SQLite store (for testing)
    pub async fn in_memory() -> Result<Self, StorageError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;

        let store = Self {
            pool,
            database_name: "memory".to_string(),
        };
        store.run_migrations().await?;

        Ok(store)
    }

    async fn run_migrations(&self) -> Result<(), StorageError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                seq INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL UNIQUE,
                collection TEXT NOT NULL,
                body TEXT NOT NULL,
                inserted_at TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_documents_collection
            ON documents(collection, seq)
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(())
    }

    /// Build the list query and the values to bind after the collection
    fn build_list_query(filter: &RecordFilter) -> (String, Vec<Bind>) {
        let mut sql = String::from("SELECT id, body FROM documents WHERE collection = ?");
        let mut binds = Vec::new();

        for (key, value) in filter {
            let path = json_path(key);
            match value {
                Value::Null => {
                    sql.push_str(" AND json_type(body, ?) = 'null'");
                    binds.push(Bind::Text(path));
                }
                Value::Bool(b) => {
                    sql.push_str(" AND json_type(body, ?) = ?");
                    binds.push(Bind::Text(path));
                    binds.push(Bind::Text(b.to_string()));
                }
                Value::Number(n) => {
                    sql.push_str(" AND json_extract(body, ?) = ?");
                    binds.push(Bind::Text(path));
                    binds.push(match n.as_i64() {
                        Some(i) => Bind::Integer(i),
                        None => Bind::Real(n.as_f64().unwrap_or(f64::NAN)),
                    });
                }
                Value::String(s) => {
                    sql.push_str(" AND json_type(body, ?) = 'text' AND json_extract(body, ?) = ?");
                    binds.push(Bind::Text(path.clone()));
                    binds.push(Bind::Text(path));
                    binds.push(Bind::Text(s.clone()));
                }
                Value::Array(_) | Value::Object(_) => {
                    sql.push_str(" AND json_extract(body, ?) = json(?)");
                    binds.push(Bind::Text(path));
                    binds.push(Bind::Text(value.to_string()));
                }
            }
        }

        sql.push_str(" ORDER BY seq ASC LIMIT ?");
        (sql, binds)
    }
}

/// JSON path for a top-level field, quoted so any key is addressable
fn json_path(key: &str) -> String {
    format!("$.\"{}\"", key.replace('"', "\\\""))
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
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
        let body =
            serde_json::to_string(document).map_err(|e| StorageError::Serialization(e.to_string()))?;
        let inserted_at = OffsetDateTime::now_utc()
            .format(&Rfc3339)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;

        sqlx::query(
            r#"
            INSERT INTO documents (id, collection, body, inserted_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(collection)
        .bind(&body)
        .bind(&inserted_at)
        .execute(&self.pool)
        .await
        .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(id)
    }

    async fn list_records(
        &self,
        collection: &str,
        filter: &RecordFilter,
        limit: usize,
    ) -> Result<Vec<Record>, StorageError> {
        let (sql, binds) = Self::build_list_query(filter);

        let mut query = sqlx::query_as::<Sqlite, (String, String)>(&sql).bind(collection);
        for bind in binds {
            query = match bind {
                Bind::Text(s) => query.bind(s),
                Bind::Integer(i) => query.bind(i),
                Bind::Real(f) => query.bind(f),
            };
        }
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        query = query.bind(limit);

        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StorageError::Database(e.to_string()))?;

        rows.into_iter()
            .map(|(id, body)| {
                let document = serde_json::from_str(&body)
                    .map_err(|e| StorageError::Serialization(format!("record {}: {}", id, e)))?;
                Ok(Record { id, document })
            })
            .collect()
    }

    async fn collection_names(&self) -> Result<Vec<String>, StorageError> {
        let rows: Vec<(String,)> =
            sqlx::query_as("SELECT DISTINCT collection FROM documents ORDER BY collection")
                .fetch_all(&self.pool)
                .await
                .map_err(|e| StorageError::Database(e.to_string()))?;

        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn database_name(&self) -> &str {
        &self.database_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn status_filter(status: &str) -> RecordFilter {
        let mut filter = RecordFilter::new();
        filter.insert("status".to_string(), json!(status));
        filter
    }

    #[tokio::test]
    async fn test_create_and_list_roundtrip() {
        let store = SqliteDocumentStore::in_memory().await.unwrap();

        let id = store
            .create_record("creatorpost", &json!({"title": "Hello", "tags": ["#a"]}))
            .await
            .unwrap();

        let records = store
            .list_records("creatorpost", &RecordFilter::new(), 10)
            .await
            .unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, id);
        assert_eq!(records[0].document["title"], "Hello");
        assert_eq!(records[0].document["tags"][0], "#a");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order_and_limit() {
        let store = SqliteDocumentStore::in_memory().await.unwrap();
        for n in 0..5 {
            store
                .create_record("creatorpost", &json!({"n": n}))
                .await
                .unwrap();
        }

        let records = store
            .list_records("creatorpost", &RecordFilter::new(), 3)
            .await
            .unwrap();
        let ns: Vec<_> = records.iter().map(|r| r.document["n"].as_i64().unwrap()).collect();
        assert_eq!(ns, vec![0, 1, 2]);
    }

    #[tokio::test]
    async fn test_filter_by_string_field() {
        let store = SqliteDocumentStore::in_memory().await.unwrap();
        for status in ["draft", "published", "draft"] {
            store
                .create_record("creatorpost", &json!({"status": status}))
                .await
                .unwrap();
        }

        let drafts = store
            .list_records("creatorpost", &status_filter("draft"), 10)
            .await
            .unwrap();
        assert_eq!(drafts.len(), 2);

        let scheduled = store
            .list_records("creatorpost", &status_filter("scheduled"), 10)
            .await
            .unwrap();
        assert!(scheduled.is_empty());
    }

    #[tokio::test]
    async fn test_filter_by_bool_and_number() {
        let store = SqliteDocumentStore::in_memory().await.unwrap();
        store
            .create_record("c", &json!({"active": true, "n": 1}))
            .await
            .unwrap();
        store
            .create_record("c", &json!({"active": false, "n": 2}))
            .await
            .unwrap();

        let mut filter = RecordFilter::new();
        filter.insert("active".to_string(), json!(true));
        let records = store.list_records("c", &filter, 10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].document["n"], 1);

        let mut filter = RecordFilter::new();
        filter.insert("n".to_string(), json!(2));
        let records = store.list_records("c", &filter, 10).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].document["active"], false);
    }

    #[tokio::test]
    async fn test_collections_are_isolated() {
        let store = SqliteDocumentStore::in_memory().await.unwrap();
        store.create_record("a", &json!({"x": 1})).await.unwrap();
        store.create_record("b", &json!({"x": 2})).await.unwrap();

        let records = store
            .list_records("a", &RecordFilter::new(), 10)
            .await
            .unwrap();
        assert_eq!(records.len(), 1);

        assert_eq!(store.collection_names().await.unwrap(), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_persists_to_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("studio.sqlite");

        let id = {
            let store = SqliteDocumentStore::new(&path, "studio").await.unwrap();
            store
                .create_record("creatorpost", &json!({"title": "Kept"}))
                .await
                .unwrap()
        };

        let store = SqliteDocumentStore::new(&path, "studio").await.unwrap();
        let records = store
            .list_records("creatorpost", &RecordFilter::new(), 10)
            .await
            .unwrap();
        assert_eq!(records[0].id, id);
        assert_eq!(store.database_name(), "studio");
    }
}
