//! Subcommand implementations

pub mod caption;
pub mod config;
pub mod doctor;
pub mod hashtags;
pub mod posts;
pub mod serve;

use anyhow::{Context, Result};
use creator_studio_adapters::store::{InMemoryDocumentStore, SqliteDocumentStore};
use creator_studio_domain::usecases::PostCatalog;
use creator_studio_domain::{DocumentStore, SystemClock};
use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use crate::config::{AppConfig, StorageBackend};

/// Open the configured document store
pub(crate) async fn open_store(config: &AppConfig) -> Result<Arc<dyn DocumentStore>> {
    let storage = &config.storage;

    match storage.backend {
        StorageBackend::Sqlite => {
            let store = SqliteDocumentStore::new(&storage.database_path, &storage.database_name)
                .await
                .with_context(|| {
                    format!(
                        "Failed to open SQLite store at {}",
                        storage.database_path.display()
                    )
                })?;
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; posts are lost on exit");
            Ok(Arc::new(InMemoryDocumentStore::named(
                storage.database_name.clone(),
            )))
        }
    }
}

/// Build the post catalog over the configured store
pub(crate) async fn build_catalog(config: &AppConfig) -> Result<PostCatalog> {
    let store = open_store(config).await?;
    Ok(PostCatalog::new(
        store,
        Arc::new(SystemClock),
        config.posts.catalog_config(),
    ))
}

/// Read a whole file, or stdin when the path is `-`
pub(crate) fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}
