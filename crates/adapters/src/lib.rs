//! creator-studio adapters crate
//!
//! This crate contains infrastructure adapters implementing the domain ports:
//! - `store`: SQLite and in-memory document stores
//! - `http`: axum router exposing the caption, hashtag and post endpoints

mod store_memory;
mod store_sqlite;

pub mod http;

/// Re-exports for document store adapters
pub mod store {
    pub use crate::store_memory::InMemoryDocumentStore;
    pub use crate::store_sqlite::SqliteDocumentStore;
}
