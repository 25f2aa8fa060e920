//! Application use cases / business logic

pub mod caption;
pub mod hashtags;
pub mod posts;

pub use caption::compose_caption;
pub use hashtags::{FALLBACK_HASHTAGS, suggest_hashtags};
pub use posts::{CatalogConfig, CatalogError, PostCatalog};
