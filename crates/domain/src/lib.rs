//! creator-studio domain crate
//!
//! This crate contains the core domain logic following hexagonal architecture:
//! - `model`: Request, response and post entities
//! - `ports`: Trait definitions for external dependencies (adapters)
//! - `usecases`: Caption templating, hashtag suggestion and post persistence

pub mod model;
pub mod ports;
pub mod usecases;

pub use model::*;
pub use ports::*;
