//! Catalog Domain
//!
//! Domain implementation for the catalog's Item resource, backed by MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, input validation, status mapping
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entity, DTOs, mapping
//! └─────────────┘
//! ```
//!
//! Handlers depend on the [`ItemRepository`] trait, never on the MongoDB
//! type, so tests substitute an in-memory fake without touching the HTTP
//! layer.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{handlers, MongoItemRepository};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let repository = MongoItemRepository::new(db);
//! let router = handlers::router(repository);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use handlers::ApiDoc;
pub use models::{CreateItemDto, Item, ItemDto, UpdateItemDto};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
