//! MongoDB connectivity for the catalog services.
//!
//! Provides connection management (with startup retry), health checks, and
//! environment-driven configuration. The application constructs one
//! [`mongodb::Client`] at startup and shares it for the process lifetime;
//! this crate never caches or re-creates clients on its own.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::mongodb::{connect_from_config_with_retry, MongoConfig};
//!
//! let config = MongoConfig::from_env()?;
//! let client = connect_from_config_with_retry(&config, None).await?;
//! let db = client.database(config.database());
//! ```

pub mod common;
pub mod mongodb;

pub use common::{retry, retry_with_backoff, RetryConfig};
