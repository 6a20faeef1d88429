//! Custom extractors for Axum handlers.
//!
//! These standardize input handling across the APIs: path UUIDs are parsed
//! with a structured 400 on failure, and JSON bodies are validated with the
//! `validator` crate before a handler ever sees them.

pub mod uuid_path;
pub mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
