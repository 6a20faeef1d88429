//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and common middleware
//! - Liveness endpoint
//! - Graceful shutdown coordination

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_app, create_production_app, create_router};
pub use health::{health_router, HealthResponse};
pub use shutdown::{shutdown_signal, ShutdownCoordinator};
