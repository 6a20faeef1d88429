//! # Axum Helpers
//!
//! Utilities and middleware shared by the HTTP services in this workspace.
//!
//! ## Modules
//!
//! - **[`errors`]**: Structured error responses with error codes
//! - **[`extractors`]**: Custom extractors (UUID path, validated JSON)
//! - **[`http`]**: HTTP middleware (CORS, security headers)
//! - **[`server`]**: Router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::{app_info, server::ServerConfig};
//!
//! let router = create_router::<ApiDoc>(api_routes).await?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &ServerConfig::default(), timeout, cleanup).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

// Re-export error types
pub use errors::{AppError, ErrorCode, ErrorResponse};

// Re-export extractors
pub use extractors::{UuidPath, ValidatedJson};

// Re-export HTTP middleware
pub use http::{cors_layer_from_env, security_headers};

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    HealthResponse, ShutdownCoordinator,
};
