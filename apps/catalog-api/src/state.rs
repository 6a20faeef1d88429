//! Shared application state passed to request handlers.

use mongodb::{Client, Database};

/// Cloned per handler (cheap handle clones over a shared connection pool).
///
/// The MongoDB client is the process-wide singleton created once at startup;
/// it is never reconstructed per request.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares the underlying pool)
    pub mongo_client: Client,
    /// Handle to the service's database
    pub db: Database,
}
