//! Items API routes
//!
//! Wires the catalog domain to HTTP routes.

use axum::Router;
use domain_catalog::{handlers, MongoItemRepository};

use crate::state::AppState;

/// Create the items router over the shared database handle
pub fn router(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(state.db.clone());

    handlers::router(repository)
}
