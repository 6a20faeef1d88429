use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Item not found: {0}")]
    NotFound(Uuid),

    #[error("Invalid input: {0}")]
    Validation(String),

    /// Internal misuse of the repository (e.g. persisting an unassigned
    /// item). Handler validation precedes repository calls, so reaching the
    /// boundary means a programming error, not bad client input.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Storage error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// Convert CatalogError to AppError for standardized error responses
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => AppError::NotFound(format!("Item {} not found", id)),
            CatalogError::Validation(msg) => AppError::BadRequest(msg),
            CatalogError::InvalidArgument(msg) => AppError::InternalServerError(msg),
            CatalogError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}
