//! UUID path parameter extractor with automatic validation.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
    response::{IntoResponse, Response},
};
use uuid::Uuid;

/// Extractor for a single UUID path parameter.
///
/// Parses the path segment as a UUID and rejects malformed values with a
/// structured 400 response, so handlers only ever receive a valid id.
///
/// # Example
/// ```ignore
/// async fn get_item(UuidPath(id): UuidPath) -> String {
///     format!("Item ID: {}", id)
/// }
///
/// let app = Router::new().route("/items/{id}", get(get_item));
/// ```
pub struct UuidPath(pub Uuid);

impl<S> FromRequestParts<S> for UuidPath
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| e.into_response())?;

        match Uuid::parse_str(&raw) {
            Ok(id) => Ok(UuidPath(id)),
            Err(_) => Err(AppError::BadRequest(format!("Invalid UUID: {}", raw)).into_response()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use axum::Router;
    use tower::ServiceExt;

    async fn echo(UuidPath(id): UuidPath) -> String {
        id.to_string()
    }

    fn app() -> Router {
        Router::new().route("/{id}", get(echo))
    }

    #[tokio::test]
    async fn accepts_valid_uuid() {
        let id = Uuid::now_v7();
        let response = app()
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", id))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn rejects_malformed_uuid_with_400() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/not-a-uuid")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
