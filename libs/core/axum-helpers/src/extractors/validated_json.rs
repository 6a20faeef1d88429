//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{ErrorCode, ErrorResponse};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with automatic validation.
///
/// Deserializes the request body, then runs the payload's `Validate`
/// implementation. Failures short-circuit with a 400 carrying per-field
/// error details, so handlers only receive payloads that already satisfy
/// their declared constraints.
///
/// # Example
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateItemDto {
///     #[validate(length(min = 1))]
///     name: String,
///     #[validate(range(min = 0.0, max = 1000.0))]
///     price: f64,
/// }
///
/// async fn create_item(ValidatedJson(payload): ValidatedJson<CreateItemDto>) { /* ... */ }
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| e.into_response())?;

        data.validate().map_err(|e| {
            // Flatten validator's per-field errors into structured JSON
            let details = e
                .field_errors()
                .iter()
                .map(|(field, errors)| {
                    let messages: Vec<serde_json::Value> = errors
                        .iter()
                        .map(|err| {
                            serde_json::json!({
                                "code": err.code,
                                "message": err.message,
                                "params": err.params,
                            })
                        })
                        .collect();
                    (field.to_string(), serde_json::json!(messages))
                })
                .collect::<serde_json::Map<_, _>>();

            let mut body = ErrorResponse::from_code(ErrorCode::ValidationError);
            body.details = Some(serde_json::Value::Object(details));

            (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}
