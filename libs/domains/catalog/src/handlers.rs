use axum::{
    extract::{OriginalUri, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateItemDto, Item, ItemDto, UpdateItemDto};
use crate::repository::ItemRepository;

/// OpenAPI documentation for the Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(
        schemas(ItemDto, CreateItemDto, UpdateItemDto),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Items", description = "Catalog item management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints.
///
/// The repository is shared behind an `Arc` as router state; the handlers
/// only ever see the [`ItemRepository`] trait.
pub fn router<R: ItemRepository + 'static>(repository: R) -> Router {
    let shared = Arc::new(repository);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .with_state(shared)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All stored items, possibly empty", body = Vec<ItemDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(repository): State<Arc<R>>,
) -> CatalogResult<Json<Vec<ItemDto>>> {
    let items = repository.list_all().await?;
    Ok(Json(items.iter().map(ItemDto::from).collect()))
}

/// Create a new item
///
/// The id and creation timestamp are generated server-side; the `Location`
/// header points at the new item's GET endpoint.
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItemDto,
    responses(
        (status = 201, description = "Item created; Location header references it", body = ItemDto),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    OriginalUri(uri): OriginalUri,
    ValidatedJson(input): ValidatedJson<CreateItemDto>,
) -> CatalogResult<impl IntoResponse> {
    let item = Item::new(input);
    repository.create(&item).await?;

    let location = format!("{}/{}", uri.path().trim_end_matches('/'), item.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ItemDto::from(&item)),
    ))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemDto),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<ItemDto>> {
    let item = repository
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound(id))?;

    Ok(Json(ItemDto::from(&item)))
}

/// Update an item
///
/// Overwrites name, description, and price; id and creation timestamp are
/// immutable. Existence is checked first so an unknown id yields 404 rather
/// than relying on the repository's silent no-op.
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItemDto,
    responses(
        (status = 204, description = "Item updated"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateItemDto>,
) -> CatalogResult<StatusCode> {
    let mut item = repository
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound(id))?;

    item.apply_update(input);
    repository.update(&item).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 204, description = "Item deleted"),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(repository): State<Arc<R>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<StatusCode> {
    repository
        .get(id)
        .await?
        .ok_or(CatalogError::NotFound(id))?;

    repository.remove(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockItemRepository;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn list_surfaces_storage_failure_as_500() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_list_all()
            .returning(|| Err(CatalogError::Database("connection reset".to_string())));

        let app = router(repository);
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn get_maps_absent_item_to_404() {
        let mut repository = MockItemRepository::new();
        repository.expect_get().returning(|_| Ok(None));

        let app = router(repository);
        let response = app
            .oneshot(
                Request::builder()
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn delete_checks_existence_before_removing() {
        // An unknown id must 404 without the remove ever being attempted.
        let mut repository = MockItemRepository::new();
        repository.expect_get().returning(|_| Ok(None));
        repository.expect_remove().never();

        let app = router(repository);
        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn create_persists_before_responding() {
        let mut repository = MockItemRepository::new();
        repository
            .expect_create()
            .withf(|item: &Item| item.name == "Potion" && !item.id.is_nil())
            .times(1)
            .returning(|_| Ok(()));

        let app = router(repository);
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"Potion","price":5.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
        assert!(response.headers().contains_key(header::LOCATION));
    }

    #[tokio::test]
    async fn update_rejects_invalid_body_before_touching_storage() {
        let mut repository = MockItemRepository::new();
        repository.expect_get().never();
        repository.expect_update().never();

        let app = router(repository);
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri(format!("/{}", Uuid::now_v7()))
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(r#"{"name":"","price":-1.0}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
