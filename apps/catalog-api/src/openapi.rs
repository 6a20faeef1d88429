//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "REST API for managing catalog items, backed by MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/items", api = domain_catalog::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Catalog item management endpoints")
    )
)]
pub struct ApiDoc;
