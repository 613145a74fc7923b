use utoipa::OpenApi;

use crate::error::{HealthResponse, MessageResponse, ValidationErrorResponse};
use crate::handlers;
use crate::models::{Item, NameRequest};
use crate::validation::{FieldError, Location};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "items-api",
        version = "0.1.0",
        description = "A minimal CRUD service for named items, backed by memory or SQLite"
    ),
    paths(
        handlers::health::health_handler,
        handlers::list::list_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            NameRequest,
            FieldError,
            Location,
            MessageResponse,
            ValidationErrorResponse,
            HealthResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item CRUD operations")
    )
)]
pub struct ApiDoc;
