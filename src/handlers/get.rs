use crate::error::{MessageResponse, ValidationErrorResponse};
use crate::existence::ExistingItem;
use crate::models::Item;
use crate::routes;
use axum::{Json, http::StatusCode};

/// GET /api/items/{id} handler - Retrieve one item
///
/// The existence check runs in the extractor, so this handler only sees items that exist.
#[utoipa::path(
    get,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id (non-negative integer)")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn get_handler(ExistingItem(item): ExistingItem) -> (StatusCode, Json<Item>) {
    tracing::info!("Retrieved item with id: {}", item.id);
    (StatusCode::OK, Json(item))
}
