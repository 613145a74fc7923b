use crate::error::{ApiError, MessageResponse, ValidationErrorResponse};
use crate::existence::stored_id;
use crate::extract::ValidItemId;
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{Json, extract::State, http::StatusCode};

/// DELETE /api/items/{id} handler - Remove an item
///
/// Responds with the item as it was before removal.
#[utoipa::path(
    delete,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id (non-negative integer)")
    ),
    responses(
        (status = 200, description = "Item deleted", body = Item),
        (status = 400, description = "Invalid id", body = ValidationErrorResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    ValidItemId(id): ValidItemId,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let key = stored_id(&id)?;
    let item = store::blocking(&state.store, move |store| store.delete(key))
        .await?
        .ok_or(ApiError::ItemNotFound(id))?;

    tracing::info!("Deleted item with id: {}", key);
    Ok((StatusCode::OK, Json(item)))
}
