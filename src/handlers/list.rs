use crate::error::{ApiError, MessageResponse};
use crate::models::Item;
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{Json, extract::State, http::StatusCode};

/// GET /api/items handler - List all items
#[utoipa::path(
    get,
    path = routes::ITEMS,
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn list_handler(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<Vec<Item>>), ApiError> {
    let items = store::blocking(&state.store, |store| store.list()).await?;

    tracing::info!("Listed {} items", items.len());
    Ok((StatusCode::OK, Json(items)))
}
