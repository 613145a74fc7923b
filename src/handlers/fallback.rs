use crate::error::{MessageResponse, ROUTE_NOT_FOUND_MESSAGE};
use axum::{Json, http::StatusCode, http::Uri};

/// Fallback for paths no route matches
pub async fn fallback_handler(uri: Uri) -> (StatusCode, Json<MessageResponse>) {
    tracing::info!("No route for path: {}", uri.path());
    (
        StatusCode::NOT_FOUND,
        Json(MessageResponse::new(ROUTE_NOT_FOUND_MESSAGE)),
    )
}
