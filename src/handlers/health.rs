use crate::error::HealthResponse;
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{Json, extract::State, http::StatusCode};

/// GET /health handler - Health check endpoint
///
/// Pings the item store. Returns 200 OK if it answers, 503 Service Unavailable otherwise.
#[utoipa::path(
    get,
    path = routes::HEALTH,
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
        (status = 503, description = "Item store is unreachable", body = HealthResponse)
    ),
    tag = "health"
)]
pub async fn health_handler(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let timestamp = chrono::Utc::now().to_rfc3339();

    match store::blocking(&state.store, |store| store.ping()).await {
        Ok(()) => {
            tracing::debug!("Health check passed");
            (
                StatusCode::OK,
                Json(HealthResponse {
                    status: "ok".to_string(),
                    timestamp,
                }),
            )
        }
        Err(e) => {
            tracing::error!(
                "Health check failed for {:?} store: {:#}",
                state.config.store_backend,
                e
            );
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "unavailable".to_string(),
                    timestamp,
                }),
            )
        }
    }
}
