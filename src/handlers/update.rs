use crate::error::{ApiError, MessageResponse, ValidationErrorResponse};
use crate::existence::stored_id;
use crate::extract::ValidUpdate;
use crate::models::{Item, NameRequest};
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{Json, extract::State, http::StatusCode};

/// PUT /api/items/{id} handler - Rename an item
///
/// The existence check is the store's own `update`: a `None` there means the
/// item is gone, with no window between check and write.
#[utoipa::path(
    put,
    path = routes::ITEM,
    params(
        ("id" = i64, Path, description = "Item id (non-negative integer)")
    ),
    request_body = NameRequest,
    responses(
        (status = 200, description = "Item updated", body = Item),
        (status = 400, description = "Invalid id or name", body = ValidationErrorResponse),
        (status = 404, description = "Item not found", body = MessageResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn update_handler(
    State(state): State<AppState>,
    ValidUpdate { id, name }: ValidUpdate,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let key = stored_id(&id)?;
    let item = store::blocking(&state.store, move |store| store.update(key, &name))
        .await?
        .ok_or(ApiError::ItemNotFound(id))?;

    tracing::info!("Updated item with id: {}", key);
    Ok((StatusCode::OK, Json(item)))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{create_item, failing_app, memory_app, send, sqlite_app};
    use axum::http::StatusCode;
    use serde_json::json;

    #[tokio::test]
    async fn test_update_endpoint_success() {
        for app in [memory_app(), sqlite_app()] {
            let id = create_item(&app, "Old").await;
            let uri = format!("/api/items/{}", id);

            let (status, json) = send(&app, "PUT", &uri, Some(json!({"name": "New"}))).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(json, json!({"id": id, "name": "New"}));

            let (_, json) = send(&app, "GET", &uri, None).await;
            assert_eq!(json["name"], "New");
        }
    }

    #[tokio::test]
    async fn test_update_endpoint_is_idempotent() {
        let app = memory_app();
        let id = create_item(&app, "Old").await;
        let uri = format!("/api/items/{}", id);

        let (_, first) = send(&app, "PUT", &uri, Some(json!({"name": " New "}))).await;
        let (_, second) = send(&app, "PUT", &uri, Some(json!({"name": " New "}))).await;

        assert_eq!(first, json!({"id": id, "name": "New"}));
        assert_eq!(first, second);

        let (_, list) = send(&app, "GET", "/api/items", None).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_update_endpoint_not_found() {
        let app = memory_app();
        let (status, json) = send(&app, "PUT", "/api/items/999", Some(json!({"name": "X"}))).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Item not found");
    }

    #[tokio::test]
    async fn test_update_endpoint_missing_name() {
        let app = memory_app();
        let id = create_item(&app, "Old").await;

        let (status, json) = send(&app, "PUT", &format!("/api/items/{}", id), Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["field"], "name");

        let (_, json) = send(&app, "GET", &format!("/api/items/{}", id), None).await;
        assert_eq!(json["name"], "Old");
    }

    #[tokio::test]
    async fn test_update_endpoint_invalid_id() {
        let app = memory_app();
        let (status, json) = send(&app, "PUT", "/api/items/abc", Some(json!({"name": "X"}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"][0]["field"], "id");
    }

    #[tokio::test]
    async fn test_update_endpoint_reports_all_errors() {
        let app = memory_app();
        let (status, json) = send(&app, "PUT", "/api/items/-4", Some(json!({"name": 5}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["field"], "id");
        assert_eq!(json["errors"][1]["field"], "name");
    }

    #[tokio::test]
    async fn test_update_endpoint_validates_before_existence() {
        let app = memory_app();
        let (status, _) = send(&app, "PUT", "/api/items/999", Some(json!({"name": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_endpoint_storage_failure() {
        let app = failing_app();
        let (status, json) = send(&app, "PUT", "/api/items/1", Some(json!({"name": "X"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"message": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_update_endpoint_id_beyond_i64_is_not_found() {
        let app = memory_app();
        create_item(&app, "A").await;

        let (status, json) = send(
            &app,
            "PUT",
            "/api/items/99999999999999999999",
            Some(json!({"name": "X"})),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Item not found");
    }

    #[tokio::test]
    async fn test_update_endpoint_id_beyond_i64_still_validates_name() {
        let app = memory_app();
        let (status, json) =
            send(&app, "PUT", "/api/items/99999999999999999999", Some(json!({}))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"].as_array().unwrap().len(), 1);
        assert_eq!(json["errors"][0]["field"], "name");
    }
}
