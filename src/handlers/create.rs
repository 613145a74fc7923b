use crate::error::{ApiError, MessageResponse, ValidationErrorResponse};
use crate::extract::ValidName;
use crate::models::{Item, NameRequest};
use crate::routes;
use crate::state::AppState;
use crate::store;
use axum::{Json, extract::State, http::StatusCode};

/// POST /api/items handler - Create an item
///
/// The stored name is the trimmed value from the request body; the id is assigned by the store.
#[utoipa::path(
    post,
    path = routes::ITEMS,
    request_body = NameRequest,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, description = "Name missing, empty or not a string", body = ValidationErrorResponse),
        (status = 500, description = "Storage error", body = MessageResponse)
    ),
    tag = "items"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    ValidName(name): ValidName,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let item = store::blocking(&state.store, move |store| store.create(&name)).await?;

    tracing::info!("Created item with id: {}", item.id);
    Ok((StatusCode::CREATED, Json(item)))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{
        failing_app, memory_app, memory_app_with_store, send, send_request, sqlite_app,
    };
    use crate::store::ItemStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;

    #[tokio::test]
    async fn test_create_endpoint_success() {
        for app in [memory_app(), sqlite_app()] {
            let (status, json) =
                send(&app, "POST", "/api/items", Some(json!({"name": "Test Item"}))).await;

            assert_eq!(status, StatusCode::CREATED);
            assert!(json["id"].is_i64());
            assert_eq!(json["name"], "Test Item");

            let (_, list) = send(&app, "GET", "/api/items", None).await;
            assert_eq!(list, json!([json]));
        }
    }

    #[tokio::test]
    async fn test_create_endpoint_trims_name() {
        let app = memory_app();
        let (status, json) =
            send(&app, "POST", "/api/items", Some(json!({"name": "  padded  "}))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["name"], "padded");
    }

    #[tokio::test]
    async fn test_create_endpoint_ignores_client_id() {
        let app = memory_app();
        let (status, json) =
            send(&app, "POST", "/api/items", Some(json!({"id": 500, "name": "A"}))).await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["id"], 1);
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_name() {
        let (app, store) = memory_app_with_store();

        for body in [json!({}), json!({"name": ""}), json!({"name": "  "}), json!({"name": 123})] {
            let (status, json) = send(&app, "POST", "/api/items", Some(body.clone())).await;

            assert_eq!(status, StatusCode::BAD_REQUEST, "body {}", body);
            assert_eq!(json["errors"][0]["field"], "name");
            assert_eq!(
                json["errors"][0]["message"],
                "Name is required and must be a non-empty string"
            );
        }

        assert!(store.list().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_endpoint_without_body() {
        let app = memory_app();
        let (status, json) = send(&app, "POST", "/api/items", None).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["field"], "name");
    }

    #[tokio::test]
    async fn test_create_endpoint_invalid_json() {
        let app = memory_app();
        let request = Request::builder()
            .method("POST")
            .uri("/api/items")
            .header("content-type", "application/json")
            .body(Body::from("{invalid json}"))
            .unwrap();

        let (status, json) = send_request(&app, request).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["errors"][0]["field"], "body");
    }

    #[tokio::test]
    async fn test_create_endpoint_storage_failure() {
        let app = failing_app();
        let (status, json) = send(&app, "POST", "/api/items", Some(json!({"name": "A"}))).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json, json!({"message": "Internal server error"}));
    }

    #[tokio::test]
    async fn test_create_endpoint_body_over_limit() {
        let (app, store) = memory_app_with_store();
        let name = "a".repeat(2 * 1024 * 1024 + 1);

        let (status, json) = send(&app, "POST", "/api/items", Some(json!({"name": name}))).await;

        assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
        assert!(json["message"].is_string());
        assert!(json.get("errors").is_none());
        assert!(store.list().unwrap().is_empty());
    }
}
