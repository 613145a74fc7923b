use axum::{
    Json,
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::any::Any;

use crate::validation::{FieldError, ItemId};

pub const ITEM_NOT_FOUND_MESSAGE: &str = "Item not found";
pub const ROUTE_NOT_FOUND_MESSAGE: &str = "Route not found";
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Error body carrying a single message
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// Error body for rejected request input
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ValidationErrorResponse {
    pub errors: Vec<FieldError>,
}

/// Response type for health check endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

/// Custom error type for API endpoints
///
/// Handlers return this from every fallible step; the `IntoResponse` impl is
/// the one place where error kinds become status codes and JSON bodies.
#[derive(Debug)]
pub enum ApiError {
    /// Path or body input failed validation
    Validation(Vec<FieldError>),
    /// No item with this id exists
    ItemNotFound(ItemId),
    /// The request body could not be read, e.g. it exceeded the size limit
    Body(BytesRejection),
    /// Storage failed underneath us
    Storage(anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                tracing::warn!("Rejected request with {} validation error(s)", errors.len());
                (
                    StatusCode::BAD_REQUEST,
                    Json(ValidationErrorResponse { errors }),
                )
                    .into_response()
            }
            ApiError::ItemNotFound(id) => {
                tracing::info!("Item not found with id: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    Json(MessageResponse::new(ITEM_NOT_FOUND_MESSAGE)),
                )
                    .into_response()
            }
            ApiError::Body(rejection) => {
                let status = rejection.status();
                tracing::warn!("Failed to read request body ({}): {}", status, rejection);
                (status, Json(MessageResponse::new(&rejection.body_text()))).into_response()
            }
            ApiError::Storage(err) => {
                tracing::error!("Storage error: {:#}", err);
                internal_error()
            }
        }
    }
}

impl From<FieldError> for ApiError {
    fn from(err: FieldError) -> Self {
        ApiError::Validation(vec![err])
    }
}

impl From<BytesRejection> for ApiError {
    fn from(rejection: BytesRejection) -> Self {
        ApiError::Body(rejection)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::Storage(err)
    }
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new(INTERNAL_ERROR_MESSAGE)),
    )
        .into_response()
}

/// Terminal responder for panics caught by `CatchPanicLayer`
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    tracing::error!("Handler panicked: {}", detail);
    internal_error()
}
