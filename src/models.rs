use serde::{Deserialize, Serialize};

/// The single managed entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

/// Request body for create and update operations
///
/// Only used to document the request shape. Handlers read the raw body so
/// that a missing or wrongly-typed `name` can be reported as a field error.
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NameRequest {
    pub name: String,
}
