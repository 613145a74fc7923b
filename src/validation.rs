use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

pub const INVALID_ID_MESSAGE: &str = "ID must be a non-negative integer";
pub const INVALID_NAME_MESSAGE: &str = "Name is required and must be a non-empty string";
pub const INVALID_BODY_MESSAGE: &str = "Request body must be valid JSON";

/// Where in the request a rejected value came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Location {
    Params,
    Body,
}

/// A single rejected input field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct FieldError {
    pub location: Location,
    pub field: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<JsonValue>,
}

impl FieldError {
    fn new(location: Location, field: &str, message: &str, value: Option<JsonValue>) -> Self {
        Self {
            location,
            field: field.to_string(),
            message: message.to_string(),
            value,
        }
    }
}

/// A well-formed item id taken from the request path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemId {
    /// Fits the id column and may name a stored item
    Valid(i64),
    /// A non-negative integer beyond `i64::MAX`; no item can ever carry it
    Unassignable(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Valid(id) => write!(f, "{}", id),
            ItemId::Unassignable(raw) => f.write_str(raw),
        }
    }
}

/// Validate a path-supplied item identifier.
///
/// Accepts an optional leading `+` followed by ASCII digits. Leading zeros
/// are allowed, and a `-` sign only in front of zero. Integers too large for
/// `i64` are well-formed but unassignable.
pub fn parse_item_id(raw: &str) -> Result<ItemId, FieldError> {
    let digits = match raw.strip_prefix('-') {
        Some(rest) if !rest.is_empty() && rest.bytes().all(|b| b == b'0') => rest,
        Some(_) => return Err(invalid_id(raw)),
        None => raw.strip_prefix('+').unwrap_or(raw),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_id(raw));
    }

    Ok(match digits.parse::<i64>() {
        Ok(id) => ItemId::Valid(id),
        Err(_) => ItemId::Unassignable(raw.to_string()),
    })
}

fn invalid_id(raw: &str) -> FieldError {
    FieldError::new(
        Location::Params,
        "id",
        INVALID_ID_MESSAGE,
        Some(JsonValue::String(raw.to_string())),
    )
}

/// Validate a raw request body and extract the trimmed `name`.
///
/// An empty body is treated like `{}`.
pub fn parse_name(body: &[u8]) -> Result<String, FieldError> {
    let value: JsonValue = if body.iter().all(u8::is_ascii_whitespace) {
        JsonValue::Object(Default::default())
    } else {
        serde_json::from_slice(body)
            .map_err(|_| FieldError::new(Location::Body, "body", INVALID_BODY_MESSAGE, None))?
    };

    match value.get("name") {
        Some(JsonValue::String(name)) if !name.trim().is_empty() => Ok(name.trim().to_string()),
        other => Err(FieldError::new(
            Location::Body,
            "name",
            INVALID_NAME_MESSAGE,
            other.cloned(),
        )),
    }
}
