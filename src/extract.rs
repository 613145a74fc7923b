use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};

use crate::error::ApiError;
use crate::validation::{self, FieldError, ItemId};

/// A well-formed item id taken from the `{id}` path segment
///
/// Rejects with [`ApiError::Validation`] before the store is touched.
#[derive(Debug, Clone)]
pub struct ValidItemId(pub ItemId);

/// A validated, trimmed item name taken from the JSON body
///
/// A body that cannot be read at all (too large, broken stream) is rejected
/// with the body error's own status rather than as a missing name.
#[derive(Debug, Clone)]
pub struct ValidName(pub String);

/// Id and name for an update, with failures from both reported together
#[derive(Debug, Clone)]
pub struct ValidUpdate {
    pub id: ItemId,
    pub name: String,
}

async fn item_id_from_parts<S>(parts: &mut Parts, state: &S) -> Result<ItemId, FieldError>
where
    S: Send + Sync,
{
    let raw = match Path::<String>::from_request_parts(parts, state).await {
        Ok(Path(raw)) => raw,
        Err(rejection) => {
            tracing::warn!("Failed to extract item id from path: {}", rejection);
            String::new()
        }
    };
    validation::parse_item_id(&raw)
}

async fn body_from_request<S>(req: Request, state: &S) -> Result<Bytes, ApiError>
where
    S: Send + Sync,
{
    Ok(Bytes::from_request(req, state).await?)
}

impl<S> FromRequestParts<S> for ValidItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Ok(ValidItemId(item_id_from_parts(parts, state).await?))
    }
}

impl<S> FromRequest<S> for ValidName
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = body_from_request(req, state).await?;
        Ok(ValidName(validation::parse_name(&body)?))
    }
}

impl<S> FromRequest<S> for ValidUpdate
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let (mut parts, body) = req.into_parts();
        let id = item_id_from_parts(&mut parts, state).await;
        let body = body_from_request(Request::from_parts(parts, body), state).await?;
        let name = validation::parse_name(&body);

        match (id, name) {
            (Ok(id), Ok(name)) => Ok(ValidUpdate { id, name }),
            (id, name) => Err(ApiError::Validation(
                [id.err(), name.err()].into_iter().flatten().collect(),
            )),
        }
    }
}
