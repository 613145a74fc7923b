use axum::{extract::FromRequestParts, http::request::Parts};
use std::sync::Arc;

use crate::error::ApiError;
use crate::extract::ValidItemId;
use crate::models::Item;
use crate::state::AppState;
use crate::store::{self, ItemStore};
use crate::validation::ItemId;

/// The id as stored, or [`ApiError::ItemNotFound`] for ids no item can carry
pub fn stored_id(id: &ItemId) -> Result<i64, ApiError> {
    match id {
        ItemId::Valid(id) => Ok(*id),
        ItemId::Unassignable(_) => Err(ApiError::ItemNotFound(id.clone())),
    }
}

/// Look up `id`, turning absence into [`ApiError::ItemNotFound`]
pub async fn require_item(store: &Arc<dyn ItemStore>, id: ItemId) -> Result<Item, ApiError> {
    let key = stored_id(&id)?;
    store::blocking(store, move |store| store.get(key))
        .await?
        .ok_or(ApiError::ItemNotFound(id))
}

/// An item that was confirmed to exist before the handler runs
///
/// Runs id validation first, so an invalid id never reaches the store.
#[derive(Debug, Clone)]
pub struct ExistingItem(pub Item);

impl FromRequestParts<AppState> for ExistingItem {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let ValidItemId(id) = ValidItemId::from_request_parts(parts, state).await?;
        Ok(ExistingItem(require_item(&state.store, id).await?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn store() -> Arc<dyn ItemStore> {
        Arc::new(MemoryStore::new())
    }

    #[tokio::test]
    async fn test_require_item_found() {
        let store = store();
        let item = store.create("A").unwrap();
        assert_eq!(require_item(&store, ItemId::Valid(item.id)).await.unwrap(), item);
    }

    #[tokio::test]
    async fn test_require_item_missing() {
        let store = store();
        match require_item(&store, ItemId::Valid(12)).await {
            Err(ApiError::ItemNotFound(id)) => assert_eq!(id, ItemId::Valid(12)),
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_require_item_unassignable_id() {
        let store = store();
        store.create("A").unwrap();

        let id = ItemId::Unassignable("99999999999999999999".to_string());
        match require_item(&store, id.clone()).await {
            Err(ApiError::ItemNotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected ItemNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_stored_id() {
        assert_eq!(stored_id(&ItemId::Valid(3)).unwrap(), 3);
        assert!(matches!(
            stored_id(&ItemId::Unassignable("9223372036854775808".to_string())),
            Err(ApiError::ItemNotFound(_))
        ));
    }
}
