pub mod memory;
pub mod sqlite;

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::config::{Config, StoreBackend};
use crate::models::Item;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Storage contract shared by every item backend
///
/// A missing id is never an error: lookups and mutations return `Ok(None)`.
/// `Err` is reserved for infrastructure failures.
pub trait ItemStore: Send + Sync {
    /// All items, in insertion (memory) or primary-key (SQLite) order
    fn list(&self) -> Result<Vec<Item>>;

    fn get(&self, id: i64) -> Result<Option<Item>>;

    /// Store a new item under a freshly assigned id
    fn create(&self, name: &str) -> Result<Item>;

    /// Replace the name of an existing item, returning the updated item
    fn update(&self, id: i64, name: &str) -> Result<Option<Item>>;

    /// Remove an existing item, returning its state before removal
    fn delete(&self, id: i64) -> Result<Option<Item>>;

    /// Verify that the backend is reachable
    fn ping(&self) -> Result<()>;
}

/// Run a store operation on tokio's blocking thread pool
///
/// SQLite calls block on file I/O, so handlers go through here instead of
/// calling the store on a runtime worker thread.
pub async fn blocking<T, F>(store: &Arc<dyn ItemStore>, op: F) -> Result<T>
where
    F: FnOnce(&dyn ItemStore) -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    let store = Arc::clone(store);
    tokio::task::spawn_blocking(move || op(store.as_ref()))
        .await
        .context("Item store task failed")?
}

/// Open the store selected by the configuration
pub fn open(config: &Config) -> Result<Arc<dyn ItemStore>> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory item store");
            Ok(Arc::new(MemoryStore::new()))
        }
        StoreBackend::Sqlite => {
            tracing::info!("Using SQLite item store at: {}", config.database_path.display());
            Ok(Arc::new(SqliteStore::open(&config.database_path)?))
        }
    }
}
