use anyhow::{Result, anyhow};
use std::sync::{Mutex, MutexGuard};

use super::ItemStore;
use crate::models::Item;

/// In-process item store, lost on restart
///
/// Ids come from a counter that starts at 1 and never goes backwards, so a
/// deleted id is not handed out again.
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

struct Inner {
    items: Vec<Item>,
    next_id: i64,
}

impl Default for Inner {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner>> {
        self.inner
            .lock()
            .map_err(|_| anyhow!("In-memory item store lock poisoned"))
    }

    /// Drop every item and restart id assignment
    #[cfg(test)]
    pub fn reset(&self) -> Result<()> {
        *self.lock()? = Inner::default();
        Ok(())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore for MemoryStore {
    fn list(&self) -> Result<Vec<Item>> {
        Ok(self.lock()?.items.clone())
    }

    fn get(&self, id: i64) -> Result<Option<Item>> {
        Ok(self.lock()?.items.iter().find(|item| item.id == id).cloned())
    }

    fn create(&self, name: &str) -> Result<Item> {
        let mut inner = self.lock()?;
        let item = Item {
            id: inner.next_id,
            name: name.to_string(),
        };
        inner.next_id += 1;
        inner.items.push(item.clone());

        tracing::debug!("Created item with id: {}", item.id);
        Ok(item)
    }

    fn update(&self, id: i64, name: &str) -> Result<Option<Item>> {
        let mut inner = self.lock()?;
        let Some(item) = inner.items.iter_mut().find(|item| item.id == id) else {
            tracing::debug!("Item not found for update with id: {}", id);
            return Ok(None);
        };
        item.name = name.to_string();

        tracing::debug!("Updated item with id: {}", id);
        Ok(Some(item.clone()))
    }

    fn delete(&self, id: i64) -> Result<Option<Item>> {
        let mut inner = self.lock()?;
        let Some(index) = inner.items.iter().position(|item| item.id == id) else {
            tracing::debug!("Item not found for delete with id: {}", id);
            return Ok(None);
        };

        tracing::debug!("Deleted item with id: {}", id);
        Ok(Some(inner.items.remove(index)))
    }

    fn ping(&self) -> Result<()> {
        self.lock().map(|_| ())
    }
}
