use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use super::ItemStore;
use crate::models::Item;

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);";

/// Durable single-table item store backed by SQLite
///
/// `AUTOINCREMENT` keeps ids unique across the lifetime of the database file,
/// including ids of deleted rows.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open (or create) the database file at `path` and ensure the table exists
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open SQLite database at {}", path.display()))?;
        Self::with_connection(conn)
    }

    /// Private in-memory database, used in tests
    #[cfg(test)]
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory SQLite database")?;
        Self::with_connection(conn)
    }

    fn with_connection(conn: Connection) -> Result<Self> {
        conn.execute_batch(SCHEMA)
            .context("Failed to create items table")?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| anyhow!("SQLite connection lock poisoned"))
    }

    /// Delete every row and restart the autoincrement sequence
    #[cfg(test)]
    pub fn reset(&self) -> Result<()> {
        self.lock()?
            .execute_batch(
                "DELETE FROM items;
                 DELETE FROM sqlite_sequence WHERE name = 'items';",
            )
            .context("Failed to reset items table")
    }
}

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

impl ItemStore for SqliteStore {
    fn list(&self) -> Result<Vec<Item>> {
        let conn = self.lock()?;
        let mut stmt = conn
            .prepare_cached("SELECT id, name FROM items ORDER BY id")
            .context("Failed to prepare list query")?;
        let items = stmt
            .query_map([], item_from_row)
            .context("Failed to query items")?
            .collect::<rusqlite::Result<Vec<_>>>()
            .context("Failed to read item rows")?;

        tracing::debug!("Listed {} items", items.len());
        Ok(items)
    }

    fn get(&self, id: i64) -> Result<Option<Item>> {
        let conn = self.lock()?;
        let item = conn
            .prepare_cached("SELECT id, name FROM items WHERE id = ?1")
            .context("Failed to prepare get query")?
            .query_row(params![id], item_from_row)
            .optional()
            .with_context(|| format!("Failed to read item {}", id))?;

        Ok(item)
    }

    fn create(&self, name: &str) -> Result<Item> {
        let conn = self.lock()?;
        let item = conn
            .prepare_cached("INSERT INTO items (name) VALUES (?1) RETURNING id, name")
            .context("Failed to prepare insert")?
            .query_row(params![name], item_from_row)
            .context("Failed to insert item")?;

        tracing::debug!("Inserted item with id: {}", item.id);
        Ok(item)
    }

    fn update(&self, id: i64, name: &str) -> Result<Option<Item>> {
        let conn = self.lock()?;
        let item = conn
            .prepare_cached("UPDATE items SET name = ?1 WHERE id = ?2 RETURNING id, name")
            .context("Failed to prepare update")?
            .query_row(params![name, id], item_from_row)
            .optional()
            .with_context(|| format!("Failed to update item {}", id))?;

        tracing::debug!("Update of item {} matched: {}", id, item.is_some());
        Ok(item)
    }

    fn delete(&self, id: i64) -> Result<Option<Item>> {
        let conn = self.lock()?;
        let item = conn
            .prepare_cached("DELETE FROM items WHERE id = ?1 RETURNING id, name")
            .context("Failed to prepare delete")?
            .query_row(params![id], item_from_row)
            .optional()
            .with_context(|| format!("Failed to delete item {}", id))?;

        tracing::debug!("Delete of item {} matched: {}", id, item.is_some());
        Ok(item)
    }

    fn ping(&self) -> Result<()> {
        let one: i64 = self
            .lock()?
            .query_row("SELECT 1", [], |row| row.get(0))
            .context("Failed to execute health check query")?;

        if one == 1 {
            Ok(())
        } else {
            Err(anyhow!("Health check query returned unexpected value: {}", one))
        }
    }
}
