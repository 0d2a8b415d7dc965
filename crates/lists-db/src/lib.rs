//! # lists-db
//!
//! libSQL persistence for superlists.
//!
//! Holds the two relational tables, `lists` and `items`, with a foreign key
//! from each item to its owning list. `ListsDb` is the raw handle; repository
//! methods live on `ListService` (see [`service`] and [`repos`]).

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
mod test_support;

use error::DatabaseError;
use libsql::Builder;

/// Tables keyed by generated ids.
pub const LISTS_TABLE: &str = "lists";
pub const ITEMS_TABLE: &str = "items";

const ID_ATTEMPTS: usize = 8;

/// Raw database handle: a libSQL database and its single connection.
pub struct ListsDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ListsDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let lists_db = Self { db, conn };
        lists_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(lists_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g. `"lst-a3f8b2c1"`.
    ///
    /// Uses `randomblob(4)` in SQL to produce 8-char hex, then prepends the prefix.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(4)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }

    /// Whether `table` already has a row with this `id`.
    pub(crate) async fn id_taken(&self, table: &str, id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .conn
            .query(&format!("SELECT 1 FROM {table} WHERE id = ?1"), [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    /// Generate an id for `table` that no existing row uses.
    ///
    /// Callers hold the write lock, so the id is still free at insert time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Query` if every attempt hit a taken id.
    pub async fn unused_id(&self, prefix: &str, table: &str) -> Result<String, DatabaseError> {
        self.first_unused_id(table, || self.generate_id(prefix)).await
    }

    /// Draw candidates from `next` until one is free in `table`.
    pub(crate) async fn first_unused_id<F, Fut>(
        &self,
        table: &str,
        mut next: F,
    ) -> Result<String, DatabaseError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<String, DatabaseError>>,
    {
        for _ in 0..ID_ATTEMPTS {
            let id = next().await?;
            if !self.id_taken(table, &id).await? {
                return Ok(id);
            }
            tracing::warn!(%id, table, "generated id already in use, retrying");
        }
        Err(DatabaseError::Query(format!(
            "no unused id for {table} after {ID_ATTEMPTS} attempts"
        )))
    }
}
