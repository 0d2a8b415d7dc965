//! Service layer hosting the repository methods.
//!
//! `ListService` wraps `ListsDb`. All repo methods are implemented as
//! `impl ListService` blocks in [`crate::repos`]. Writes take the service's
//! write lock so that a multi-statement transaction on the shared connection
//! never interleaves with another request's insert.

use tokio::sync::{Mutex, MutexGuard};

use crate::ListsDb;
use crate::error::DatabaseError;

pub struct ListService {
    db: ListsDb,
    write_lock: Mutex<()>,
}

impl ListService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ListsDb::open_local(db_path).await?;
        Ok(Self::from_db(db))
    }

    /// Create from an existing `ListsDb`.
    #[must_use]
    pub fn from_db(db: ListsDb) -> Self {
        Self {
            db,
            write_lock: Mutex::new(()),
        }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ListsDb {
        &self.db
    }

    pub(crate) async fn lock_writes(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
