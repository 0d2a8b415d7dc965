//! List repository: create, look up, count, and the atomic "new list with
//! first item" operation.

use chrono::Utc;

use lists_core::entities::{Item, List};
use lists_core::ids::{PREFIX_ITEM, PREFIX_LIST};
use lists_core::validation::validate_item_text;

use crate::error::DatabaseError;
use crate::{ITEMS_TABLE, LISTS_TABLE};
use crate::helpers::{first_i64, parse_datetime};
use crate::repos::item::INSERT_ITEM;
use crate::service::ListService;

const SELECT_COLS: &str = "id, created_at";

fn row_to_list(row: &libsql::Row) -> Result<List, DatabaseError> {
    Ok(List {
        id: row.get(0)?,
        created_at: parse_datetime(&row.get::<String>(1)?)?,
    })
}

pub(crate) fn list_not_found(id: &str) -> DatabaseError {
    DatabaseError::NotFound {
        entity_type: "list".into(),
        id: id.to_string(),
    }
}

impl ListService {
    /// Create an empty list.
    pub async fn create_list(&self) -> Result<List, DatabaseError> {
        let _guard = self.lock_writes().await;
        let now = Utc::now();
        let id = self.db().unused_id(PREFIX_LIST, LISTS_TABLE).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO lists (id, created_at) VALUES (?1, ?2)",
                libsql::params![id.as_str(), now.to_rfc3339()],
            )
            .await?;

        tracing::debug!(list_id = %id, "list created");
        Ok(List { id, created_at: now })
    }

    /// Create a list and its first item in one transaction.
    ///
    /// Blank text is rejected before anything is written, so a failed
    /// submission never leaves an empty list behind.
    pub async fn create_list_with_item(&self, text: &str) -> Result<(List, Item), DatabaseError> {
        let text = validate_item_text(text)?;

        let _guard = self.lock_writes().await;
        let now = Utc::now();
        let list_id = self.db().unused_id(PREFIX_LIST, LISTS_TABLE).await?;
        let item_id = self.db().unused_id(PREFIX_ITEM, ITEMS_TABLE).await?;

        let tx = self.db().conn().transaction().await?;
        tx.execute(
            "INSERT INTO lists (id, created_at) VALUES (?1, ?2)",
            libsql::params![list_id.as_str(), now.to_rfc3339()],
        )
        .await?;
        tx.execute(
            INSERT_ITEM,
            libsql::params![item_id.as_str(), list_id.as_str(), text, now.to_rfc3339()],
        )
        .await?;
        tx.commit().await?;

        tracing::debug!(list_id = %list_id, item_id = %item_id, "list created with first item");

        let list = List {
            id: list_id.clone(),
            created_at: now,
        };
        let item = Item {
            id: item_id,
            list_id,
            text: text.to_string(),
            created_at: now,
        };
        Ok((list, item))
    }

    /// Look up a list by id.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NotFound` if no list has this id.
    pub async fn get_list(&self, id: &str) -> Result<List, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(&format!("SELECT {SELECT_COLS} FROM lists WHERE id = ?1"), [id])
            .await?;
        let row = rows.next().await?.ok_or_else(|| list_not_found(id))?;
        row_to_list(&row)
    }

    pub async fn list_exists(&self, id: &str) -> Result<bool, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT 1 FROM lists WHERE id = ?1", [id])
            .await?;
        Ok(rows.next().await?.is_some())
    }

    pub async fn count_lists(&self) -> Result<i64, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM lists", ())
            .await?;
        first_i64(rows).await
    }
}
