//! Item repository: list-scoped inserts and reads.

use chrono::Utc;

use lists_core::entities::Item;
use lists_core::ids::PREFIX_ITEM;
use lists_core::validation::validate_item_text;

use crate::ITEMS_TABLE;
use crate::error::DatabaseError;
use crate::helpers::{first_i64, parse_datetime};
use crate::repos::list::list_not_found;
use crate::service::ListService;

const SELECT_COLS: &str = "id, list_id, text, created_at";

pub(crate) const INSERT_ITEM: &str =
    "INSERT INTO items (id, list_id, text, created_at) VALUES (?1, ?2, ?3, ?4)";

fn row_to_item(row: &libsql::Row) -> Result<Item, DatabaseError> {
    Ok(Item {
        id: row.get(0)?,
        list_id: row.get(1)?,
        text: row.get(2)?,
        created_at: parse_datetime(&row.get::<String>(3)?)?,
    })
}

impl ListService {
    /// Append an item to an existing list.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Validation` for blank text and
    /// `DatabaseError::NotFound` if the list does not exist.
    pub async fn create_item(&self, list_id: &str, text: &str) -> Result<Item, DatabaseError> {
        let text = validate_item_text(text)?;

        let _guard = self.lock_writes().await;
        if !self.list_exists(list_id).await? {
            return Err(list_not_found(list_id));
        }

        let now = Utc::now();
        let id = self.db().unused_id(PREFIX_ITEM, ITEMS_TABLE).await?;
        self.db()
            .conn()
            .execute(
                INSERT_ITEM,
                libsql::params![id.as_str(), list_id, text, now.to_rfc3339()],
            )
            .await?;

        tracing::debug!(list_id, item_id = %id, "item created");
        Ok(Item {
            id,
            list_id: list_id.to_string(),
            text: text.to_string(),
            created_at: now,
        })
    }

    /// All items owned by `list_id`, in insertion order.
    ///
    /// Items belonging to any other list are never returned.
    pub async fn items_for_list(&self, list_id: &str) -> Result<Vec<Item>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                &format!("SELECT {SELECT_COLS} FROM items WHERE list_id = ?1 ORDER BY rowid"),
                [list_id],
            )
            .await?;

        let mut items = Vec::new();
        while let Some(row) = rows.next().await? {
            items.push(row_to_item(&row)?);
        }
        Ok(items)
    }

    pub async fn count_items(&self) -> Result<i64, DatabaseError> {
        let rows = self
            .db()
            .conn()
            .query("SELECT COUNT(*) FROM items", ())
            .await?;
        first_i64(rows).await
    }
}
