use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An identity-only grouping of items, addressed by its id in the URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct List {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl List {
    /// Canonical detail URL for this list, e.g. `/lists/lst-a3f8b2c1/`.
    #[must_use]
    pub fn url(&self) -> String {
        list_url(&self.id)
    }

    /// Target of the add-item form on the list page.
    #[must_use]
    pub fn add_item_url(&self) -> String {
        format!("/lists/{}/add_item", self.id)
    }
}

/// Detail URL for a list id, without needing the full entity.
#[must_use]
pub fn list_url(id: &str) -> String {
    format!("/lists/{id}/")
}
