use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single to-do line, owned by exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub list_id: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}
