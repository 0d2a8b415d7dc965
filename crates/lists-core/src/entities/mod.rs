//! Entity structs for the superlists domain.
//!
//! Each entity maps to a table in the libSQL database (see
//! `lists-db/migrations/001_initial.sql`).

mod item;
mod list;

pub use item::Item;
pub use list::{List, list_url};
