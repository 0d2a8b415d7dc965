//! Repository modules for lists and items.
//!
//! Each module adds methods to `ListService` via `impl ListService` blocks.

pub mod item;
pub mod list;
