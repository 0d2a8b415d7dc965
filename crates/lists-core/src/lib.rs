//! # lists-core
//!
//! Core types shared across all superlists crates:
//! - Entity structs for the domain objects (`List`, `Item`)
//! - ID prefix constants and format checks
//! - Item text validation
//! - Cross-cutting error types

pub mod entities;
pub mod errors;
pub mod ids;
pub mod validation;
