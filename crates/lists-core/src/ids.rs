//! ID prefix constants.
//!
//! Ids are generated by the database as `<prefix>-<8 lowercase hex chars>`,
//! e.g. `lst-a3f8b2c1`.

pub const PREFIX_LIST: &str = "lst";
pub const PREFIX_ITEM: &str = "itm";

pub const ALL_PREFIXES: &[&str] = &[PREFIX_LIST, PREFIX_ITEM];

/// Length of the random hex suffix.
pub const SUFFIX_LEN: usize = 8;

/// Whether `id` has the shape of an id with the given prefix.
///
/// Only checks the format. Existence is a database question.
#[must_use]
pub fn has_prefix_format(id: &str, prefix: &str) -> bool {
    let Some(rest) = id.strip_prefix(prefix).and_then(|r| r.strip_prefix('-')) else {
        return false;
    };
    rest.len() == SUFFIX_LEN
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

/// Shorthand for [`has_prefix_format`] with [`PREFIX_LIST`].
#[must_use]
pub fn is_list_id(id: &str) -> bool {
    has_prefix_format(id, PREFIX_LIST)
}
