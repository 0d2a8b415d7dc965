//! Item text validation.

use crate::errors::CoreError;

/// Message shown when an empty item is submitted.
pub const EMPTY_ITEM_ERROR: &str = "You can't have an empty list item";

/// Check submitted item text.
///
/// Text is stored as submitted; it is rejected only when nothing but
/// whitespace remains.
///
/// # Errors
///
/// Returns `CoreError::Validation` carrying [`EMPTY_ITEM_ERROR`] for blank text.
pub fn validate_item_text(text: &str) -> Result<&str, CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(EMPTY_ITEM_ERROR.to_string()));
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("")]
    #[case(" ")]
    #[case("\t\n")]
    fn blank_text_is_rejected(#[case] text: &str) {
        let err = validate_item_text(text).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg == EMPTY_ITEM_ERROR));
    }

    #[test]
    fn text_is_returned_unchanged() {
        assert_eq!(
            validate_item_text("  Buy peacock feathers ").unwrap(),
            "  Buy peacock feathers "
        );
    }
}
