//! Field validators and value parsers
//!
//! Validators are plain functions of the (already parsed) field value so they
//! can be reused for any bounded text field, not just the bio.

use thiserror::Error;

/// Maximum number of characters allowed in a profile bio
pub const MAX_BIO_LENGTH: usize = 100;

/// Local validation failures, surfaced next to the field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("This field cannot exceed {max} characters ({actual} entered)")]
    MaxLengthExceeded { max: usize, actual: usize },
}

/// Treat empty and whitespace-only input as an absent value
pub fn parse_empty_as_null(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Length of a value in characters
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Build a validator rejecting values longer than `max` characters.
///
/// The value is normalized with [`parse_empty_as_null`] first, so an empty
/// string and `None` are both accepted.
pub fn validate_max_length(max: usize) -> impl Fn(Option<&str>) -> Option<ValidationError> {
    move |value| {
        let value = value.and_then(parse_empty_as_null)?;
        let actual = char_len(&value);
        (actual > max).then_some(ValidationError::MaxLengthExceeded { max, actual })
    }
}

/// Characters left before hitting `max`; negative once over the limit
pub fn remaining_characters(max: usize, value: Option<&str>) -> isize {
    let used = value.map(char_len).unwrap_or(0);
    max as isize - used as isize
}
