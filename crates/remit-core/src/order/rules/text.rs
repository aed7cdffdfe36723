//! Free-text validation against the rail-safe Latin character set.

use crate::error::FieldError;

use super::patterns::LATIN_TEXT;

/// Validate free text destined for a payment instruction field.
///
/// Receiving banks parse these fields positionally and only accept a narrow
/// Latin subset with single spacing and no surrounding whitespace. The first
/// violated rule is the one reported.
pub fn validate_latin_text(text: &str, max_len: usize) -> Result<(), FieldError> {
    if text.is_empty() {
        return Err(FieldError::Empty);
    }
    if !LATIN_TEXT.is_match(text) {
        return Err(FieldError::InvalidCharacters);
    }
    if text.trim() != text {
        return Err(FieldError::LeadingOrTrailingSpace);
    }
    if text.contains("  ") {
        return Err(FieldError::DoubleSpace);
    }
    if text.chars().count() > max_len {
        return Err(FieldError::TooLong { max: max_len });
    }
    Ok(())
}
