//! Destination account validation.

use crate::error::FieldError;

use super::iban::{is_iban_country, validate_iban};
use super::patterns::ACCOUNT_NUMBER;

/// Shortest account number the rails accept.
pub const ACCOUNT_MIN_LEN: usize = 5;
/// Longest account number the rails accept.
pub const ACCOUNT_MAX_LEN: usize = 35;

/// Validate a destination account number for the given country.
///
/// IBAN countries get full structural and checksum validation; everywhere
/// else the generic alphanumeric rule applies. Returns the cleaned number.
pub fn validate_account_number(account: &str, country: &str) -> Result<String, FieldError> {
    if account.trim().is_empty() {
        return Err(FieldError::Empty);
    }

    if is_iban_country(country) {
        return validate_iban(account);
    }

    validate_generic_account(account)
}

/// The non-IBAN account rule: uppercase alphanumeric, 5 to 35 characters.
pub fn validate_generic_account(account: &str) -> Result<String, FieldError> {
    if account.trim().is_empty() {
        return Err(FieldError::Empty);
    }

    let clean: String = account.chars().filter(|c| !c.is_whitespace()).collect();
    if !ACCOUNT_NUMBER.is_match(&clean) {
        return Err(FieldError::InvalidCharacters);
    }

    let len = clean.chars().count();
    if !(ACCOUNT_MIN_LEN..=ACCOUNT_MAX_LEN).contains(&len) {
        return Err(FieldError::InvalidLength {
            min: ACCOUNT_MIN_LEN,
            max: ACCOUNT_MAX_LEN,
        });
    }

    Ok(clean)
}
