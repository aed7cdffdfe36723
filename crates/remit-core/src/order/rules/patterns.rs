//! Common regex patterns for payment field validation.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Free-text character set accepted by the rails: ASCII letters, digits,
    // space and the SWIFT symbol subset
    pub static ref LATIN_TEXT: Regex = Regex::new(
        r"^[A-Za-z0-9 /\-?:().,'+]*$"
    ).unwrap();

    // Generic account number, after whitespace stripping
    pub static ref ACCOUNT_NUMBER: Regex = Regex::new(
        r"^[A-Z0-9]+$"
    ).unwrap();

    // BIC: 4-letter institution code, 2-letter country code, 2 alphanumeric
    // location characters, optional 3 alphanumeric branch characters
    pub static ref BIC_FORMAT: Regex = Regex::new(
        r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$"
    ).unwrap();
}
