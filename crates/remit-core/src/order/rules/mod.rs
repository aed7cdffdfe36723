//! Rule-based validators for payment instruction fields.
//!
//! All validators are pure and total: failure comes back as a
//! [`FieldError`](crate::error::FieldError), never a panic, and repeated
//! calls with the same input give the same answer.

pub mod account;
pub mod amount;
pub mod bic;
pub mod iban;
pub mod patterns;
pub mod text;

pub use account::{validate_account_number, validate_generic_account};
pub use amount::{currency_decimals, validate_amount};
pub use bic::{ValidatedBic, validate_bic};
pub use iban::{IBAN_LENGTHS, format_iban, is_iban_country, validate_iban};
pub use text::validate_latin_text;
