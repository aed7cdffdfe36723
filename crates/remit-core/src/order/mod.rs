//! Payment order validation.

mod validator;

pub mod rules;

pub use validator::{
    ADDRESS_MAX_LEN, BANK_NAME_MAX_LEN, NAME_MAX_LEN, OrderValidator, REFERENCE_MAX_LEN,
    ValidationIssue,
};
