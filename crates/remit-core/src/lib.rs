//! Core library for cross-border remittance order processing.
//!
//! This crate provides:
//! - Field validators for payment instructions (Latin free text, IBAN,
//!   generic account numbers, BIC, currency-aware amounts)
//! - Payment remark assembly from a document template, with length
//!   enforcement against the receiving rail's ceiling
//! - Payment order data models and whole-order validation
//! - Bank instruction file writers (fixed-column CSV and the 73-field
//!   semicolon-delimited upload format)

pub mod error;
pub mod export;
pub mod models;
pub mod order;
pub mod remark;

pub use error::{ExportError, FieldError, RemarkError, RemitError, Result};
pub use models::config::RemitConfig;
pub use models::directory::{BicRecord, Country};
pub use models::order::{BankDetails, Beneficiary, PaymentOrder};
pub use order::rules::{
    ValidatedBic, validate_account_number, validate_amount, validate_bic, validate_iban,
    validate_latin_text,
};
pub use order::{OrderValidator, ValidationIssue};
pub use remark::{
    DocumentLine, DocumentType, ParsedDate, REMARK_MAX_LEN, Remark, RemarkTemplate, parse_date,
};
