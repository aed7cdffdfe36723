//! Whole-order validation combining the field rules.

use tracing::debug;

use crate::error::FieldError;
use crate::models::order::PaymentOrder;
use crate::remark::REMARK_MAX_LEN;

use super::rules::{
    validate_account_number, validate_amount, validate_bic, validate_generic_account,
    validate_latin_text,
};

/// Maximum beneficiary name length accepted by the rails.
pub const NAME_MAX_LEN: usize = 70;
/// Address travels as three 35-character lines downstream.
pub const ADDRESS_MAX_LEN: usize = 105;
/// Bank name is a single 35-character line.
pub const BANK_NAME_MAX_LEN: usize = 35;
/// Client reference, SWIFT 16x.
pub const REFERENCE_MAX_LEN: usize = 16;

/// A single failed field on an order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Name of the offending field.
    pub field: &'static str,
    /// What went wrong.
    pub error: FieldError,
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.error)
    }
}

/// Validates a [`PaymentOrder`] field by field.
pub struct OrderValidator {
    /// Whether destination accounts in IBAN countries get IBAN validation.
    validate_iban: bool,
    /// Whether the BIC country must match the beneficiary country.
    check_bic_country: bool,
}

impl OrderValidator {
    /// Create a validator with all checks enabled.
    pub fn new() -> Self {
        Self {
            validate_iban: true,
            check_bic_country: true,
        }
    }

    /// Set whether destination accounts in IBAN countries get full IBAN
    /// validation. When disabled the generic account rule applies instead.
    pub fn with_iban_validation(mut self, validate: bool) -> Self {
        self.validate_iban = validate;
        self
    }

    /// Set whether the BIC country must match the beneficiary country.
    pub fn with_bic_country_check(mut self, check: bool) -> Self {
        self.check_bic_country = check;
        self
    }

    /// Run every field rule and collect the failures.
    ///
    /// Field validations are mutually independent; an invalid amount does
    /// not stop the BIC check from running.
    pub fn validate(&self, order: &PaymentOrder) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();

        if let Err(error) = validate_generic_account(&order.debit_account) {
            issues.push(ValidationIssue {
                field: "debit_account",
                error,
            });
        }

        let destination = if self.validate_iban {
            validate_account_number(&order.destination_account, &order.beneficiary.country)
        } else {
            validate_generic_account(&order.destination_account)
        };
        if let Err(error) = destination {
            issues.push(ValidationIssue {
                field: "destination_account",
                error,
            });
        }

        if let Err(error) = validate_amount(order.amount, &order.currency) {
            issues.push(ValidationIssue {
                field: "amount",
                error,
            });
        }

        if let Err(error) = validate_latin_text(&order.beneficiary.name, NAME_MAX_LEN) {
            issues.push(ValidationIssue {
                field: "beneficiary.name",
                error,
            });
        }

        if let Err(error) = validate_latin_text(&order.beneficiary.address, ADDRESS_MAX_LEN) {
            issues.push(ValidationIssue {
                field: "beneficiary.address",
                error,
            });
        }

        let country = self
            .check_bic_country
            .then(|| order.beneficiary.country.as_str());
        if let Err(error) = validate_bic(&order.bank.bic, country) {
            issues.push(ValidationIssue {
                field: "bank.bic",
                error,
            });
        }

        if let Err(error) = validate_latin_text(&order.bank.name, BANK_NAME_MAX_LEN) {
            issues.push(ValidationIssue {
                field: "bank.name",
                error,
            });
        }

        if let Err(error) = validate_latin_text(&order.remark, REMARK_MAX_LEN) {
            issues.push(ValidationIssue {
                field: "remark",
                error,
            });
        }

        if let Some(reference) = &order.reference {
            if let Err(error) = validate_latin_text(reference, REFERENCE_MAX_LEN) {
                issues.push(ValidationIssue {
                    field: "reference",
                    error,
                });
            }
        }

        debug!(
            "order {} validated with {} issue(s)",
            order.order_number,
            issues.len()
        );

        issues
    }
}

impl Default for OrderValidator {
    fn default() -> Self {
        Self::new()
    }
}
