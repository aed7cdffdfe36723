//! Amount validation with currency-aware decimal precision.

use rust_decimal::Decimal;

use crate::error::FieldError;

/// Number of decimal places the rails accept for a currency.
pub fn currency_decimals(currency: &str) -> u32 {
    match currency.to_uppercase().as_str() {
        "IDR" => 0,
        _ => 2,
    }
}

/// Validate a transfer amount for the given remittance currency.
pub fn validate_amount(amount: Decimal, currency: &str) -> Result<(), FieldError> {
    if amount <= Decimal::ZERO {
        return Err(FieldError::MustBePositive);
    }

    let max = currency_decimals(currency);
    if amount.normalize().scale() > max {
        return Err(FieldError::TooManyDecimals { max });
    }

    Ok(())
}
