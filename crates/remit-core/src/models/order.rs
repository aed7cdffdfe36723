//! Payment order data model.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A cross-border payment order ready for instruction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentOrder {
    /// Order number assigned by the platform.
    pub order_number: String,

    /// Client identifier.
    pub client_id: String,

    /// Account to debit.
    pub debit_account: String,

    /// Beneficiary account number or IBAN.
    pub destination_account: String,

    /// Remittance currency code.
    pub currency: String,

    /// Transfer amount.
    pub amount: Decimal,

    /// Beneficiary details.
    pub beneficiary: Beneficiary,

    /// Beneficiary bank details.
    pub bank: BankDetails,

    /// Free-text payment remark sent to the rail.
    pub remark: String,

    /// Client payment reference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    /// Requested value date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value_date: Option<NaiveDate>,
}

/// Beneficiary of a payment order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Beneficiary {
    /// Full name.
    pub name: String,

    /// Single-line address; chunked into 35-character lines on export.
    pub address: String,

    /// Two-letter destination country code.
    pub country: String,
}

/// Beneficiary bank identification.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BankDetails {
    /// BIC/SWIFT code.
    pub bic: String,

    /// Bank display name.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_order_json_round_trip() {
        let json = r#"{
            "order_number": "RM-2025-0001",
            "client_id": "C-100",
            "debit_account": "1002003001",
            "destination_account": "DE89370400440532013000",
            "currency": "EUR",
            "amount": "150.25",
            "beneficiary": {
                "name": "ACME Trading GmbH",
                "address": "Mainzer Landstrasse 11, Frankfurt",
                "country": "DE"
            },
            "bank": {
                "bic": "DEUTDEFF",
                "name": "Deutsche Bank"
            },
            "remark": "Payment for goods under inv 24543 dd 25/12/2024"
        }"#;

        let order: PaymentOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.order_number, "RM-2025-0001");
        assert_eq!(order.amount, Decimal::from_str("150.25").unwrap());
        assert_eq!(order.beneficiary.country, "DE");
        assert!(order.reference.is_none());

        let serialized = serde_json::to_string(&order).unwrap();
        let back: PaymentOrder = serde_json::from_str(&serialized).unwrap();
        assert_eq!(back.amount, order.amount);
        assert_eq!(back.bank.bic, order.bank.bic);
    }

    #[test]
    fn test_value_date_parses() {
        let json = r#"{
            "order_number": "RM-2",
            "client_id": "C-1",
            "debit_account": "1002003001",
            "destination_account": "0012345678",
            "currency": "USD",
            "amount": "10",
            "beneficiary": {"name": "A", "address": "B", "country": "US"},
            "bank": {"bic": "IRVTUS3N", "name": "BNY"},
            "remark": "Payment",
            "value_date": "2025-08-01"
        }"#;

        let order: PaymentOrder = serde_json::from_str(json).unwrap();
        assert_eq!(
            order.value_date,
            Some(chrono::NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
        );
    }
}
