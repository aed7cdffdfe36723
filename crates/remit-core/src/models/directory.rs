//! Country and BIC directory types.
//!
//! These mirror the upstream directory service records. The core consumes
//! already-fetched lists and performs no network calls of its own.

use serde::{Deserialize, Serialize};

/// A country entry from the directory service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Country {
    /// Two-letter country code.
    pub code: String,
    /// Display name.
    pub name: String,
}

/// A BIC directory record as returned by the service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BicRecord {
    /// BIC/SWIFT code.
    pub bic_swift_cd: String,

    /// Institution name.
    pub nm: String,

    #[serde(default)]
    pub addr1: Option<String>,

    #[serde(default)]
    pub addr2: Option<String>,

    #[serde(default)]
    pub addr3: Option<String>,

    #[serde(default)]
    pub city_nm: Option<String>,

    #[serde(default)]
    pub is_delete: bool,

    #[serde(default)]
    pub is_inactive: bool,
}

impl BicRecord {
    /// Whether the record is selectable.
    pub fn is_active(&self) -> bool {
        !self.is_delete && !self.is_inactive
    }
}

/// Keep only active records from a directory response.
pub fn active_records(records: Vec<BicRecord>) -> Vec<BicRecord> {
    records.into_iter().filter(|r| r.is_active()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_service_shape() {
        let json = r#"[
            {"bicSwiftCd": "DEUTDEFF", "nm": "Deutsche Bank", "cityNm": "Frankfurt"},
            {"bicSwiftCd": "DRESDEFF", "nm": "Dresdner", "isDelete": true},
            {"bicSwiftCd": "COBADEFF", "nm": "Commerzbank", "isInactive": true}
        ]"#;

        let records: Vec<BicRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].bic_swift_cd, "DEUTDEFF");
        assert_eq!(records[0].city_nm.as_deref(), Some("Frankfurt"));

        let active = active_records(records);
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].nm, "Deutsche Bank");
    }
}
