//! Configuration for validation behavior and remark defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RemitError, Result};

/// Main configuration for the remit tools.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemitConfig {
    /// Field validation configuration.
    pub validation: ValidationConfig,

    /// Remark template defaults.
    pub remark: RemarkConfig,
}

impl Default for RemitConfig {
    fn default() -> Self {
        Self {
            validation: ValidationConfig::default(),
            remark: RemarkConfig::default(),
        }
    }
}

/// Field validation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Enable IBAN validation for destination accounts in IBAN countries.
    pub validate_iban: bool,

    /// Require the BIC country to match the beneficiary country.
    pub check_bic_country: bool,

    /// Default currency when an order does not specify one.
    pub default_currency: String,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            validate_iban: true,
            check_bic_country: true,
            default_currency: "USD".to_string(),
        }
    }
}

/// Remark template defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemarkConfig {
    /// Payment label used by the remark template.
    pub payment_label: String,

    /// Goods label used by the remark template.
    pub goods_label: String,
}

impl Default for RemarkConfig {
    fn default() -> Self {
        Self {
            payment_label: "Payment".to_string(),
            goods_label: "goods".to_string(),
        }
    }
}

impl RemitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| RemitError::Config(e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| RemitError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}
