//! BIC/SWIFT code validation.

use crate::error::FieldError;

use super::patterns::BIC_FORMAT;

/// A structurally valid BIC with its embedded country code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedBic {
    /// Cleaned 8- or 11-character BIC.
    pub bic: String,
    /// Two-letter country code at positions 5-6.
    pub country: String,
}

/// Validate a BIC and cross-check its embedded country code.
///
/// `country` is the country selected on the order; `None` skips the
/// cross-check entirely.
pub fn validate_bic(bic: &str, country: Option<&str>) -> Result<ValidatedBic, FieldError> {
    if bic.trim().is_empty() {
        return Err(FieldError::Empty);
    }

    let clean: String = bic
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect::<String>()
        .to_uppercase();

    let len = clean.chars().count();
    if len != 8 && len != 11 {
        return Err(FieldError::BicLength);
    }
    if !BIC_FORMAT.is_match(&clean) {
        return Err(FieldError::BicFormat);
    }

    let bic_country: String = clean.chars().skip(4).take(2).collect();
    if let Some(selected) = country {
        let selected = selected.trim().to_uppercase();
        if selected != bic_country {
            return Err(FieldError::CountryMismatch {
                bic_country,
                selected,
            });
        }
    }

    Ok(ValidatedBic {
        bic: clean,
        country: bic_country,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_bic_8() {
        let checked = validate_bic("DEUTDEFF", Some("DE")).unwrap();
        assert_eq!(checked.bic, "DEUTDEFF");
        assert_eq!(checked.country, "DE");
    }

    #[test]
    fn test_valid_bic_11() {
        let checked = validate_bic("DEUTDEFF500", Some("DE")).unwrap();
        assert_eq!(checked.bic, "DEUTDEFF500");
        assert_eq!(checked.country, "DE");
    }

    #[test]
    fn test_cleans_input() {
        let checked = validate_bic(" deut deff ", None).unwrap();
        assert_eq!(checked.bic, "DEUTDEFF");
    }

    #[test]
    fn test_country_mismatch() {
        let err = validate_bic("DEUTDEFF", Some("FR")).unwrap_err();
        assert_eq!(
            err,
            FieldError::CountryMismatch {
                bic_country: "DE".to_string(),
                selected: "FR".to_string(),
            }
        );
        // The message names both codes.
        let message = err.to_string();
        assert!(message.contains("DE"));
        assert!(message.contains("FR"));
    }

    #[test]
    fn test_no_country_skips_cross_check() {
        assert!(validate_bic("DEUTDEFF", None).is_ok());
    }

    #[test]
    fn test_bad_length() {
        assert_eq!(validate_bic("DEUTDEFF5", None), Err(FieldError::BicLength));
        assert_eq!(validate_bic("DEUT", None), Err(FieldError::BicLength));
    }

    #[test]
    fn test_bad_format() {
        // Digits in the first six positions are not allowed.
        assert_eq!(validate_bic("12UTDEFF", None), Err(FieldError::BicFormat));
        assert_eq!(validate_bic("DEU1DEFF", None), Err(FieldError::BicFormat));
    }

    #[test]
    fn test_empty() {
        assert_eq!(validate_bic("", Some("DE")), Err(FieldError::Empty));
    }
}
