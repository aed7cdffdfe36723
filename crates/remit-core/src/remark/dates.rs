//! Document date normalization for remark assembly.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_DMY_SLASH: Regex = Regex::new(r"^(\d{2})/(\d{2})/(\d{4})$").unwrap();
    static ref DATE_YMD_DASH: Regex = Regex::new(r"^(\d{4})-(\d{2})-(\d{2})$").unwrap();
    static ref DATE_DMY_DOT: Regex = Regex::new(r"^(\d{2})\.(\d{2})\.(\d{4})$").unwrap();
}

/// A document date normalized to `DD/MM/YYYY`.
///
/// Only the textual shape is checked; out-of-range day or month values pass
/// through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDate {
    pub day: String,
    pub month: String,
    pub year: String,
    /// Always `DD/MM/YYYY`.
    pub formatted: String,
}

/// Parse a document date in one of the three accepted shapes.
///
/// Tried in order: `DD/MM/YYYY`, `YYYY-MM-DD`, `DD.MM.YYYY`; first match
/// wins. Anything else is `None` and the caller decides how to surface it.
pub fn parse_date(input: &str) -> Option<ParsedDate> {
    if let Some(caps) = DATE_DMY_SLASH.captures(input) {
        return Some(ParsedDate {
            day: caps[1].to_string(),
            month: caps[2].to_string(),
            year: caps[3].to_string(),
            formatted: input.to_string(),
        });
    }

    if let Some(caps) = DATE_YMD_DASH.captures(input) {
        return Some(ParsedDate {
            day: caps[3].to_string(),
            month: caps[2].to_string(),
            year: caps[1].to_string(),
            formatted: format!("{}/{}/{}", &caps[3], &caps[2], &caps[1]),
        });
    }

    if let Some(caps) = DATE_DMY_DOT.captures(input) {
        return Some(ParsedDate {
            day: caps[1].to_string(),
            month: caps[2].to_string(),
            year: caps[3].to_string(),
            formatted: format!("{}/{}/{}", &caps[1], &caps[2], &caps[3]),
        });
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_dmy_slash() {
        let parsed = parse_date("25/12/2024").unwrap();
        assert_eq!(parsed.day, "25");
        assert_eq!(parsed.month, "12");
        assert_eq!(parsed.year, "2024");
        assert_eq!(parsed.formatted, "25/12/2024");
    }

    #[test]
    fn test_parse_date_ymd_dash() {
        let parsed = parse_date("2024-12-25").unwrap();
        assert_eq!(parsed.day, "25");
        assert_eq!(parsed.month, "12");
        assert_eq!(parsed.year, "2024");
        assert_eq!(parsed.formatted, "25/12/2024");
    }

    #[test]
    fn test_parse_date_dmy_dot() {
        let parsed = parse_date("25.12.2024").unwrap();
        assert_eq!(parsed.formatted, "25/12/2024");
    }

    #[test]
    fn test_parse_date_rejects_other_shapes() {
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date("25/12/24"), None);
        assert_eq!(parse_date("5/12/2024"), None);
        assert_eq!(parse_date("2024/12/25"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_date_is_shape_only() {
        // No calendar check: a well-shaped nonsense date still parses.
        let parsed = parse_date("99/99/9999").unwrap();
        assert_eq!(parsed.formatted, "99/99/9999");
    }
}
