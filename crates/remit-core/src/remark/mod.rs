//! Payment remark assembly and validation.
//!
//! Two mutually exclusive input modes: a manually typed remark validated
//! against the Latin charset, or a template assembled from document
//! references. Both produce the free-text remark the receiving rail parses
//! positionally.

pub mod dates;
pub mod template;

pub use dates::{ParsedDate, parse_date};
pub use template::{DocumentLine, DocumentType, RemarkTemplate};

use serde::{Deserialize, Serialize};

use crate::error::RemarkError;
use crate::order::rules::validate_latin_text;

/// Remark length ceiling imposed by the receiving rails.
pub const REMARK_MAX_LEN: usize = 500;

/// A payment remark in either input mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Remark {
    /// Free text typed by the user.
    Manual { text: String },
    /// Assembled from a document template.
    Template(RemarkTemplate),
}

impl Remark {
    /// Live preview text for the current mode.
    pub fn text(&self) -> String {
        match self {
            Remark::Manual { text } => text.clone(),
            Remark::Template(template) => template.assemble(),
        }
    }

    /// Validate the remark, returning the final text sent to the rail.
    pub fn validate(&self) -> Result<String, RemarkError> {
        match self {
            Remark::Manual { text } => {
                validate_latin_text(text, REMARK_MAX_LEN)?;
                Ok(text.clone())
            }
            Remark::Template(template) => template.validate(),
        }
    }
}
