//! Remark assembly from a document template.

use serde::{Deserialize, Serialize};

use crate::error::RemarkError;

use super::REMARK_MAX_LEN;
use super::dates::parse_date;

/// Document types a remark may reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    /// Invoice, short form.
    #[serde(rename = "inv")]
    Inv,
    /// Invoice, full form.
    #[serde(rename = "invoice")]
    Invoice,
    #[serde(rename = "contract")]
    Contract,
    #[serde(rename = "proforma invoice")]
    ProformaInvoice,
}

impl DocumentType {
    /// Code emitted into the remark text.
    pub fn code(&self) -> &'static str {
        match self {
            DocumentType::Inv => "inv",
            DocumentType::Invoice => "invoice",
            DocumentType::Contract => "contract",
            DocumentType::ProformaInvoice => "proforma invoice",
        }
    }

    /// Display label for selection lists.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::Inv | DocumentType::Invoice => "Invoice",
            DocumentType::Contract => "Contract",
            DocumentType::ProformaInvoice => "Proforma Invoice",
        }
    }

    /// Parse a document type code.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "inv" => Some(DocumentType::Inv),
            "invoice" => Some(DocumentType::Invoice),
            "contract" => Some(DocumentType::Contract),
            "proforma invoice" => Some(DocumentType::ProformaInvoice),
            _ => None,
        }
    }
}

impl Default for DocumentType {
    fn default() -> Self {
        Self::Inv
    }
}

/// One document reference on the remark template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentLine {
    /// Document type code.
    #[serde(rename = "type")]
    pub doc_type: DocumentType,

    /// Document number, up to 32 characters in the host form.
    pub number: String,

    /// Raw date text as entered.
    pub date: String,
}

impl DocumentLine {
    /// A line enters the remark only when both number and date are present.
    pub fn is_complete(&self) -> bool {
        !self.number.is_empty() && !self.date.is_empty()
    }
}

/// Inputs for template-mode remark assembly.
///
/// The host form rebuilds the remark from this on every relevant change;
/// assembly itself is a pure function of the fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RemarkTemplate {
    /// Leading payment label; `goods_label` is capped at 40 characters by
    /// the host form via `validate_latin_text`.
    pub payment_label: String,
    pub goods_label: String,

    /// Ordered document references; never empty.
    pub documents: Vec<DocumentLine>,
}

impl Default for RemarkTemplate {
    fn default() -> Self {
        Self {
            payment_label: "Payment".to_string(),
            goods_label: "goods".to_string(),
            documents: vec![DocumentLine::default()],
        }
    }
}

impl RemarkTemplate {
    /// Assemble the remark text.
    ///
    /// Lines missing a number or a date are skipped. A line whose date does
    /// not parse keeps its raw date text. With no qualifying line the result
    /// is the empty string, prefix included: a remark without a document
    /// reference is not a valid partial remark.
    pub fn assemble(&self) -> String {
        let fragments: Vec<String> = self
            .documents
            .iter()
            .filter(|d| d.is_complete())
            .map(|d| {
                let date = parse_date(&d.date)
                    .map(|p| p.formatted)
                    .unwrap_or_else(|| d.date.clone());
                format!("{} {} dd {}", d.doc_type.code(), d.number, date)
            })
            .collect();

        if fragments.is_empty() {
            return String::new();
        }

        format!(
            "{} for {} under {}",
            self.payment_label,
            self.goods_label,
            fragments.join(", ")
        )
    }

    /// Assemble and validate, returning the final remark on success.
    pub fn validate(&self) -> Result<String, RemarkError> {
        let remark = self.assemble();
        if remark.is_empty() {
            return Err(RemarkError::MissingDocument);
        }
        if remark.chars().count() > REMARK_MAX_LEN {
            return Err(RemarkError::TooLong {
                max: REMARK_MAX_LEN,
            });
        }
        Ok(remark)
    }

    /// Append a fresh document line.
    pub fn add_document(&mut self) {
        self.documents.push(DocumentLine::default());
    }

    /// Remove the line at `index`, keeping at least one line.
    ///
    /// Returns false when the removal was refused.
    pub fn remove_document(&mut self, index: usize) -> bool {
        if self.documents.len() > 1 && index < self.documents.len() {
            self.documents.remove(index);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(doc_type: DocumentType, number: &str, date: &str) -> DocumentLine {
        DocumentLine {
            doc_type,
            number: number.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_assemble_single_document() {
        let template = RemarkTemplate {
            documents: vec![line(DocumentType::Inv, "24543", "2024-12-25")],
            ..Default::default()
        };
        assert_eq!(
            template.assemble(),
            "Payment for goods under inv 24543 dd 25/12/2024"
        );
    }

    #[test]
    fn test_assemble_multiple_documents() {
        let template = RemarkTemplate {
            documents: vec![
                line(DocumentType::Inv, "24543", "2024-12-25"),
                line(DocumentType::Contract, "C-9", "01/01/2025"),
            ],
            ..Default::default()
        };
        assert_eq!(
            template.assemble(),
            "Payment for goods under inv 24543 dd 25/12/2024, contract C-9 dd 01/01/2025"
        );
    }

    #[test]
    fn test_incomplete_lines_are_dropped() {
        let template = RemarkTemplate {
            documents: vec![
                line(DocumentType::Inv, "24543", ""),
                line(DocumentType::Contract, "", "01/01/2025"),
                line(DocumentType::Invoice, "77", "25.12.2024"),
            ],
            ..Default::default()
        };
        assert_eq!(
            template.assemble(),
            "Payment for goods under invoice 77 dd 25/12/2024"
        );
    }

    #[test]
    fn test_empty_template_yields_empty_string() {
        // The prefix is discarded entirely, whatever the labels say.
        let template = RemarkTemplate {
            payment_label: "Prepayment".to_string(),
            goods_label: "machinery".to_string(),
            documents: vec![line(DocumentType::Inv, "", "")],
        };
        assert_eq!(template.assemble(), "");
        assert_eq!(template.validate(), Err(RemarkError::MissingDocument));
    }

    #[test]
    fn test_unparseable_date_falls_back_to_raw_text() {
        let template = RemarkTemplate {
            documents: vec![line(DocumentType::Inv, "1", "sometime")],
            ..Default::default()
        };
        assert_eq!(
            template.assemble(),
            "Payment for goods under inv 1 dd sometime"
        );
    }

    #[test]
    fn test_validate_length_ceiling() {
        let mut template = RemarkTemplate::default();
        template.documents.clear();
        for i in 0..12 {
            template.documents.push(line(
                DocumentType::Inv,
                &format!("{}-{}", "N".repeat(30), i),
                "25/12/2024",
            ));
        }
        let remark = template.assemble();
        assert!(remark.chars().count() > REMARK_MAX_LEN);
        assert_eq!(
            template.validate(),
            Err(RemarkError::TooLong {
                max: REMARK_MAX_LEN
            })
        );
    }

    #[test]
    fn test_add_and_remove_documents() {
        let mut template = RemarkTemplate::default();
        assert_eq!(template.documents.len(), 1);

        template.add_document();
        assert_eq!(template.documents.len(), 2);

        assert!(template.remove_document(0));
        assert_eq!(template.documents.len(), 1);

        // The last line can never be removed.
        assert!(!template.remove_document(0));
        assert_eq!(template.documents.len(), 1);

        // Out-of-range indices are refused, not panicking.
        template.add_document();
        assert!(!template.remove_document(5));
        assert_eq!(template.documents.len(), 2);
    }

    #[test]
    fn test_document_type_codes() {
        assert_eq!(DocumentType::Inv.code(), "inv");
        assert_eq!(DocumentType::ProformaInvoice.code(), "proforma invoice");
        assert_eq!(DocumentType::Inv.label(), "Invoice");
        assert_eq!(DocumentType::Invoice.label(), "Invoice");
        assert_eq!(DocumentType::from_code("contract"), Some(DocumentType::Contract));
        assert_eq!(DocumentType::from_code("memo"), None);
    }
}
