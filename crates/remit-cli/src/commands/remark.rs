//! Remark command - preview and validate a payment remark.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;

use remit_core::{DocumentLine, DocumentType, Remark, RemarkTemplate};

/// Arguments for the remark command.
#[derive(Args)]
pub struct RemarkArgs {
    /// Remark file (JSON, manual or template mode)
    input: Option<PathBuf>,

    /// Document type code for a one-line template
    #[arg(long, default_value = "inv")]
    doc_type: String,

    /// Document number for a one-line template
    #[arg(long)]
    number: Option<String>,

    /// Document date (DD/MM/YYYY, YYYY-MM-DD or DD.MM.YYYY)
    #[arg(long)]
    date: Option<String>,
}

pub fn run(args: RemarkArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    let remark = if let Some(input) = &args.input {
        let content = fs::read_to_string(input)?;
        serde_json::from_str::<Remark>(&content)?
    } else {
        let doc_type = DocumentType::from_code(&args.doc_type)
            .ok_or_else(|| anyhow::anyhow!("unknown document type: {}", args.doc_type))?;

        Remark::Template(RemarkTemplate {
            payment_label: config.remark.payment_label.clone(),
            goods_label: config.remark.goods_label.clone(),
            documents: vec![DocumentLine {
                doc_type,
                number: args.number.unwrap_or_default(),
                date: args.date.unwrap_or_default(),
            }],
        })
    };

    let preview = remark.text();
    if !preview.is_empty() {
        println!("{}", preview);
    }

    match remark.validate() {
        Ok(_) => {
            println!(
                "{} Remark is valid ({} characters)",
                style("✓").green(),
                preview.chars().count()
            );
            Ok(())
        }
        Err(e) => {
            println!("{} {}", style("✗").red(), e);
            anyhow::bail!("remark validation failed")
        }
    }
}
