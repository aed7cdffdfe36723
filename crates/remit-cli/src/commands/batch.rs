//! Batch validation for multiple order files.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use remit_core::{OrderValidator, PaymentOrder, ValidationIssue};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input files or glob pattern
    #[arg(required = true)]
    input: String,

    /// Write a summary CSV to this path
    #[arg(long)]
    summary: Option<PathBuf>,

    /// Continue past unreadable files
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome for a single order file.
struct FileResult {
    path: PathBuf,
    order_number: Option<String>,
    issues: Vec<ValidationIssue>,
    error: Option<String>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    // Expand glob pattern
    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("json"))
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!("{} Found {} order files", style("ℹ").blue(), files.len());

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")
            .unwrap()
            .progress_chars("=>-"),
    );

    let validator = OrderValidator::new()
        .with_iban_validation(config.validation.validate_iban)
        .with_bic_country_check(config.validation.check_bic_country);

    let mut results = Vec::with_capacity(files.len());
    for path in files {
        match read_order(&path) {
            Ok(mut order) => {
                if order.currency.is_empty() {
                    order.currency = config.validation.default_currency.clone();
                }
                let issues = validator.validate(&order);
                results.push(FileResult {
                    path,
                    order_number: Some(order.order_number),
                    issues,
                    error: None,
                });
            }
            Err(e) => {
                if args.continue_on_error {
                    warn!("failed to read {}: {}", path.display(), e);
                    results.push(FileResult {
                        path,
                        order_number: None,
                        issues: Vec::new(),
                        error: Some(e.to_string()),
                    });
                } else {
                    anyhow::bail!("failed to read {}: {}", path.display(), e);
                }
            }
        }
        pb.inc(1);
    }
    pb.finish_with_message("Complete");

    let valid = results
        .iter()
        .filter(|r| r.error.is_none() && r.issues.is_empty())
        .count();
    let invalid = results.iter().filter(|r| !r.issues.is_empty()).count();
    let unreadable = results.iter().filter(|r| r.error.is_some()).count();

    if let Some(summary_path) = &args.summary {
        write_summary(summary_path, &results)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    println!();
    println!(
        "{} Checked {} files in {:?}",
        style("✓").green(),
        results.len(),
        start.elapsed()
    );
    println!(
        "   {} valid, {} invalid, {} unreadable",
        style(valid).green(),
        style(invalid).yellow(),
        style(unreadable).red()
    );

    for result in results.iter().filter(|r| !r.issues.is_empty()) {
        println!();
        println!("{}:", result.path.display());
        for issue in &result.issues {
            println!("  - {}", issue);
        }
    }

    Ok(())
}

fn read_order(path: &Path) -> anyhow::Result<PaymentOrder> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

fn write_summary(path: &Path, results: &[FileResult]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["filename", "order_number", "status", "issues"])?;

    for result in results {
        let filename = result
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");

        let status = if result.error.is_some() {
            "unreadable"
        } else if result.issues.is_empty() {
            "valid"
        } else {
            "invalid"
        };

        let issues = result
            .issues
            .iter()
            .map(|i| i.to_string())
            .collect::<Vec<_>>()
            .join("; ");

        wtr.write_record([
            filename,
            result.order_number.as_deref().unwrap_or(""),
            status,
            &issues,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
