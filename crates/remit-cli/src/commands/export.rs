//! Export command - write bank instruction files.

use std::fs;
use std::fs::File;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use remit_core::PaymentOrder;
use remit_core::export::{write_csv, write_txt};

/// Arguments for the export command.
#[derive(Args)]
pub struct ExportArgs {
    /// Orders file (JSON array)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file
    #[arg(short, long, required = true)]
    output: PathBuf,

    /// Instruction file format
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ExportFormat {
    /// Fixed-column CSV
    Csv,
    /// 73-field semicolon-delimited bank upload
    Txt,
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    if !args.input.exists() {
        anyhow::bail!("Orders file not found: {}", args.input.display());
    }

    let content = fs::read_to_string(&args.input)?;
    let orders: Vec<PaymentOrder> = serde_json::from_str(&content)?;

    if orders.is_empty() {
        anyhow::bail!("No orders in {}", args.input.display());
    }

    info!("exporting {} orders", orders.len());

    let file = File::create(&args.output)?;
    match args.format {
        ExportFormat::Csv => write_csv(&orders, file)?,
        ExportFormat::Txt => write_txt(&orders, file)?,
    }

    println!(
        "{} Wrote {} orders to {}",
        style("✓").green(),
        orders.len(),
        args.output.display()
    );

    Ok(())
}
