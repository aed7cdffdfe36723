//! Validate command - check a single order file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use remit_core::{OrderValidator, PaymentOrder};

/// Arguments for the validate command.
#[derive(Args)]
pub struct ValidateArgs {
    /// Order file (JSON)
    #[arg(required = true)]
    input: PathBuf,

    /// Exit successfully even when the order is invalid
    #[arg(long)]
    no_fail: bool,
}

pub fn run(args: ValidateArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Order file not found: {}", args.input.display());
    }

    let content = fs::read_to_string(&args.input)?;
    let mut order: PaymentOrder = serde_json::from_str(&content)?;
    if order.currency.is_empty() {
        order.currency = config.validation.default_currency.clone();
    }

    info!("validating order {}", order.order_number);

    let validator = OrderValidator::new()
        .with_iban_validation(config.validation.validate_iban)
        .with_bic_country_check(config.validation.check_bic_country);

    let issues = validator.validate(&order);

    if issues.is_empty() {
        println!(
            "{} Order {} is valid",
            style("✓").green(),
            order.order_number
        );
        return Ok(());
    }

    println!(
        "{} Order {} has {} issue(s):",
        style("✗").red(),
        order.order_number,
        issues.len()
    );
    for issue in &issues {
        println!("  - {}", issue);
    }

    if args.no_fail {
        Ok(())
    } else {
        anyhow::bail!("validation failed")
    }
}
