//! CLI for validating and exporting cross-border remittance orders.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{batch, config, export, remark, validate};

/// Remittance order tools - validate payment fields and build bank instruction files
#[derive(Parser)]
#[command(name = "remit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single order file
    Validate(validate::ValidateArgs),

    /// Validate multiple order files
    Batch(batch::BatchArgs),

    /// Export orders to a bank instruction file
    Export(export::ExportArgs),

    /// Preview and validate a payment remark
    Remark(remark::RemarkArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Validate(args) => validate::run(args, cli.config.as_deref()),
        Commands::Batch(args) => batch::run(args, cli.config.as_deref()),
        Commands::Export(args) => export::run(args),
        Commands::Remark(args) => remark::run(args, cli.config.as_deref()),
        Commands::Config(args) => config::run(args),
    }
}
