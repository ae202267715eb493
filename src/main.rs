use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use muatan_cli::cli::{
    handle_amount_command, handle_bank_command, handle_secret_command, handle_settle_command,
    handle_statement_command,
};
use muatan_cli::config::{settings::DEFAULT_LOG_FILTER, Settings};

#[derive(Parser)]
#[command(
    name = "muatan",
    version,
    about = "Cargo settlement and field encryption for truck operators",
    long_about = "muatan settles truck cargo jobs (freight, balen and costs, less a 30% \
                  cut payment), prints truck statements from CSV records, and \
                  encrypts bank account numbers with the key in ENCRYPTION_KEY."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the settlement of one cargo job
    Settle(muatan_cli::cli::SettleArgs),

    /// Parse or format Indonesian Rupiah amounts
    #[command(subcommand)]
    Amount(muatan_cli::cli::AmountCommands),

    /// Print a truck statement from a CSV of cargo records
    Statement(muatan_cli::cli::StatementArgs),

    /// Encrypt, decrypt or mask single values
    #[command(subcommand)]
    Secret(muatan_cli::cli::SecretCommands),

    /// Register or reveal bank accounts
    #[command(subcommand)]
    Bank(muatan_cli::cli::BankCommands),
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_new(&settings.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let settings = Settings::from_env();
    init_tracing(&settings);

    let cli = Cli::parse();

    match cli.command {
        Commands::Settle(args) => handle_settle_command(args)?,
        Commands::Amount(cmd) => handle_amount_command(cmd)?,
        Commands::Statement(args) => handle_statement_command(args)?,
        Commands::Secret(cmd) => handle_secret_command(cmd)?,
        Commands::Bank(cmd) => handle_bank_command(cmd)?,
    }

    Ok(())
}
