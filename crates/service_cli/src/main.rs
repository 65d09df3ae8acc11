//! Valuer CLI - Command Line Valuation of Assets, Products and Services
//!
//! This is the operational entry point for the valuer crates.
//!
//! # Commands
//!
//! - `valuer asset` - Run a depreciation / appreciation formula workflow
//! - `valuer product` - Value a used product through the product pipeline
//! - `valuer service` - Value a service engagement
//! - `valuer estimate <name>` - Value a product by name and category
//! - `valuer classify <name>` - Show a product's category and profile
//! - `valuer verify-product` / `valuer verify-service` - Range checks
//!
//! # Architecture
//!
//! As the **S**ervice layer, this crate loads configuration, installs
//! logging and drives `valuer_core` and `valuer_models`.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use commands::asset::AssetArgs;
use commands::classify::ClassifyArgs;
use commands::estimate::EstimateArgs;
use commands::product::ProductArgs;
use commands::service::ServiceArgs;
use commands::verify::{VerifyProductArgs, VerifyServiceArgs};
use config::{build_config, CliArgs};

/// Asset, product and service valuation
#[derive(Parser)]
#[command(name = "valuer")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path (TOML format)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error) [env: VALUER_LOG_LEVEL]
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Output format (table, json) [env: VALUER_OUTPUT_FORMAT]
    #[arg(long, global = true)]
    format: Option<String>,

    /// Annual inflation rate for asset and estimate results [env: VALUER_INFLATION_RATE]
    #[arg(long, global = true, allow_negative_numbers = true)]
    inflation_rate: Option<f64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Value an asset with a depreciation or appreciation formula
    Asset(AssetArgs),

    /// Value a used product
    Product(ProductArgs),

    /// Value a service engagement
    Service(ServiceArgs),

    /// Estimate a product's value from its name
    Estimate(EstimateArgs),

    /// Show the category, value trend and profile of a product
    Classify(ClassifyArgs),

    /// Check a product valuation against a market range
    VerifyProduct(VerifyProductArgs),

    /// Check a service valuation against an industry rate
    VerifyService(VerifyServiceArgs),
}

impl From<&Cli> for CliArgs {
    fn from(cli: &Cli) -> Self {
        let log_level = match (&cli.log_level, cli.verbose) {
            (Some(level), _) => Some(level.clone()),
            (None, true) => Some("debug".to_string()),
            (None, false) => None,
        };
        CliArgs {
            config_file: cli.config.clone(),
            log_level,
            output_format: cli.format.clone(),
            inflation_rate: cli.inflation_rate,
        }
    }
}

fn init_tracing(log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&CliArgs::from(&cli))?;

    // Initialise tracing
    init_tracing(config.log_level.as_filter_str());

    info!("Valuer v{}", env!("CARGO_PKG_VERSION"));
    debug!(
        log_level = %config.log_level,
        output_format = %config.output_format,
        inflation_rate = ?config.inflation_rate,
        market_prices = config.market_prices.len(),
        rate_model = config.rate_model.is_some(),
        "Configuration loaded"
    );

    match &cli.command {
        Commands::Asset(args) => commands::asset::run(args, &config),
        Commands::Product(args) => commands::product::run(args, &config),
        Commands::Service(args) => commands::service::run(args, &config),
        Commands::Estimate(args) => commands::estimate::run(args, &config),
        Commands::Classify(args) => commands::classify::run(args, &config),
        Commands::VerifyProduct(args) => commands::verify::run_product(args, &config),
        Commands::VerifyService(args) => commands::verify::run_service(args, &config),
    }
}
