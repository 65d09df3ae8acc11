//! Estimate command implementation
//!
//! Values a product by name: configured market price first, category
//! formula otherwise, then the configured inflation rate.

use clap::Args;
use tracing::info;
use valuer_core::traits::{InflationSource, PriceFetcher};
use valuer_models::asset::{AssetValuation, AssetValuator};
use valuer_models::providers::{FixedInflation, NoInflation};

use crate::config::ValuerConfig;
use crate::output;
use crate::{CliError, Result};

/// Arguments of `valuer estimate`
#[derive(Debug, Clone, Args)]
pub struct EstimateArgs {
    /// Product name, used for categorisation and price lookup
    pub product_name: String,

    /// Original purchase price
    #[arg(long)]
    pub initial_price: f64,

    /// Years in use
    #[arg(short, long)]
    pub years: f64,
}

fn valuate_with<F, I>(
    valuator: AssetValuator<f64, F, I>,
    args: &EstimateArgs,
) -> AssetValuation<f64>
where
    F: PriceFetcher<f64>,
    I: InflationSource<f64>,
{
    valuator.valuate(&args.product_name, args.initial_price, args.years)
}

/// Compute the estimate
pub fn compute(args: &EstimateArgs, config: &ValuerConfig) -> Result<AssetValuation<f64>> {
    if args.product_name.trim().is_empty() {
        return Err(CliError::InvalidArgument(
            "Product name must not be empty".to_string(),
        ));
    }

    let prices = config.price_table();
    let valuation = match config.inflation_rate {
        Some(rate) => valuate_with(
            AssetValuator::with_sources(prices, FixedInflation::new(rate)),
            args,
        ),
        None => valuate_with(AssetValuator::with_sources(prices, NoInflation), args),
    };
    Ok(valuation)
}

/// Run the estimate command
pub fn run(args: &EstimateArgs, config: &ValuerConfig) -> Result<()> {
    info!(product = %args.product_name, years = args.years, "Estimating value");
    let valuation = compute(args, config)?;
    info!(
        category = %valuation.category,
        source = ?valuation.source,
        value = valuation.adjusted_value,
        "Value estimated"
    );
    output::emit(config.output_format, "Asset estimate", &valuation)
}
