//! Verification command implementations

use clap::Args;
use serde::Serialize;
use tracing::info;
use valuer_models::verification::{
    verify_product_valuation, verify_service_valuation, SERVICE_RATIO_LOWER, SERVICE_RATIO_UPPER,
};

use crate::config::ValuerConfig;
use crate::output;
use crate::Result;

/// Arguments of `valuer verify-product`
#[derive(Debug, Clone, Args)]
pub struct VerifyProductArgs {
    /// Computed valuation
    #[arg(long)]
    pub value: f64,

    /// Lower bound of the market range
    #[arg(long)]
    pub low: f64,

    /// Upper bound of the market range
    #[arg(long)]
    pub high: f64,
}

/// Arguments of `valuer verify-service`
#[derive(Debug, Clone, Args)]
pub struct VerifyServiceArgs {
    /// Computed valuation
    #[arg(long)]
    pub value: f64,

    /// Industry standard rate
    #[arg(long)]
    pub industry_rate: f64,
}

/// Result of `valuer verify-product`
#[derive(Debug, Clone, Serialize)]
pub struct ProductCheck {
    pub value: f64,
    pub low: f64,
    pub high: f64,
    pub within_range: bool,
}

/// Result of `valuer verify-service`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceCheck {
    pub value: f64,
    pub industry_rate: f64,
    pub ratio: Option<f64>,
    pub band: (f64, f64),
    pub within_band: bool,
}

/// Check a product valuation against a market range
pub fn check_product(args: &VerifyProductArgs) -> ProductCheck {
    ProductCheck {
        value: args.value,
        low: args.low,
        high: args.high,
        within_range: verify_product_valuation(args.value, (args.low, args.high)),
    }
}

/// Check a service valuation against an industry rate
pub fn check_service(args: &VerifyServiceArgs) -> ServiceCheck {
    let ratio = if args.industry_rate == 0.0 {
        None
    } else {
        Some(args.value / args.industry_rate)
    };
    ServiceCheck {
        value: args.value,
        industry_rate: args.industry_rate,
        ratio,
        band: (SERVICE_RATIO_LOWER, SERVICE_RATIO_UPPER),
        within_band: verify_service_valuation(args.value, args.industry_rate),
    }
}

/// Run the verify-product command
pub fn run_product(args: &VerifyProductArgs, config: &ValuerConfig) -> Result<()> {
    let check = check_product(args);
    info!(within_range = check.within_range, "Product valuation verified");
    output::emit(config.output_format, "Product verification", &check)
}

/// Run the verify-service command
pub fn run_service(args: &VerifyServiceArgs, config: &ValuerConfig) -> Result<()> {
    let check = check_service(args);
    info!(within_band = check.within_band, "Service valuation verified");
    output::emit(config.output_format, "Service verification", &check)
}
