//! Product command implementation
//!
//! Values a used product through the product pipeline, with a fixed or a
//! predicted depreciation rate.

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};
use valuer_models::pipeline::{ProductValuation, ValuationBreakdown};

use super::parse_factors;
use crate::config::ValuerConfig;
use crate::output;
use crate::{CliError, Result};

/// Arguments of `valuer product`
#[derive(Debug, Clone, Args)]
pub struct ProductArgs {
    /// Product category
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Original purchase value
    #[arg(long)]
    pub original_value: f64,

    /// Years in use
    #[arg(long)]
    pub years_used: f64,

    /// Annual depreciation rate (fraction)
    #[arg(long, required_unless_present = "predict_rate")]
    pub depreciation_rate: Option<f64>,

    /// Uniqueness score in [0, 1]
    #[arg(long, default_value_t = 0.0)]
    pub uniqueness: f64,

    /// Preciousness score in [0, 1]
    #[arg(long, default_value_t = 0.0)]
    pub preciousness: f64,

    /// Market trend factor; looked up from the configured trends when omitted
    #[arg(long)]
    pub market_trend: Option<f64>,

    /// Additional factor as NAME=VALUE, applied in the order given
    #[arg(long = "factor", value_name = "NAME=VALUE")]
    pub factors: Vec<String>,

    /// Predict the depreciation rate with the configured rate model
    #[arg(long, conflicts_with = "depreciation_rate")]
    pub predict_rate: bool,
}

/// Result of `valuer product`
#[derive(Debug, Clone, Serialize)]
pub struct ProductReport {
    pub category: String,
    pub depreciation_rate: f64,
    pub rate_predicted: bool,
    pub market_trend_factor: f64,
    pub breakdown: ValuationBreakdown<f64>,
    pub value: f64,
}

/// Build the product valuation described by `args`
pub fn build(args: &ProductArgs, config: &ValuerConfig) -> Result<ProductValuation<f64>> {
    let mut builder = ProductValuation::builder()
        .category(args.category.as_str())
        .original_value(args.original_value)
        .years_used(args.years_used)
        .uniqueness_score(args.uniqueness)
        .preciousness_score(args.preciousness)
        .additional_factors(parse_factors(&args.factors)?);

    builder = match args.market_trend {
        Some(factor) => builder.market_trend_factor(factor),
        None => builder.market_trend_from(&config.trend_table()),
    };

    let product = if args.predict_rate {
        let model = config.rate_model.as_ref().ok_or_else(|| {
            CliError::InvalidArgument(
                "--predict-rate needs a [rate_model] section in the configuration".to_string(),
            )
        })?;
        builder.build_with_predictor(model)?
    } else {
        if let Some(rate) = args.depreciation_rate {
            builder = builder.depreciation_rate(rate);
        }
        builder.build()?
    };

    if let Err(e) = product.validate() {
        warn!(error = %e, "Product parameters outside the expected domain");
    }

    Ok(product)
}

/// Compute the product report
pub fn compute(args: &ProductArgs, config: &ValuerConfig) -> Result<ProductReport> {
    let product = build(args, config)?;
    let breakdown = product.valuation_breakdown();

    Ok(ProductReport {
        category: product.category().to_string(),
        depreciation_rate: product.depreciation_rate(),
        rate_predicted: args.predict_rate,
        market_trend_factor: product.market_trend_factor(),
        value: breakdown.value,
        breakdown,
    })
}

/// Run the product command
pub fn run(args: &ProductArgs, config: &ValuerConfig) -> Result<()> {
    info!(category = %args.category, factors = args.factors.len(), "Valuing product");
    let report = compute(args, config)?;
    info!(value = report.value, "Product valued");
    output::emit(config.output_format, "Product valuation", &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use valuer_models::providers::LinearRatePredictor;

    fn reference_args() -> ProductArgs {
        ProductArgs {
            category: "electronics".to_string(),
            original_value: 1000.0,
            years_used: 10.0,
            depreciation_rate: Some(0.1),
            uniqueness: 0.8,
            preciousness: 0.6,
            market_trend: Some(1.2),
            factors: Vec::new(),
            predict_rate: false,
        }
    }

    #[test]
    fn test_reference_product() {
        let report = compute(&reference_args(), &ValuerConfig::default()).unwrap();
        assert_eq!(report.value, 691.22);
        assert_eq!(report.breakdown.steps.len(), 4);
        assert!(!report.rate_predicted);
    }

    #[test]
    fn test_factors_in_order() {
        let mut args = reference_args();
        args.factors = vec!["brand_value=1.1".to_string(), "special_edition=1.05".to_string()];
        let report = compute(&args, &ValuerConfig::default()).unwrap();
        let labels: Vec<&str> = report
            .breakdown
            .steps
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels[4..], ["brand_value", "special_edition"]);
        assert_eq!(report.value, 798.36);
    }

    #[test]
    fn test_bad_factor() {
        let mut args = reference_args();
        args.factors = vec!["brand_value".to_string()];
        assert!(matches!(
            compute(&args, &ValuerConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_trend_from_config() {
        let mut args = reference_args();
        args.market_trend = None;
        let mut config = ValuerConfig::default();
        config.market_trends.insert("electronics".to_string(), 1.2);
        let report = compute(&args, &config).unwrap();
        assert_eq!(report.market_trend_factor, 1.2);
        assert_eq!(report.value, 691.22);
    }

    #[test]
    fn test_trend_defaults_to_neutral() {
        let mut args = reference_args();
        args.market_trend = None;
        let report = compute(&args, &ValuerConfig::default()).unwrap();
        assert_eq!(report.market_trend_factor, 1.0);
    }

    #[test]
    fn test_predict_rate() {
        let mut args = reference_args();
        args.depreciation_rate = None;
        args.predict_rate = true;
        let config = ValuerConfig {
            rate_model: Some(LinearRatePredictor::new(0.1, [0.0; 4])),
            ..Default::default()
        };
        let report = compute(&args, &config).unwrap();
        assert!(report.rate_predicted);
        assert_eq!(report.depreciation_rate, 0.1);
        assert_eq!(report.value, 691.22);
    }

    #[test]
    fn test_predict_rate_without_model() {
        let mut args = reference_args();
        args.depreciation_rate = None;
        args.predict_rate = true;
        assert!(matches!(
            compute(&args, &ValuerConfig::default()),
            Err(CliError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_missing_rate() {
        let mut args = reference_args();
        args.depreciation_rate = None;
        assert!(matches!(
            compute(&args, &ValuerConfig::default()),
            Err(CliError::Valuation(_))
        ));
    }
}
