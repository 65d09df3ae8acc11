//! Service command implementation

use clap::Args;
use serde::Serialize;
use tracing::{info, warn};
use valuer_models::pipeline::{ServiceValuation, ValuationBreakdown};
use valuer_models::verification::verify_service_valuation;

use super::parse_factors;
use crate::config::ValuerConfig;
use crate::output;
use crate::Result;

/// Arguments of `valuer service`
#[derive(Debug, Clone, Args)]
pub struct ServiceArgs {
    /// Service category
    #[arg(long, default_value = "general")]
    pub category: String,

    /// Hourly rate
    #[arg(long)]
    pub base_rate: f64,

    /// Hours worked
    #[arg(long)]
    pub hours: f64,

    /// Expertise multiplier
    #[arg(long, default_value_t = 1.0)]
    pub expertise: f64,

    /// Demand multiplier
    #[arg(long, default_value_t = 1.0)]
    pub demand: f64,

    /// Additional factor as NAME=VALUE, applied in the order given
    #[arg(long = "factor", value_name = "NAME=VALUE")]
    pub factors: Vec<String>,

    /// Industry standard rate to verify the result against
    #[arg(long)]
    pub industry_rate: Option<f64>,
}

/// Result of `valuer service`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceReport {
    pub category: String,
    pub breakdown: ValuationBreakdown<f64>,
    pub value: f64,
    pub industry_rate: Option<f64>,
    pub within_industry_band: Option<bool>,
}

/// Compute the service report
pub fn compute(args: &ServiceArgs) -> Result<ServiceReport> {
    let service = ServiceValuation::builder()
        .category(args.category.as_str())
        .base_rate(args.base_rate)
        .hours(args.hours)
        .expertise_level(args.expertise)
        .demand_factor(args.demand)
        .additional_factors(parse_factors(&args.factors)?)
        .build()?;

    if let Err(e) = service.validate() {
        warn!(error = %e, "Service parameters outside the expected domain");
    }

    let breakdown = service.valuation_breakdown();
    let value = breakdown.value;

    Ok(ServiceReport {
        category: service.category().to_string(),
        breakdown,
        value,
        industry_rate: args.industry_rate,
        within_industry_band: args
            .industry_rate
            .map(|rate| verify_service_valuation(value, rate)),
    })
}

/// Run the service command
pub fn run(args: &ServiceArgs, config: &ValuerConfig) -> Result<()> {
    info!(category = %args.category, hours = args.hours, "Valuing service");
    let report = compute(args)?;
    info!(value = report.value, "Service valued");
    output::emit(config.output_format, "Service valuation", &report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_args() -> ServiceArgs {
        ServiceArgs {
            category: "consulting".to_string(),
            base_rate: 50.0,
            hours: 10.0,
            expertise: 1.5,
            demand: 1.2,
            factors: Vec::new(),
            industry_rate: None,
        }
    }

    #[test]
    fn test_reference_service() {
        let report = compute(&reference_args()).unwrap();
        assert_eq!(report.value, 900.0);
        assert_eq!(report.breakdown.base, 500.0);
        assert_eq!(report.within_industry_band, None);
    }

    #[test]
    fn test_with_factors_and_verification() {
        let mut args = reference_args();
        args.factors = vec![
            "specialization=1.1".to_string(),
            "customer_ratings=1.05".to_string(),
        ];
        args.industry_rate = Some(1000.0);
        let report = compute(&args).unwrap();
        assert_eq!(report.value, 1039.5);
        assert_eq!(report.within_industry_band, Some(true));
    }

    #[test]
    fn test_outside_industry_band() {
        let mut args = reference_args();
        args.industry_rate = Some(55.0);
        let report = compute(&args).unwrap();
        assert_eq!(report.within_industry_band, Some(false));
    }

    #[test]
    fn test_zero_industry_rate() {
        let mut args = reference_args();
        args.industry_rate = Some(0.0);
        assert_eq!(compute(&args).unwrap().within_industry_band, Some(false));
    }
}
