//! Asset command implementation
//!
//! Runs one formula workflow: derive salvage value and useful life, value
//! the asset with the chosen method, then optionally adjust for inflation.

use clap::{Args, ValueEnum};
use serde::Serialize;
use tracing::info;
use valuer_core::formulas::{
    appreciation, calculate_salvage_value, calculate_straight_line_rate, calculate_useful_life,
    declining_balance_depreciation, inflation_adjustment, straight_line_depreciation,
    DecliningBalance, UsefulLife, DOUBLE_DECLINING_FACTOR,
};
use valuer_core::types::params::{check_depreciation_rate, check_non_negative, check_rate};

use crate::config::ValuerConfig;
use crate::output;
use crate::{CliError, Result};

/// Formula applied by the asset command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AssetMethod {
    /// Straight-line towards the salvage value
    StraightLine,
    /// Fixed-rate declining balance
    Declining,
    /// Factor over useful life, stepped yearly
    DoubleDeclining,
    /// Compound appreciation
    Appreciation,
}

/// Arguments of `valuer asset`
#[derive(Debug, Clone, Args)]
pub struct AssetArgs {
    /// Valuation method
    #[arg(short, long, value_enum)]
    pub method: AssetMethod,

    /// Purchase price
    #[arg(long)]
    pub initial_cost: f64,

    /// Age of the asset in years
    #[arg(short, long)]
    pub years: f64,

    /// Salvage value as a fraction of the initial cost
    #[arg(long, default_value_t = 0.10)]
    pub salvage_pct: f64,

    /// Annual depreciation amount, used to derive the useful life
    #[arg(long)]
    pub annual_depreciation: Option<f64>,

    /// Useful life in years (takes precedence over --annual-depreciation)
    #[arg(long)]
    pub useful_life: Option<f64>,

    /// Acceleration factor for double-declining
    #[arg(long, default_value_t = DOUBLE_DECLINING_FACTOR)]
    pub factor: f64,

    /// Annual rate for declining or appreciation (fraction)
    #[arg(short, long)]
    pub rate: Option<f64>,
}

/// Result of `valuer asset`
#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub method: AssetMethod,
    pub initial_cost: f64,
    pub years: f64,
    pub salvage_value: f64,
    pub useful_life: Option<UsefulLife<f64>>,
    pub straight_line_rate_pct: Option<f64>,
    pub value: f64,
    pub inflation_rate: Option<f64>,
    pub inflation_adjusted: Option<f64>,
}

fn require_useful_life(life: Option<UsefulLife<f64>>, method: &str) -> Result<UsefulLife<f64>> {
    life.ok_or_else(|| {
        CliError::InvalidArgument(format!(
            "{} needs --useful-life or --annual-depreciation",
            method
        ))
    })
}

/// Compute the asset report
pub fn compute(args: &AssetArgs, config: &ValuerConfig) -> Result<AssetReport> {
    check_non_negative("initial_cost", args.initial_cost)?;
    check_non_negative("years", args.years)?;
    if let Some(rate) = args.rate {
        check_rate("rate", rate)?;
        if args.method == AssetMethod::Declining {
            check_depreciation_rate("rate", rate)?;
        }
    }

    let salvage = calculate_salvage_value(args.initial_cost, args.salvage_pct);

    let useful_life = match (args.useful_life, args.annual_depreciation) {
        (Some(years), _) => Some(UsefulLife::Years(years)),
        (None, Some(annual)) => Some(calculate_useful_life(args.initial_cost, salvage, annual)),
        (None, None) => None,
    };
    let straight_line_rate_pct = useful_life.map(|life| calculate_straight_line_rate(life.years()));

    let value = match args.method {
        AssetMethod::StraightLine => {
            let life = require_useful_life(useful_life, "straight-line")?;
            straight_line_depreciation(args.initial_cost, salvage, life.years(), args.years)
        }
        AssetMethod::Declining => {
            let rate = match (args.rate, straight_line_rate_pct) {
                (Some(rate), _) => rate,
                (None, Some(pct)) => pct / 100.0,
                (None, None) => {
                    return Err(CliError::InvalidArgument(
                        "declining needs --rate, --useful-life or --annual-depreciation"
                            .to_string(),
                    ))
                }
            };
            declining_balance_depreciation(
                args.initial_cost,
                salvage,
                args.years,
                DecliningBalance::fixed_rate(rate),
            )
        }
        AssetMethod::DoubleDeclining => {
            let life = require_useful_life(useful_life, "double-declining")?;
            declining_balance_depreciation(
                args.initial_cost,
                salvage,
                args.years,
                DecliningBalance::with_factor(args.factor, life.years()),
            )
        }
        AssetMethod::Appreciation => {
            let rate = args.rate.ok_or_else(|| {
                CliError::InvalidArgument("appreciation needs --rate".to_string())
            })?;
            appreciation(args.initial_cost, rate, args.years)
        }
    };

    let inflation_adjusted = config
        .inflation_rate
        .map(|rate| inflation_adjustment(value, rate, args.years));

    Ok(AssetReport {
        method: args.method,
        initial_cost: args.initial_cost,
        years: args.years,
        salvage_value: salvage,
        useful_life,
        straight_line_rate_pct,
        value,
        inflation_rate: config.inflation_rate,
        inflation_adjusted,
    })
}

/// Run the asset command
pub fn run(args: &AssetArgs, config: &ValuerConfig) -> Result<()> {
    info!(
        method = ?args.method,
        initial_cost = args.initial_cost,
        years = args.years,
        "Valuing asset"
    );
    let report = compute(args, config)?;
    info!(value = report.value, "Asset valued");
    output::emit(config.output_format, "Asset valuation", &report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn args(method: AssetMethod) -> AssetArgs {
        AssetArgs {
            method,
            initial_cost: 1_000_000.0,
            years: 10.0,
            salvage_pct: 0.10,
            annual_depreciation: Some(30_000.0),
            useful_life: None,
            factor: DOUBLE_DECLINING_FACTOR,
            rate: None,
        }
    }

    fn with_inflation(rate: f64) -> ValuerConfig {
        ValuerConfig {
            inflation_rate: Some(rate),
            ..Default::default()
        }
    }

    #[test]
    fn test_straight_line_workflow() {
        let report = compute(&args(AssetMethod::StraightLine), &with_inflation(0.06)).unwrap();
        assert_eq!(report.salvage_value, 100_000.0);
        assert_eq!(report.useful_life, Some(UsefulLife::Years(30.0)));
        assert_eq!(report.straight_line_rate_pct, Some(3.33));
        assert_eq!(report.value, 700_000.0);
        assert_relative_eq!(
            report.inflation_adjusted.unwrap(),
            1_253_593.39,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_declining_uses_derived_rate() {
        let report = compute(&args(AssetMethod::Declining), &ValuerConfig::default()).unwrap();
        assert!(report.value > 712_000.0 && report.value < 713_500.0);
        assert_eq!(report.inflation_adjusted, None);
    }

    #[test]
    fn test_declining_explicit_rate() {
        let mut a = args(AssetMethod::Declining);
        a.initial_cost = 1000.0;
        a.rate = Some(0.1);
        let report = compute(&a, &ValuerConfig::default()).unwrap();
        assert_eq!(report.value, 348.68);
    }

    #[test]
    fn test_double_declining_hits_salvage() {
        let mut a = args(AssetMethod::DoubleDeclining);
        a.useful_life = Some(5.0);
        a.years = 10.0;
        let report = compute(&a, &ValuerConfig::default()).unwrap();
        assert_eq!(report.value, 100_000.0);
    }

    #[test]
    fn test_appreciation_requires_rate() {
        let result = compute(&args(AssetMethod::Appreciation), &ValuerConfig::default());
        assert!(matches!(result, Err(CliError::InvalidArgument(_))));

        let mut a = args(AssetMethod::Appreciation);
        a.rate = Some(0.054);
        let report = compute(&a, &ValuerConfig::default()).unwrap();
        assert!(report.value > 1_691_000.0 && report.value < 1_693_000.0);
    }

    #[test]
    fn test_straight_line_requires_life() {
        let mut a = args(AssetMethod::StraightLine);
        a.annual_depreciation = None;
        assert!(compute(&a, &ValuerConfig::default()).is_err());
    }

    #[test]
    fn test_rejects_out_of_domain_inputs() {
        let mut a = args(AssetMethod::Appreciation);
        a.rate = Some(-1.5);
        assert!(matches!(
            compute(&a, &ValuerConfig::default()),
            Err(CliError::Valuation(_))
        ));

        let mut a = args(AssetMethod::StraightLine);
        a.years = -1.0;
        assert!(compute(&a, &ValuerConfig::default()).is_err());
    }

    #[test]
    fn test_declining_rejects_rate_above_one() {
        let mut a = args(AssetMethod::Declining);
        a.rate = Some(1.5);
        assert!(matches!(
            compute(&a, &ValuerConfig::default()),
            Err(CliError::Valuation(_))
        ));

        // The same rate is a valid appreciation rate.
        let mut a = args(AssetMethod::Appreciation);
        a.rate = Some(1.5);
        assert!(compute(&a, &ValuerConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_annual_depreciation_is_unbounded() {
        let mut a = args(AssetMethod::StraightLine);
        a.annual_depreciation = Some(0.0);
        let report = compute(&a, &ValuerConfig::default()).unwrap();
        assert_eq!(report.useful_life, Some(UsefulLife::Unbounded));
        assert_eq!(report.straight_line_rate_pct, Some(0.0));
        assert_eq!(report.value, 1_000_000.0);
    }
}
