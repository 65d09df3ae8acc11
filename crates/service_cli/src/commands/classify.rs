//! Classify command implementation

use clap::Args;
use serde::Serialize;
use tracing::info;
use valuer_models::category::{
    classify_product, determine_value_trend, AssetCategory, CategoryProfile, ValuationMethod,
    ValueTrend,
};

use crate::config::ValuerConfig;
use crate::output;
use crate::Result;

/// Arguments of `valuer classify`
#[derive(Debug, Clone, Args)]
pub struct ClassifyArgs {
    /// Product name
    pub product_name: String,
}

/// Result of `valuer classify`
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyReport {
    pub product_name: String,
    pub category: AssetCategory,
    pub value_trend: Option<ValueTrend>,
    pub method: ValuationMethod,
    pub depreciation_rate: f64,
    pub salvage_fraction: f64,
    pub appreciation_rate: f64,
}

/// Compute the classification report
pub fn compute(args: &ClassifyArgs) -> ClassifyReport {
    let category = classify_product(&args.product_name);
    let profile = CategoryProfile::<f64>::for_category(category);

    ClassifyReport {
        product_name: args.product_name.clone(),
        category,
        value_trend: determine_value_trend(&args.product_name),
        method: profile.resolved_method(),
        depreciation_rate: profile.resolved_depreciation_rate(),
        salvage_fraction: profile.resolved_salvage_fraction(),
        appreciation_rate: profile.resolved_appreciation_rate(),
    }
}

/// Run the classify command
pub fn run(args: &ClassifyArgs, config: &ValuerConfig) -> Result<()> {
    let report = compute(args);
    info!(product = %args.product_name, category = %report.category, "Product classified");
    output::emit(config.output_format, "Classification", &report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classify(name: &str) -> ClassifyReport {
        compute(&ClassifyArgs {
            product_name: name.to_string(),
        })
    }

    #[test]
    fn test_vehicle() {
        let report = classify("Family car");
        assert_eq!(report.category, AssetCategory::Vehicles);
        assert_eq!(report.value_trend, Some(ValueTrend::Depreciating));
        assert_eq!(report.method, ValuationMethod::StraightLine);
        assert_eq!(report.depreciation_rate, 0.18);
    }

    #[test]
    fn test_unknown_product() {
        let report = classify("Kettle");
        assert_eq!(report.category, AssetCategory::General);
        assert_eq!(report.value_trend, None);
        assert_eq!(report.method, ValuationMethod::DecliningBalance);
        assert_eq!(report.salvage_fraction, 0.1);
    }

    #[test]
    fn test_serialises_snake_case() {
        let json = serde_json::to_value(classify("Beach house")).unwrap();
        assert_eq!(json["category"], "real_estate");
        assert_eq!(json["method"], "appreciation");
    }
}
