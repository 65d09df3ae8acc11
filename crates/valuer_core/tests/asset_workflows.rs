//! Integration tests for end-to-end formula workflows.
//!
//! Derive salvage value and useful life from raw inputs, value the asset
//! with each method, then adjust for inflation.

use approx::assert_relative_eq;
use valuer_core::formulas::{
    appreciation, calculate_salvage_value, calculate_straight_line_rate, calculate_useful_life,
    declining_balance_depreciation, inflation_adjustment, straight_line_depreciation,
    DecliningBalance, UsefulLife,
};

const INITIAL_COST: f64 = 1_000_000.0;
const SALVAGE_PERCENTAGE: f64 = 0.10;
const ANNUAL_DEPRECIATION: f64 = 30_000.0;
const YEARS: f64 = 10.0;

/// Derived parameters feed straight into the straight-line method.
#[test]
fn test_straight_line_workflow() {
    let salvage = calculate_salvage_value(INITIAL_COST, SALVAGE_PERCENTAGE);
    assert_eq!(salvage, 100_000.0);

    let useful_life = calculate_useful_life(INITIAL_COST, salvage, ANNUAL_DEPRECIATION);
    assert_eq!(useful_life, UsefulLife::Years(30.0));

    let value = straight_line_depreciation(INITIAL_COST, salvage, useful_life.years(), YEARS);
    assert_eq!(value, 700_000.0);

    // 700_000 * 1.06^10
    let adjusted = inflation_adjustment(value, 0.06, YEARS);
    assert_relative_eq!(adjusted, 1_253_593.39, max_relative = 1e-12);
}

/// The straight-line rate converts to a fixed declining-balance rate.
#[test]
fn test_declining_balance_from_straight_line_rate() {
    let salvage = calculate_salvage_value(INITIAL_COST, SALVAGE_PERCENTAGE);
    let useful_life = calculate_useful_life(INITIAL_COST, salvage, ANNUAL_DEPRECIATION);

    let rate_percent = calculate_straight_line_rate(useful_life.years());
    assert_eq!(rate_percent, 3.33);

    let mode = DecliningBalance::fixed_rate(rate_percent / 100.0);
    let value = declining_balance_depreciation(INITIAL_COST, salvage, YEARS, mode);

    // 1e6 * 0.9667^10 is roughly 712_700
    assert!(value > 712_000.0 && value < 713_500.0, "got {}", value);
    assert!(value >= salvage);
}

/// Appreciation followed by inflation compounds both rates.
#[test]
fn test_appreciation_then_inflation() {
    let appreciated = appreciation(INITIAL_COST, 0.054, YEARS);
    assert!(appreciated > 1_691_000.0 && appreciated < 1_693_000.0);

    let adjusted = inflation_adjustment(appreciated, 0.06, YEARS);
    assert_relative_eq!(
        adjusted,
        appreciated * 1.06_f64.powi(10),
        max_relative = 1e-8
    );
}

/// A zero annual depreciation never reaches salvage value.
#[test]
fn test_unbounded_useful_life_workflow() {
    let salvage = calculate_salvage_value(INITIAL_COST, SALVAGE_PERCENTAGE);
    let useful_life = calculate_useful_life(INITIAL_COST, salvage, 0.0);
    assert!(useful_life.is_unbounded());

    assert_eq!(calculate_straight_line_rate(useful_life.years()), 0.0);
    assert_eq!(
        straight_line_depreciation(INITIAL_COST, salvage, useful_life.years(), YEARS),
        INITIAL_COST
    );
}

/// Double declining balance floors at salvage before the end of the horizon.
#[test]
fn test_double_declining_reaches_salvage() {
    let salvage = calculate_salvage_value(INITIAL_COST, SALVAGE_PERCENTAGE);
    let value =
        declining_balance_depreciation(INITIAL_COST, salvage, 30.0, DecliningBalance::double(10.0));
    assert_eq!(value, salvage);
}
