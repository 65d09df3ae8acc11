//! Concrete collaborator implementations.
//!
//! Each type implements one of the capability traits in
//! [`valuer_core::traits`]. They are deliberately simple: constants, lookup
//! tables and a linear model whose coefficients come from configuration.

use std::collections::HashMap;

use num_traits::Float;
use tracing::{debug, trace};
use valuer_core::formulas::inflation_adjustment;
use valuer_core::traits::{
    InflationSource, MarketTrendSource, PriceFetcher, RateFeatures, RatePredictor,
};

// ================================================================
// Rate predictors
// ================================================================

/// Always predicts the same depreciation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedRatePredictor<T> {
    /// The rate returned for every feature vector
    pub rate: T,
}

impl<T: Float> FixedRatePredictor<T> {
    /// Creates a predictor returning `rate`.
    pub fn new(rate: T) -> Self {
        Self { rate }
    }
}

impl<T: Float> RatePredictor<T> for FixedRatePredictor<T> {
    fn predict_depreciation_rate(&self, _features: &RateFeatures<T>) -> T {
        self.rate
    }
}

/// Linear regression over [`RateFeatures`].
///
/// ```text
/// rate = intercept + Σ coefficients[i] * features[i]
/// ```
///
/// Coefficients are in feature order: uniqueness, preciousness, market
/// trend, age. No fitting happens here.
///
/// # Examples
///
/// ```
/// use valuer_core::traits::{RateFeatures, RatePredictor};
/// use valuer_models::providers::LinearRatePredictor;
///
/// let model = LinearRatePredictor::new(0.1_f64, [0.0, 0.0, 0.0, 0.01]);
/// let rate = model.predict_depreciation_rate(&RateFeatures::new(0.8, 0.6, 1.2, 5.0));
/// assert!((rate - 0.15).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearRatePredictor<T> {
    /// Constant term
    pub intercept: T,
    /// Per-feature weights
    pub coefficients: [T; 4],
}

impl<T: Float> LinearRatePredictor<T> {
    /// Creates a model from its intercept and coefficients.
    pub fn new(intercept: T, coefficients: [T; 4]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }
}

impl<T: Float> RatePredictor<T> for LinearRatePredictor<T> {
    fn predict_depreciation_rate(&self, features: &RateFeatures<T>) -> T {
        let rate = self
            .coefficients
            .iter()
            .zip(features.to_array())
            .fold(self.intercept, |acc, (&w, x)| acc + w * x);
        debug!(
            rate = rate.to_f64().unwrap_or(f64::NAN),
            "Predicted depreciation rate"
        );
        rate
    }
}

// ================================================================
// Price fetchers
// ================================================================

/// Never has a market price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoMarketPrice;

impl<T: Float> PriceFetcher<T> for NoMarketPrice {
    fn market_price(&self, _product_name: &str) -> Option<T> {
        None
    }
}

/// Market prices from a fixed table, keyed case-insensitively.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticPriceTable<T> {
    prices: HashMap<String, T>,
}

impl<T> Default for StaticPriceTable<T> {
    fn default() -> Self {
        Self {
            prices: HashMap::new(),
        }
    }
}

impl<T: Float> StaticPriceTable<T> {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the price of `product_name`.
    pub fn insert(&mut self, product_name: &str, price: T) -> Option<T> {
        self.prices.insert(product_name.to_lowercase(), price)
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with_price(mut self, product_name: &str, price: T) -> Self {
        self.insert(product_name, price);
        self
    }

    /// Number of priced products.
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}

impl<T: Float, S: AsRef<str>> FromIterator<(S, T)> for StaticPriceTable<T> {
    fn from_iter<I: IntoIterator<Item = (S, T)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, price) in iter {
            table.insert(name.as_ref(), price);
        }
        table
    }
}

impl<T: Float> PriceFetcher<T> for StaticPriceTable<T> {
    fn market_price(&self, product_name: &str) -> Option<T> {
        let price = self.prices.get(&product_name.to_lowercase()).copied();
        if price.is_none() {
            trace!(product = product_name, "No market price in table");
        }
        price
    }
}

// ================================================================
// Inflation sources
// ================================================================

/// Leaves values unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoInflation;

impl<T: Float> InflationSource<T> for NoInflation {
    fn adjust(&self, value: T, _years: T) -> T {
        value
    }
}

/// Compounds a constant annual inflation rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedInflation<T> {
    /// Annual inflation rate (fraction)
    pub rate: T,
}

impl<T: Float> FixedInflation<T> {
    /// Creates a source compounding `rate` per year.
    pub fn new(rate: T) -> Self {
        Self { rate }
    }
}

impl<T: Float> InflationSource<T> for FixedInflation<T> {
    fn adjust(&self, value: T, years: T) -> T {
        inflation_adjustment(value, self.rate, years)
    }
}

// ================================================================
// Market trend sources
// ================================================================

/// Reports a neutral trend for every category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NeutralTrend;

impl<T: Float> MarketTrendSource<T> for NeutralTrend {
    fn trend_factor(&self, _category: &str) -> T {
        T::one()
    }
}

/// Trend factors from a fixed table; unknown categories are neutral.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticTrendTable<T> {
    factors: HashMap<String, T>,
}

impl<T> Default for StaticTrendTable<T> {
    fn default() -> Self {
        Self {
            factors: HashMap::new(),
        }
    }
}

impl<T: Float> StaticTrendTable<T> {
    /// Empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a category's trend factor.
    pub fn with_factor(mut self, category: &str, factor: T) -> Self {
        self.factors.insert(category.to_lowercase(), factor);
        self
    }
}

impl<T: Float> MarketTrendSource<T> for StaticTrendTable<T> {
    fn trend_factor(&self, category: &str) -> T {
        self.factors
            .get(&category.to_lowercase())
            .copied()
            .unwrap_or_else(T::one)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_fixed_predictor() {
        let p = FixedRatePredictor::new(0.12_f64);
        let f = RateFeatures::new(0.0, 0.0, 1.0, 3.0);
        assert_eq!(p.predict_depreciation_rate(&f), 0.12);
    }

    #[test]
    fn test_linear_predictor() {
        let p = LinearRatePredictor::new(0.05_f64, [0.1, -0.2, 0.05, 0.01]);
        let f = RateFeatures::new(0.8, 0.6, 1.2, 10.0);
        // 0.05 + 0.08 - 0.12 + 0.06 + 0.10
        assert_relative_eq!(p.predict_depreciation_rate(&f), 0.17, epsilon = 1e-12);
    }

    #[test]
    fn test_linear_predictor_zero_coefficients() {
        let p = LinearRatePredictor::new(0.2_f64, [0.0; 4]);
        let f = RateFeatures::new(0.3, 0.9, 2.0, 40.0);
        assert_eq!(p.predict_depreciation_rate(&f), 0.2);
    }

    #[test]
    fn test_no_market_price() {
        let price: Option<f64> = NoMarketPrice.market_price("iPhone");
        assert_eq!(price, None);
    }

    #[test]
    fn test_price_table_case_insensitive() {
        let table = StaticPriceTable::new().with_price("iPhone 12", 450.0_f64);
        assert_eq!(table.market_price("IPHONE 12"), Some(450.0));
        assert_eq!(table.market_price("iphone 13"), None);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_price_table_from_iter() {
        let table: StaticPriceTable<f64> =
            vec![("Sofa", 300.0), ("Bike", 150.0), ("sofa", 320.0)]
                .into_iter()
                .collect();
        assert_eq!(table.len(), 2);
        assert_eq!(table.market_price("sofa"), Some(320.0));
    }

    #[test]
    fn test_no_inflation_passthrough() {
        assert_eq!(NoInflation.adjust(1234.567_f64, 10.0), 1234.567);
    }

    #[test]
    fn test_fixed_inflation() {
        let source = FixedInflation::new(0.03_f64);
        assert_eq!(source.adjust(700_000.0, 10.0), 940_741.47);
    }

    #[test]
    fn test_fixed_inflation_zero_years_rounds() {
        let source = FixedInflation::new(0.03_f64);
        assert_eq!(source.adjust(99.999, 0.0), 100.0);
    }

    #[test]
    fn test_neutral_trend() {
        let factor: f64 = NeutralTrend.trend_factor("electronics");
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn test_trend_table() {
        let table = StaticTrendTable::new()
            .with_factor("Collectibles", 1.3_f64)
            .with_factor("electronics", 0.9);
        assert_eq!(table.trend_factor("collectibles"), 1.3);
        assert_eq!(table.trend_factor("ELECTRONICS"), 0.9);
        assert_eq!(table.trend_factor("vehicles"), 1.0);
    }
}
