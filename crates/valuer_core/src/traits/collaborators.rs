//! Collaborator trait definitions.

use num_traits::Float;

/// Feature vector a depreciation-rate predictor consumes.
///
/// Field order matches the order the regression models are trained on:
/// uniqueness, preciousness, market trend, age.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RateFeatures<T> {
    /// Uniqueness score in [0, 1]
    pub uniqueness: T,
    /// Preciousness score in [0, 1]
    pub preciousness: T,
    /// Market trend ratio (> 1 amplifies, < 1 reduces)
    pub market_trend: T,
    /// Age of the product in years
    pub age: T,
}

impl<T: Float> RateFeatures<T> {
    /// Build a feature vector.
    #[inline]
    pub fn new(uniqueness: T, preciousness: T, market_trend: T, age: T) -> Self {
        Self {
            uniqueness,
            preciousness,
            market_trend,
            age,
        }
    }

    /// Features as an array in training order.
    #[inline]
    pub fn to_array(&self) -> [T; 4] {
        [
            self.uniqueness,
            self.preciousness,
            self.market_trend,
            self.age,
        ]
    }
}

/// Supplies a depreciation rate for a product.
///
/// The returned rate is a drop-in substitute for a fixed annual depreciation
/// rate; the pipeline arithmetic does not change.
pub trait RatePredictor<T: Float> {
    /// Predict the annual depreciation rate (as a fraction).
    fn predict_depreciation_rate(&self, features: &RateFeatures<T>) -> T;
}

/// Supplies the current market price of a product, when one is known.
pub trait PriceFetcher<T: Float> {
    /// Market price for `product_name`.
    ///
    /// Returns `None` when no price is available for any reason, in which
    /// case the caller falls back to formula-based valuation.
    fn market_price(&self, product_name: &str) -> Option<T>;
}

/// Adjusts a value for inflation.
pub trait InflationSource<T: Float> {
    /// Inflation-adjusted `value` after `years`.
    ///
    /// Returns `value` unchanged when no inflation data is available.
    fn adjust(&self, value: T, years: T) -> T;
}

/// Supplies a market trend multiplier for a category.
pub trait MarketTrendSource<T: Float> {
    /// Trend factor for `category` (> 1 high demand, < 1 low demand).
    ///
    /// Returns `1.0` when the category is unknown or no data is available.
    fn trend_factor(&self, category: &str) -> T;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ConstantPredictor(f64);

    impl RatePredictor<f64> for ConstantPredictor {
        fn predict_depreciation_rate(&self, _features: &RateFeatures<f64>) -> f64 {
            self.0
        }
    }

    struct Unavailable;

    impl PriceFetcher<f64> for Unavailable {
        fn market_price(&self, _product_name: &str) -> Option<f64> {
            None
        }
    }

    impl InflationSource<f64> for Unavailable {
        fn adjust(&self, value: f64, _years: f64) -> f64 {
            value
        }
    }

    impl MarketTrendSource<f64> for Unavailable {
        fn trend_factor(&self, _category: &str) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_features_to_array_order() {
        let features = RateFeatures::new(0.1_f64, 0.2, 1.3, 4.0);
        assert_eq!(features.to_array(), [0.1, 0.2, 1.3, 4.0]);
    }

    #[test]
    fn test_predictor_through_generic() {
        fn rate_of<P: RatePredictor<f64>>(p: &P) -> f64 {
            p.predict_depreciation_rate(&RateFeatures::new(0.0, 0.0, 1.0, 0.0))
        }
        assert_eq!(rate_of(&ConstantPredictor(0.12)), 0.12);
    }

    #[test]
    fn test_neutral_fallbacks() {
        assert_eq!(Unavailable.market_price("laptop"), None);
        assert_eq!(Unavailable.adjust(123.45, 10.0), 123.45);
        assert_eq!(Unavailable.trend_factor("electronics"), 1.0);
    }
}
