//! Product valuation.

use num_traits::Float;
use tracing::debug;
use valuer_core::traits::{MarketTrendSource, RateFeatures, RatePredictor};
use valuer_core::types::params::{
    check_depreciation_rate, check_finite, check_non_negative,
};
use valuer_core::types::ValuationError;

use super::engine::{ValuationBreakdown, ValuationPipeline};
use super::factors::AdditionalFactors;
use super::stage::AdjustmentStage;

/// Parameter bundle for valuing a used product.
///
/// Immutable once built. [`get_current_valuation`](Self::get_current_valuation)
/// runs, in order: depreciation, uniqueness premium, preciousness premium,
/// market trend, then every additional factor in insertion order, and rounds
/// the result to two decimals.
///
/// # Examples
///
/// ```
/// use valuer_models::pipeline::ProductValuation;
///
/// let product = ProductValuation::builder()
///     .category("electronics")
///     .original_value(1000.0_f64)
///     .years_used(10.0)
///     .depreciation_rate(0.1)
///     .uniqueness_score(0.8)
///     .preciousness_score(0.6)
///     .market_trend_factor(1.2)
///     .build()
///     .unwrap();
///
/// assert_eq!(product.get_current_valuation(), 691.22);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProductValuation<T> {
    category: String,
    original_value: T,
    years_used: T,
    depreciation_rate: T,
    uniqueness_score: T,
    preciousness_score: T,
    market_trend_factor: T,
    additional_factors: AdditionalFactors<T>,
}

impl<T: Float> ProductValuation<T> {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> ProductValuationBuilder<T> {
        ProductValuationBuilder::default()
    }

    /// Product category.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Original purchase price.
    #[inline]
    pub fn original_value(&self) -> T {
        self.original_value
    }

    /// Years the product has been used.
    #[inline]
    pub fn years_used(&self) -> T {
        self.years_used
    }

    /// Annual depreciation rate, fixed or predicted.
    #[inline]
    pub fn depreciation_rate(&self) -> T {
        self.depreciation_rate
    }

    /// Uniqueness score.
    #[inline]
    pub fn uniqueness_score(&self) -> T {
        self.uniqueness_score
    }

    /// Preciousness score.
    #[inline]
    pub fn preciousness_score(&self) -> T {
        self.preciousness_score
    }

    /// Market trend factor.
    #[inline]
    pub fn market_trend_factor(&self) -> T {
        self.market_trend_factor
    }

    /// Additional factors in application order.
    #[inline]
    pub fn additional_factors(&self) -> &AdditionalFactors<T> {
        &self.additional_factors
    }

    /// Feature vector a [`RatePredictor`] would see for this product.
    pub fn rate_features(&self) -> RateFeatures<T> {
        RateFeatures::new(
            self.uniqueness_score,
            self.preciousness_score,
            self.market_trend_factor,
            self.years_used,
        )
    }

    /// The stage list this product is valued with.
    pub fn to_pipeline(&self) -> ValuationPipeline<T> {
        ValuationPipeline::new(self.original_value)
            .with_stage(AdjustmentStage::Depreciation {
                rate: self.depreciation_rate,
                years: self.years_used,
            })
            .with_stage(AdjustmentStage::Uniqueness {
                score: self.uniqueness_score,
            })
            .with_stage(AdjustmentStage::Preciousness {
                score: self.preciousness_score,
            })
            .with_stage(AdjustmentStage::MarketTrend {
                factor: self.market_trend_factor,
            })
            .with_additional_factors(&self.additional_factors)
    }

    /// Every intermediate value of the valuation.
    pub fn valuation_breakdown(&self) -> ValuationBreakdown<T> {
        self.to_pipeline().evaluate()
    }

    /// Final valuation rounded to two decimals.
    pub fn get_current_valuation(&self) -> T {
        let breakdown = self.valuation_breakdown();
        debug!(
            category = %self.category,
            value = breakdown.value.to_f64().unwrap_or(f64::NAN),
            "Product valuation computed"
        );
        breakdown.value
    }

    /// Opt-in domain check; never called implicitly.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidParameter` if:
    /// - any parameter is `NaN` or infinite
    /// - `original_value`, `years_used` or `market_trend_factor` is negative
    /// - `depreciation_rate` is above 1
    pub fn validate(&self) -> Result<(), ValuationError> {
        check_non_negative("original_value", self.original_value)?;
        check_non_negative("years_used", self.years_used)?;
        check_depreciation_rate("depreciation_rate", self.depreciation_rate)?;
        check_finite("uniqueness_score", self.uniqueness_score)?;
        check_finite("preciousness_score", self.preciousness_score)?;
        check_non_negative("market_trend_factor", self.market_trend_factor)?;
        for (_, multiplier) in self.additional_factors.iter() {
            check_finite("additional_factor", multiplier)?;
        }
        Ok(())
    }
}

/// Builder for [`ProductValuation`].
///
/// `original_value` and `years_used` are required. The depreciation rate is
/// either set directly and finished with [`build`](Self::build), or obtained
/// from a predictor with [`build_with_predictor`](Self::build_with_predictor).
/// Scores default to 0, the trend factor to 1 and the category to `general`.
#[derive(Debug, Clone)]
pub struct ProductValuationBuilder<T> {
    category: String,
    original_value: Option<T>,
    years_used: Option<T>,
    depreciation_rate: Option<T>,
    uniqueness_score: Option<T>,
    preciousness_score: Option<T>,
    market_trend_factor: Option<T>,
    additional_factors: AdditionalFactors<T>,
}

impl<T> Default for ProductValuationBuilder<T> {
    fn default() -> Self {
        Self {
            category: "general".to_string(),
            original_value: None,
            years_used: None,
            depreciation_rate: None,
            uniqueness_score: None,
            preciousness_score: None,
            market_trend_factor: None,
            additional_factors: AdditionalFactors::default(),
        }
    }
}

impl<T: Float> ProductValuationBuilder<T> {
    /// Sets the product category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the original purchase price.
    pub fn original_value(mut self, value: T) -> Self {
        self.original_value = Some(value);
        self
    }

    /// Sets the years of use.
    pub fn years_used(mut self, years: T) -> Self {
        self.years_used = Some(years);
        self
    }

    /// Sets a fixed annual depreciation rate.
    pub fn depreciation_rate(mut self, rate: T) -> Self {
        self.depreciation_rate = Some(rate);
        self
    }

    /// Sets the uniqueness score (0 to 1, up to +50%).
    pub fn uniqueness_score(mut self, score: T) -> Self {
        self.uniqueness_score = Some(score);
        self
    }

    /// Sets the preciousness score (0 to 1, up to +30%).
    pub fn preciousness_score(mut self, score: T) -> Self {
        self.preciousness_score = Some(score);
        self
    }

    /// Sets the market trend factor.
    pub fn market_trend_factor(mut self, factor: T) -> Self {
        self.market_trend_factor = Some(factor);
        self
    }

    /// Looks up the market trend factor for the category set so far.
    pub fn market_trend_from<S: MarketTrendSource<T>>(mut self, source: &S) -> Self {
        let factor = source.trend_factor(&self.category);
        debug!(
            category = %self.category,
            trend_factor = factor.to_f64().unwrap_or(f64::NAN),
            "Market trend resolved"
        );
        self.market_trend_factor = Some(factor);
        self
    }

    /// Adds (or replaces) one additional factor.
    pub fn additional_factor(mut self, name: impl Into<String>, multiplier: T) -> Self {
        self.additional_factors.insert(name, multiplier);
        self
    }

    /// Replaces all additional factors.
    pub fn additional_factors(mut self, factors: AdditionalFactors<T>) -> Self {
        self.additional_factors = factors;
        self
    }

    /// Builds with the fixed depreciation rate.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::MissingParameter` if `original_value`,
    /// `years_used` or `depreciation_rate` was not set.
    pub fn build(self) -> Result<ProductValuation<T>, ValuationError> {
        let rate = self
            .depreciation_rate
            .ok_or(ValuationError::MissingParameter("depreciation_rate"))?;
        self.finish(rate)
    }

    /// Builds with a depreciation rate predicted from this product's features.
    ///
    /// Any fixed rate set on the builder is ignored. The predictor is called
    /// exactly once; the built valuation is immutable afterwards.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::MissingParameter` if `original_value` or
    /// `years_used` was not set.
    pub fn build_with_predictor<P: RatePredictor<T>>(
        self,
        predictor: &P,
    ) -> Result<ProductValuation<T>, ValuationError> {
        let years = self
            .years_used
            .ok_or(ValuationError::MissingParameter("years_used"))?;
        let features = RateFeatures::new(
            self.uniqueness_score.unwrap_or_else(T::zero),
            self.preciousness_score.unwrap_or_else(T::zero),
            self.market_trend_factor.unwrap_or_else(T::one),
            years,
        );
        let rate = predictor.predict_depreciation_rate(&features);
        debug!(
            category = %self.category,
            predicted_rate = rate.to_f64().unwrap_or(f64::NAN),
            "Depreciation rate predicted"
        );
        self.finish(rate)
    }

    fn finish(self, depreciation_rate: T) -> Result<ProductValuation<T>, ValuationError> {
        let original_value = self
            .original_value
            .ok_or(ValuationError::MissingParameter("original_value"))?;
        let years_used = self
            .years_used
            .ok_or(ValuationError::MissingParameter("years_used"))?;

        Ok(ProductValuation {
            category: self.category,
            original_value,
            years_used,
            depreciation_rate,
            uniqueness_score: self.uniqueness_score.unwrap_or_else(T::zero),
            preciousness_score: self.preciousness_score.unwrap_or_else(T::zero),
            market_trend_factor: self.market_trend_factor.unwrap_or_else(T::one),
            additional_factors: self.additional_factors,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    struct ConstantRate(f64);

    impl RatePredictor<f64> for ConstantRate {
        fn predict_depreciation_rate(&self, _features: &RateFeatures<f64>) -> f64 {
            self.0
        }
    }

    struct AgeScaled;

    impl RatePredictor<f64> for AgeScaled {
        fn predict_depreciation_rate(&self, features: &RateFeatures<f64>) -> f64 {
            features.age / 100.0
        }
    }

    struct HotCategory;

    impl MarketTrendSource<f64> for HotCategory {
        fn trend_factor(&self, category: &str) -> f64 {
            if category == "collectibles" {
                1.5
            } else {
                1.0
            }
        }
    }

    fn reference_product() -> ProductValuationBuilder<f64> {
        ProductValuation::builder()
            .original_value(1000.0)
            .years_used(10.0)
            .depreciation_rate(0.1)
            .uniqueness_score(0.8)
            .preciousness_score(0.6)
            .market_trend_factor(1.2)
    }

    #[test]
    fn test_reference_valuation() {
        let product = reference_product().build().unwrap();
        assert_eq!(product.get_current_valuation(), 691.22);
    }

    #[test]
    fn test_reference_breakdown() {
        let breakdown = reference_product().build().unwrap().valuation_breakdown();
        let values: Vec<f64> = breakdown.steps.iter().map(|s| s.value).collect();
        assert_relative_eq!(values[0], 348.6784401, epsilon = 1e-6);
        assert_relative_eq!(values[1], 488.14981614, epsilon = 1e-6);
        assert_relative_eq!(values[2], 576.0167830452, epsilon = 1e-6);
        assert_relative_eq!(values[3], 691.22013965, epsilon = 1e-6);
    }

    #[test]
    fn test_additional_factors_applied_last() {
        let product = reference_product()
            .additional_factor("brand_reputation", 1.1)
            .additional_factor("special_features", 1.05)
            .build()
            .unwrap();
        let breakdown = product.valuation_breakdown();
        assert_eq!(breakdown.steps.len(), 6);
        assert_eq!(breakdown.steps[4].label, "brand_reputation");
        assert_eq!(breakdown.steps[5].label, "special_features");
        assert_eq!(product.get_current_valuation(), 798.36);
    }

    #[test]
    fn test_defaults() {
        let product = ProductValuation::builder()
            .original_value(200.0_f64)
            .years_used(0.0)
            .depreciation_rate(0.3)
            .build()
            .unwrap();
        assert_eq!(product.category(), "general");
        assert_eq!(product.uniqueness_score(), 0.0);
        assert_eq!(product.preciousness_score(), 0.0);
        assert_eq!(product.market_trend_factor(), 1.0);
        assert!(product.additional_factors().is_empty());
        assert_eq!(product.get_current_valuation(), 200.0);
    }

    #[test]
    fn test_missing_original_value() {
        let result = ProductValuation::builder()
            .years_used(1.0_f64)
            .depreciation_rate(0.1)
            .build();
        assert_eq!(
            result,
            Err(ValuationError::MissingParameter("original_value"))
        );
    }

    #[test]
    fn test_missing_rate() {
        let result = ProductValuation::builder()
            .original_value(10.0_f64)
            .years_used(1.0)
            .build();
        assert_eq!(
            result,
            Err(ValuationError::MissingParameter("depreciation_rate"))
        );
    }

    #[test]
    fn test_predicted_rate_is_drop_in() {
        let fixed = reference_product().build().unwrap();
        let predicted = reference_product()
            .build_with_predictor(&ConstantRate(0.1))
            .unwrap();
        assert_eq!(predicted.depreciation_rate(), 0.1);
        assert_eq!(
            predicted.get_current_valuation(),
            fixed.get_current_valuation()
        );
    }

    #[test]
    fn test_predictor_sees_features() {
        let product = reference_product().build_with_predictor(&AgeScaled).unwrap();
        assert_relative_eq!(product.depreciation_rate(), 0.1, epsilon = 1e-12);
        assert_eq!(
            product.rate_features(),
            RateFeatures::new(0.8, 0.6, 1.2, 10.0)
        );
    }

    #[test]
    fn test_predictor_without_years_fails() {
        let result = ProductValuation::builder()
            .original_value(10.0_f64)
            .build_with_predictor(&ConstantRate(0.1));
        assert_eq!(result, Err(ValuationError::MissingParameter("years_used")));
    }

    #[test]
    fn test_market_trend_from_source() {
        let product = ProductValuation::builder()
            .category("collectibles")
            .original_value(100.0_f64)
            .years_used(0.0)
            .depreciation_rate(0.0)
            .market_trend_from(&HotCategory)
            .build()
            .unwrap();
        assert_eq!(product.market_trend_factor(), 1.5);
        assert_eq!(product.get_current_valuation(), 150.0);
    }

    #[test]
    fn test_validate_accepts_reference() {
        assert!(reference_product().build().unwrap().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_years() {
        let product = reference_product().years_used(-1.0).build().unwrap();
        assert_eq!(
            product.validate(),
            Err(ValuationError::InvalidParameter {
                name: "years_used",
                value: -1.0
            })
        );
    }

    #[test]
    fn test_validate_rejects_rate_above_one() {
        let product = reference_product().depreciation_rate(1.5).build().unwrap();
        assert_eq!(
            product.validate(),
            Err(ValuationError::InvalidParameter {
                name: "depreciation_rate",
                value: 1.5
            })
        );
    }

    #[test]
    fn test_validate_accepts_full_and_negative_rates() {
        for rate in [1.0, 0.0, -0.5, -2.0] {
            let product = reference_product().depreciation_rate(rate).build().unwrap();
            assert!(product.validate().is_ok(), "rate {rate}");
        }
    }

    #[test]
    fn test_negative_years_not_guarded_without_validate() {
        // (1 - 0.1)^-1 inflates rather than failing
        let product = ProductValuation::builder()
            .original_value(90.0_f64)
            .years_used(-1.0)
            .depreciation_rate(0.1)
            .build()
            .unwrap();
        assert_eq!(product.get_current_valuation(), 100.0);
    }
}
