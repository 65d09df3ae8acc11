//! Service valuation.

use num_traits::Float;
use tracing::debug;
use valuer_core::types::params::{check_finite, check_non_negative};
use valuer_core::types::ValuationError;

use super::engine::{ValuationBreakdown, ValuationPipeline};
use super::factors::AdditionalFactors;
use super::stage::AdjustmentStage;

/// Parameter bundle for valuing a service engagement.
///
/// `base_rate * hours`, then expertise, then demand, then every additional
/// factor in insertion order, rounded to two decimals.
///
/// # Examples
///
/// ```
/// use valuer_models::pipeline::ServiceValuation;
///
/// let service = ServiceValuation::builder()
///     .base_rate(100.0_f64)
///     .hours(8.0)
///     .expertise_level(1.4)
///     .demand_factor(1.2)
///     .additional_factor("certification_bonus", 1.1)
///     .build()
///     .unwrap();
///
/// assert_eq!(service.get_current_valuation(), 1478.4);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceValuation<T> {
    category: String,
    base_rate: T,
    hours: T,
    expertise_level: T,
    demand_factor: T,
    additional_factors: AdditionalFactors<T>,
}

impl<T: Float> ServiceValuation<T> {
    /// Creates a new builder.
    #[inline]
    pub fn builder() -> ServiceValuationBuilder<T> {
        ServiceValuationBuilder::default()
    }

    /// Service category.
    #[inline]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Hourly rate.
    #[inline]
    pub fn base_rate(&self) -> T {
        self.base_rate
    }

    /// Hours worked.
    #[inline]
    pub fn hours(&self) -> T {
        self.hours
    }

    /// Expertise multiplier.
    #[inline]
    pub fn expertise_level(&self) -> T {
        self.expertise_level
    }

    /// Demand multiplier.
    #[inline]
    pub fn demand_factor(&self) -> T {
        self.demand_factor
    }

    /// Additional factors in application order.
    #[inline]
    pub fn additional_factors(&self) -> &AdditionalFactors<T> {
        &self.additional_factors
    }

    /// The stage list this service is valued with.
    pub fn to_pipeline(&self) -> ValuationPipeline<T> {
        ValuationPipeline::new(self.base_rate * self.hours)
            .with_stage(AdjustmentStage::Expertise {
                level: self.expertise_level,
            })
            .with_stage(AdjustmentStage::Demand {
                factor: self.demand_factor,
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
            "Service valuation computed"
        );
        breakdown.value
    }

    /// Opt-in domain check; never called implicitly.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::InvalidParameter` if any parameter is
    /// non-finite, or if the rate, hours, expertise or demand is negative.
    pub fn validate(&self) -> Result<(), ValuationError> {
        check_non_negative("base_rate", self.base_rate)?;
        check_non_negative("hours", self.hours)?;
        check_non_negative("expertise_level", self.expertise_level)?;
        check_non_negative("demand_factor", self.demand_factor)?;
        for (_, multiplier) in self.additional_factors.iter() {
            check_finite("additional_factor", multiplier)?;
        }
        Ok(())
    }
}

/// Builder for [`ServiceValuation`].
///
/// `base_rate` and `hours` are required; expertise and demand default to 1.
#[derive(Debug, Clone)]
pub struct ServiceValuationBuilder<T> {
    category: String,
    base_rate: Option<T>,
    hours: Option<T>,
    expertise_level: Option<T>,
    demand_factor: Option<T>,
    additional_factors: AdditionalFactors<T>,
}

impl<T> Default for ServiceValuationBuilder<T> {
    fn default() -> Self {
        Self {
            category: "general".to_string(),
            base_rate: None,
            hours: None,
            expertise_level: None,
            demand_factor: None,
            additional_factors: AdditionalFactors::default(),
        }
    }
}

impl<T: Float> ServiceValuationBuilder<T> {
    /// Sets the service category.
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Sets the hourly rate.
    pub fn base_rate(mut self, rate: T) -> Self {
        self.base_rate = Some(rate);
        self
    }

    /// Sets the hours worked.
    pub fn hours(mut self, hours: T) -> Self {
        self.hours = Some(hours);
        self
    }

    /// Sets the expertise multiplier.
    pub fn expertise_level(mut self, level: T) -> Self {
        self.expertise_level = Some(level);
        self
    }

    /// Sets the demand multiplier.
    pub fn demand_factor(mut self, factor: T) -> Self {
        self.demand_factor = Some(factor);
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

    /// Builds the valuation.
    ///
    /// # Errors
    ///
    /// Returns `ValuationError::MissingParameter` if `base_rate` or `hours`
    /// was not set.
    pub fn build(self) -> Result<ServiceValuation<T>, ValuationError> {
        let base_rate = self
            .base_rate
            .ok_or(ValuationError::MissingParameter("base_rate"))?;
        let hours = self
            .hours
            .ok_or(ValuationError::MissingParameter("hours"))?;

        Ok(ServiceValuation {
            category: self.category,
            base_rate,
            hours,
            expertise_level: self.expertise_level.unwrap_or_else(T::one),
            demand_factor: self.demand_factor.unwrap_or_else(T::one),
            additional_factors: self.additional_factors,
        })
    }
}
