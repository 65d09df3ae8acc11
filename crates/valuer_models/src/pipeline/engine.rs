//! Pipeline evaluation.

use num_traits::Float;
use tracing::trace;
use valuer_core::math::round_currency;

use super::factors::AdditionalFactors;
use super::stage::AdjustmentStage;

/// A base value and the ordered stages applied to it.
///
/// Stages run strictly in list order, each multiplying the previous output.
/// No stage short-circuits or reorders the chain.
///
/// # Examples
///
/// ```
/// use valuer_models::pipeline::{AdjustmentStage, ValuationPipeline};
///
/// let pipeline = ValuationPipeline::new(500.0_f64)
///     .with_stage(AdjustmentStage::Expertise { level: 1.5 })
///     .with_stage(AdjustmentStage::Demand { factor: 1.2 });
///
/// assert_eq!(pipeline.value(), 900.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValuationPipeline<T> {
    base: T,
    stages: Vec<AdjustmentStage<T>>,
}

impl<T: Float> ValuationPipeline<T> {
    /// Pipeline with no stages.
    pub fn new(base: T) -> Self {
        Self {
            base,
            stages: Vec::new(),
        }
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: AdjustmentStage<T>) -> Self {
        self.stages.push(stage);
        self
    }

    /// Append one [`AdjustmentStage::Additional`] per factor, in order.
    pub fn with_additional_factors(mut self, factors: &AdditionalFactors<T>) -> Self {
        self.stages
            .extend(factors.iter().map(|(name, multiplier)| AdjustmentStage::Additional {
                name: name.to_string(),
                multiplier,
            }));
        self
    }

    /// Base value the first stage receives.
    #[inline]
    pub fn base(&self) -> T {
        self.base
    }

    /// Stages in application order.
    #[inline]
    pub fn stages(&self) -> &[AdjustmentStage<T>] {
        &self.stages
    }

    /// Run every stage and record each intermediate value.
    pub fn evaluate(&self) -> ValuationBreakdown<T> {
        let mut value = self.base;
        let mut steps = Vec::with_capacity(self.stages.len());

        for stage in &self.stages {
            let multiplier = stage.multiplier();
            value = value * multiplier;
            trace!(
                stage = stage.label(),
                multiplier = multiplier.to_f64().unwrap_or(f64::NAN),
                value = value.to_f64().unwrap_or(f64::NAN),
                "Applied valuation stage"
            );
            steps.push(StageOutcome {
                label: stage.label().to_string(),
                multiplier,
                value,
            });
        }

        ValuationBreakdown {
            base: self.base,
            steps,
            unrounded: value,
            value: round_currency(value),
        }
    }

    /// Final value rounded to two decimals.
    #[inline]
    pub fn value(&self) -> T {
        self.evaluate().value
    }
}

/// Result of a single stage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct StageOutcome<T> {
    /// Stage label
    pub label: String,
    /// Multiplier the stage applied
    pub multiplier: T,
    /// Value after the stage
    pub value: T,
}

/// Intermediate values of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValuationBreakdown<T> {
    /// Base value before any stage
    pub base: T,
    /// Per-stage outcomes in application order
    pub steps: Vec<StageOutcome<T>>,
    /// Final value before rounding
    pub unrounded: T,
    /// Final value rounded to two decimals
    pub value: T,
}
