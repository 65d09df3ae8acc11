//! Adjustment stages.

use num_traits::Float;

/// Weight of the uniqueness premium (a score of 1 adds 50%).
pub const UNIQUENESS_PREMIUM_WEIGHT: f64 = 0.5;

/// Weight of the preciousness premium (a score of 1 adds 30%).
pub const PRECIOUSNESS_PREMIUM_WEIGHT: f64 = 0.3;

/// One multiplicative step of a valuation pipeline.
///
/// Every stage is a pure multiplication: `apply(v) == v * multiplier()`.
///
/// # Examples
///
/// ```
/// use valuer_models::pipeline::AdjustmentStage;
///
/// let stage = AdjustmentStage::Uniqueness { score: 0.8_f64 };
/// assert_eq!(stage.multiplier(), 1.4);
/// assert_eq!(stage.label(), "uniqueness");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "stage", rename_all = "snake_case"))]
pub enum AdjustmentStage<T> {
    /// Compound depreciation: `(1 - rate)^years`.
    Depreciation {
        /// Annual depreciation rate
        rate: T,
        /// Years of use
        years: T,
    },

    /// Uniqueness premium: `1 + score * 0.5`.
    Uniqueness {
        /// Uniqueness score in [0, 1]
        score: T,
    },

    /// Preciousness premium: `1 + score * 0.3`.
    Preciousness {
        /// Preciousness score in [0, 1]
        score: T,
    },

    /// Market trend ratio (> 1 amplifies, < 1 reduces).
    MarketTrend {
        /// Trend factor
        factor: T,
    },

    /// Expertise multiplier (e.g. 1.0 junior, 1.5 senior).
    Expertise {
        /// Expertise level
        level: T,
    },

    /// Demand multiplier (> 1 high demand, < 1 low demand).
    Demand {
        /// Demand factor
        factor: T,
    },

    /// Named free-form multiplier.
    Additional {
        /// Factor name
        name: String,
        /// Multiplier, unbounded
        multiplier: T,
    },
}

impl<T: Float> AdjustmentStage<T> {
    /// Multiplier this stage applies to its input.
    pub fn multiplier(&self) -> T {
        match self {
            AdjustmentStage::Depreciation { rate, years } => (T::one() - *rate).powf(*years),
            AdjustmentStage::Uniqueness { score } => {
                T::one() + *score * weight(UNIQUENESS_PREMIUM_WEIGHT)
            }
            AdjustmentStage::Preciousness { score } => {
                T::one() + *score * weight(PRECIOUSNESS_PREMIUM_WEIGHT)
            }
            AdjustmentStage::MarketTrend { factor } => *factor,
            AdjustmentStage::Expertise { level } => *level,
            AdjustmentStage::Demand { factor } => *factor,
            AdjustmentStage::Additional { multiplier, .. } => *multiplier,
        }
    }

    /// Apply this stage to `value`.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        value * self.multiplier()
    }

    /// Human-readable stage name; additional factors report their own name.
    pub fn label(&self) -> &str {
        match self {
            AdjustmentStage::Depreciation { .. } => "depreciation",
            AdjustmentStage::Uniqueness { .. } => "uniqueness",
            AdjustmentStage::Preciousness { .. } => "preciousness",
            AdjustmentStage::MarketTrend { .. } => "market_trend",
            AdjustmentStage::Expertise { .. } => "expertise",
            AdjustmentStage::Demand { .. } => "demand",
            AdjustmentStage::Additional { name, .. } => name,
        }
    }
}

fn weight<T: Float>(w: f64) -> T {
    T::from(w).unwrap_or_else(T::zero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_depreciation_multiplier() {
        let stage = AdjustmentStage::Depreciation {
            rate: 0.1_f64,
            years: 10.0,
        };
        assert_relative_eq!(stage.multiplier(), 0.3486784401, epsilon = 1e-12);
    }

    #[test]
    fn test_depreciation_zero_years_is_identity() {
        let stage = AdjustmentStage::Depreciation {
            rate: 0.4_f64,
            years: 0.0,
        };
        assert_eq!(stage.apply(250.0), 250.0);
    }

    #[test]
    fn test_uniqueness_premium_caps_at_fifty_percent() {
        let stage = AdjustmentStage::Uniqueness { score: 1.0_f64 };
        assert_eq!(stage.multiplier(), 1.5);
    }

    #[test]
    fn test_preciousness_premium() {
        let stage = AdjustmentStage::Preciousness { score: 0.6_f64 };
        assert_relative_eq!(stage.multiplier(), 1.18, epsilon = 1e-12);
        let top = AdjustmentStage::Preciousness { score: 1.0_f64 };
        assert_relative_eq!(top.multiplier(), 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_plain_multipliers() {
        assert_eq!(AdjustmentStage::MarketTrend { factor: 0.8_f64 }.apply(100.0), 80.0);
        assert_eq!(AdjustmentStage::Expertise { level: 1.5_f64 }.apply(100.0), 150.0);
        assert_eq!(AdjustmentStage::Demand { factor: 2.0_f64 }.apply(100.0), 200.0);
    }

    #[test]
    fn test_additional_label_is_factor_name() {
        let stage = AdjustmentStage::Additional {
            name: "brand_reputation".to_string(),
            multiplier: 1.1_f64,
        };
        assert_eq!(stage.label(), "brand_reputation");
        assert_eq!(stage.multiplier(), 1.1);
    }

    #[test]
    fn test_labels() {
        assert_eq!(
            AdjustmentStage::Depreciation {
                rate: 0.0_f64,
                years: 0.0
            }
            .label(),
            "depreciation"
        );
        assert_eq!(AdjustmentStage::MarketTrend { factor: 1.0_f64 }.label(), "market_trend");
        assert_eq!(AdjustmentStage::Expertise { level: 1.0_f64 }.label(), "expertise");
        assert_eq!(AdjustmentStage::Demand { factor: 1.0_f64 }.label(), "demand");
    }
}
