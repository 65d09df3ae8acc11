//! Depreciation methods.
//!
//! Both methods are floored at the salvage value. Straight-line applies a
//! constant absolute amount each year; declining balance applies a fixed
//! percentage to the already-reduced value.

use num_traits::Float;

use crate::math::round_currency;

/// Factor used by double declining balance.
pub const DOUBLE_DECLINING_FACTOR: f64 = 2.0;

/// Current value under straight-line depreciation.
///
/// ```text
/// annual  = (initial_cost - salvage_value) / useful_life
/// current = max(round(initial_cost - annual * years), salvage_value)
/// ```
///
/// A zero `useful_life` returns `salvage_value` directly. An infinite useful
/// life (see [`crate::formulas::UsefulLife::Unbounded`]) yields no
/// depreciation at all.
///
/// # Arguments
///
/// * `initial_cost` - Purchase price
/// * `salvage_value` - Residual value, used as the floor
/// * `useful_life` - Years over which the asset depreciates to salvage
/// * `years` - Age of the asset
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::straight_line_depreciation;
///
/// assert_eq!(straight_line_depreciation(1000.0_f64, 100.0, 10.0, 5.0), 550.0);
/// // Past the end of its useful life the asset sits at salvage
/// assert_eq!(straight_line_depreciation(1000.0_f64, 100.0, 10.0, 25.0), 100.0);
/// // Degenerate useful life
/// assert_eq!(straight_line_depreciation(1000.0_f64, 100.0, 0.0, 5.0), 100.0);
/// ```
pub fn straight_line_depreciation<T: Float>(
    initial_cost: T,
    salvage_value: T,
    useful_life: T,
    years: T,
) -> T {
    if useful_life == T::zero() {
        return salvage_value;
    }
    let annual_depreciation = (initial_cost - salvage_value) / useful_life;
    let current_value = initial_cost - annual_depreciation * years;
    round_currency(current_value).max(salvage_value)
}

/// Declining-balance mode.
///
/// The two modes produce different results whenever the per-step floor
/// matters: `FixedRate` floors once after compounding, while
/// `FactorOverUsefulLife` re-floors after every whole year.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DecliningBalance<T: Float> {
    /// Compound a fixed annual rate: `initial * (1 - rate)^years`.
    FixedRate {
        /// Annual depreciation rate as a fraction
        rate: T,
    },

    /// Derive the rate as `factor / useful_life` and step year by year.
    FactorOverUsefulLife {
        /// Acceleration factor (2 for double declining balance)
        factor: T,
        /// Useful life in years
        useful_life: T,
    },
}

impl<T: Float> DecliningBalance<T> {
    /// Fixed-rate mode.
    #[inline]
    pub fn fixed_rate(rate: T) -> Self {
        DecliningBalance::FixedRate { rate }
    }

    /// Factor-over-useful-life mode with an explicit factor.
    #[inline]
    pub fn with_factor(factor: T, useful_life: T) -> Self {
        DecliningBalance::FactorOverUsefulLife {
            factor,
            useful_life,
        }
    }

    /// Double declining balance (factor 2).
    ///
    /// # Examples
    ///
    /// ```
    /// use valuer_core::formulas::DecliningBalance;
    ///
    /// let mode = DecliningBalance::double(5.0_f64);
    /// assert_eq!(mode, DecliningBalance::with_factor(2.0, 5.0));
    /// ```
    #[inline]
    pub fn double(useful_life: T) -> Self {
        let factor = T::from(DOUBLE_DECLINING_FACTOR).unwrap_or_else(|| T::one() + T::one());
        Self::with_factor(factor, useful_life)
    }
}

/// Whole years stepped one at a time by the factor mode before the rest of
/// the horizon is compounded in closed form.
const MAX_STEPPED_PERIODS: u64 = 1024;

/// Current value under declining-balance depreciation.
///
/// # Modes
///
/// - [`DecliningBalance::FixedRate`]: `max(round(initial * (1 - rate)^years), salvage)`.
/// - [`DecliningBalance::FactorOverUsefulLife`]: `rate = factor / useful_life`,
///   then for each whole year `current = max(current - current * rate, salvage)`;
///   the result is rounded once at the end. Fractional years are truncated to
///   whole periods. A zero `useful_life` returns `initial_cost` unchanged.
///   Long and infinite horizons settle on salvage without stepping every
///   year; a `NaN` horizon propagates.
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::{declining_balance_depreciation, DecliningBalance};
///
/// let fixed = declining_balance_depreciation(
///     1000.0_f64, 100.0, 10.0, DecliningBalance::fixed_rate(0.1),
/// );
/// assert_eq!(fixed, 348.68);
///
/// let ddb = declining_balance_depreciation(
///     1000.0_f64, 100.0, 3.0, DecliningBalance::double(5.0),
/// );
/// assert_eq!(ddb, 216.0);
/// ```
pub fn declining_balance_depreciation<T: Float>(
    initial_cost: T,
    salvage_value: T,
    years: T,
    mode: DecliningBalance<T>,
) -> T {
    match mode {
        DecliningBalance::FixedRate { rate } => {
            let current_value = initial_cost * (T::one() - rate).powf(years);
            round_currency(current_value).max(salvage_value)
        }
        DecliningBalance::FactorOverUsefulLife {
            factor,
            useful_life,
        } => {
            if useful_life == T::zero() {
                return initial_cost;
            }
            if years.is_nan() {
                return years;
            }
            let rate = factor / useful_life;
            let periods = years.floor().max(T::zero());
            let stepped = periods.min(T::from(MAX_STEPPED_PERIODS).unwrap_or_else(T::zero));
            let stepped_count = stepped.to_u64().unwrap_or(0);

            let mut current_value = initial_cost;
            for _ in 0..stepped_count {
                let next = (current_value - current_value * rate).max(salvage_value);
                // Salvage is a fixed point once reached with a non-negative rate.
                if next == salvage_value && rate >= T::zero() {
                    return round_currency(salvage_value);
                }
                current_value = next;
            }

            let remaining = periods - stepped;
            if remaining > T::zero() {
                current_value =
                    (current_value * (T::one() - rate).powf(remaining)).max(salvage_value);
            }
            round_currency(current_value)
        }
    }
}
