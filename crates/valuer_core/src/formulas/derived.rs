//! Derived quantities: salvage value, useful life, straight-line rate.

use num_traits::Float;

use crate::math::round_currency;

/// Useful life of an asset.
///
/// `Unbounded` is the sentinel for an asset that never depreciates (zero
/// annual depreciation). It converts to `+∞` through [`UsefulLife::years`],
/// which the straight-line formulas treat as "no depreciation".
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UsefulLife<T> {
    /// Finite useful life in years.
    Years(T),
    /// The asset never reaches its salvage value.
    Unbounded,
}

impl<T: Float> UsefulLife<T> {
    /// Useful life in years, `+∞` when unbounded.
    ///
    /// # Examples
    ///
    /// ```
    /// use valuer_core::formulas::UsefulLife;
    ///
    /// assert_eq!(UsefulLife::Years(30.0_f64).years(), 30.0);
    /// assert!(UsefulLife::<f64>::Unbounded.years().is_infinite());
    /// ```
    #[inline]
    pub fn years(&self) -> T {
        match self {
            UsefulLife::Years(y) => *y,
            UsefulLife::Unbounded => T::infinity(),
        }
    }

    /// Whether the useful life is unbounded.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, UsefulLife::Unbounded)
    }
}

/// Salvage value as a fraction of the original cost.
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::calculate_salvage_value;
///
/// assert_eq!(calculate_salvage_value(1_000_000.0_f64, 0.10), 100_000.0);
/// ```
#[inline]
pub fn calculate_salvage_value<T: Float>(original_cost: T, salvage_percentage: T) -> T {
    round_currency(original_cost * salvage_percentage)
}

/// Useful life implied by a constant annual depreciation amount.
///
/// ```text
/// (original_cost - salvage_value) / annual_depreciation
/// ```
///
/// Zero annual depreciation yields [`UsefulLife::Unbounded`] instead of a
/// division by zero.
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::{calculate_useful_life, UsefulLife};
///
/// assert_eq!(
///     calculate_useful_life(1_000_000.0_f64, 100_000.0, 30_000.0),
///     UsefulLife::Years(30.0),
/// );
/// assert_eq!(
///     calculate_useful_life(1000.0_f64, 100.0, 0.0),
///     UsefulLife::Unbounded,
/// );
/// ```
pub fn calculate_useful_life<T: Float>(
    original_cost: T,
    salvage_value: T,
    annual_depreciation: T,
) -> UsefulLife<T> {
    if annual_depreciation == T::zero() {
        return UsefulLife::Unbounded;
    }
    UsefulLife::Years(round_currency(
        (original_cost - salvage_value) / annual_depreciation,
    ))
}

/// Straight-line depreciation rate in percent per year.
///
/// ```text
/// 100 / useful_life
/// ```
///
/// A zero useful life yields `0`, not infinity. An infinite useful life
/// also yields `0`.
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::calculate_straight_line_rate;
///
/// assert_eq!(calculate_straight_line_rate(30.0_f64), 3.33);
/// assert_eq!(calculate_straight_line_rate(0.0_f64), 0.0);
/// ```
pub fn calculate_straight_line_rate<T: Float>(useful_life: T) -> T {
    if useful_life == T::zero() {
        return T::zero();
    }
    let hundred = T::from(100.0).unwrap_or_else(T::one);
    round_currency(hundred / useful_life)
}
