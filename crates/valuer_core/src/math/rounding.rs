//! Decimal rounding for currency amounts.

use num_traits::Float;

/// Number of decimal places every public valuation result is rounded to.
pub const CURRENCY_DECIMALS: i32 = 2;

/// Round `x` to `decimals` decimal places.
///
/// The exact binary value of `x` is rounded, ties to even, so `2.675`
/// (stored just below the tie) rounds down and `0.125` rounds to `0.12`.
/// Negative `decimals` round to tens, hundreds and so on through a scaled
/// value. Non-finite values pass through unchanged, so `NaN` and `±∞`
/// inputs propagate instead of being coerced.
///
/// # Examples
///
/// ```
/// use valuer_core::math::round_to;
///
/// assert_eq!(round_to(3.14159_f64, 2), 3.14);
/// assert_eq!(round_to(2.675_f64, 2), 2.67);
/// assert_eq!(round_to(2.5_f64, 0), 2.0);
/// assert!(round_to(f64::INFINITY, 2).is_infinite());
/// ```
pub fn round_to<T: Float>(x: T, decimals: i32) -> T {
    if !x.is_finite() {
        return x;
    }
    let Some(value) = x.to_f64() else {
        return x;
    };
    let rounded = match usize::try_from(decimals) {
        Ok(places) => format!("{:.*}", places, value)
            .parse::<f64>()
            .unwrap_or(value),
        Err(_) => {
            let scale = 10f64.powi(-decimals);
            (value / scale).round_ties_even() * scale
        }
    };
    T::from(rounded).unwrap_or(x)
}

/// Round `x` to [`CURRENCY_DECIMALS`] places.
///
/// # Examples
///
/// ```
/// use valuer_core::math::round_currency;
///
/// assert_eq!(round_currency(348.6784401_f64), 348.68);
/// ```
#[inline]
pub fn round_currency<T: Float>(x: T) -> T {
    round_to(x, CURRENCY_DECIMALS)
}
