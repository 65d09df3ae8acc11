//! Range checks for computed valuations.
//!
//! Pure predicates: they map a computed value and a reference range or rate
//! to a boolean, and never fail.

use num_traits::Float;

/// Lower bound of the accepted service value to industry rate ratio.
pub const SERVICE_RATIO_LOWER: f64 = 0.8;

/// Upper bound of the accepted service value to industry rate ratio.
pub const SERVICE_RATIO_UPPER: f64 = 1.2;

/// Whether a product valuation falls within an inclusive market range.
///
/// # Examples
///
/// ```
/// use valuer_models::verification::verify_product_valuation;
///
/// assert!(verify_product_valuation(800.0_f64, (800.0, 1200.0)));
/// assert!(!verify_product_valuation(691.22_f64, (800.0, 1200.0)));
/// ```
#[inline]
pub fn verify_product_valuation<T: Float>(value: T, market_range: (T, T)) -> bool {
    let (low, high) = market_range;
    low <= value && value <= high
}

/// Whether a service valuation is within ±20% of an industry standard rate.
///
/// ```text
/// 0.8 <= value / industry_rate <= 1.2
/// ```
///
/// The tolerance band is fixed. A zero industry rate returns `false`
/// instead of dividing by zero, as does any `NaN` ratio.
///
/// # Examples
///
/// ```
/// use valuer_models::verification::verify_service_valuation;
///
/// assert!(verify_service_valuation(900.0_f64, 1000.0));
/// assert!(!verify_service_valuation(1300.0_f64, 1000.0));
/// assert!(!verify_service_valuation(900.0_f64, 0.0));
/// ```
pub fn verify_service_valuation<T: Float>(value: T, industry_rate: T) -> bool {
    if industry_rate == T::zero() {
        return false;
    }
    let ratio = value / industry_rate;
    let lower = T::from(SERVICE_RATIO_LOWER).unwrap_or_else(T::zero);
    let upper = T::from(SERVICE_RATIO_UPPER).unwrap_or_else(T::zero);
    lower <= ratio && ratio <= upper
}
