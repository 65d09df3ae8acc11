//! Compound growth: appreciation and inflation adjustment.

use num_traits::Float;

use crate::math::round_currency;

/// Appreciated value for assets such as real estate or collectibles.
///
/// ```text
/// round(initial_cost * (1 + rate)^years)
/// ```
///
/// No upper bound is applied. A zero rate is the identity (up to rounding).
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::appreciation;
///
/// assert_eq!(appreciation(100_000.0_f64, 0.05, 3.0), 115_762.5);
/// assert_eq!(appreciation(999.999_f64, 0.0, 12.0), 1000.0);
/// ```
#[inline]
pub fn appreciation<T: Float>(initial_cost: T, rate: T, years: T) -> T {
    round_currency(initial_cost * (T::one() + rate).powf(years))
}

/// Adjust an already computed value for inflation.
///
/// ```text
/// round(value * (1 + rate)^years)
/// ```
///
/// Composes with the output of any other formula.
///
/// # Examples
///
/// ```
/// use valuer_core::formulas::{inflation_adjustment, straight_line_depreciation};
///
/// let depreciated = straight_line_depreciation(1000.0_f64, 100.0, 10.0, 5.0);
/// assert_eq!(inflation_adjustment(depreciated, 0.1, 2.0), 665.5);
/// ```
#[inline]
pub fn inflation_adjustment<T: Float>(value: T, rate: T, years: T) -> T {
    round_currency(value * (T::one() + rate).powf(years))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_appreciation_one_year() {
        assert_eq!(appreciation(1000.0_f64, 0.07, 1.0), 1070.0);
    }

    #[test]
    fn test_appreciation_at_zero_years() {
        assert_eq!(appreciation(1234.5_f64, 0.2, 0.0), 1234.5);
    }

    #[test]
    fn test_appreciation_has_no_ceiling() {
        let value = appreciation(1000.0_f64, 1.0, 20.0);
        assert_relative_eq!(value, 1_048_576_000.0, max_relative = 1e-12);
    }

    #[test]
    fn test_appreciation_negative_rate_shrinks() {
        assert_eq!(appreciation(1000.0_f64, -0.5, 1.0), 500.0);
    }

    #[test]
    fn test_inflation_adjustment_compounds() {
        // 1000 * 1.06^10 = 1790.847697...
        assert_eq!(inflation_adjustment(1000.0_f64, 0.06, 10.0), 1790.85);
    }

    #[test]
    fn test_inflation_adjustment_zero_years() {
        assert_eq!(inflation_adjustment(12.344_f64, 0.5, 0.0), 12.34);
    }

    #[test]
    fn test_inflation_rate_below_minus_one_propagates_nan() {
        // (1 + rate) < 0 with a fractional exponent has no real value
        assert!(inflation_adjustment(100.0_f64, -2.0, 0.5).is_nan());
    }

    #[test]
    fn test_with_f32() {
        let value = appreciation(100.0_f32, 0.1, 1.0);
        assert!((value - 110.0).abs() < 1e-3);
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(500))]

            #[test]
            fn test_zero_rate_appreciation_is_rounding_identity(
                x in -1.0e7_f64..1.0e7,
                years in 0.0_f64..100.0,
            ) {
                prop_assert_eq!(appreciation(x, 0.0, years), round_currency(x));
            }

            #[test]
            fn test_zero_rate_inflation_is_rounding_identity(
                v in -1.0e7_f64..1.0e7,
                years in 0.0_f64..100.0,
            ) {
                prop_assert_eq!(inflation_adjustment(v, 0.0, years), round_currency(v));
            }

            #[test]
            fn test_positive_rate_never_decreases(
                cents in 0_u64..1_000_000_000,
                rate in 0.0_f64..0.5,
                years in 0.0_f64..30.0,
            ) {
                let x = cents as f64 / 100.0;
                prop_assert!(appreciation(x, rate, years) >= x);
            }
        }
    }
}
