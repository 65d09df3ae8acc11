//! Opt-in parameter checks.
//!
//! None of the formulas call these: out-of-domain inputs propagate as
//! ordinary floating-point results (`NaN`, `±∞`, negative values). Callers
//! that prefer to fail fast run the checks themselves before valuing.

use num_traits::Float;

use super::error::ValuationError;

fn invalid<T: Float>(name: &'static str, value: T) -> ValuationError {
    ValuationError::InvalidParameter {
        name,
        value: value.to_f64().unwrap_or(f64::NAN),
    }
}

/// Reject `NaN` and infinite values.
///
/// # Examples
/// ```
/// use valuer_core::types::params::check_finite;
///
/// assert!(check_finite("original_value", 1000.0_f64).is_ok());
/// assert!(check_finite("original_value", f64::NAN).is_err());
/// ```
pub fn check_finite<T: Float>(name: &'static str, value: T) -> Result<T, ValuationError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(name, value))
    }
}

/// Reject non-finite and negative values (years, hours, costs).
pub fn check_non_negative<T: Float>(name: &'static str, value: T) -> Result<T, ValuationError> {
    let value = check_finite(name, value)?;
    if value < T::zero() {
        return Err(invalid(name, value));
    }
    Ok(value)
}

/// Reject non-finite rates and rates below -1.
///
/// A rate of -1 (or below) takes `1 + rate` to zero or negative, which makes
/// compound growth meaningless.
///
/// # Examples
/// ```
/// use valuer_core::types::params::check_rate;
///
/// assert!(check_rate("inflation_rate", 0.06_f64).is_ok());
/// assert!(check_rate("inflation_rate", -0.5_f64).is_ok());
/// assert!(check_rate("inflation_rate", -1.5_f64).is_err());
/// ```
pub fn check_rate<T: Float>(name: &'static str, value: T) -> Result<T, ValuationError> {
    let value = check_finite(name, value)?;
    if value < -T::one() {
        return Err(invalid(name, value));
    }
    Ok(value)
}

/// Reject non-finite depreciation rates and rates above 1.
///
/// Above 1 the depreciation base `1 - rate` turns negative, so compounding
/// over fractional years produces `NaN`. Negative rates are accepted: they
/// behave as appreciation.
pub fn check_depreciation_rate<T: Float>(
    name: &'static str,
    value: T,
) -> Result<T, ValuationError> {
    let value = check_finite(name, value)?;
    if value > T::one() {
        return Err(invalid(name, value));
    }
    Ok(value)
}
