//! Error types for structured error handling.
//!
//! The formulas themselves never fail: degenerate inputs resolve to
//! documented fallback values. `ValuationError` covers the opt-in
//! validation layer, builder completeness checks, and parsing of
//! categories and methods.

use thiserror::Error;

/// Categorised valuation errors.
///
/// # Variants
/// - `InvalidParameter`: A numeric parameter is outside its documented domain
/// - `MissingParameter`: A required builder field was never set
/// - `UnknownCategory`: A category name could not be parsed
/// - `UnknownMethod`: A valuation method name could not be parsed
///
/// # Examples
/// ```
/// use valuer_core::types::ValuationError;
///
/// let err = ValuationError::InvalidParameter { name: "years", value: -1.0 };
/// assert_eq!(format!("{}", err), "Invalid parameter: years = -1");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValuationError {
    /// Numeric parameter outside its documented domain.
    #[error("Invalid parameter: {name} = {value}")]
    InvalidParameter {
        /// Parameter name
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Required parameter was not provided.
    #[error("Missing parameter: {0}")]
    MissingParameter(&'static str),

    /// Unknown asset category name.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// Unknown valuation method name.
    #[error("Unknown valuation method: {0}")]
    UnknownMethod(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_parameter_display() {
        let err = ValuationError::InvalidParameter {
            name: "depreciation_rate",
            value: -1.5,
        };
        assert_eq!(
            format!("{}", err),
            "Invalid parameter: depreciation_rate = -1.5"
        );
    }

    #[test]
    fn test_missing_parameter_display() {
        let err = ValuationError::MissingParameter("original_value");
        assert_eq!(format!("{}", err), "Missing parameter: original_value");
    }

    #[test]
    fn test_unknown_category_display() {
        let err = ValuationError::UnknownCategory("spaceships".to_string());
        assert_eq!(format!("{}", err), "Unknown category: spaceships");
    }

    #[test]
    fn test_unknown_method_display() {
        let err = ValuationError::UnknownMethod("sum-of-years".to_string());
        assert_eq!(
            format!("{}", err),
            "Unknown valuation method: sum-of-years"
        );
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = ValuationError::MissingParameter("hours");
        let _: &dyn std::error::Error = &err;
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ValuationError::UnknownCategory("x".to_string());
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
