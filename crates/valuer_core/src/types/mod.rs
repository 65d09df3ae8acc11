//! Core valuation types.
//!
//! This module provides:
//! - `error`: Structured error types for parameter validation and parsing
//! - `params`: Opt-in range checks for valuation inputs
//!
//! # Re-exports
//!
//! - [`ValuationError`] from `error`

pub mod error;
pub mod params;

pub use error::ValuationError;
