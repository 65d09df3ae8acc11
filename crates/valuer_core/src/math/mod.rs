//! Numerical helpers shared by the valuation formulas.
//!
//! This module provides:
//! - `rounding`: Decimal rounding applied once at the end of each public formula

pub mod rounding;

pub use rounding::{round_currency, round_to, CURRENCY_DECIMALS};
