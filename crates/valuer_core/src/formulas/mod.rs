//! Asset valuation formulas.
//!
//! This module provides stateless, pure functions:
//! - `depreciation`: Straight-line and declining-balance depreciation
//! - `growth`: Compound appreciation and inflation adjustment
//! - `derived`: Salvage value, useful life and straight-line rate derivation
//!
//! Every public formula rounds its result to two decimal places exactly once,
//! at the end; intermediate values are never rounded. Depreciation results
//! never fall below the salvage value. Appreciation and inflation have no
//! floor or ceiling.

pub mod depreciation;
pub mod derived;
pub mod growth;

pub use depreciation::{
    declining_balance_depreciation, straight_line_depreciation, DecliningBalance,
    DOUBLE_DECLINING_FACTOR,
};
pub use derived::{
    calculate_salvage_value, calculate_straight_line_rate, calculate_useful_life, UsefulLife,
};
pub use growth::{appreciation, inflation_adjustment};
