//! Keyword categorisation and per-category valuation profiles.
//!
//! Categorisation is plain case-insensitive substring matching against fixed
//! keyword lists; there is no learned classifier.
//!
//! - `classifier`: [`AssetCategory`], [`ValueTrend`] and the keyword matchers
//! - `profile`: [`ValuationMethod`] and default [`CategoryProfile`]s

pub mod classifier;
pub mod profile;

pub use classifier::{classify_product, determine_value_trend, AssetCategory, ValueTrend};
pub use profile::{
    CategoryProfile, ValuationMethod, DEFAULT_APPRECIATION_RATE, DEFAULT_DEPRECIATION_RATE,
    DEFAULT_SALVAGE_FRACTION,
};
