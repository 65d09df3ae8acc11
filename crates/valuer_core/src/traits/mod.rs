//! Capability traits for the collaborators a valuation consumes.
//!
//! The valuation pipeline never reaches out to a model file, a pricing
//! service or an inflation feed on its own. Each such collaborator is a
//! trait implemented outside the core and passed in by the caller:
//!
//! - [`RatePredictor`]: supplies a depreciation rate in place of a fixed input
//! - [`PriceFetcher`]: supplies an already-known market price, if any
//! - [`InflationSource`]: adjusts a value for inflation over a number of years
//! - [`MarketTrendSource`]: supplies a market trend multiplier for a category
//!
//! All traits are consumed through generics (static dispatch), mirroring the
//! rest of the workspace.
//!
//! ## Fallback contract
//!
//! Collaborators never surface failures to the core. A collaborator that
//! cannot produce data returns the neutral value documented on each method
//! (`None`, the unadjusted value, or a trend factor of `1.0`).
//!
//! # Examples
//! ```
//! use valuer_core::traits::{RateFeatures, RatePredictor};
//!
//! struct HalfAge;
//!
//! impl RatePredictor<f64> for HalfAge {
//!     fn predict_depreciation_rate(&self, features: &RateFeatures<f64>) -> f64 {
//!         features.age / 200.0
//!     }
//! }
//!
//! let features = RateFeatures::new(0.5, 0.5, 1.0, 10.0);
//! assert_eq!(HalfAge.predict_depreciation_rate(&features), 0.05);
//! ```

pub mod collaborators;

pub use collaborators::{
    InflationSource, MarketTrendSource, PriceFetcher, RateFeatures, RatePredictor,
};
