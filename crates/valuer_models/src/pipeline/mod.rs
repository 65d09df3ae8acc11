//! Multiplicative valuation pipeline.
//!
//! A valuation starts from a base value and applies a fixed, ordered list of
//! [`AdjustmentStage`]s, each multiplying the previous stage's output. The
//! final value is rounded to two decimal places once, at the end.
//!
//! - `stage`: The enumerated stage kinds and their multipliers
//! - `factors`: Insertion-ordered named multipliers
//! - `engine`: [`ValuationPipeline`] and its [`ValuationBreakdown`]
//! - `product`: [`ProductValuation`]
//! - `service`: [`ServiceValuation`]

pub mod engine;
pub mod factors;
pub mod product;
pub mod service;
pub mod stage;

pub use engine::{StageOutcome, ValuationBreakdown, ValuationPipeline};
pub use factors::AdditionalFactors;
pub use product::{ProductValuation, ProductValuationBuilder};
pub use service::{ServiceValuation, ServiceValuationBuilder};
pub use stage::{AdjustmentStage, PRECIOUSNESS_PREMIUM_WEIGHT, UNIQUENESS_PREMIUM_WEIGHT};
