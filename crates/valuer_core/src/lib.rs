//! # valuer_core: Formula Foundation for Asset Valuation
//!
//! ## Layer 1 (Foundation) Role
//!
//! valuer_core serves as the bottom layer of the workspace, providing:
//! - Depreciation, appreciation and inflation formulas (`formulas`)
//! - Salvage value, useful life and straight-line rate derivation (`formulas::derived`)
//! - Currency rounding helpers (`math::rounding`)
//! - Capability traits for external collaborators (`traits`)
//! - Error types: `ValuationError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other valuer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Error derive
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use valuer_core::formulas::{
//!     appreciation, declining_balance_depreciation, straight_line_depreciation,
//!     DecliningBalance,
//! };
//!
//! // Linear decay from 1000 towards a salvage floor of 100 over 10 years
//! let sl = straight_line_depreciation(1000.0_f64, 100.0, 10.0, 4.0);
//! assert_eq!(sl, 640.0);
//!
//! // Double declining balance over a 5-year useful life
//! let ddb = declining_balance_depreciation(1000.0_f64, 100.0, 2.0, DecliningBalance::double(5.0));
//! assert_eq!(ddb, 360.0);
//!
//! // Compound growth
//! let appr = appreciation(1000.0_f64, 0.05, 2.0);
//! assert_eq!(appr, 1102.5);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for `RateFeatures` and `UsefulLife`

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod formulas;
pub mod math;
pub mod traits;
pub mod types;
