//! # Valuer Models (L2: Business Logic)
//!
//! Valuation pipelines, verification and categorisation on top of the
//! `valuer_core` formulas.
//!
//! This crate provides:
//! - A configurable multiplicative valuation pipeline over an enumerated stage list
//! - `ProductValuation` and `ServiceValuation` parameter bundles
//! - Range checks for computed valuations (`verification`)
//! - Keyword categorisation and per-category valuation profiles
//! - `AssetValuator`, which prefers a known market price and falls back to formulas
//! - Concrete collaborator implementations (`providers`)
//!
//! ## Design Principles
//!
//! - **Enum-based stages** so the pipeline order is data, not code
//! - **Injected collaborators** through generics, never global singletons
//! - **Builder pattern** for parameter bundles with sensible defaults
//!
//! ## Example
//!
//! ```
//! use valuer_models::pipeline::ServiceValuation;
//! use valuer_models::verification::verify_service_valuation;
//!
//! let service = ServiceValuation::builder()
//!     .category("consulting")
//!     .base_rate(50.0_f64)
//!     .hours(10.0)
//!     .expertise_level(1.5)
//!     .demand_factor(1.2)
//!     .build()
//!     .unwrap();
//!
//! let value = service.get_current_valuation();
//! assert_eq!(value, 900.0);
//! assert!(verify_service_valuation(value, 1000.0));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod asset;
pub mod category;
pub mod pipeline;
pub mod providers;
pub mod verification;
