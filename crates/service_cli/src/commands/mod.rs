//! CLI command implementations
//!
//! Each submodule implements a specific CLI command as a pure `compute`
//! step returning a serialisable report, and a `run` step that emits it.

pub mod asset;
pub mod classify;
pub mod estimate;
pub mod product;
pub mod service;
pub mod verify;

use valuer_models::pipeline::AdditionalFactors;

use crate::{CliError, Result};

/// Parse one `name=value` additional factor.
pub fn parse_factor(raw: &str) -> Result<(String, f64)> {
    let (name, value) = raw.split_once('=').ok_or_else(|| {
        CliError::InvalidArgument(format!("Factor must be NAME=VALUE, got: {}", raw))
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CliError::InvalidArgument(format!(
            "Factor name is empty in: {}",
            raw
        )));
    }

    let multiplier: f64 = value.trim().parse().map_err(|_| {
        CliError::InvalidArgument(format!("Factor {} has a non-numeric value: {}", name, value))
    })?;

    Ok((name.to_string(), multiplier))
}

/// Parse repeated `--factor` arguments, preserving their order.
///
/// A name given twice keeps its first position and takes the later value.
pub fn parse_factors(raw: &[String]) -> Result<AdditionalFactors<f64>> {
    let mut factors = AdditionalFactors::new();
    for entry in raw {
        let (name, multiplier) = parse_factor(entry)?;
        factors.insert(name, multiplier);
    }
    Ok(factors)
}
