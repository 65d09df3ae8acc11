//! Per-category valuation defaults.

use std::fmt;
use std::str::FromStr;

use num_traits::Float;
use valuer_core::types::ValuationError;

use super::classifier::AssetCategory;

/// Depreciation rate used when a profile does not set one.
pub const DEFAULT_DEPRECIATION_RATE: f64 = 0.2;

/// Salvage fraction used when a profile does not set one.
pub const DEFAULT_SALVAGE_FRACTION: f64 = 0.1;

/// Appreciation rate used when a profile does not set one.
pub const DEFAULT_APPRECIATION_RATE: f64 = 0.05;

/// Formula family a category is valued with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ValuationMethod {
    /// Fixed-rate declining balance
    DecliningBalance,
    /// Straight-line towards a salvage floor
    StraightLine,
    /// Compound growth
    Appreciation,
}

impl ValuationMethod {
    /// Short kebab-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            ValuationMethod::DecliningBalance => "declining",
            ValuationMethod::StraightLine => "straight-line",
            ValuationMethod::Appreciation => "appreciation",
        }
    }
}

impl fmt::Display for ValuationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ValuationMethod {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "declining" | "declining-balance" => Ok(ValuationMethod::DecliningBalance),
            "straight-line" | "straight" => Ok(ValuationMethod::StraightLine),
            "appreciation" => Ok(ValuationMethod::Appreciation),
            _ => Err(ValuationError::UnknownMethod(s.to_string())),
        }
    }
}

/// Valuation defaults for one category.
///
/// Unset fields fall back to [`DEFAULT_DEPRECIATION_RATE`],
/// [`DEFAULT_SALVAGE_FRACTION`] and [`DEFAULT_APPRECIATION_RATE`]; an unset
/// method resolves to declining balance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryProfile<T> {
    /// Formula family, if the category prescribes one
    pub method: Option<ValuationMethod>,
    /// Annual depreciation rate (fraction)
    pub depreciation_rate: Option<T>,
    /// Salvage value as a fraction of the initial price
    pub salvage_fraction: Option<T>,
    /// Annual appreciation rate (fraction)
    pub appreciation_rate: Option<T>,
}

impl<T> Default for CategoryProfile<T> {
    fn default() -> Self {
        Self {
            method: None,
            depreciation_rate: None,
            salvage_fraction: None,
            appreciation_rate: None,
        }
    }
}

impl<T: Float> CategoryProfile<T> {
    /// Built-in defaults for `category`.
    ///
    /// | category     | method        | rate | salvage | appreciation |
    /// |--------------|---------------|------|---------|--------------|
    /// | electronics  | declining     | 0.25 | 0.15    |              |
    /// | vehicles     | straight-line | 0.18 | 0.20    |              |
    /// | real_estate  | appreciation  |      |         | 0.05         |
    /// | collectibles | appreciation  |      |         | 0.07         |
    /// | furniture    | straight-line | 0.15 | 0.10    |              |
    /// | general      |               |      |         |              |
    pub fn for_category(category: AssetCategory) -> Self {
        let lit = |x: f64| T::from(x);
        match category {
            AssetCategory::Electronics => Self {
                method: Some(ValuationMethod::DecliningBalance),
                depreciation_rate: lit(0.25),
                salvage_fraction: lit(0.15),
                appreciation_rate: None,
            },
            AssetCategory::Vehicles => Self {
                method: Some(ValuationMethod::StraightLine),
                depreciation_rate: lit(0.18),
                salvage_fraction: lit(0.20),
                appreciation_rate: None,
            },
            AssetCategory::RealEstate => Self {
                method: Some(ValuationMethod::Appreciation),
                appreciation_rate: lit(0.05),
                ..Self::default()
            },
            AssetCategory::Collectibles => Self {
                method: Some(ValuationMethod::Appreciation),
                appreciation_rate: lit(0.07),
                ..Self::default()
            },
            AssetCategory::Furniture => Self {
                method: Some(ValuationMethod::StraightLine),
                depreciation_rate: lit(0.15),
                salvage_fraction: lit(0.10),
                appreciation_rate: None,
            },
            AssetCategory::General => Self::default(),
        }
    }

    /// Method to apply; declining balance when unset.
    #[inline]
    pub fn resolved_method(&self) -> ValuationMethod {
        self.method.unwrap_or(ValuationMethod::DecliningBalance)
    }

    /// Depreciation rate, or the default.
    #[inline]
    pub fn resolved_depreciation_rate(&self) -> T {
        self.depreciation_rate
            .unwrap_or_else(|| default_of(DEFAULT_DEPRECIATION_RATE))
    }

    /// Salvage fraction, or the default.
    #[inline]
    pub fn resolved_salvage_fraction(&self) -> T {
        self.salvage_fraction
            .unwrap_or_else(|| default_of(DEFAULT_SALVAGE_FRACTION))
    }

    /// Appreciation rate, or the default.
    #[inline]
    pub fn resolved_appreciation_rate(&self) -> T {
        self.appreciation_rate
            .unwrap_or_else(|| default_of(DEFAULT_APPRECIATION_RATE))
    }
}

#[inline]
fn default_of<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::zero)
}
