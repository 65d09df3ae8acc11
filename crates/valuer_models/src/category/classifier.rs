//! Keyword classifiers.

use std::fmt;
use std::str::FromStr;

use valuer_core::types::ValuationError;

/// Asset category a product is valued under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AssetCategory {
    /// Phones, laptops, tablets, cameras
    Electronics,
    /// Cars, bikes, motorcycles, scooters
    Vehicles,
    /// Houses, apartments, land, property
    RealEstate,
    /// Art, antiques, coins, stamps
    Collectibles,
    /// Chairs, tables, sofas, cabinets
    Furniture,
    /// Anything without a keyword match
    General,
}

impl AssetCategory {
    /// Categories with keyword lists, in matching order.
    pub const MATCHED: [AssetCategory; 5] = [
        AssetCategory::Electronics,
        AssetCategory::Vehicles,
        AssetCategory::RealEstate,
        AssetCategory::Collectibles,
        AssetCategory::Furniture,
    ];

    /// Lowercase keywords that select this category.
    pub fn keywords(&self) -> &'static [&'static str] {
        match self {
            AssetCategory::Electronics => &["phone", "laptop", "tablet", "camera"],
            AssetCategory::Vehicles => &["car", "bike", "motorcycle", "scooter"],
            AssetCategory::RealEstate => &["house", "apartment", "land", "property"],
            AssetCategory::Collectibles => &["art", "antique", "coin", "stamp"],
            AssetCategory::Furniture => &["chair", "table", "sofa", "cabinet"],
            AssetCategory::General => &[],
        }
    }

    /// Canonical snake_case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            AssetCategory::Electronics => "electronics",
            AssetCategory::Vehicles => "vehicles",
            AssetCategory::RealEstate => "real_estate",
            AssetCategory::Collectibles => "collectibles",
            AssetCategory::Furniture => "furniture",
            AssetCategory::General => "general",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetCategory {
    type Err = ValuationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "electronics" => Ok(AssetCategory::Electronics),
            "vehicles" => Ok(AssetCategory::Vehicles),
            "real_estate" => Ok(AssetCategory::RealEstate),
            "collectibles" => Ok(AssetCategory::Collectibles),
            "furniture" => Ok(AssetCategory::Furniture),
            "general" => Ok(AssetCategory::General),
            _ => Err(ValuationError::UnknownCategory(s.to_string())),
        }
    }
}

/// Category of `product_name` by keyword.
///
/// Matching is a case-insensitive substring search, so a keyword embedded in
/// a longer word also matches ("cart" contains "car"). Categories are tried
/// in [`AssetCategory::MATCHED`] order; the first hit wins.
///
/// # Examples
///
/// ```
/// use valuer_models::category::{classify_product, AssetCategory};
///
/// assert_eq!(classify_product("iPhone 12"), AssetCategory::Electronics);
/// assert_eq!(classify_product("Vintage stamp album"), AssetCategory::Collectibles);
/// assert_eq!(classify_product("Garden hose"), AssetCategory::General);
/// ```
pub fn classify_product(product_name: &str) -> AssetCategory {
    let lower = product_name.to_lowercase();
    AssetCategory::MATCHED
        .into_iter()
        .find(|category| category.keywords().iter().any(|kw| lower.contains(kw)))
        .unwrap_or(AssetCategory::General)
}

/// Whether a product typically gains or loses value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueTrend {
    /// Gains value over time
    Appreciating,
    /// Loses value over time
    Depreciating,
}

const APPRECIATING_KEYWORDS: [&str; 5] =
    ["art", "real estate", "antique", "collectible", "jewelry"];
const DEPRECIATING_KEYWORDS: [&str; 5] = ["car", "laptop", "phone", "equipment", "furniture"];

impl fmt::Display for ValueTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueTrend::Appreciating => f.write_str("appreciating"),
            ValueTrend::Depreciating => f.write_str("depreciating"),
        }
    }
}

/// Value trend of `product_name` by keyword, `None` when nothing matches.
///
/// Appreciating keywords are checked first.
///
/// # Examples
///
/// ```
/// use valuer_models::category::{determine_value_trend, ValueTrend};
///
/// assert_eq!(determine_value_trend("Gold jewelry"), Some(ValueTrend::Appreciating));
/// assert_eq!(determine_value_trend("Gaming laptop"), Some(ValueTrend::Depreciating));
/// assert_eq!(determine_value_trend("Sandwich"), None);
/// ```
pub fn determine_value_trend(product_name: &str) -> Option<ValueTrend> {
    let lower = product_name.to_lowercase();
    if APPRECIATING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Some(ValueTrend::Appreciating);
    }
    if DEPRECIATING_KEYWORDS.iter().any(|kw| lower.contains(kw)) {
        return Some(ValueTrend::Depreciating);
    }
    None
}
