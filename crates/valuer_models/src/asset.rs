//! Category-driven asset valuation.
//!
//! [`AssetValuator`] classifies a product by name, prefers a known market
//! price, falls back to the category's formula, and finally adjusts the
//! result for inflation.

use std::collections::HashMap;

use num_traits::Float;
use tracing::debug;
use valuer_core::formulas::{
    appreciation, declining_balance_depreciation, straight_line_depreciation, DecliningBalance,
};
use valuer_core::traits::{InflationSource, PriceFetcher};

use crate::category::{classify_product, AssetCategory, CategoryProfile, ValuationMethod};
use crate::providers::{NoInflation, NoMarketPrice};

/// Where an asset's base value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueSource {
    /// A positive market price was available
    MarketPrice,
    /// Computed from the category profile
    Formula,
}

/// Result of [`AssetValuator::valuate`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssetValuation<T> {
    /// Product name as given
    pub product_name: String,
    /// Keyword category
    pub category: AssetCategory,
    /// Formula applied, `None` when a market price was used
    pub method: Option<ValuationMethod>,
    /// Origin of the base value
    pub source: ValueSource,
    /// Value before inflation adjustment
    pub base_value: T,
    /// Value after inflation adjustment
    pub adjusted_value: T,
}

/// Values assets by category, market price and inflation.
///
/// # Examples
///
/// ```
/// use valuer_models::asset::{AssetValuator, ValueSource};
/// use valuer_models::category::AssetCategory;
///
/// let valuator = AssetValuator::<f64>::new();
/// let result = valuator.valuate("Beach house", 100_000.0, 2.0);
///
/// assert_eq!(result.category, AssetCategory::RealEstate);
/// assert_eq!(result.source, ValueSource::Formula);
/// assert_eq!(result.adjusted_value, 110_250.0);
/// ```
#[derive(Debug, Clone)]
pub struct AssetValuator<T, F = NoMarketPrice, I = NoInflation> {
    price_fetcher: F,
    inflation: I,
    overrides: HashMap<AssetCategory, CategoryProfile<T>>,
}

impl<T: Float> AssetValuator<T> {
    /// Valuator without market prices or inflation.
    pub fn new() -> Self {
        Self::with_sources(NoMarketPrice, NoInflation)
    }
}

impl<T: Float> Default for AssetValuator<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, F, I> AssetValuator<T, F, I>
where
    T: Float,
    F: PriceFetcher<T>,
    I: InflationSource<T>,
{
    /// Valuator with the given price fetcher and inflation source.
    pub fn with_sources(price_fetcher: F, inflation: I) -> Self {
        Self {
            price_fetcher,
            inflation,
            overrides: HashMap::new(),
        }
    }

    /// Replaces the built-in profile of `category`.
    pub fn with_profile(mut self, category: AssetCategory, profile: CategoryProfile<T>) -> Self {
        self.overrides.insert(category, profile);
        self
    }

    /// Profile in effect for `category`.
    pub fn profile(&self, category: AssetCategory) -> CategoryProfile<T> {
        self.overrides
            .get(&category)
            .copied()
            .unwrap_or_else(|| CategoryProfile::for_category(category))
    }

    /// Values `product_name` bought at `initial_price`, `years` ago.
    ///
    /// A positive market price replaces the formula path entirely. Otherwise
    /// the category profile picks the formula:
    ///
    /// - appreciation: `appreciation(initial, rate, years)`
    /// - straight-line: useful life `1 / depreciation_rate`, salvage
    ///   `initial * salvage_fraction`
    /// - declining (and unset): fixed-rate declining balance to the same salvage
    ///
    /// The inflation source is applied to the base value last.
    pub fn valuate(&self, product_name: &str, initial_price: T, years: T) -> AssetValuation<T> {
        let category = classify_product(product_name);
        debug!(product = product_name, %category, "Product categorised");

        let market_price = self
            .price_fetcher
            .market_price(product_name)
            .filter(|price| *price > T::zero());

        let (method, source, base_value) = match market_price {
            Some(price) => {
                debug!(
                    product = product_name,
                    price = price.to_f64().unwrap_or(f64::NAN),
                    "Using market price"
                );
                (None, ValueSource::MarketPrice, price)
            }
            None => {
                debug!(product = product_name, "No market price, using category formula");
                let profile = self.profile(category);
                let method = profile.resolved_method();
                let value = formula_value(&profile, method, initial_price, years);
                (Some(method), ValueSource::Formula, value)
            }
        };

        let adjusted_value = self.inflation.adjust(base_value, years);

        AssetValuation {
            product_name: product_name.to_string(),
            category,
            method,
            source,
            base_value,
            adjusted_value,
        }
    }
}

fn formula_value<T: Float>(
    profile: &CategoryProfile<T>,
    method: ValuationMethod,
    initial_price: T,
    years: T,
) -> T {
    match method {
        ValuationMethod::Appreciation => {
            appreciation(initial_price, profile.resolved_appreciation_rate(), years)
        }
        ValuationMethod::StraightLine => {
            let salvage = initial_price * profile.resolved_salvage_fraction();
            let useful_life = T::one() / profile.resolved_depreciation_rate();
            straight_line_depreciation(initial_price, salvage, useful_life, years)
        }
        ValuationMethod::DecliningBalance => {
            let salvage = initial_price * profile.resolved_salvage_fraction();
            declining_balance_depreciation(
                initial_price,
                salvage,
                years,
                DecliningBalance::fixed_rate(profile.resolved_depreciation_rate()),
            )
        }
    }
}
