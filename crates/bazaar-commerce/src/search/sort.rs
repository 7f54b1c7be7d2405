//! Sort options for product listings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::Product;
use crate::error::CommerceError;

/// Sort options for product listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOption {
    /// Keep the input order. No relevance score is computed.
    #[default]
    Relevance,
    /// Sort by price, low to high.
    PriceLow,
    /// Sort by price, high to low.
    PriceHigh,
    /// Sort by highest rated.
    Rating,
    /// Sort by newest first.
    Newest,
}

impl SortOption {
    /// All options, in the order the storefront lists them.
    pub const ALL: [SortOption; 5] = [
        SortOption::Relevance,
        SortOption::PriceLow,
        SortOption::PriceHigh,
        SortOption::Rating,
        SortOption::Newest,
    ];

    /// Wire name (e.g., "price-low").
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOption::Relevance => "relevance",
            SortOption::PriceLow => "price-low",
            SortOption::PriceHigh => "price-high",
            SortOption::Rating => "rating",
            SortOption::Newest => "newest",
        }
    }

    /// Label shown in the sort dropdown (e.g., "Price: Low to High").
    pub fn display_name(&self) -> &'static str {
        match self {
            SortOption::Relevance => "Relevance",
            SortOption::PriceLow => "Price: Low to High",
            SortOption::PriceHigh => "Price: High to Low",
            SortOption::Rating => "Highest Rated",
            SortOption::Newest => "Newest",
        }
    }
}

impl fmt::Display for SortOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CommerceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOption::ALL
            .into_iter()
            .find(|option| option.as_str() == s)
            .ok_or_else(|| CommerceError::UnknownSortOption(s.to_string()))
    }
}

/// Order products by `key` without touching the source collection.
///
/// The sort is stable and has no secondary key: products that compare
/// equal keep their input order.
pub fn sort_by<'a, I>(products: I, key: SortOption) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut sorted: Vec<&Product> = products.into_iter().collect();

    match key {
        SortOption::Relevance => {}
        SortOption::PriceLow => sorted.sort_by(|a, b| a.price.cmp_amount(&b.price)),
        SortOption::PriceHigh => sorted.sort_by(|a, b| b.price.cmp_amount(&a.price)),
        SortOption::Rating => sorted.sort_by(|a, b| b.rating.total_cmp(&a.rating)),
        SortOption::Newest => sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
    }

    sorted
}
