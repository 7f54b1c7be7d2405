//! Text search, category scoping, and the query builder that chains them.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::Product;
use crate::ids::CategoryId;
use crate::search::{SortOption, sort_by};

/// Products matching a free-text query, in input order.
///
/// An empty or whitespace-only query matches everything. Otherwise a product
/// matches when the lowercased query is a substring of its lowercased title,
/// description, category id, or any tag.
pub fn filter_by_query<'a, I>(products: I, query: &str) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    if query.trim().is_empty() {
        return products.into_iter().collect();
    }

    let needle = query.to_lowercase();
    products
        .into_iter()
        .filter(|product| matches_query(product, &needle))
        .collect()
}

/// Whether a product contains an already-lowercased needle.
fn matches_query(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category_id.as_str().to_lowercase().contains(needle)
        || product
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Products listed under exactly `category_id`, in input order.
pub fn products_in_category<'a, I>(products: I, category_id: &CategoryId) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    products
        .into_iter()
        .filter(|product| &product.category_id == category_id)
        .collect()
}

/// A catalog query: optional category scope, optional text, and a sort key.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CatalogQuery {
    /// Text query.
    pub text: Option<String>,
    /// Category scope.
    pub category: Option<CategoryId>,
    /// Sort option.
    pub sort: SortOption,
}

impl CatalogQuery {
    /// Create a query that returns everything in input order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the text query. Blank text clears it.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        let text = text.into();
        self.text = if text.trim().is_empty() {
            None
        } else {
            Some(text)
        };
        self
    }

    /// Scope to one category.
    pub fn in_category(mut self, category: impl Into<CategoryId>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Set sort option.
    pub fn with_sort(mut self, sort: SortOption) -> Self {
        self.sort = sort;
        self
    }

    /// Run category scope, then text filter, then sort.
    pub fn run<'a, I>(&self, products: I) -> Vec<&'a Product>
    where
        I: IntoIterator<Item = &'a Product>,
    {
        let scoped = match &self.category {
            Some(category) => products_in_category(products, category),
            None => products.into_iter().collect(),
        };
        let matched = match &self.text {
            Some(text) => filter_by_query(scoped, text),
            None => scoped,
        };
        let results = sort_by(matched, self.sort);

        debug!(
            text = ?self.text,
            category = ?self.category,
            sort = %self.sort,
            results = results.len(),
            "catalog query"
        );

        results
    }
}
