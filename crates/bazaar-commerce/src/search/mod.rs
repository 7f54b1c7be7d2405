//! Search module.
//!
//! Linear substring search, category scoping, and stable sorting over an
//! in-memory product collection.

mod query;
mod sort;

pub use query::{CatalogQuery, filter_by_query, products_in_category};
pub use sort::{SortOption, sort_by};
