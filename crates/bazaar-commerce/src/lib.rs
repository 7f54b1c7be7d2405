//! Catalog queries and cart pricing for the Bazaar marketplace storefront.
//!
//! This crate holds the storefront's logic, separate from any rendering:
//!
//! - **Catalog**: Products, sellers, reviews, categories
//! - **Dataset**: A validated, read-only repository with id lookups and seed data
//! - **Search**: Substring search, category scoping, stable sorting
//! - **Cart**: Line items and derived totals (subtotal, shipping, tax)
//!
//! # Example
//!
//! ```rust
//! use bazaar_commerce::prelude::*;
//!
//! let dataset = seed::storefront().unwrap();
//!
//! // Search, then sort
//! let hits = filter_by_query(dataset.products(), "leather");
//! let sorted = sort_by(hits, SortOption::PriceLow);
//! assert_eq!(sorted[0].id.as_str(), "vintage-leather-messenger");
//!
//! // Add to a cart and price it
//! let mut cart = Cart::new();
//! cart.add_or_increment(sorted[0], 1).unwrap();
//! let totals = cart.compute_totals().unwrap();
//! assert!(totals.ships_free());
//! println!("Total: {}", totals.total.display());
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod dataset;
pub mod search;

pub use error::CommerceError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Category, Product, Review, Seller, Specification};

    // Dataset
    pub use crate::dataset::{
        Dataset, DatasetBuilder, DatasetSnapshot, RELATED_PRODUCTS_LIMIT, seed,
    };

    // Cart
    pub use crate::cart::{
        Cart, CartLine, CartTotals, LinePricing, MAX_QUANTITY_PER_LINE, PricingPolicy,
    };

    // Search
    pub use crate::search::{
        CatalogQuery, SortOption, filter_by_query, products_in_category, sort_by,
    };
}
