//! Product catalog module.
//!
//! Contains types for products, sellers, reviews, and categories.

mod category;
mod product;
mod review;
mod seller;

pub use category::Category;
pub use product::{MAX_RATING, Product, Specification};
pub use review::Review;
pub use seller::Seller;
