//! Shopping cart module.
//!
//! Contains the cart, its lines, and the pricing rules that derive totals.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use pricing::{CartTotals, LinePricing, PricingPolicy};
