//! Cart and line item types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cart::{CartTotals, LinePricing, PricingPolicy};
use crate::catalog::Product;
use crate::error::CommerceError;
use crate::ids::{CartId, LineId, ProductId};
use crate::money::{Currency, Money};

/// Maximum quantity allowed per line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// A shopping cart.
///
/// Every line has a quantity of at least one; a line whose quantity drops
/// to zero is removed. Lines are merged by product id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    lines: Vec<CartLine>,
    currency: Currency,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    /// Create an empty USD cart.
    pub fn new() -> Self {
        Self::with_currency(Currency::USD)
    }

    /// Create an empty cart in a given currency.
    pub fn with_currency(currency: Currency) -> Self {
        let now = Utc::now();
        Self {
            id: CartId::generate(),
            lines: Vec::new(),
            currency,
            created_at: now,
            updated_at: now,
        }
    }

    /// Add `delta` units of a product.
    ///
    /// Increments the existing line for this product, or appends a new line.
    /// Returns the id of the affected line.
    pub fn add_or_increment(
        &mut self,
        product: &Product,
        delta: u32,
    ) -> Result<LineId, CommerceError> {
        if delta == 0 {
            return Err(CommerceError::InvalidQuantity(delta));
        }

        if product.price.currency != self.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }

        if let Some(existing) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            let quantity = existing
                .quantity
                .checked_add(delta)
                .ok_or(CommerceError::Overflow)?;
            check_limit(quantity)?;

            existing.quantity = quantity;
            let line_id = existing.id.clone();
            debug!(
                cart = %self.id,
                line = %line_id,
                product = %product.id,
                quantity,
                "incremented cart line"
            );
            self.touch();
            return Ok(line_id);
        }

        check_limit(delta)?;
        let line = CartLine::new(product.clone(), delta);
        let line_id = line.id.clone();
        debug!(
            cart = %self.id,
            line = %line_id,
            product = %product.id,
            quantity = delta,
            "added cart line"
        );
        self.lines.push(line);
        self.touch();
        Ok(line_id)
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// Returns `Ok(false)` when no line has this id.
    pub fn set_quantity(&mut self, line_id: &LineId, quantity: u32) -> Result<bool, CommerceError> {
        if quantity == 0 {
            return Ok(self.remove_line(line_id));
        }
        check_limit(quantity)?;

        let Some(line) = self.lines.iter_mut().find(|l| &l.id == line_id) else {
            return Ok(false);
        };
        line.quantity = quantity;
        debug!(cart = %self.id, line = %line_id, quantity, "set cart line quantity");
        self.touch();
        Ok(true)
    }

    /// Remove a line. Returns whether anything was removed.
    pub fn remove_line(&mut self, line_id: &LineId) -> bool {
        let len_before = self.lines.len();
        self.lines.retain(|l| &l.id != line_id);
        let removed = self.lines.len() < len_before;
        if removed {
            debug!(cart = %self.id, line = %line_id, "removed cart line");
            self.touch();
        }
        removed
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.touch();
    }

    /// Get total item count (sum of quantities).
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Get number of lines.
    pub fn unique_item_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by ID.
    pub fn line(&self, line_id: &LineId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.id == line_id)
    }

    /// Get the line holding a product.
    pub fn line_for_product(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Currency every line must be priced in.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Totals under the storefront's default policy.
    pub fn compute_totals(&self) -> Result<CartTotals, CommerceError> {
        self.compute_totals_with(&PricingPolicy::default())
    }

    /// Totals under an explicit policy.
    ///
    /// Pure: the same lines always give the same totals. Nothing is rounded.
    /// Amounts too large for a `Decimal` give [`CommerceError::Overflow`].
    pub fn compute_totals_with(
        &self,
        policy: &PricingPolicy,
    ) -> Result<CartTotals, CommerceError> {
        let lines = self
            .lines
            .iter()
            .map(|line| -> Result<LinePricing, CommerceError> {
                Ok(LinePricing {
                    line_id: line.id.clone(),
                    unit_price: line.product.price,
                    quantity: line.quantity,
                    subtotal: line.subtotal()?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let subtotal = Money::try_sum(lines.iter().map(|l| &l.subtotal), self.currency)?;
        let shipping = policy.shipping_for(&subtotal);
        let tax = policy.tax_for(&subtotal)?;
        let total = subtotal.try_add(&shipping)?.try_add(&tax)?;
        let free_shipping_remainder = policy.free_shipping_remainder(&subtotal)?;

        Ok(CartTotals {
            subtotal,
            shipping,
            tax,
            total,
            free_shipping_remainder,
            lines,
        })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// A line in the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// Unique line identifier.
    pub id: LineId,
    /// Product as it was when added.
    pub product: Product,
    /// Quantity, at least one.
    pub quantity: u32,
    /// When the line was created.
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    fn new(product: Product, quantity: u32) -> Self {
        Self {
            id: LineId::generate(),
            product,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// unit price * quantity.
    pub fn subtotal(&self) -> Result<Money, CommerceError> {
        self.product.price.try_multiply(self.quantity)
    }
}

fn check_limit(quantity: u32) -> Result<(), CommerceError> {
    if quantity > MAX_QUANTITY_PER_LINE {
        return Err(CommerceError::QuantityExceedsLimit {
            requested: quantity,
            max: MAX_QUANTITY_PER_LINE,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(id: &str, cents: i64) -> Product {
        Product::new(id, id, Money::from_minor(cents, Currency::USD), "misc", "seller")
    }

    #[test]
    fn test_cart_creation() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.item_count(), 0);
        assert_eq!(cart.currency(), Currency::USD);
    }

    #[test]
    fn test_add_creates_one_line() {
        let mut cart = Cart::new();
        let line_id = cart.add_or_increment(&product("p1", 1000), 2).unwrap();

        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 2);
        assert_eq!(cart.line(&line_id).unwrap().quantity, 2);
    }

    #[test]
    fn test_add_same_product_increments() {
        let mut cart = Cart::new();
        let p = product("p1", 1000);

        let first = cart.add_or_increment(&p, 1).unwrap();
        let second = cart.add_or_increment(&p, 2).unwrap();

        assert_eq!(first, second);
        assert_eq!(cart.unique_item_count(), 1);
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn test_add_zero_is_rejected() {
        let mut cart = Cart::new();
        let result = cart.add_or_increment(&product("p1", 1000), 0);
        assert_eq!(result, Err(CommerceError::InvalidQuantity(0)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_limit() {
        let mut cart = Cart::new();
        let p = product("p1", 1000);
        assert!(cart.add_or_increment(&p, MAX_QUANTITY_PER_LINE + 1).is_err());

        cart.add_or_increment(&p, MAX_QUANTITY_PER_LINE).unwrap();
        assert!(matches!(
            cart.add_or_increment(&p, 1),
            Err(CommerceError::QuantityExceedsLimit { .. })
        ));
        assert_eq!(cart.item_count(), u64::from(MAX_QUANTITY_PER_LINE));
    }

    #[test]
    fn test_currency_mismatch() {
        let mut cart = Cart::new();
        let mut p = product("p1", 1000);
        p.price = Money::from_minor(1000, Currency::EUR);
        assert!(matches!(
            cart.add_or_increment(&p, 1),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_set_quantity() {
        let mut cart = Cart::new();
        let line_id = cart.add_or_increment(&product("p1", 1000), 1).unwrap();

        assert!(cart.set_quantity(&line_id, 5).unwrap());
        assert_eq!(cart.item_count(), 5);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let mut cart = Cart::new();
        let keep = cart.add_or_increment(&product("p1", 1000), 1).unwrap();
        let drop = cart.add_or_increment(&product("p2", 500), 3).unwrap();

        assert!(cart.set_quantity(&drop, 0).unwrap());
        assert!(cart.line(&drop).is_none());
        assert!(cart.line(&keep).is_some());
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_set_quantity_unknown_line_is_noop() {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("p1", 1000), 1).unwrap();
        let before = cart.clone();

        assert!(!cart.set_quantity(&LineId::new("missing"), 4).unwrap());
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        let line_id = cart.add_or_increment(&product("p1", 1000), 1).unwrap();

        assert!(cart.remove_line(&line_id));
        assert!(cart.is_empty());
        assert!(!cart.remove_line(&line_id));
    }

    #[test]
    fn test_line_keeps_product_snapshot() {
        let mut cart = Cart::new();
        let mut p = product("p1", 1000);
        cart.add_or_increment(&p, 1).unwrap();

        p.price = Money::from_minor(9999, Currency::USD);
        let line = cart.line_for_product(&p.id).unwrap();
        assert_eq!(line.product.price, Money::from_minor(1000, Currency::USD));
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("p1", 1000), 2).unwrap();
        cart.add_or_increment(&product("p2", 2000), 1).unwrap();

        let totals = cart.compute_totals().unwrap();
        assert_eq!(totals.subtotal, Money::from_minor(4000, Currency::USD));
        assert_eq!(totals.shipping, Money::from_minor(999, Currency::USD));
        assert_eq!(totals.tax.amount, Decimal::new(355, 2));
        assert_eq!(totals.total.amount, Decimal::new(5354, 2));
        assert_eq!(totals.lines.len(), 2);
        assert_eq!(totals.lines[0].subtotal, Money::from_minor(2000, Currency::USD));
    }

    #[test]
    fn test_totals_with_custom_policy() {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("p1", 3000), 1).unwrap();

        let policy = PricingPolicy {
            free_shipping_threshold: Decimal::from(25),
            flat_shipping: Decimal::from(5),
            tax_rate: Decimal::ZERO,
        };
        let totals = cart.compute_totals_with(&policy).unwrap();
        assert!(totals.ships_free());
        assert_eq!(totals.total.amount, Decimal::from(30));
        assert!(totals.free_shipping_remainder.is_zero());
    }

    #[test]
    fn test_totals_report_overflow_for_huge_prices() {
        let mut cart = Cart::new();
        let mut p = product("p1", 1);
        p.price = Money::new(Decimal::MAX, Currency::USD);
        cart.add_or_increment(&p, 2).unwrap();

        assert_eq!(cart.compute_totals(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_totals_report_overflow_when_lines_sum_past_max() {
        let mut cart = Cart::new();
        for id in ["p1", "p2"] {
            let mut p = product(id, 1);
            p.price = Money::new(Decimal::MAX, Currency::USD);
            cart.add_or_increment(&p, 1).unwrap();
        }

        assert_eq!(cart.compute_totals(), Err(CommerceError::Overflow));
    }

    #[test]
    fn test_totals_report_overflow_for_extreme_tax_rate() {
        let mut cart = Cart::new();
        cart.add_or_increment(&product("p1", 18999), 1).unwrap();

        let policy = PricingPolicy {
            tax_rate: Decimal::MAX,
            ..PricingPolicy::default()
        };
        assert_eq!(cart.compute_totals_with(&policy), Err(CommerceError::Overflow));
    }
}
