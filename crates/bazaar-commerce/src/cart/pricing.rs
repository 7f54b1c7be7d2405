//! Cart pricing calculations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::LineId;
use crate::money::Money;

/// Shipping and tax rules applied to a cart subtotal.
///
/// Amounts are in the cart's currency.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PricingPolicy {
    /// Subtotals strictly above this ship free.
    pub free_shipping_threshold: Decimal,
    /// Shipping charged at or below the threshold.
    pub flat_shipping: Decimal,
    /// Tax rate applied to the subtotal only (0.08875 = 8.875%).
    pub tax_rate: Decimal,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            free_shipping_threshold: Decimal::new(7500, 2),
            flat_shipping: Decimal::new(999, 2),
            tax_rate: Decimal::new(8875, 5),
        }
    }
}

impl PricingPolicy {
    /// Shipping charged for a subtotal.
    pub fn shipping_for(&self, subtotal: &Money) -> Money {
        if subtotal.amount > self.free_shipping_threshold {
            Money::zero(subtotal.currency)
        } else {
            Money::new(self.flat_shipping, subtotal.currency)
        }
    }

    /// Tax charged on a subtotal.
    pub fn tax_for(&self, subtotal: &Money) -> Result<Money, CommerceError> {
        subtotal.try_scale(self.tax_rate)
    }

    /// Amount still needed to reach the free-shipping threshold, never negative.
    pub fn free_shipping_remainder(&self, subtotal: &Money) -> Result<Money, CommerceError> {
        let threshold = Money::new(self.free_shipping_threshold, subtotal.currency);
        let remainder = threshold.try_subtract(subtotal)?;
        if remainder.is_negative() {
            Ok(Money::zero(subtotal.currency))
        } else {
            Ok(remainder)
        }
    }
}

/// Complete pricing breakdown for a cart.
///
/// Values carry full precision; round with [`Money::rounded`] or
/// [`Money::display`] when presenting them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartTotals {
    /// Sum of price x quantity over all lines.
    pub subtotal: Money,
    /// Shipping cost.
    pub shipping: Money,
    /// Tax on the subtotal.
    pub tax: Money,
    /// Final total (subtotal + shipping + tax).
    pub total: Money,
    /// Amount to add for free shipping; zero once it applies.
    pub free_shipping_remainder: Money,
    /// Per-line breakdown.
    pub lines: Vec<LinePricing>,
}

impl CartTotals {
    /// Check if the cart ships free.
    pub fn ships_free(&self) -> bool {
        self.shipping.is_zero()
    }

    /// The "add $X more for free shipping" hint, if one applies.
    pub fn free_shipping_hint(&self) -> Option<String> {
        if self.free_shipping_remainder.is_positive() {
            Some(format!(
                "Add {} more for free shipping!",
                self.free_shipping_remainder.display()
            ))
        } else {
            None
        }
    }
}

/// Pricing breakdown for a single line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinePricing {
    /// Line ID.
    pub line_id: LineId,
    /// Unit price.
    pub unit_price: Money,
    /// Quantity.
    pub quantity: u32,
    /// unit_price * quantity.
    pub subtotal: Money,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn money(minor: i64) -> Money {
        Money::from_minor(minor, Currency::USD)
    }

    #[test]
    fn test_default_policy() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.free_shipping_threshold, Decimal::from(75));
        assert_eq!(policy.flat_shipping, Decimal::new(999, 2));
        assert_eq!(policy.tax_rate, Decimal::new(8875, 5));
    }

    #[test]
    fn test_shipping_threshold_is_strict() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.shipping_for(&money(7500)), money(999));
        assert!(policy.shipping_for(&money(7501)).is_zero());
    }

    #[test]
    fn test_remainder_never_negative() {
        let policy = PricingPolicy::default();
        assert_eq!(policy.free_shipping_remainder(&money(1000)).unwrap(), money(6500));
        assert!(policy.free_shipping_remainder(&money(20000)).unwrap().is_zero());
    }

    #[test]
    fn test_tax_overflow_is_an_error() {
        let policy = PricingPolicy {
            tax_rate: Decimal::MAX,
            ..PricingPolicy::default()
        };
        assert_eq!(policy.tax_for(&money(18999)), Err(CommerceError::Overflow));
        assert_eq!(
            PricingPolicy::default().tax_for(&money(1000)).unwrap().amount,
            Decimal::new(8875, 4)
        );
    }

    #[test]
    fn test_policy_from_partial_json() {
        let policy: PricingPolicy = serde_json::from_str(r#"{"tax_rate": "0.1"}"#).unwrap();
        assert_eq!(policy.tax_rate, Decimal::new(1, 1));
        assert_eq!(policy.flat_shipping, Decimal::new(999, 2));
    }

    #[test]
    fn test_free_shipping_hint() {
        let totals = CartTotals {
            subtotal: money(1000),
            shipping: money(999),
            tax: money(0),
            total: money(1999),
            free_shipping_remainder: money(6500),
            lines: vec![],
        };
        assert!(!totals.ships_free());
        assert_eq!(
            totals.free_shipping_hint().as_deref(),
            Some("Add $65.00 more for free shipping!")
        );
    }
}
