//! Money type for representing monetary values.
//!
//! Amounts are exact decimals. Prices enter the system as integer minor
//! units (cents), arithmetic keeps full precision (a tax of 8.875% on
//! $10.00 is exactly $0.8875), and rounding to the currency's minor unit
//! happens only when a value is displayed.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::CommerceError;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    JPY,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::CAD => "CAD",
            Currency::JPY => "JPY",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
            Currency::CAD => "CA$",
            Currency::JPY => "\u{00a5}",
        }
    }

    /// Get the number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A monetary value with currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Money {
    /// Exact amount in major units (e.g., dollars).
    pub amount: Decimal,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from a decimal amount.
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a Money value from the currency's smallest unit.
    ///
    /// ```
    /// use bazaar_commerce::money::{Currency, Money};
    /// let price = Money::from_minor(18999, Currency::USD);
    /// assert_eq!(price.display(), "$189.99");
    /// ```
    pub fn from_minor(minor: i64, currency: Currency) -> Self {
        Self::new(Decimal::new(minor, currency.decimal_places()), currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount < Decimal::ZERO
    }

    /// Try to add another Money value.
    pub fn try_add(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_add(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Result<Money, CommerceError> {
        self.ensure_same_currency(other)?;
        self.amount
            .checked_sub(other.amount)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a quantity.
    pub fn try_multiply(&self, quantity: u32) -> Result<Money, CommerceError> {
        self.amount
            .checked_mul(Decimal::from(quantity))
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Multiply by a decimal rate (e.g., a tax rate), keeping full precision.
    pub fn try_scale(&self, rate: Decimal) -> Result<Money, CommerceError> {
        self.amount
            .checked_mul(rate)
            .map(|amount| Money::new(amount, self.currency))
            .ok_or(CommerceError::Overflow)
    }

    /// Sum an iterator of Money values in one currency.
    pub fn try_sum<'a>(
        iter: impl IntoIterator<Item = &'a Money>,
        currency: Currency,
    ) -> Result<Money, CommerceError> {
        iter.into_iter()
            .try_fold(Money::zero(currency), |acc, m| acc.try_add(m))
    }

    /// Round half away from zero to the currency's minor unit.
    pub fn rounded(&self) -> Money {
        let places = self.currency.decimal_places();
        let mut amount = self
            .amount
            .round_dp_with_strategy(places, RoundingStrategy::MidpointAwayFromZero);
        amount.rescale(places);
        Money::new(amount, self.currency)
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        let rounded = self.rounded();
        if rounded.is_negative() {
            format!("-{}{}", self.currency.symbol(), rounded.amount.abs())
        } else {
            format!("{}{}", self.currency.symbol(), rounded.amount)
        }
    }

    /// Compare amounts, ignoring currency.
    pub fn cmp_amount(&self, other: &Money) -> Ordering {
        self.amount.cmp(&other.amount)
    }

    fn ensure_same_currency(&self, other: &Money) -> Result<(), CommerceError> {
        if self.currency != other.currency {
            return Err(CommerceError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: other.currency.code().to_string(),
            });
        }
        Ok(())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_minor() {
        let m = Money::from_minor(4999, Currency::USD);
        assert_eq!(m.amount, Decimal::new(4999, 2));
        assert_eq!(m.currency, Currency::USD);

        let m = Money::from_minor(100, Currency::JPY);
        assert_eq!(m.amount, Decimal::from(100));
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::from_minor(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::from_minor(10000, Currency::USD).display(), "$100.00");
        assert_eq!(Money::from_minor(100, Currency::JPY).display(), "\u{00a5}100");
        assert_eq!(Money::from_minor(-150, Currency::USD).display(), "-$1.50");
    }

    #[test]
    fn test_display_rounds_half_away_from_zero() {
        let m = Money::new(Decimal::new(213775, 4), Currency::USD);
        assert_eq!(m.display(), "$21.38");

        let m = Money::new(Decimal::new(8875, 3), Currency::USD);
        assert_eq!(m.display(), "$8.88");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::from_minor(1000, Currency::USD);
        let b = Money::from_minor(500, Currency::USD);
        assert_eq!(a.try_add(&b).unwrap(), Money::from_minor(1500, Currency::USD));
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::from_minor(7500, Currency::USD);
        let b = Money::from_minor(1000, Currency::USD);
        assert_eq!(
            a.try_subtract(&b).unwrap(),
            Money::from_minor(6500, Currency::USD)
        );
    }

    #[test]
    fn test_money_multiply_and_scale() {
        let m = Money::from_minor(5000, Currency::USD);
        assert_eq!(m.try_multiply(2).unwrap().amount, Decimal::from(100));

        let tax = Money::from_minor(1000, Currency::USD)
            .try_scale(Decimal::new(8875, 5))
            .unwrap();
        assert_eq!(tax.amount, Decimal::new(8875, 4));
    }

    #[test]
    fn test_money_currency_mismatch() {
        let usd = Money::from_minor(1000, Currency::USD);
        let eur = Money::from_minor(1000, Currency::EUR);
        assert!(matches!(
            usd.try_add(&eur),
            Err(CommerceError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_money_sum() {
        let prices = [
            Money::from_minor(10, Currency::USD),
            Money::from_minor(20, Currency::USD),
        ];
        let total = Money::try_sum(&prices, Currency::USD).unwrap();
        assert_eq!(total, Money::from_minor(30, Currency::USD));

        let empty: [Money; 0] = [];
        assert!(Money::try_sum(&empty, Currency::USD).unwrap().is_zero());
    }
}
