//! Seller profiles.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::SellerId;

/// A marketplace seller. Products reference sellers by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seller {
    pub id: SellerId,
    /// Display name.
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub rating: f64,
    pub review_count: u32,
    /// Identity checked by the marketplace.
    pub verified: bool,
    pub joined_at: DateTime<Utc>,
    pub description: String,
    /// Listed products across all categories.
    pub total_products: u32,
    pub monthly_sales: u32,
}

impl Seller {
    /// Create an unverified seller with empty counters.
    pub fn new(id: impl Into<SellerId>, name: impl Into<String>, joined_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            avatar: None,
            rating: 0.0,
            review_count: 0,
            verified: false,
            joined_at,
            description: String::new(),
            total_products: 0,
            monthly_sales: 0,
        }
    }

    /// Initial used when there is no avatar.
    pub fn initial(&self) -> Option<char> {
        self.name.chars().next()
    }
}
