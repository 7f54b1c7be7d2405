//! Product types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId, SellerId};
use crate::money::Money;

/// Highest rating a product or seller can carry.
pub const MAX_RATING: f64 = 5.0;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// Full description.
    pub description: String,
    /// Unit price.
    pub price: Money,
    /// Image references, in display order.
    #[serde(default)]
    pub images: Vec<String>,
    /// Category this product is listed under.
    pub category_id: CategoryId,
    /// Optional finer-grained grouping (e.g., "audio").
    #[serde(default)]
    pub subcategory: Option<String>,
    /// Seller offering this product.
    pub seller_id: SellerId,
    /// Average rating, 0.0 to 5.0.
    pub rating: f64,
    /// Number of reviews behind `rating`.
    pub review_count: u32,
    /// Whether the product can currently be bought.
    pub in_stock: bool,
    /// Whether the product is shown on the home page.
    #[serde(default)]
    pub featured: bool,
    /// Tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Specification table, in display order.
    #[serde(default)]
    pub specifications: Vec<Specification>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Create an in-stock product with no images, tags or specifications.
    pub fn new(
        id: impl Into<ProductId>,
        title: impl Into<String>,
        price: Money,
        category_id: impl Into<CategoryId>,
        seller_id: impl Into<SellerId>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            price,
            images: Vec::new(),
            category_id: category_id.into(),
            subcategory: None,
            seller_id: seller_id.into(),
            rating: 0.0,
            review_count: 0,
            in_stock: true,
            featured: false,
            tags: Vec::new(),
            specifications: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Add a tag, ignoring duplicates.
    pub fn add_tag(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
        }
    }

    /// Append a specification row.
    pub fn add_specification(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.specifications.push(Specification::new(name, value));
    }

    /// Look up a specification value by name.
    pub fn specification(&self, name: &str) -> Option<&str> {
        self.specifications
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.value.as_str())
    }

    /// Main image, if any.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Check the price and rating constraints.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if self.price.is_negative() {
            return Err(CommerceError::InvalidRecord(format!(
                "product {} has negative price {}",
                self.id, self.price
            )));
        }
        if !(0.0..=MAX_RATING).contains(&self.rating) {
            return Err(CommerceError::InvalidRecord(format!(
                "product {} has rating {} outside 0-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

/// One row of a product's specification table (e.g., Material: Leather).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Specification {
    /// Row label.
    pub name: String,
    /// Row value.
    pub value: String,
}

impl Specification {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
