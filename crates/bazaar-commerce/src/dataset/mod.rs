//! Read-only storefront dataset.
//!
//! A [`Dataset`] is built once at start-up, validated, and then shared by
//! reference. Every cross reference (product to seller, review to product)
//! is resolved through an id index, never by position.

pub mod seed;

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::catalog::{Category, Product, Review, Seller};
use crate::error::CommerceError;
use crate::ids::{CategoryId, ProductId, ReviewId, SellerId};

/// Number of related products the product page shows.
pub const RELATED_PRODUCTS_LIMIT: usize = 4;

/// Plain records, as stored in a JSON catalog file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DatasetSnapshot {
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub sellers: Vec<Seller>,
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl DatasetSnapshot {
    /// Parse a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Collects records before validation.
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    snapshot: DatasetSnapshot,
}

impl DatasetBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a category.
    pub fn category(mut self, category: Category) -> Self {
        self.snapshot.categories.push(category);
        self
    }

    /// Add a seller.
    pub fn seller(mut self, seller: Seller) -> Self {
        self.snapshot.sellers.push(seller);
        self
    }

    /// Add a product.
    pub fn product(mut self, product: Product) -> Self {
        self.snapshot.products.push(product);
        self
    }

    /// Add a review.
    pub fn review(mut self, review: Review) -> Self {
        self.snapshot.reviews.push(review);
        self
    }

    /// Validate the records and index them.
    pub fn build(self) -> Result<Dataset, CommerceError> {
        Dataset::from_snapshot(self.snapshot)
    }
}

/// The storefront's immutable catalog: categories, sellers, products, reviews.
#[derive(Debug, Clone)]
pub struct Dataset {
    categories: Vec<Category>,
    sellers: Vec<Seller>,
    products: Vec<Product>,
    reviews: Vec<Review>,
    category_index: HashMap<CategoryId, usize>,
    seller_index: HashMap<SellerId, usize>,
    product_index: HashMap<ProductId, usize>,
    review_index: HashMap<ReviewId, usize>,
}

impl Dataset {
    /// Start an empty builder.
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::new()
    }

    /// Validate and index a snapshot.
    ///
    /// Fails on duplicate ids, products whose seller is missing, and
    /// out-of-range prices or ratings. Orphan reviews are kept but logged.
    pub fn from_snapshot(snapshot: DatasetSnapshot) -> Result<Self, CommerceError> {
        let DatasetSnapshot {
            categories,
            sellers,
            products,
            reviews,
        } = snapshot;

        let category_index = index_by("category", &categories, |c| &c.id)?;
        let seller_index = index_by("seller", &sellers, |s| &s.id)?;
        let product_index = index_by("product", &products, |p| &p.id)?;
        let review_index = index_by("review", &reviews, |r| &r.id)?;

        for product in &products {
            product.validate()?;
            if !seller_index.contains_key(&product.seller_id) {
                return Err(CommerceError::UnknownSeller {
                    product: product.id.to_string(),
                    seller: product.seller_id.to_string(),
                });
            }
        }

        for review in &reviews {
            review.validate()?;
            if !product_index.contains_key(&review.product_id) {
                warn!(review = %review.id, product = %review.product_id, "orphan review");
            }
        }

        info!(
            categories = categories.len(),
            sellers = sellers.len(),
            products = products.len(),
            reviews = reviews.len(),
            "dataset loaded"
        );

        Ok(Self {
            categories,
            sellers,
            products,
            reviews,
            category_index,
            seller_index,
            product_index,
            review_index,
        })
    }

    /// Parse, validate and index a JSON snapshot.
    pub fn from_json(json: &str) -> Result<Self, CommerceError> {
        Self::from_snapshot(DatasetSnapshot::from_json(json)?)
    }

    /// Copy the records back out.
    pub fn to_snapshot(&self) -> DatasetSnapshot {
        DatasetSnapshot {
            categories: self.categories.clone(),
            sellers: self.sellers.clone(),
            products: self.products.clone(),
            reviews: self.reviews.clone(),
        }
    }

    /// All products, in catalog order.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// All categories, in display order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// All sellers.
    pub fn sellers(&self) -> &[Seller] {
        &self.sellers
    }

    /// All reviews, orphans included.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Look up a product by id.
    pub fn product(&self, id: &ProductId) -> Option<&Product> {
        lookup(&self.product_index, &self.products, id)
    }

    /// Look up a seller by id.
    pub fn seller(&self, id: &SellerId) -> Option<&Seller> {
        lookup(&self.seller_index, &self.sellers, id)
    }

    /// Look up a category by id.
    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        lookup(&self.category_index, &self.categories, id)
    }

    /// Look up a review by id.
    pub fn review(&self, id: &ReviewId) -> Option<&Review> {
        lookup(&self.review_index, &self.reviews, id)
    }

    /// The seller of a product.
    ///
    /// Always `Some` for products of this dataset; `build` rejects dangling
    /// seller ids.
    pub fn seller_of(&self, product: &Product) -> Option<&Seller> {
        self.seller(&product.seller_id)
    }

    /// Products flagged for the home page, in catalog order.
    pub fn featured_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.featured).collect()
    }

    /// Categories in the featured strip.
    pub fn featured_categories(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.featured).collect()
    }

    /// Categories outside the featured strip.
    pub fn other_categories(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| !c.featured).collect()
    }

    /// Reviews of a product, in insertion order. Empty for unknown products.
    pub fn reviews_for(&self, product_id: &ProductId) -> Vec<&Review> {
        if !self.product_index.contains_key(product_id) {
            return Vec::new();
        }
        self.reviews
            .iter()
            .filter(|r| &r.product_id == product_id)
            .collect()
    }

    /// Other products sharing the category or the seller of `product_id`.
    pub fn related_products(&self, product_id: &ProductId, limit: usize) -> Vec<&Product> {
        let Some(anchor) = self.product(product_id) else {
            return Vec::new();
        };
        self.products
            .iter()
            .filter(|p| p.id != anchor.id)
            .filter(|p| p.category_id == anchor.category_id || p.seller_id == anchor.seller_id)
            .take(limit)
            .collect()
    }
}

/// Build an id -> position index, rejecting duplicates.
fn index_by<T, K, F>(
    kind: &'static str,
    records: &[T],
    key: F,
) -> Result<HashMap<K, usize>, CommerceError>
where
    K: Eq + Hash + Clone + ToString,
    F: Fn(&T) -> &K,
{
    let mut index = HashMap::with_capacity(records.len());
    for (position, record) in records.iter().enumerate() {
        let id = key(record);
        if index.insert(id.clone(), position).is_some() {
            return Err(CommerceError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(index)
}

fn lookup<'a, K: Eq + Hash, T>(
    index: &HashMap<K, usize>,
    records: &'a [T],
    id: &K,
) -> Option<&'a T> {
    index.get(id).and_then(|&position| records.get(position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::UserId;
    use crate::money::{Currency, Money};
    use chrono::Utc;

    fn product(id: &str, category: &str, seller: &str) -> Product {
        Product::new(id, id, Money::from_minor(1000, Currency::USD), category, seller)
    }

    fn review(id: &str, product: &str) -> Review {
        Review {
            id: ReviewId::new(id),
            product_id: ProductId::new(product),
            user_id: UserId::new("user-1"),
            user_name: "Reviewer".to_string(),
            user_avatar: None,
            rating: 5,
            title: "Good".to_string(),
            content: "Good.".to_string(),
            verified: false,
            helpful: 0,
            created_at: Utc::now(),
        }
    }

    fn dataset() -> Dataset {
        Dataset::builder()
            .category(Category::new("audio", "Audio", "🎧", 10, true))
            .category(Category::new("bags", "Bags", "👜", 5, false))
            .seller(Seller::new("s1", "One", Utc::now()))
            .seller(Seller::new("s2", "Two", Utc::now()))
            .product(product("p1", "audio", "s1"))
            .product(product("p2", "audio", "s2"))
            .product(product("p3", "bags", "s1"))
            .product(product("p4", "bags", "s2"))
            .review(review("r1", "p1"))
            .review(review("r2", "gone"))
            .review(review("r3", "p1"))
            .build()
            .unwrap()
    }

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn test_lookups() {
        let data = dataset();
        let p1 = data.product(&ProductId::new("p1")).unwrap();
        assert_eq!(data.seller_of(p1).unwrap().name, "One");
        assert!(data.category(&CategoryId::new("bags")).is_some());
        assert!(data.product(&ProductId::new("nope")).is_none());
        assert!(data.review(&ReviewId::new("r2")).is_some());
    }

    #[test]
    fn test_featured_split() {
        let data = dataset();
        assert_eq!(data.featured_categories().len(), 1);
        assert_eq!(data.other_categories()[0].id.as_str(), "bags");
    }

    #[test]
    fn test_reviews_for_excludes_orphans() {
        let data = dataset();
        let reviews = data.reviews_for(&ProductId::new("p1"));
        let ids: Vec<&str> = reviews.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["r1", "r3"]);
        assert!(data.reviews_for(&ProductId::new("gone")).is_empty());
        assert_eq!(data.reviews().len(), 3);
    }

    #[test]
    fn test_related_products() {
        let data = dataset();
        // p2 shares the category, p3 shares the seller.
        assert_eq!(ids(&data.related_products(&ProductId::new("p1"), 4)), ["p2", "p3"]);
        assert_eq!(ids(&data.related_products(&ProductId::new("p1"), 1)), ["p2"]);
        assert!(data.related_products(&ProductId::new("nope"), 4).is_empty());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Dataset::builder()
            .seller(Seller::new("s1", "One", Utc::now()))
            .product(product("p1", "audio", "s1"))
            .product(product("p1", "bags", "s1"))
            .build();
        assert_eq!(
            result.unwrap_err(),
            CommerceError::DuplicateId {
                kind: "product",
                id: "p1".to_string()
            }
        );
    }

    #[test]
    fn test_unknown_seller_rejected() {
        let result = Dataset::builder().product(product("p1", "audio", "ghost")).build();
        assert!(matches!(result, Err(CommerceError::UnknownSeller { .. })));
    }

    #[test]
    fn test_invalid_review_rejected() {
        let mut bad = review("r1", "p1");
        bad.rating = 0;
        let result = Dataset::builder()
            .seller(Seller::new("s1", "One", Utc::now()))
            .product(product("p1", "audio", "s1"))
            .review(bad)
            .build();
        assert!(matches!(result, Err(CommerceError::InvalidRecord(_))));
    }

    #[test]
    fn test_json_snapshot_round_trip() {
        let data = dataset();
        let json = serde_json::to_string(&data.to_snapshot()).unwrap();
        let reloaded = Dataset::from_json(&json).unwrap();
        assert_eq!(reloaded.products(), data.products());
        assert_eq!(reloaded.reviews().len(), 3);
    }
}
