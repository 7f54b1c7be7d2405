//! Built-in storefront data.

use chrono::{DateTime, NaiveDate, Utc};

use crate::cart::Cart;
use crate::catalog::{Category, Product, Review, Seller};
use crate::dataset::Dataset;
use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId, UserId};
use crate::money::{Currency, Money};

/// The seed catalog: 11 categories, 3 sellers, 4 products, 3 reviews.
pub fn storefront() -> Result<Dataset, CommerceError> {
    let mut builder = Dataset::builder();
    for category in categories() {
        builder = builder.category(category);
    }
    for seller in sellers()? {
        builder = builder.seller(seller);
    }
    for product in products()? {
        builder = builder.product(product);
    }
    for review in reviews()? {
        builder = builder.review(review);
    }
    builder.build()
}

/// The sample cart: one messenger bag and two pairs of earbuds.
pub fn sample_cart(dataset: &Dataset) -> Result<Cart, CommerceError> {
    let mut cart = Cart::new();
    for (id, quantity) in [("vintage-leather-messenger", 1), ("wireless-earbuds-pro", 2)] {
        let product = dataset
            .product(&ProductId::new(id))
            .ok_or_else(|| CommerceError::InvalidRecord(format!("seed product {id} missing")))?;
        cart.add_or_increment(product, quantity)?;
    }
    Ok(cart)
}

fn categories() -> Vec<Category> {
    vec![
        Category::new("electronics", "Electronics", "💻", 1247, true),
        Category::new("fashion", "Fashion", "👔", 2156, true),
        Category::new("home-goods", "Home Goods", "🏠", 894, true),
        Category::new("beauty", "Beauty", "💄", 567, true),
        Category::new("sports", "Sports", "⛺", 432, true),
        Category::new("outdoor", "Outdoor", "👟", 321, true),
        Category::new("books", "Books", "📚", 1876, true),
        Category::new("toys", "Toys", "🧸", 654, true),
        Category::new("food-drink", "Food & Drink", "🍎", 234, false),
        Category::new("pet-supplies", "Pet Supplies", "🐕", 123, false),
        Category::new("automotive", "Automotive", "🚗", 456, false),
    ]
}

fn sellers() -> Result<Vec<Seller>, CommerceError> {
    let mut artisan = Seller::new(
        "artisan-leatherworks",
        "ArtisanLeatherworks",
        date(2020, 3, 15)?,
    );
    artisan.avatar = Some("/avatars/artisan-leather.jpg".to_string());
    artisan.rating = 4.9;
    artisan.review_count = 1247;
    artisan.verified = true;
    artisan.description =
        "Handcrafted leather goods made with premium materials and traditional techniques."
            .to_string();
    artisan.total_products = 45;
    artisan.monthly_sales = 1245;

    let mut tech = Seller::new("tech-innovations", "TechInnovations", date(2019, 7, 22)?);
    tech.avatar = Some("/avatars/tech-innovations.jpg".to_string());
    tech.rating = 4.7;
    tech.review_count = 2341;
    tech.verified = true;
    tech.description = "Cutting-edge electronics and gadgets for the modern lifestyle.".to_string();
    tech.total_products = 123;
    tech.monthly_sales = 3456;

    let mut urban = Seller::new("urban-fashion", "UrbanFashion", date(2021, 1, 10)?);
    urban.avatar = Some("/avatars/urban-fashion.jpg".to_string());
    urban.rating = 4.8;
    urban.review_count = 892;
    urban.verified = true;
    urban.description =
        "Contemporary streetwear and fashion for the urban professional.".to_string();
    urban.total_products = 78;
    urban.monthly_sales = 2134;

    Ok(vec![artisan, tech, urban])
}

/// Fields shared by every seed product.
struct SeedProduct {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    cents: i64,
    images: &'static [&'static str],
    category: &'static str,
    subcategory: &'static str,
    seller: &'static str,
    rating: f64,
    review_count: u32,
    featured: bool,
    tags: &'static [&'static str],
    specifications: &'static [(&'static str, &'static str)],
    created: (i32, u32, u32),
}

impl SeedProduct {
    fn into_product(self) -> Result<Product, CommerceError> {
        let mut product = Product::new(
            self.id,
            self.title,
            Money::from_minor(self.cents, Currency::USD),
            self.category,
            self.seller,
        );
        product.description = self.description.to_string();
        product.images = self.images.iter().map(|i| i.to_string()).collect();
        product.subcategory = Some(self.subcategory.to_string());
        product.rating = self.rating;
        product.review_count = self.review_count;
        product.featured = self.featured;
        for tag in self.tags {
            product.add_tag(*tag);
        }
        for (name, value) in self.specifications {
            product.add_specification(*name, *value);
        }
        let (y, m, d) = self.created;
        product.created_at = date(y, m, d)?;
        Ok(product)
    }
}

fn products() -> Result<Vec<Product>, CommerceError> {
    let seeds = [
        SeedProduct {
            id: "vintage-leather-messenger",
            title: "Vintage Leather Messenger Bag",
            description: "Handcrafted from premium Italian leather, this vintage-style messenger bag combines classic design with modern functionality. Features multiple compartments, adjustable strap, and antique brass hardware.",
            cents: 18999,
            images: &[
                "/generated/leather-bag-1.jpg",
                "/generated/leather-bag-1.jpg",
                "/generated/leather-bag-1.jpg",
                "/generated/leather-bag-1.jpg",
            ],
            category: "fashion",
            subcategory: "bags",
            seller: "artisan-leatherworks",
            rating: 4.8,
            review_count: 127,
            featured: true,
            tags: &["handmade", "leather", "vintage", "messenger", "professional"],
            specifications: &[
                ("Material", "Premium Italian Leather"),
                ("Dimensions", "15\" x 11\" x 4\""),
                ("Color", "Cognac Brown"),
                ("Hardware", "Antique Brass"),
                ("Weight", "2.1 lbs"),
                ("Care", "Leather conditioner recommended"),
            ],
            created: (2024, 1, 15),
        },
        SeedProduct {
            id: "wireless-earbuds-pro",
            title: "Wireless Earbuds Pro",
            description: "Premium wireless earbuds with active noise cancellation, 8-hour battery life, and crystal-clear audio quality. Perfect for commuting, workouts, and calls.",
            cents: 14999,
            images: &[
                "/generated/earbuds-1.jpg",
                "/generated/earbuds-1.jpg",
                "/generated/earbuds-1.jpg",
            ],
            category: "electronics",
            subcategory: "audio",
            seller: "tech-innovations",
            rating: 4.6,
            review_count: 892,
            featured: true,
            tags: &["wireless", "noise-cancelling", "bluetooth", "premium"],
            specifications: &[
                ("Battery Life", "8 hours (32 hours with case)"),
                ("Connectivity", "Bluetooth 5.0"),
                ("Noise Cancellation", "Active ANC"),
                ("Water Resistance", "IPX7"),
                ("Charging", "USB-C + Wireless"),
            ],
            created: (2024, 2, 20),
        },
        SeedProduct {
            id: "organic-skincare-set",
            title: "Organic Skincare Set",
            description: "Complete 4-piece organic skincare routine with cleanser, toner, serum, and moisturizer. Made with natural ingredients and essential oils.",
            cents: 7999,
            images: &["/products/skincare-1.jpg", "/products/skincare-2.jpg"],
            category: "beauty",
            subcategory: "skincare",
            seller: "urban-fashion",
            rating: 4.9,
            review_count: 234,
            featured: true,
            tags: &["organic", "natural", "skincare", "routine", "gift-set"],
            specifications: &[
                ("Skin Type", "All skin types"),
                ("Ingredients", "100% Organic"),
                ("Size", "4-piece set"),
                ("Cruelty Free", "Yes"),
                ("Packaging", "Recyclable"),
            ],
            created: (2024, 1, 30),
        },
        SeedProduct {
            id: "smart-fitness-watch",
            title: "Smart Fitness Watch",
            description: "Advanced fitness tracking watch with heart rate monitor, GPS, sleep tracking, and 7-day battery life. Compatible with iOS and Android.",
            cents: 29999,
            images: &[
                "/products/watch-1.jpg",
                "/products/watch-2.jpg",
                "/products/watch-3.jpg",
            ],
            category: "electronics",
            subcategory: "wearables",
            seller: "tech-innovations",
            rating: 4.7,
            review_count: 456,
            featured: false,
            tags: &["fitness", "smartwatch", "health", "GPS", "waterproof"],
            specifications: &[
                ("Display", "1.4\" AMOLED"),
                ("Battery", "7 days typical use"),
                ("Water Resistance", "5ATM"),
                ("Sensors", "Heart Rate, GPS, Accelerometer"),
                ("Compatibility", "iOS 12+ / Android 6+"),
            ],
            created: (2024, 3, 5),
        },
    ];

    seeds.into_iter().map(SeedProduct::into_product).collect()
}

fn reviews() -> Result<Vec<Review>, CommerceError> {
    Ok(vec![
        Review {
            id: ReviewId::new("review-1"),
            product_id: ProductId::new("vintage-leather-messenger"),
            user_id: UserId::new("user-1"),
            user_name: "Sarah Johnson".to_string(),
            user_avatar: Some("/avatars/sarah.jpg".to_string()),
            rating: 5,
            title: "Excellent quality and craftsmanship".to_string(),
            content: "This bag exceeded my expectations! The leather is buttery soft and the construction is top-notch. I use it daily for work and it still looks brand new after 6 months.".to_string(),
            verified: true,
            helpful: 23,
            created_at: date(2024, 3, 15)?,
        },
        Review {
            id: ReviewId::new("review-2"),
            product_id: ProductId::new("vintage-leather-messenger"),
            user_id: UserId::new("user-2"),
            user_name: "Mike Chen".to_string(),
            user_avatar: Some("/avatars/mike.jpg".to_string()),
            rating: 4,
            title: "Great bag, minor issue with strap".to_string(),
            content: "Love the vintage look and feel. The bag holds all my laptop gear perfectly. Only issue is the strap adjuster is a bit stiff, but overall very happy with the purchase.".to_string(),
            verified: true,
            helpful: 12,
            created_at: date(2024, 2, 28)?,
        },
        Review {
            id: ReviewId::new("review-3"),
            product_id: ProductId::new("wireless-earbuds-pro"),
            user_id: UserId::new("user-3"),
            user_name: "Emily Davis".to_string(),
            user_avatar: Some("/avatars/emily.jpg".to_string()),
            rating: 5,
            title: "Best earbuds I've owned".to_string(),
            content: "The noise cancellation is incredible and the sound quality is amazing. Battery lasts all day and the case is compact. Highly recommend!".to_string(),
            verified: true,
            helpful: 45,
            created_at: date(2024, 3, 10)?,
        },
    ])
}

/// Midnight UTC on a calendar date.
fn date(year: i32, month: u32, day: u32) -> Result<DateTime<Utc>, CommerceError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc())
        .ok_or_else(|| CommerceError::InvalidRecord(format!("invalid date {year}-{month}-{day}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::{CategoryId, SellerId};

    #[test]
    fn test_seed_counts() {
        let data = storefront().unwrap();
        assert_eq!(data.categories().len(), 11);
        assert_eq!(data.sellers().len(), 3);
        assert_eq!(data.products().len(), 4);
        assert_eq!(data.reviews().len(), 3);
        assert_eq!(data.featured_categories().len(), 8);
        assert_eq!(data.featured_products().len(), 3);
    }

    #[test]
    fn test_seed_cross_references() {
        let data = storefront().unwrap();
        let watch = data.product(&ProductId::new("smart-fitness-watch")).unwrap();
        assert_eq!(watch.seller_id, SellerId::new("tech-innovations"));
        assert_eq!(data.seller_of(watch).unwrap().name, "TechInnovations");
        assert!(data.category(&watch.category_id).is_some());
        assert_eq!(data.category(&CategoryId::new("books")).unwrap().product_count, 1876);
    }

    #[test]
    fn test_sample_cart() {
        let data = storefront().unwrap();
        let cart = sample_cart(&data).unwrap();
        assert_eq!(cart.unique_item_count(), 2);
        assert_eq!(cart.item_count(), 3);
        // 189.99 + 2 * 149.99
        assert_eq!(
            cart.compute_totals().unwrap().subtotal,
            Money::from_minor(48997, Currency::USD)
        );
    }

    #[test]
    fn test_invalid_date() {
        assert!(date(2024, 2, 30).is_err());
    }
}
