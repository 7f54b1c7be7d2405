//! Product reviews.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CommerceError;
use crate::ids::{ProductId, ReviewId, UserId};

/// A customer review of a product.
///
/// `product_id` is not checked against the catalog. A review whose product
/// does not exist is an orphan and is never listed for any product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Review {
    /// Unique review identifier.
    pub id: ReviewId,
    /// Product being reviewed.
    pub product_id: ProductId,
    /// Author.
    pub user_id: UserId,
    /// Author display name.
    pub user_name: String,
    /// Author avatar image.
    #[serde(default)]
    pub user_avatar: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Headline.
    pub title: String,
    /// Review body.
    pub content: String,
    /// Whether the author bought the product.
    #[serde(default)]
    pub verified: bool,
    /// "Helpful" votes.
    #[serde(default)]
    pub helpful: u32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Record one "helpful" vote and return the new count.
    pub fn mark_helpful(&mut self) -> u32 {
        self.helpful = self.helpful.saturating_add(1);
        self.helpful
    }

    /// Author initials for avatar fallbacks ("Sarah Johnson" -> "SJ").
    pub fn author_initials(&self) -> String {
        self.user_name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .collect()
    }

    /// Render the rating as filled and empty stars.
    pub fn render_stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
    }

    /// Check the rating constraint.
    pub fn validate(&self) -> Result<(), CommerceError> {
        if !(1..=5).contains(&self.rating) {
            return Err(CommerceError::InvalidRecord(format!(
                "review {} has rating {} outside 1-5",
                self.id, self.rating
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review() -> Review {
        Review {
            id: ReviewId::new("review-1"),
            product_id: ProductId::new("leather-bag"),
            user_id: UserId::new("user-1"),
            user_name: "Sarah Johnson".to_string(),
            user_avatar: None,
            rating: 4,
            title: "Great bag".to_string(),
            content: "Holds everything.".to_string(),
            verified: true,
            helpful: 12,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_mark_helpful() {
        let mut review = review();
        assert_eq!(review.mark_helpful(), 13);
        assert_eq!(review.helpful, 13);

        review.helpful = u32::MAX;
        assert_eq!(review.mark_helpful(), u32::MAX);
    }

    #[test]
    fn test_author_initials() {
        assert_eq!(review().author_initials(), "SJ");
    }

    #[test]
    fn test_render_stars() {
        assert_eq!(review().render_stars(), "★★★★☆");
    }

    #[test]
    fn test_validate_rating_range() {
        let mut review = review();
        assert!(review.validate().is_ok());
        review.rating = 0;
        assert!(review.validate().is_err());
        review.rating = 6;
        assert!(review.validate().is_err());
    }
}
