//! Category types for product organization.

use serde::{Deserialize, Serialize};

use crate::ids::CategoryId;

/// A top-level product category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    /// Unique category identifier, also used as the URL segment.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
    /// Emoji glyph shown on the category pill.
    pub icon: String,
    /// Advertised number of products. Not derived from the catalog.
    pub product_count: u32,
    /// Whether the category is shown in the featured strip.
    pub featured: bool,
}

impl Category {
    /// Create a new category.
    pub fn new(
        id: impl Into<CategoryId>,
        name: impl Into<String>,
        icon: impl Into<String>,
        product_count: u32,
        featured: bool,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            icon: icon.into(),
            product_count,
            featured,
        }
    }

    /// Label for a category pill (e.g., "💻 Electronics").
    pub fn label(&self) -> String {
        format!("{} {}", self.icon, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category() {
        let cat = Category::new("books", "Books", "📚", 1876, true);
        assert_eq!(cat.id.as_str(), "books");
        assert_eq!(cat.label(), "📚 Books");
        assert!(cat.featured);
    }
}
