//! Newtype IDs for type-safe identifiers.
//!
//! Seed records carry human-readable ids (`"wireless-earbuds-pro"`), so
//! every id is a string. Cart and line ids are generated at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declare a string-backed id newtype.
macro_rules! define_id {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wrap an existing id.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Mint a fresh, process-unique id.
            pub fn generate() -> Self {
                Self(generate_id())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn into_inner(self) -> String {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self(s)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self(s.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

define_id!(ProductId, "Catalog product id (e.g., `wireless-earbuds-pro`).");
define_id!(SellerId, "Seller id (e.g., `tech-innovations`).");
define_id!(ReviewId, "Review id.");
define_id!(CategoryId, "Category id, also the category's URL segment.");
define_id!(UserId, "Reviewer id.");
define_id!(CartId, "Cart id, generated when the cart is created.");
define_id!(LineId, "Cart line id, generated when the line is added.");

/// Generate a process-unique ID from the clock and a counter.
fn generate_id() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicU64 = AtomicU64::new(0);

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros())
        .unwrap_or(0);

    let sequence = COUNTER.fetch_add(1, Ordering::Relaxed);
    format!("{timestamp:x}-{sequence:04x}")
}
