//! CLI configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bazaar_commerce::cart::PricingPolicy;
use bazaar_commerce::dataset::RELATED_PRODUCTS_LIMIT;
use bazaar_commerce::search::SortOption;
use serde::{Deserialize, Serialize};

/// File names searched for, in order, in each directory.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["bazaar.toml", ".bazaar.toml", "bazaar.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CliConfig {
    /// Where the catalog comes from.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Shipping and tax rules.
    #[serde(default)]
    pub pricing: PricingPolicy,

    /// Listing defaults.
    #[serde(default)]
    pub display: DisplayConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if is_json(path) {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = if is_json(path) {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "json")
}

/// Catalog source.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    /// JSON dataset snapshot. The built-in seed catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Listing defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayConfig {
    /// Sort used when `--sort` is not given.
    #[serde(default)]
    pub default_sort: SortOption,

    /// Related products shown on a product page.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,
}

fn default_related_limit() -> usize {
    RELATED_PRODUCTS_LIMIT
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            default_sort: SortOption::default(),
            related_limit: default_related_limit(),
        }
    }
}

/// Generate a default bazaar.toml config file.
pub fn generate_default_config() -> String {
    r#"# Bazaar storefront configuration

[catalog]
# JSON catalog snapshot; the built-in seed catalog is used when unset.
# path = "catalog.json"

[pricing]
free_shipping_threshold = "75.00"
flat_shipping = "9.99"
tax_rate = "0.08875"

[display]
default_sort = "relevance"
related_limit = 4
"#
    .to_string()
}
