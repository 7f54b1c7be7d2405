//! CLI command implementations.

pub mod cart;
pub mod category;
pub mod config;
pub mod product;
pub mod search;

use bazaar_commerce::catalog::Product;
use bazaar_commerce::search::SortOption;
use clap::{Args, Subcommand};

use crate::output::{Output, stars, truncate};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    /// Text to look for in titles, descriptions, categories and tags.
    pub query: Option<String>,

    /// Sort key (relevance, price-low, price-high, rating, newest).
    #[arg(short, long)]
    pub sort: Option<SortOption>,
}

/// Arguments for the category command.
#[derive(Args)]
pub struct CategoryArgs {
    /// Category id (e.g., electronics).
    pub id: String,

    /// Sort key (relevance, price-low, price-high, rating, newest).
    #[arg(short, long)]
    pub sort: Option<SortOption>,

    /// Narrow the category with a text query.
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Product id.
    pub id: String,
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    /// Start from the sample cart.
    #[arg(long)]
    pub sample: bool,

    /// Add a product, optionally with a quantity (PRODUCT[:QTY]).
    #[arg(short, long, value_name = "PRODUCT[:QTY]")]
    pub add: Vec<String>,

    /// Set a product's quantity; 0 removes it (PRODUCT:QTY).
    #[arg(long, value_name = "PRODUCT:QTY")]
    pub set: Vec<String>,

    /// Remove a product's line.
    #[arg(short, long, value_name = "PRODUCT")]
    pub remove: Vec<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Write a default bazaar.toml in the current directory.
    Init {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

const LISTING_WIDTHS: [usize; 4] = [28, 10, 12, 14];

/// Print products as a table.
pub fn print_listing(output: &Output, products: &[&Product]) {
    output.table_row(&["PRODUCT", "PRICE", "RATING", "CATEGORY"], &LISTING_WIDTHS);
    for product in products {
        let title = truncate(&product.title, LISTING_WIDTHS[0]);
        let price = product.price.display();
        let rating = format!("{} {:.1}", stars(product.rating), product.rating);
        output.table_row(
            &[title.as_str(), price.as_str(), rating.as_str(), product.category_id.as_str()],
            &LISTING_WIDTHS,
        );
    }
    output.note(&format!("{} product(s)", products.len()));
}
