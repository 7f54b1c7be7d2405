//! Bazaar CLI - Command line storefront for the Bazaar marketplace.
//!
//! Commands:
//! - `bazaar search` - Search the catalog (featured products without a query)
//! - `bazaar category` - Browse one category
//! - `bazaar categories` - List categories
//! - `bazaar product` - Show a product page
//! - `bazaar cart` - Build a cart and price it
//! - `bazaar config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CartArgs, CategoryArgs, ConfigArgs, ProductArgs, SearchArgs};

/// Bazaar CLI - Browse the catalog and price carts
#[derive(Parser)]
#[command(name = "bazaar")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the catalog
    Search(SearchArgs),

    /// Browse products in a category
    Category(CategoryArgs),

    /// List all categories
    Categories,

    /// Show a product with its seller, reviews and related products
    Product(ProductArgs),

    /// Build a cart and show its totals
    Cart(CartArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    let output = output::Output::new(cli.json);
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Search(args) => commands::search::run(args, &ctx),
        Commands::Category(args) => commands::category::run(args, &ctx),
        Commands::Categories => commands::category::list(&ctx),
        Commands::Product(args) => commands::product::run(args, &ctx),
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
