//! Category pages and the category index.

use anyhow::{Result, bail};
use bazaar_commerce::CategoryId;
use bazaar_commerce::catalog::Category;
use bazaar_commerce::search::CatalogQuery;
use serde_json::json;

use super::{CategoryArgs, print_listing};
use crate::context::Context;

/// Run the category command.
pub fn run(args: CategoryArgs, ctx: &Context) -> Result<()> {
    let dataset = ctx.dataset()?;
    let id = CategoryId::new(args.id);
    let Some(category) = dataset.category(&id) else {
        bail!("Unknown category: {id}. Run `bazaar categories` to list them.");
    };

    let sort = args.sort.unwrap_or(ctx.config.display.default_sort);
    let query = CatalogQuery::new()
        .in_category(id.clone())
        .with_text(args.query.unwrap_or_default())
        .with_sort(sort);
    let results = query.run(dataset.products());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "category": category,
            "query": query.text,
            "sort": sort,
            "products": results,
        }));
        return Ok(());
    }

    ctx.output.header(&category.label());
    ctx.output.note(&format!("Sorted by {}", sort.display_name()));

    if results.is_empty() {
        ctx.output.info("No products in this category yet.");
        return Ok(());
    }

    print_listing(&ctx.output, &results);
    Ok(())
}

/// List featured and other categories.
pub fn list(ctx: &Context) -> Result<()> {
    let dataset = ctx.dataset()?;
    let featured = dataset.featured_categories();
    let others = dataset.other_categories();

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "featured": featured,
            "other": others,
        }));
        return Ok(());
    }

    ctx.output.header("Featured categories");
    print_categories(ctx, &featured);

    ctx.output.header("More categories");
    print_categories(ctx, &others);

    Ok(())
}

fn print_categories(ctx: &Context, categories: &[&Category]) {
    for category in categories {
        ctx.output.list_item(&format!(
            "{} ({} products) [{}]",
            category.label(),
            category.product_count,
            category.id
        ));
    }
}
