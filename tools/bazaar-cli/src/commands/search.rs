//! Home page search.

use anyhow::Result;
use bazaar_commerce::search::CatalogQuery;
use serde_json::json;

use super::{SearchArgs, print_listing};
use crate::context::Context;

/// Run the search command.
pub fn run(args: SearchArgs, ctx: &Context) -> Result<()> {
    let dataset = ctx.dataset()?;
    let sort = args.sort.unwrap_or(ctx.config.display.default_sort);
    let featured = shows_featured(args.query.as_deref());
    let query = CatalogQuery::new()
        .with_text(args.query.unwrap_or_default())
        .with_sort(sort);

    let results = if featured {
        query.run(dataset.featured_products())
    } else {
        query.run(dataset.products())
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "query": query.text,
            "sort": sort,
            "products": results,
        }));
        return Ok(());
    }

    match &query.text {
        Some(text) => ctx.output.header(&format!("Results for \"{text}\"")),
        None if featured => ctx.output.header("Featured products"),
        None => ctx.output.header("All products"),
    }
    ctx.output.note(&format!("Sorted by {}", sort.display_name()));

    if results.is_empty() {
        ctx.output.info("No products match your search.");
        return Ok(());
    }

    print_listing(&ctx.output, &results);
    Ok(())
}

/// The home page lists featured products until the shopper types anything.
///
/// A blank but non-empty query browses the whole catalog.
fn shows_featured(query: Option<&str>) -> bool {
    query.map_or(true, str::is_empty)
}
