//! Product detail page.

use anyhow::{Result, bail};
use bazaar_commerce::ProductId;
use serde_json::json;

use super::{ProductArgs, print_listing};
use crate::context::Context;
use crate::output::{stars, stock_badge};

/// Run the product command.
pub fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let dataset = ctx.dataset()?;
    let id = ProductId::new(args.id);
    let Some(product) = dataset.product(&id) else {
        bail!("Product not found: {id}");
    };

    let seller = dataset.seller_of(product);
    let reviews = dataset.reviews_for(&id);
    let related = dataset.related_products(&id, ctx.config.display.related_limit);

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "product": product,
            "seller": seller,
            "reviews": reviews,
            "related": related,
        }));
        return Ok(());
    }

    ctx.output.header(&product.title);
    ctx.output.kv("Price", &product.price.display());
    ctx.output.kv(
        "Rating",
        &format!(
            "{} {:.1} ({} reviews)",
            stars(product.rating),
            product.rating,
            product.review_count
        ),
    );
    ctx.output.kv("Availability", &stock_badge(product.in_stock));
    let category = match dataset.category(&product.category_id) {
        Some(category) => category.label(),
        None => product.category_id.to_string(),
    };
    ctx.output.kv("Category", &category);
    if let Some(subcategory) = &product.subcategory {
        ctx.output.kv("Subcategory", subcategory);
    }
    if !product.tags.is_empty() {
        ctx.output.kv("Tags", &product.tags.join(", "));
    }
    ctx.output.line("");
    ctx.output.line(&product.description);

    if !product.specifications.is_empty() {
        ctx.output.header("Specifications");
        for spec in &product.specifications {
            ctx.output.kv(&spec.name, &spec.value);
        }
    }

    if let Some(seller) = seller {
        ctx.output.header("Sold by");
        let badge = if seller.verified { " (verified)" } else { "" };
        ctx.output.line(&format!("  {}{}", seller.name, badge));
        ctx.output.kv(
            "Rating",
            &format!("{:.1} from {} reviews", seller.rating, seller.review_count),
        );
        ctx.output.kv("Member since", &seller.joined_at.format("%B %Y").to_string());
        ctx.output.kv("Products", &seller.total_products.to_string());
        ctx.output.kv("Monthly sales", &seller.monthly_sales.to_string());
    }

    ctx.output.header(&format!("Reviews ({})", reviews.len()));
    if reviews.is_empty() {
        ctx.output.note("No reviews yet.");
    }
    for review in &reviews {
        let verified = if review.verified { " - Verified purchase" } else { "" };
        ctx.output.line(&format!(
            "  {} {} [{}]",
            review.render_stars(),
            review.title,
            review.author_initials()
        ));
        ctx.output.note(&format!(
            "{} on {}{}",
            review.user_name,
            review.created_at.format("%B %-d, %Y"),
            verified
        ));
        ctx.output.line(&format!("  {}", review.content));
        ctx.output.note(&format!("{} found this helpful", review.helpful));
    }

    if !related.is_empty() {
        ctx.output.header("Related products");
        print_listing(&ctx.output, &related);
    }

    Ok(())
}
