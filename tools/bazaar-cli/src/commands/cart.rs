//! Cart building and pricing.

use anyhow::{Context as _, Result, anyhow, bail};
use bazaar_commerce::ProductId;
use bazaar_commerce::cart::Cart;
use bazaar_commerce::dataset::seed;
use serde_json::json;
use tracing::debug;

use super::CartArgs;
use crate::context::Context;
use crate::output::truncate;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let dataset = ctx.dataset()?;
    let mut cart = if args.sample {
        seed::sample_cart(&dataset).context("Failed to build the sample cart")?
    } else {
        Cart::new()
    };

    for spec in &args.add {
        let (id, quantity) = parse_line_spec(spec)?;
        let product = dataset
            .product(&id)
            .ok_or_else(|| anyhow!("Product not found: {id}"))?;
        cart.add_or_increment(product, quantity.unwrap_or(1))
            .with_context(|| format!("Failed to add {id}"))?;
    }

    for spec in &args.set {
        let (id, quantity) = parse_line_spec(spec)?;
        let Some(quantity) = quantity else {
            bail!("Missing quantity in '{spec}', expected PRODUCT:QTY");
        };
        let Some(line_id) = cart.line_for_product(&id).map(|line| line.id.clone()) else {
            debug!(product = %id, "no cart line to update");
            continue;
        };
        cart.set_quantity(&line_id, quantity)
            .with_context(|| format!("Failed to update {id}"))?;
    }

    for id in &args.remove {
        let id = ProductId::new(id.as_str());
        if let Some(line_id) = cart.line_for_product(&id).map(|line| line.id.clone()) {
            cart.remove_line(&line_id);
        }
    }

    let totals = cart
        .compute_totals_with(&ctx.config.pricing)
        .context("Failed to price the cart")?;

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "cart": cart,
            "item_count": cart.item_count(),
            "totals": totals,
        }));
        return Ok(());
    }

    ctx.output.header(&format!("Cart ({} items)", cart.item_count()));
    if cart.is_empty() {
        ctx.output.info("Your cart is empty.");
    }

    let widths = [28, 10, 5, 12];
    if !cart.is_empty() {
        ctx.output.table_row(&["PRODUCT", "PRICE", "QTY", "SUBTOTAL"], &widths);
    }
    for (line, pricing) in cart.lines().iter().zip(&totals.lines) {
        let title = truncate(&line.product.title, widths[0]);
        let unit = pricing.unit_price.display();
        let quantity = pricing.quantity.to_string();
        let subtotal = pricing.subtotal.display();
        ctx.output.table_row(
            &[title.as_str(), unit.as_str(), quantity.as_str(), subtotal.as_str()],
            &widths,
        );
    }

    ctx.output.line("");
    ctx.output.kv("Subtotal", &totals.subtotal.display());
    let shipping = if totals.ships_free() {
        "FREE".to_string()
    } else {
        totals.shipping.display()
    };
    ctx.output.kv("Shipping", &shipping);
    ctx.output.kv("Tax", &totals.tax.display());
    ctx.output.kv("Total", &totals.total.display());

    if let Some(hint) = totals.free_shipping_hint() {
        ctx.output.info(&hint);
    }

    Ok(())
}

/// Parse `PRODUCT[:QTY]`.
fn parse_line_spec(spec: &str) -> Result<(ProductId, Option<u32>)> {
    let (id, quantity) = match spec.rsplit_once(':') {
        Some((id, quantity)) => {
            let quantity = quantity
                .trim()
                .parse::<u32>()
                .with_context(|| format!("Invalid quantity in '{spec}'"))?;
            (id, Some(quantity))
        }
        None => (spec, None),
    };

    let id = id.trim();
    if id.is_empty() {
        bail!("Missing product id in '{spec}'");
    }
    Ok((ProductId::new(id), quantity))
}
