//! Configuration management commands.

use std::fs;

use anyhow::{Result, bail};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{CONFIG_FILE_NAMES, generate_default_config};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.note(&format!("Loaded from {}", path.display())),
        None => ctx.output.note("No config file found, using defaults"),
    }

    ctx.output.line("");
    ctx.output.line("[catalog]");
    match &ctx.config.catalog.path {
        Some(path) => ctx.output.kv("path", &path.display().to_string()),
        None => ctx.output.kv("path", "(built-in seed catalog)"),
    }

    let pricing = &ctx.config.pricing;
    ctx.output.line("");
    ctx.output.line("[pricing]");
    ctx.output.kv("free_shipping_threshold", &pricing.free_shipping_threshold.to_string());
    ctx.output.kv("flat_shipping", &pricing.flat_shipping.to_string());
    ctx.output.kv("tax_rate", &pricing.tax_rate.to_string());

    ctx.output.line("");
    ctx.output.line("[display]");
    ctx.output.kv("default_sort", ctx.config.display.default_sort.as_str());
    ctx.output.kv("related_limit", &ctx.config.display.related_limit.to_string());

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
