//! Cache commands

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::{Context as _, Result};
use colored::Colorize;
use gitscope_core::config::default_cache_path;
use std::fs;
use std::path::Path;

/// Show the remembered query and repository
///
/// # Arguments
///
/// * `json` - Output as JSON
/// * `config` - Explicit config.toml path, if any
/// * `verbose` - Enable verbose output if true
pub fn show(json: bool, config: Option<&Path>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;
    let cache = &ctx.cache;

    if json {
        print_json(&serde_json::to_string_pretty(cache)?)?;
        return Ok(());
    }

    if cache.query.is_none() && cache.repo.is_none() {
        print_text("No searches cached")?;
        return Ok(());
    }

    print_text(&format!(
        "{} {}",
        "Query:".bold(),
        cache.query.as_deref().unwrap_or("-")
    ))?;
    print_text(&format!(
        "{} {}",
        "Repository:".bold(),
        cache.repo.as_deref().unwrap_or("-")
    ))?;
    if let Some(updated_at) = cache.updated_at {
        print_text(&format!("{} {}", "Updated:".bold(), updated_at.to_rfc3339()))?;
    }

    Ok(())
}

/// Remove cache.json
pub fn clear(verbose: bool) -> Result<()> {
    let path = default_cache_path();

    if !path.exists() {
        if verbose {
            eprintln!("No cache at {}", path.display());
        }
        print_text("Cache already empty")?;
        return Ok(());
    }

    fs::remove_file(&path).with_context(|| format!("Failed to remove {}", path.display()))?;
    println!("{}", "Cache cleared".green());

    Ok(())
}
