//! Config command

use crate::context::Context;
use crate::output::{print_json, print_text};
use anyhow::Result;
use colored::Colorize;
use std::path::Path;

/// Show the effective configuration (file, defaults and env overrides)
pub fn show(json: bool, config: Option<&Path>, verbose: bool) -> Result<()> {
    let ctx = Context::new(config, verbose)?;

    if json {
        print_json(&serde_json::to_string_pretty(&ctx.config)?)?;
        return Ok(());
    }

    let source = if ctx.config_path.exists() {
        ctx.config_path.display().to_string()
    } else {
        format!("{} (not found, using defaults)", ctx.config_path.display())
    };
    print_text(&format!("{} {}", "Config:".bold(), source))?;
    print_text(&toml::to_string_pretty(&ctx.config)?)?;

    Ok(())
}
