//! Search command (thin endpoint layer over gitscope-scope)

use crate::context::Context;
use crate::output::{TerminalPreview, TerminalReply, print_json};
use anyhow::Result;
use gitscope_scope::query::EMPTY_CATEGORY_ID;
use gitscope_scope::{
    CategorisedResult, CollectedReply, Department, SearchQuery, SearchRequest, build_preview,
};
use std::path::Path;

pub struct SearchArgs {
    pub query: String,
    pub department: Department,
    pub repo: Option<String>,
    pub json: bool,
    pub preview: bool,
}

/// Run one search and remember it in the cache
///
/// # Arguments
///
/// * `args` - Query, department and output options
/// * `config` - Explicit config.toml path, if any
/// * `verbose` - Enable verbose output if true
pub fn run(args: SearchArgs, config: Option<&Path>, verbose: bool) -> Result<()> {
    let mut ctx = Context::new(config, verbose)?;

    let mut request = SearchRequest::new(args.query, args.department);
    request.repo = args.repo;

    let mut search = SearchQuery::new(request, &ctx.config, ctx.cache.clone())?;
    if verbose {
        eprintln!(
            "Searching {} for '{}'...",
            args.department.label(),
            search.effective_query()
        );
    }

    if args.json {
        let mut reply = CollectedReply::new();
        search.run(&mut reply)?;
        if args.preview
            && let Some(first) = previewable(reply.results.first())
        {
            build_preview(&first, &mut reply);
        }
        print_json(&serde_json::to_string_pretty(&reply)?)?;
    } else {
        let mut reply = TerminalReply::new();
        search.run(&mut reply)?;
        if let Some(err) = reply.take_write_error() {
            return Err(err.into());
        }
        if args.preview
            && let Some(first) = previewable(reply.first())
        {
            let mut preview = TerminalPreview::new(&first);
            build_preview(&first, &mut preview);
            if let Some(err) = preview.take_write_error() {
                return Err(err.into());
            }
        }
    }

    ctx.cache = search.into_cache();
    ctx.save_cache()?;

    Ok(())
}

/// The placeholder shown for empty results has nothing to preview
fn previewable(result: Option<&CategorisedResult>) -> Option<CategorisedResult> {
    result
        .filter(|r| r.category != EMPTY_CATEGORY_ID)
        .cloned()
}
