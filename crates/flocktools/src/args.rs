//! Shared argument surfaces for list commands
//!
//! Every module's `list` command flattens [`ListArgs`] and [`OutputArgs`]
//! into its own options, so the query, paging, and rendering flags stay
//! identical across the CLI.

use std::path::PathBuf;

use flocktools_core::query::{self, QueryParams};

use crate::output::OutputFormat;
use crate::prelude::{eprintln, *};

/// Query and paging flags shared by every list command
#[derive(Debug, Clone, clap::Args)]
pub struct ListArgs {
    /// Filter condition as field=value (repeatable)
    #[clap(long = "where", value_name = "FIELD=VALUE")]
    pub conditions: Vec<String>,

    /// Sort order; prefix a field with '-' for descending
    #[clap(long)]
    pub order: Option<String>,

    /// Related resource to include (repeatable)
    #[clap(long, value_name = "RELATION")]
    pub include: Vec<String>,

    /// Results per page
    #[arg(short, long, default_value = "25")]
    pub per_page: usize,

    /// Offset into the collection
    #[arg(long)]
    pub offset: Option<usize>,

    /// Saved filter to merge with --where conditions
    #[clap(long, value_name = "NAME")]
    pub saved: Option<String>,

    /// Next-page token (8-character hash) or literal next-link URL
    #[arg(long)]
    pub after: Option<String>,

    /// Follow next links and fetch every page
    #[arg(long)]
    pub all: bool,

    /// Stop after this many items when fetching all pages
    #[arg(long, value_name = "N")]
    pub max_items: Option<usize>,
}

/// Rendering flags shared by every list command
#[derive(Debug, Clone, clap::Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write rendered output to a file instead of stdout
    #[arg(long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,
}

impl ListArgs {
    /// Build query parameters from the CLI flags plus any saved filter.
    ///
    /// Saved-filter conditions come first so explicit --where flags read
    /// as refinements on top of them.
    pub fn query_params(&self) -> Result<QueryParams> {
        let mut params = QueryParams::default();

        if let Some(name) = &self.saved {
            let dir = filters_dir()?;
            let saved = flocktools_core::filters::load_filter(&dir, name)
                .map_err(|e| eyre!("{}", e))?;

            for line in saved.lines().map(str::trim).filter(|l| !l.is_empty()) {
                let (field, value) = query::parse_where(line).map_err(|e| eyre!("{}", e))?;
                params.wheres.push((field, value));
            }
        }

        for expr in &self.conditions {
            let (field, value) = query::parse_where(expr).map_err(|e| eyre!("{}", e))?;
            params.wheres.push((field, value));
        }

        params.order = self.order.clone();
        params.includes = self.include.clone();
        params.per_page = Some(self.per_page);
        params.offset = self.offset;

        Ok(params)
    }
}

/// Directory where next-page links are cached
pub fn pagination_dir() -> Result<PathBuf> {
    let dir = dirs_next::cache_dir()
        .ok_or_else(|| eyre!("Unable to determine cache directory"))?
        .join("flocktools")
        .join("pages");

    Ok(dir)
}

/// Directory where saved filters live
pub fn filters_dir() -> Result<PathBuf> {
    let dir = dirs_next::config_dir()
        .ok_or_else(|| eyre!("Unable to determine config directory"))?
        .join("flocktools")
        .join("filters");

    Ok(dir)
}

/// Resolve an --after value into a next-link URL.
///
/// Anything that looks like a URL passes through unchanged; an
/// 8-character hash resolves against the cache.
pub fn resolve_after(after: &str) -> Result<String> {
    if after.starts_with("http://") || after.starts_with("https://") || after.contains('/') {
        return Ok(after.to_string());
    }

    let dir = pagination_dir()?;
    flocktools_core::pagination::resolve_next_link(&dir, after).map_err(|e| eyre!("{}", e))
}

/// Cache a next link and return the short hash shown to the user
pub fn cache_next_link(next: &str) -> Result<String> {
    let dir = pagination_dir()?;
    flocktools_core::pagination::cache_next_link(&dir, next).map_err(|e| eyre!("{}", e))
}

/// Print the follow-up command for the next page of results
pub fn hint_next_page(command: &str, hash: &str) {
    eprintln!();
    eprintln!("More results available. To fetch the next page, run:");
    eprintln!("  flocktools {} --after {}", command, hash);
}
