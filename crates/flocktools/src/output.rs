//! Output rendering for list commands
//!
//! Every list command renders through the same pluggable formatter: a
//! prettytable view for terminals, pretty JSON for scripting, or CSV for
//! spreadsheets. `--output-file` redirects the rendered text to disk.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::prelude::*;
use crate::prelude::println;

/// Output format selector shared by all list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
}

/// Row-oriented view of a domain type for table and CSV rendering
pub trait Tabular {
    fn headers() -> Vec<&'static str>;
    fn row(&self) -> Vec<String>;
}

/// Render a batch of items in the requested format
pub fn render<T: Serialize + Tabular>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(items)
            .map_err(|e| eyre!("Failed to serialize output: {}", e)),
        OutputFormat::Csv => Ok(render_csv(items)),
        OutputFormat::Table => Ok(render_table(items)),
    }
}

fn render_table<T: Tabular>(items: &[T]) -> String {
    let mut table = new_table();

    table.add_row(prettytable::Row::new(
        T::headers().iter().map(|h| prettytable::Cell::new(h)).collect(),
    ));

    for item in items {
        table.add_row(prettytable::Row::new(
            item.row().iter().map(|cell| prettytable::Cell::new(cell)).collect(),
        ));
    }

    table.to_string()
}

fn render_csv<T: Tabular>(items: &[T]) -> String {
    let mut out = String::new();

    let headers: Vec<String> = T::headers().iter().map(|h| h.to_string()).collect();
    out.push_str(&csv_line(&headers));

    for item in items {
        out.push_str(&csv_line(&item.row()));
    }

    out
}

fn csv_line(fields: &[String]) -> String {
    let escaped: Vec<String> = fields.iter().map(|field| csv_field(field)).collect();
    format!("{}\n", escaped.join(","))
}

/// Quote a CSV field when it contains separators, quotes, or newlines
fn csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Print rendered output, or write it to a file when requested
pub fn emit(rendered: &str, output_file: Option<&Path>) -> Result<()> {
    match output_file {
        Some(path) => fs::write(path, rendered)
            .map_err(|e| eyre!("Failed to write output file {}: {}", path.display(), e)),
        None => {
            print!("{}", rendered);
            if !rendered.ends_with('\n') {
                println!();
            }
            Ok(())
        }
    }
}
