use colored::Colorize;

use flocktools_core::filters;
use flocktools_core::query;

use crate::args::filters_dir;
use crate::prelude::{println, *};

/// Filters module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "filters")]
#[command(about = "Manage saved filters")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Filters commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List saved filters
    #[clap(name = "list")]
    List,

    /// Save a filter for reuse with --saved
    #[clap(name = "save")]
    Save(SaveOptions),

    /// Show the conditions of a saved filter
    #[clap(name = "show")]
    Show(ShowOptions),

    /// Delete a saved filter
    #[clap(name = "delete")]
    Delete(DeleteOptions),
}

/// Options for saving a filter
#[derive(Debug, Clone, clap::Args)]
pub struct SaveOptions {
    /// Filter name
    pub name: String,

    /// Filter condition as field=value (repeatable)
    #[clap(long = "where", value_name = "FIELD=VALUE", required = true)]
    pub conditions: Vec<String>,

    /// Overwrite the filter if it already exists
    #[clap(long)]
    pub update: bool,
}

/// Options for showing a filter
#[derive(Debug, Clone, clap::Args)]
pub struct ShowOptions {
    /// Filter name
    pub name: String,
}

/// Options for deleting a filter
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteOptions {
    /// Filter name
    pub name: String,
}

fn list_handler() -> Result<()> {
    let dir = filters_dir()?;
    let names = filters::list_filters(&dir).map_err(|e| eyre!("{}", e))?;

    if names.is_empty() {
        println!("No saved filters.");
        return Ok(());
    }

    println!("Saved filters:\n");
    for name in names {
        println!("  {}", name.cyan());
    }

    Ok(())
}

fn save_handler(options: SaveOptions) -> Result<()> {
    // Validate every condition before anything is written
    for expr in &options.conditions {
        query::parse_where(expr).map_err(|e| eyre!("{}", e))?;
    }

    let dir = filters_dir()?;
    let content = options.conditions.join("\n");

    filters::save_filter(&dir, &options.name, &content, options.update)
        .map_err(|e| eyre!("{}", e))?;

    println!(
        "Saved filter {} ({} condition(s))",
        options.name.cyan(),
        options.conditions.len()
    );

    Ok(())
}

fn show_handler(options: ShowOptions) -> Result<()> {
    let dir = filters_dir()?;
    let content = filters::load_filter(&dir, &options.name).map_err(|e| eyre!("{}", e))?;

    println!("{}:", options.name.cyan());
    for line in content.lines().filter(|l| !l.trim().is_empty()) {
        println!("  {}", line);
    }

    Ok(())
}

fn delete_handler(options: DeleteOptions) -> Result<()> {
    let dir = filters_dir()?;
    filters::delete_filter(&dir, &options.name).map_err(|e| eyre!("{}", e))?;

    println!("Deleted filter {}", options.name);

    Ok(())
}

/// Run Filters commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Filters command...");
    }

    match app.command {
        Commands::List => list_handler(),
        Commands::Save(options) => save_handler(options),
        Commands::Show(options) => show_handler(options),
        Commands::Delete(options) => delete_handler(options),
    }
}
