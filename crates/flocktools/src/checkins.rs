use colored::Colorize;

use flocktools_core::checkins::{transform_check_in, CheckInAttributes, CheckInOutput};
use flocktools_core::envelope::SingleDocument;

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// CheckIns module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "checkins")]
#[command(about = "Check-in operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// CheckIns commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List check-ins
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single check-in
    #[clap(name = "get")]
    Get(GetOptions),
}

/// Options for listing check-ins
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting a check-in
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Check-in id
    pub check_in_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Tabular for CheckInOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Kind", "Checked in", "Checked out"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.kind.clone(),
            self.created_at.clone().unwrap_or_default(),
            self.checked_out_at.clone().unwrap_or_default(),
        ]
    }
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "check-ins/v2/check_ins",
        "checkins list",
        &options.list,
        &options.output,
        transform_check_in,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "check-ins/v2/check_ins/{}",
        urlencoding::encode(&options.check_in_id)
    );
    let document = client
        .get_optional::<SingleDocument<CheckInAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Check-in {} not found", options.check_in_id));
    };
    let check_in = transform_check_in(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&check_in)?);
    } else {
        std::println!(
            "\n{} - {}\n",
            check_in.id.bold().cyan(),
            check_in.name.bright_white()
        );

        let mut table = new_table();
        table.add_row(prettytable::row!["Kind".bold().cyan(), check_in.kind]);
        if let Some(created) = &check_in.created_at {
            table.add_row(prettytable::row!["Checked in".bold().cyan(), created]);
        }
        let checked_out = check_in
            .checked_out_at
            .as_deref()
            .unwrap_or("still present");
        table.add_row(prettytable::row!["Checked out".bold().cyan(), checked_out]);
        table.printstd();
    }

    Ok(())
}

/// Run CheckIns commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running CheckIns command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
    }
}
