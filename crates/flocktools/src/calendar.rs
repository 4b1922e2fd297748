use colored::Colorize;

use flocktools_core::calendar::{transform_event, EventAttributes, EventOutput};
use flocktools_core::envelope::SingleDocument;

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Calendar module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "calendar")]
#[command(about = "Calendar event operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Calendar commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List calendar events
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single calendar event
    #[clap(name = "get")]
    Get(GetOptions),
}

/// Options for listing events
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting an event
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Event id
    pub event_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Tabular for EventOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Approval", "Visible", "Created"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.approval_status.clone(),
            if self.visible { "yes" } else { "" }.to_string(),
            self.created_at.clone().unwrap_or_default(),
        ]
    }
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "calendar/v2/events",
        "calendar list",
        &options.list,
        &options.output,
        transform_event,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "calendar/v2/events/{}",
        urlencoding::encode(&options.event_id)
    );
    let document = client
        .get_optional::<SingleDocument<EventAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Event {} not found", options.event_id));
    };
    let event = transform_event(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&event)?);
    } else {
        display_event(&event);
    }

    Ok(())
}

fn display_event(event: &EventOutput) {
    std::println!(
        "\n{} - {}\n",
        event.id.bold().cyan(),
        event.name.bright_white()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Approval".bold().cyan(),
        event.approval_status.green().to_string()
    ]);
    table.add_row(prettytable::row![
        "Visible".bold().cyan(),
        if event.visible { "yes" } else { "no" }
    ]);

    if let Some(created) = &event.created_at {
        table.add_row(prettytable::row![
            "Created".bold().cyan(),
            created.bright_black().to_string()
        ]);
    }

    table.printstd();
}

/// Run Calendar commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Calendar command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
    }
}
