use colored::Colorize;

use flocktools_core::envelope::SingleDocument;
use flocktools_core::registrations::{transform_signup, SignupAttributes, SignupOutput};

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Registrations module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "registrations")]
#[command(about = "Event signup operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Registrations commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List signups
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single signup
    #[clap(name = "get")]
    Get(GetOptions),
}

/// Options for listing signups
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    /// Only show signups that are currently open
    #[clap(long)]
    pub open_only: bool,

    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting a signup
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Signup id
    pub signup_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Tabular for SignupOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Open", "Opens", "Closes"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            if self.open { "yes" } else { "" }.to_string(),
            self.opens_at.clone().unwrap_or_default(),
            self.closes_at.clone().unwrap_or_default(),
        ]
    }
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let mut list = options.list;
    if options.open_only {
        list.conditions.push("open_signup=true".to_string());
    }

    listing::run_list(
        &client,
        "registrations/v2/signups",
        "registrations list",
        &list,
        &options.output,
        transform_signup,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "registrations/v2/signups/{}",
        urlencoding::encode(&options.signup_id)
    );
    let document = client
        .get_optional::<SingleDocument<SignupAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Signup {} not found", options.signup_id));
    };
    let signup = transform_signup(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&signup)?);
    } else {
        std::println!(
            "\n{} - {}\n",
            signup.id.bold().cyan(),
            signup.name.bright_white()
        );

        let mut table = new_table();
        table.add_row(prettytable::row![
            "Open".bold().cyan(),
            if signup.open {
                "yes".bright_green().to_string()
            } else {
                "no".bright_black().to_string()
            }
        ]);
        table.add_row(prettytable::row![
            "Archived".bold().cyan(),
            if signup.archived { "yes" } else { "no" }
        ]);
        if let Some(opens) = &signup.opens_at {
            table.add_row(prettytable::row!["Opens".bold().cyan(), opens]);
        }
        if let Some(closes) = &signup.closes_at {
            table.add_row(prettytable::row!["Closes".bold().cyan(), closes]);
        }
        table.printstd();
    }

    Ok(())
}

/// Run Registrations commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Registrations command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
    }
}
