use colored::Colorize;

use flocktools_core::envelope::SingleDocument;
use flocktools_core::giving::{transform_donation, DonationAttributes, DonationOutput};

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Giving module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "giving")]
#[command(about = "Donation operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Giving commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List donations
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single donation
    #[clap(name = "get")]
    Get(GetOptions),
}

/// Options for listing donations
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting a donation
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Donation id
    pub donation_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Tabular for DonationOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Amount", "Method", "Received", "Refunded"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.amount.clone(),
            self.payment_method.clone(),
            self.received_on.clone().unwrap_or_default(),
            if self.refunded { "yes" } else { "" }.to_string(),
        ]
    }
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "giving/v2/donations",
        "giving list",
        &options.list,
        &options.output,
        transform_donation,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "giving/v2/donations/{}",
        urlencoding::encode(&options.donation_id)
    );
    let document = client
        .get_optional::<SingleDocument<DonationAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Donation {} not found", options.donation_id));
    };
    let donation = transform_donation(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&donation)?);
    } else {
        std::println!(
            "\n{} - {}\n",
            donation.id.bold().cyan(),
            donation.amount.bright_green()
        );

        let mut table = new_table();
        table.add_row(prettytable::row![
            "Method".bold().cyan(),
            donation.payment_method
        ]);
        if let Some(received) = &donation.received_on {
            table.add_row(prettytable::row!["Received".bold().cyan(), received]);
        }
        if donation.refunded {
            table.add_row(prettytable::row![
                "Refunded".bold().cyan(),
                "yes".bright_red().to_string()
            ]);
        }
        table.printstd();
    }

    Ok(())
}

/// Run Giving commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Giving command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
    }
}
