use colored::Colorize;

use flocktools_core::envelope::{write_document, SingleDocument};
use flocktools_core::webhooks::{
    transform_subscription, SubscriptionAttributes, SubscriptionOutput,
};

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Webhooks module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "webhooks")]
#[command(about = "Webhook subscription operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Webhooks commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List webhook subscriptions
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single subscription
    #[clap(name = "get")]
    Get(GetOptions),

    /// Create a new subscription
    #[clap(name = "create")]
    Create(CreateOptions),

    /// Activate or deactivate a subscription
    #[clap(name = "update")]
    Update(UpdateOptions),

    /// Delete a subscription
    #[clap(name = "delete")]
    Delete(DeleteOptions),
}

/// Options for listing subscriptions
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting a subscription
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Subscription id
    pub subscription_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for creating a subscription
#[derive(Debug, Clone, clap::Args)]
pub struct CreateOptions {
    /// Event name to subscribe to (e.g. "people.updated")
    #[clap(long)]
    pub name: String,

    /// Delivery URL for webhook payloads
    #[clap(long)]
    pub url: String,

    /// Create the subscription active
    #[clap(long)]
    pub active: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for updating a subscription
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateOptions {
    /// Subscription id
    pub subscription_id: String,

    /// New active state (true or false)
    #[clap(long, action = clap::ArgAction::Set, value_name = "BOOL")]
    pub active: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for deleting a subscription
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteOptions {
    /// Subscription id
    pub subscription_id: String,
}

impl Tabular for SubscriptionOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "URL", "Active"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.url.clone(),
            if self.active { "yes" } else { "" }.to_string(),
        ]
    }
}

fn display_subscription(subscription: &SubscriptionOutput) {
    std::println!(
        "\n{} - {}\n",
        subscription.id.bold().cyan(),
        subscription.name.bright_white()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "URL".bold().cyan(),
        subscription.url.cyan().underline().to_string()
    ]);
    table.add_row(prettytable::row![
        "Active".bold().cyan(),
        if subscription.active {
            "yes".bright_green().to_string()
        } else {
            "no".bright_black().to_string()
        }
    ]);
    table.printstd();
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "webhooks/v2/subscriptions",
        "webhooks list",
        &options.list,
        &options.output,
        transform_subscription,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "webhooks/v2/subscriptions/{}",
        urlencoding::encode(&options.subscription_id)
    );
    let document = client
        .get_optional::<SingleDocument<SubscriptionAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Subscription {} not found", options.subscription_id));
    };
    let subscription = transform_subscription(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&subscription)?);
    } else {
        display_subscription(&subscription);
    }

    Ok(())
}

/// Handle the create command
async fn create_handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let body = write_document(
        "Subscription",
        serde_json::json!({
            "name": options.name,
            "url": options.url,
            "active": options.active,
        }),
    );

    let document: SingleDocument<SubscriptionAttributes> =
        client.post("webhooks/v2/subscriptions", &body).await?;
    let subscription = transform_subscription(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&subscription)?);
    } else {
        println!("Created subscription {}", subscription.id);
        display_subscription(&subscription);
    }

    Ok(())
}

/// Handle the update command
async fn update_handler(options: UpdateOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "webhooks/v2/subscriptions/{}",
        urlencoding::encode(&options.subscription_id)
    );
    let body = write_document(
        "Subscription",
        serde_json::json!({ "active": options.active }),
    );

    let document: SingleDocument<SubscriptionAttributes> = client.patch(&path, &body).await?;
    let subscription = transform_subscription(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&subscription)?);
    } else {
        println!(
            "Subscription {} is now {}",
            subscription.id,
            if subscription.active { "active" } else { "inactive" }
        );
    }

    Ok(())
}

/// Handle the delete command
async fn delete_handler(options: DeleteOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "webhooks/v2/subscriptions/{}",
        urlencoding::encode(&options.subscription_id)
    );
    client.delete(&path).await?;

    println!("Deleted subscription {}", options.subscription_id);

    Ok(())
}

/// Run Webhooks commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Webhooks command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
        Commands::Create(options) => create_handler(options, global).await,
        Commands::Update(options) => update_handler(options, global).await,
        Commands::Delete(options) => delete_handler(options, global).await,
    }
}
