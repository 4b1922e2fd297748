use crate::prelude::*;
use clap::Parser;

mod api;
mod args;
mod calendar;
mod checkins;
mod error;
mod filters;
mod giving;
mod groups;
mod listing;
mod output;
mod people;
mod prelude;
mod publishing;
mod registrations;
mod services;
mod webhooks;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Command line client for the Flock church management API"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Flock API base URL (overrides FLOCK_API_URL)
    #[clap(long, global = true)]
    api_url: Option<String>,

    /// Flock personal access token (overrides FLOCK_API_TOKEN)
    #[clap(long, global = true)]
    api_token: Option<String>,

    /// Whether to display additional information.
    #[clap(long, env = "FLOCK_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// People directory operations
    People(crate::people::App),

    /// Calendar event operations
    Calendar(crate::calendar::App),

    /// Check-in operations
    #[clap(name = "checkins")]
    Checkins(crate::checkins::App),

    /// Donation operations
    Giving(crate::giving::App),

    /// Group and membership operations
    Groups(crate::groups::App),

    /// Media episode operations
    Publishing(crate::publishing::App),

    /// Event signup operations
    Registrations(crate::registrations::App),

    /// Service type and plan operations
    Services(crate::services::App),

    /// Webhook subscription operations
    Webhooks(crate::webhooks::App),

    /// Manage saved filters
    Filters(crate::filters::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();

    match app.command {
        SubCommands::People(sub_app) => crate::people::run(sub_app, app.global).await,
        SubCommands::Calendar(sub_app) => crate::calendar::run(sub_app, app.global).await,
        SubCommands::Checkins(sub_app) => crate::checkins::run(sub_app, app.global).await,
        SubCommands::Giving(sub_app) => crate::giving::run(sub_app, app.global).await,
        SubCommands::Groups(sub_app) => crate::groups::run(sub_app, app.global).await,
        SubCommands::Publishing(sub_app) => crate::publishing::run(sub_app, app.global).await,
        SubCommands::Registrations(sub_app) => crate::registrations::run(sub_app, app.global).await,
        SubCommands::Services(sub_app) => crate::services::run(sub_app, app.global).await,
        SubCommands::Webhooks(sub_app) => crate::webhooks::run(sub_app, app.global).await,
        SubCommands::Filters(sub_app) => crate::filters::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
