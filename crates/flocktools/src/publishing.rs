use colored::Colorize;

use flocktools_core::envelope::SingleDocument;
use flocktools_core::publishing::{transform_episode, EpisodeAttributes, EpisodeOutput};

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Publishing module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "publishing")]
#[command(about = "Media episode operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Publishing commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List episodes
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single episode
    #[clap(name = "get")]
    Get(GetOptions),
}

/// Options for listing episodes
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting an episode
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Episode id
    pub episode_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Tabular for EpisodeOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Published", "Video"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.published_at.clone().unwrap_or_default(),
            self.video_url.clone().unwrap_or_default(),
        ]
    }
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "publishing/v2/episodes",
        "publishing list",
        &options.list,
        &options.output,
        transform_episode,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "publishing/v2/episodes/{}",
        urlencoding::encode(&options.episode_id)
    );
    let document = client
        .get_optional::<SingleDocument<EpisodeAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Episode {} not found", options.episode_id));
    };
    let episode = transform_episode(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&episode)?);
    } else {
        std::println!(
            "\n{} - {}\n",
            episode.id.bold().cyan(),
            episode.title.bright_white()
        );

        let mut table = new_table();
        table.add_row(prettytable::row![
            "Published".bold().cyan(),
            if episode.published { "yes" } else { "no" }
        ]);
        if let Some(published_at) = &episode.published_at {
            table.add_row(prettytable::row![
                "Published at".bold().cyan(),
                published_at.bright_black().to_string()
            ]);
        }
        if let Some(video_url) = &episode.video_url {
            table.add_row(prettytable::row![
                "Video".bold().cyan(),
                video_url.cyan().underline().to_string()
            ]);
        }
        table.printstd();
    }

    Ok(())
}

/// Run Publishing commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Publishing command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
    }
}
