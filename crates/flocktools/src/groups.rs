use colored::Colorize;

use flocktools_core::envelope::SingleDocument;
use flocktools_core::groups::{
    transform_group, transform_membership, GroupAttributes, GroupOutput, MembershipOutput,
};

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Groups module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "groups")]
#[command(about = "Group and membership operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Groups commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List groups
    #[clap(name = "list")]
    List(ListOptions),

    /// Get a single group
    #[clap(name = "get")]
    Get(GetOptions),

    /// List the memberships of a group
    #[clap(name = "members")]
    Members(MembersOptions),
}

/// Options for listing groups
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting a group
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Group id
    pub group_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Options for listing a group's memberships
#[derive(Debug, Clone, clap::Args)]
pub struct MembersOptions {
    /// Group id
    pub group_id: String,

    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

impl Tabular for GroupOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Members", "Location"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.members.to_string(),
            self.location.clone(),
        ]
    }
}

impl Tabular for MembershipOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Role", "Joined"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.role.clone(),
            self.joined_at.clone().unwrap_or_default(),
        ]
    }
}

/// Handle the list command
async fn list_handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "groups/v2/groups",
        "groups list",
        &options.list,
        &options.output,
        transform_group,
    )
    .await
}

/// Handle the members command
async fn members_handler(options: MembersOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "groups/v2/groups/{}/memberships",
        urlencoding::encode(&options.group_id)
    );
    let command = format!("groups members {}", options.group_id);

    listing::run_list(
        &client,
        &path,
        &command,
        &options.list,
        &options.output,
        transform_membership,
    )
    .await
}

/// Handle the get command
async fn get_handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!("groups/v2/groups/{}", urlencoding::encode(&options.group_id));
    let document = client
        .get_optional::<SingleDocument<GroupAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Group {} not found", options.group_id));
    };
    let group = transform_group(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&group)?);
    } else {
        std::println!(
            "\n{} - {}\n",
            group.id.bold().cyan(),
            group.name.bright_white()
        );

        let mut table = new_table();
        table.add_row(prettytable::row![
            "Members".bold().cyan(),
            group.members.to_string().bright_yellow().to_string()
        ]);
        table.add_row(prettytable::row!["Location".bold().cyan(), group.location]);
        if let Some(created) = &group.created_at {
            table.add_row(prettytable::row![
                "Created".bold().cyan(),
                created.bright_black().to_string()
            ]);
        }
        table.printstd();
    }

    Ok(())
}

/// Run Groups commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Groups command...");
    }

    match app.command {
        Commands::List(options) => list_handler(options, global).await,
        Commands::Get(options) => get_handler(options, global).await,
        Commands::Members(options) => members_handler(options, global).await,
    }
}
