use colored::Colorize;

use flocktools_core::envelope::SingleDocument;
use flocktools_core::services::{
    transform_plan, transform_service_type, PlanAttributes, PlanOutput, ServiceTypeOutput,
};

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::output::Tabular;
use crate::prelude::{println, *};

/// Services module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "services")]
#[command(about = "Service type and plan operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// Services commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List service types
    #[clap(name = "types")]
    Types(TypesOptions),

    /// List the plans of a service type
    #[clap(name = "plans")]
    Plans(PlansOptions),

    /// Get a single plan
    #[clap(name = "plan")]
    Plan(PlanOptions),
}

/// Options for listing service types
#[derive(Debug, Clone, clap::Args)]
pub struct TypesOptions {
    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for listing plans
#[derive(Debug, Clone, clap::Args)]
pub struct PlansOptions {
    /// Service type id
    pub service_type_id: String,

    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Options for getting a plan
#[derive(Debug, Clone, clap::Args)]
pub struct PlanOptions {
    /// Service type id
    pub service_type_id: String,

    /// Plan id
    pub plan_id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl Tabular for ServiceTypeOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Frequency"]
    }

    fn row(&self) -> Vec<String> {
        vec![self.id.clone(), self.name.clone(), self.frequency.clone()]
    }
}

impl Tabular for PlanOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Title", "Dates", "Series"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.title.clone(),
            self.dates.clone().unwrap_or_default(),
            self.series.clone().unwrap_or_default(),
        ]
    }
}

/// Handle the types command
async fn types_handler(options: TypesOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    listing::run_list(
        &client,
        "services/v2/service_types",
        "services types",
        &options.list,
        &options.output,
        transform_service_type,
    )
    .await
}

/// Handle the plans command
async fn plans_handler(options: PlansOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "services/v2/service_types/{}/plans",
        urlencoding::encode(&options.service_type_id)
    );
    let command = format!("services plans {}", options.service_type_id);

    listing::run_list(
        &client,
        &path,
        &command,
        &options.list,
        &options.output,
        transform_plan,
    )
    .await
}

/// Handle the plan command
async fn plan_handler(options: PlanOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let path = format!(
        "services/v2/service_types/{}/plans/{}",
        urlencoding::encode(&options.service_type_id),
        urlencoding::encode(&options.plan_id)
    );
    let document = client
        .get_optional::<SingleDocument<PlanAttributes>>(&path, &[])
        .await?;

    let Some(document) = document else {
        return Err(eyre!("Plan {} not found", options.plan_id));
    };
    let plan = transform_plan(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        std::println!(
            "\n{} - {}\n",
            plan.id.bold().cyan(),
            plan.title.bright_white()
        );

        let mut table = new_table();
        if let Some(dates) = &plan.dates {
            table.add_row(prettytable::row!["Dates".bold().cyan(), dates]);
        }
        if let Some(series) = &plan.series {
            table.add_row(prettytable::row![
                "Series".bold().cyan(),
                series.bright_magenta().to_string()
            ]);
        }
        table.printstd();
    }

    Ok(())
}

/// Run Services commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running Services command...");
    }

    match app.command {
        Commands::Types(options) => types_handler(options, global).await,
        Commands::Plans(options) => plans_handler(options, global).await,
        Commands::Plan(options) => plan_handler(options, global).await,
    }
}
