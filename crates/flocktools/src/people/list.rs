use flocktools_core::people::transform_person;

use crate::api::{ApiClient, FlockConfig};
use crate::args::{ListArgs, OutputArgs};
use crate::listing;
use crate::prelude::*;

/// Options for listing people
#[derive(Debug, Clone, clap::Args)]
pub struct ListOptions {
    /// Match on first or last name (shorthand for --where search_name=...)
    #[clap(long, value_name = "NAME")]
    pub search_name: Option<String>,

    #[clap(flatten)]
    pub list: ListArgs,

    #[clap(flatten)]
    pub output: OutputArgs,
}

/// Handle the list command
pub async fn handler(options: ListOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let mut list = options.list;
    if let Some(name) = options.search_name {
        list.conditions.push(format!("search_name={}", name));
    }

    listing::run_list(
        &client,
        "people/v2/people",
        "people list",
        &list,
        &options.output,
        transform_person,
    )
    .await
}
