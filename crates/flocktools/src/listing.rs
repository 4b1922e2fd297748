//! Shared driver for paginated list commands
//!
//! Every module's `list` command funnels through [`run_list`]: build the
//! start URL, fetch one page (or walk them all through the pagination
//! stream), transform resources into domain rows, and hand the batch to
//! the output formatter. The next-link hint and the --all spinner live
//! here so each module stays a thin declaration of endpoint + transform.

use std::pin::pin;

use futures::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use serde::de::DeserializeOwned;
use serde::Serialize;

use flocktools_core::envelope::Resource;

use crate::api::{self, paginate, ApiClient};
use crate::args::{self, ListArgs, OutputArgs};
use crate::output::{self, OutputFormat, Tabular};
use crate::prelude::{println, *};

pub async fn run_list<A, T, F>(
    client: &ApiClient,
    path: &str,
    command: &str,
    list: &ListArgs,
    out: &OutputArgs,
    transform: F,
) -> Result<()>
where
    A: DeserializeOwned,
    T: Serialize + Tabular,
    F: Fn(Resource<A>) -> T,
{
    let params = list.query_params()?;
    let start = match &list.after {
        Some(after) => args::resolve_after(after)?,
        None => api::list_url(path, &params),
    };

    let mut total_count = None;
    let mut next_link = None;
    let items: Vec<T>;

    if list.all {
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        spinner.enable_steady_tick(std::time::Duration::from_millis(100));

        let fetch = |url: String| async move { client.fetch_page::<A>(&url, &[]).await };
        let mut resources = pin!(paginate::stream(fetch, start));

        let cap = list.max_items.unwrap_or(usize::MAX);
        let mut collected = Vec::new();

        while let Some(resource) = resources.next().await {
            collected.push(transform(resource?));
            spinner.set_message(format!("Fetched {} record(s)...", collected.len()));
            if collected.len() >= cap {
                break;
            }
        }

        spinner.finish_and_clear();
        items = collected;
    } else {
        let page = client.fetch_page::<A>(&start, &[]).await?;
        total_count = page.total_count;
        next_link = page.next;
        items = page.items.into_iter().map(transform).collect();
    }

    if out.format == OutputFormat::Table && out.output_file.is_none() {
        let total_info = total_count
            .map(|t| format!(" (of {} total)", t))
            .unwrap_or_default();
        println!("Found {} record(s){}:\n", items.len(), total_info);
    }

    let rendered = output::render(&items, out.format)?;
    output::emit(&rendered, out.output_file.as_deref())?;

    if let Some(next) = next_link {
        let hash = args::cache_next_link(&next)?;
        args::hint_next_page(command, &hash);
    }

    Ok(())
}
