pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use colored::Colorize;
use regex::Regex;

use flocktools_core::people::PersonOutput;

use crate::output::Tabular;
use crate::prelude::{println, *};

/// People module app - root command
#[derive(Debug, clap::Parser)]
#[command(name = "people")]
#[command(about = "People directory operations")]
pub struct App {
    #[command(subcommand)]
    pub command: Commands,
}

/// People commands
#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// List people
    #[clap(name = "list")]
    List(list::ListOptions),

    /// Get a single person
    #[clap(name = "get")]
    Get(get::GetOptions),

    /// Create a new person
    #[clap(name = "create")]
    Create(create::CreateOptions),

    /// Update fields on a person
    #[clap(name = "update")]
    Update(update::UpdateOptions),

    /// Delete a person
    #[clap(name = "delete")]
    Delete(delete::DeleteOptions),
}

/// Run People commands
pub async fn run(app: App, global: crate::Global) -> Result<()> {
    if global.verbose {
        println!("Running People command...");
    }

    match app.command {
        Commands::List(options) => list::handler(options, global).await,
        Commands::Get(options) => get::handler(options, global).await,
        Commands::Create(options) => create::handler(options, global).await,
        Commands::Update(options) => update::handler(options, global).await,
        Commands::Delete(options) => delete::handler(options, global).await,
    }
}

impl Tabular for PersonOutput {
    fn headers() -> Vec<&'static str> {
        vec!["ID", "Name", "Status", "Birthdate", "Child"]
    }

    fn row(&self) -> Vec<String> {
        vec![
            self.id.clone(),
            self.name.clone(),
            self.status.clone(),
            self.birthdate.clone().unwrap_or_default(),
            if self.child { "yes" } else { "" }.to_string(),
        ]
    }
}

/// Accept a raw person id or a full resource URL
pub fn extract_person_id(input: &str) -> Result<String> {
    if !input.is_empty() && input.chars().all(|c| c.is_ascii_digit()) {
        return Ok(input.to_string());
    }

    let re = Regex::new(r"/people/v2/people/(\d+)").unwrap();
    if let Some(caps) = re.captures(input) {
        if let Some(id_match) = caps.get(1) {
            return Ok(id_match.as_str().to_string());
        }
    }

    Err(eyre!("Invalid person id or URL: {}", input))
}

/// Display a person's details as a formatted CLI table.
///
/// Renders the standard person view used by the get, create, and update
/// handlers.
pub(crate) fn display_person(person: &PersonOutput) {
    std::println!(
        "\n{} - {}\n",
        person.id.bold().cyan(),
        person.name.bright_white()
    );

    let mut table = new_table();
    table.add_row(prettytable::row![
        "Status".bold().cyan(),
        person.status.green().to_string()
    ]);

    if let Some(birthdate) = &person.birthdate {
        table.add_row(prettytable::row![
            "Birthdate".bold().cyan(),
            birthdate.bright_yellow().to_string()
        ]);
    }

    table.add_row(prettytable::row![
        "Child".bold().cyan(),
        if person.child { "yes" } else { "no" }
    ]);

    if let Some(created) = &person.created_at {
        table.add_row(prettytable::row![
            "Created".bold().cyan(),
            created.bright_black().to_string()
        ]);
    }

    if let Some(updated) = &person.updated_at {
        table.add_row(prettytable::row![
            "Updated".bold().cyan(),
            updated.bright_black().to_string()
        ]);
    }

    table.printstd();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_person_id_from_digits() {
        assert_eq!(extract_person_id("12345").unwrap(), "12345");
    }

    #[test]
    fn test_extract_person_id_from_url() {
        let url = "https://api.flockhq.com/people/v2/people/987?include=emails";
        assert_eq!(extract_person_id(url).unwrap(), "987");
    }

    #[test]
    fn test_extract_person_id_invalid() {
        assert!(extract_person_id("").is_err());
        assert!(extract_person_id("abc").is_err());
        assert!(extract_person_id("https://api.flockhq.com/giving/v2/donations/5").is_err());
    }
}
