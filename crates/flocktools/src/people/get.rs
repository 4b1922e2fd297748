use flocktools_core::envelope::SingleDocument;
use flocktools_core::people::{transform_person, PersonAttributes, PersonOutput};

use crate::api::{ApiClient, FlockConfig};
use crate::prelude::{println, *};

/// Options for getting a person
#[derive(Debug, Clone, clap::Args)]
pub struct GetOptions {
    /// Person id or resource URL
    pub person: String,

    /// Related resource to include (repeatable)
    #[clap(long, value_name = "RELATION")]
    pub include: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Fetch a single person, mapping a remote 404 to `None`
pub async fn get_person_data(
    client: &ApiClient,
    person_id: &str,
    includes: &[String],
) -> Result<Option<PersonOutput>> {
    let path = format!("people/v2/people/{}", urlencoding::encode(person_id));

    let mut query = Vec::new();
    if !includes.is_empty() {
        query.push(("include".to_string(), includes.join(",")));
    }

    let document = client
        .get_optional::<SingleDocument<PersonAttributes>>(&path, &query)
        .await?;

    Ok(document.map(|doc| transform_person(doc.data)))
}

/// Handle the get command
pub async fn handler(options: GetOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let person_id = super::extract_person_id(&options.person)?;

    let Some(person) = get_person_data(&client, &person_id, &options.include).await? else {
        return Err(eyre!("Person {} not found", person_id));
    };

    if options.json {
        println!("{}", serde_json::to_string_pretty(&person)?);
    } else {
        super::display_person(&person);
    }

    Ok(())
}
