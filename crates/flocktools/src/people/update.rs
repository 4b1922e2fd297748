use flocktools_core::envelope::{write_document, SingleDocument};
use flocktools_core::people::{transform_person, PersonAttributes};

use crate::api::{ApiClient, FlockConfig};
use crate::prelude::{println, *};

/// Options for updating a person
#[derive(Debug, Clone, clap::Args)]
pub struct UpdateOptions {
    /// Person id or resource URL
    pub person: String,

    /// New first name
    #[clap(long)]
    pub first_name: Option<String>,

    /// New last name
    #[clap(long)]
    pub last_name: Option<String>,

    /// New membership status
    #[clap(long)]
    pub status: Option<String>,

    /// New birthdate as YYYY-MM-DD
    #[clap(long)]
    pub birthdate: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn build_attributes(options: &UpdateOptions) -> serde_json::Value {
    let mut attributes = serde_json::Map::new();

    if let Some(first_name) = &options.first_name {
        attributes.insert("first_name".to_string(), serde_json::json!(first_name));
    }
    if let Some(last_name) = &options.last_name {
        attributes.insert("last_name".to_string(), serde_json::json!(last_name));
    }
    if let Some(status) = &options.status {
        attributes.insert("status".to_string(), serde_json::json!(status));
    }
    if let Some(birthdate) = &options.birthdate {
        attributes.insert("birthdate".to_string(), serde_json::json!(birthdate));
    }

    serde_json::Value::Object(attributes)
}

/// Handle the update command
pub async fn handler(options: UpdateOptions, global: crate::Global) -> Result<()> {
    let attributes = build_attributes(&options);
    if attributes.as_object().map(|map| map.is_empty()).unwrap_or(true) {
        return Err(eyre!(
            "Nothing to update: pass at least one of --first-name, --last-name, --status, --birthdate"
        ));
    }

    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let person_id = super::extract_person_id(&options.person)?;
    let path = format!("people/v2/people/{}", urlencoding::encode(&person_id));
    let body = write_document("Person", attributes);

    let document: SingleDocument<PersonAttributes> = client.patch(&path, &body).await?;
    let person = transform_person(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&person)?);
    } else {
        println!("Updated person {}", person.id);
        super::display_person(&person);
    }

    Ok(())
}
