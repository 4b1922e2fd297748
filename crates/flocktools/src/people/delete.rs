use crate::api::{ApiClient, FlockConfig};
use crate::prelude::{println, *};

/// Options for deleting a person
#[derive(Debug, Clone, clap::Args)]
pub struct DeleteOptions {
    /// Person id or resource URL
    pub person: String,
}

/// Handle the delete command
pub async fn handler(options: DeleteOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let person_id = super::extract_person_id(&options.person)?;
    let path = format!("people/v2/people/{}", urlencoding::encode(&person_id));

    client.delete(&path).await?;

    println!("Deleted person {}", person_id);

    Ok(())
}
