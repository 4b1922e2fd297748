use flocktools_core::envelope::{write_document, SingleDocument};
use flocktools_core::people::{transform_person, PersonAttributes};

use crate::api::{ApiClient, FlockConfig};
use crate::prelude::{println, *};

/// Options for creating a person
#[derive(Debug, Clone, clap::Args)]
pub struct CreateOptions {
    /// First name
    #[clap(long)]
    pub first_name: String,

    /// Last name
    #[clap(long)]
    pub last_name: String,

    /// Membership status (e.g. "active", "inactive")
    #[clap(long)]
    pub status: Option<String>,

    /// Birthdate as YYYY-MM-DD
    #[clap(long)]
    pub birthdate: Option<String>,

    /// Mark the person as a child
    #[clap(long)]
    pub child: bool,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

fn build_attributes(options: &CreateOptions) -> serde_json::Value {
    let mut attributes = serde_json::json!({
        "first_name": options.first_name,
        "last_name": options.last_name,
    });

    if let Some(status) = &options.status {
        attributes["status"] = serde_json::json!(status);
    }
    if let Some(birthdate) = &options.birthdate {
        attributes["birthdate"] = serde_json::json!(birthdate);
    }
    if options.child {
        attributes["child"] = serde_json::json!(true);
    }

    attributes
}

/// Handle the create command
pub async fn handler(options: CreateOptions, global: crate::Global) -> Result<()> {
    let config = FlockConfig::resolve(global.api_url.clone(), global.api_token.clone())?;
    let client = ApiClient::new(&config)?;

    let body = write_document("Person", build_attributes(&options));

    let document: SingleDocument<PersonAttributes> =
        client.post("people/v2/people", &body).await?;
    let person = transform_person(document.data);

    if options.json {
        println!("{}", serde_json::to_string_pretty(&person)?);
    } else {
        println!("Created person {}", person.id);
        super::display_person(&person);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CreateOptions {
        CreateOptions {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            status: None,
            birthdate: Some("1990-06-15".to_string()),
            child: false,
            json: false,
        }
    }

    #[test]
    fn test_build_attributes_required_fields() {
        let attributes = build_attributes(&options());

        assert_eq!(attributes["first_name"], "Ada");
        assert_eq!(attributes["last_name"], "Lovelace");
        assert_eq!(attributes["birthdate"], "1990-06-15");
        assert!(attributes.get("status").is_none());
        assert!(attributes.get("child").is_none());
    }

    #[test]
    fn test_build_attributes_child_flag() {
        let mut opts = options();
        opts.child = true;

        let attributes = build_attributes(&opts);

        assert_eq!(attributes["child"], true);
    }
}
