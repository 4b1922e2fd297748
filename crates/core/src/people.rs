//! Transformation functions for People API responses

use serde::{Deserialize, Serialize};

use crate::envelope::{Page, Resource};

/// Person attributes from the People API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PersonAttributes {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub birthdate: Option<String>,
    #[serde(default)]
    pub child: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Output structure for a single person
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PersonOutput {
    pub id: String,
    pub name: String,
    pub status: String,
    pub birthdate: Option<String>,
    pub child: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

/// Join name parts, falling back to a placeholder when both are missing
pub fn full_name(first: Option<&str>, last: Option<&str>) -> String {
    match (first, last) {
        (Some(first), Some(last)) => format!("{} {}", first, last),
        (Some(first), None) => first.to_string(),
        (None, Some(last)) => last.to_string(),
        (None, None) => "(no name)".to_string(),
    }
}

/// Transform a People API resource into the person domain model
pub fn transform_person(resource: Resource<PersonAttributes>) -> PersonOutput {
    let attrs = resource.attributes;

    PersonOutput {
        id: resource.id,
        name: full_name(attrs.first_name.as_deref(), attrs.last_name.as_deref()),
        status: attrs.status.unwrap_or_else(|| "active".to_string()),
        birthdate: attrs.birthdate,
        child: attrs.child.unwrap_or(false),
        created_at: attrs.created_at,
        updated_at: attrs.updated_at,
    }
}

/// Transform a page of People API resources, keeping cursor metadata
pub fn transform_people_page(page: Page<Resource<PersonAttributes>>) -> Page<PersonOutput> {
    page.map(transform_person)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person_resource(id: &str, first: Option<&str>, last: Option<&str>) -> Resource<PersonAttributes> {
        Resource {
            kind: "Person".to_string(),
            id: id.to_string(),
            attributes: PersonAttributes {
                first_name: first.map(String::from),
                last_name: last.map(String::from),
                status: Some("active".to_string()),
                birthdate: Some("1990-06-15".to_string()),
                child: Some(false),
                created_at: Some("2024-01-10T09:00:00Z".to_string()),
                updated_at: None,
            },
        }
    }

    #[test]
    fn test_full_name_variants() {
        assert_eq!(full_name(Some("Ada"), Some("Lovelace")), "Ada Lovelace");
        assert_eq!(full_name(Some("Ada"), None), "Ada");
        assert_eq!(full_name(None, Some("Lovelace")), "Lovelace");
        assert_eq!(full_name(None, None), "(no name)");
    }

    #[test]
    fn test_transform_person() {
        let output = transform_person(person_resource("42", Some("Ada"), Some("Lovelace")));

        assert_eq!(output.id, "42");
        assert_eq!(output.name, "Ada Lovelace");
        assert_eq!(output.status, "active");
        assert_eq!(output.birthdate.as_deref(), Some("1990-06-15"));
        assert!(!output.child);
    }

    #[test]
    fn test_transform_person_defaults() {
        let resource = Resource {
            kind: "Person".to_string(),
            id: "7".to_string(),
            attributes: PersonAttributes {
                first_name: None,
                last_name: None,
                status: None,
                birthdate: None,
                child: None,
                created_at: None,
                updated_at: None,
            },
        };

        let output = transform_person(resource);

        assert_eq!(output.name, "(no name)");
        assert_eq!(output.status, "active");
        assert!(!output.child);
    }

    #[test]
    fn test_transform_people_page_keeps_cursor() {
        let page = Page {
            items: vec![
                person_resource("1", Some("Ada"), Some("Lovelace")),
                person_resource("2", Some("Grace"), Some("Hopper")),
            ],
            next: Some("https://api.flockhq.com/people/v2/people?offset=25".to_string()),
            total_count: Some(2),
        };

        let output = transform_people_page(page);

        assert_eq!(output.items.len(), 2);
        assert_eq!(output.items[1].name, "Grace Hopper");
        assert!(output.next.is_some());
        assert_eq!(output.total_count, Some(2));
    }
}
