//! Transformation functions for Calendar API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Event attributes from the Calendar API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EventAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    #[serde(default)]
    pub visible_in_church_center: Option<bool>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Output structure for a single event
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EventOutput {
    pub id: String,
    pub name: String,
    pub approval_status: String,
    pub visible: bool,
    pub created_at: Option<String>,
}

/// Transform a Calendar API resource into the event domain model
pub fn transform_event(resource: Resource<EventAttributes>) -> EventOutput {
    let attrs = resource.attributes;

    EventOutput {
        id: resource.id,
        name: attrs.name.unwrap_or_else(|| "(untitled)".to_string()),
        approval_status: attrs.approval_status.unwrap_or_else(|| "pending".to_string()),
        visible: attrs.visible_in_church_center.unwrap_or(false),
        created_at: attrs.created_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_event() {
        let resource = Resource {
            kind: "Event".to_string(),
            id: "301".to_string(),
            attributes: EventAttributes {
                name: Some("Easter Service".to_string()),
                approval_status: Some("approved".to_string()),
                visible_in_church_center: Some(true),
                created_at: Some("2024-02-01T12:00:00Z".to_string()),
                updated_at: None,
            },
        };

        let output = transform_event(resource);

        assert_eq!(output.id, "301");
        assert_eq!(output.name, "Easter Service");
        assert_eq!(output.approval_status, "approved");
        assert!(output.visible);
    }

    #[test]
    fn test_transform_event_defaults() {
        let resource = Resource {
            kind: "Event".to_string(),
            id: "302".to_string(),
            attributes: EventAttributes {
                name: None,
                approval_status: None,
                visible_in_church_center: None,
                created_at: None,
                updated_at: None,
            },
        };

        let output = transform_event(resource);

        assert_eq!(output.name, "(untitled)");
        assert_eq!(output.approval_status, "pending");
        assert!(!output.visible);
    }
}
