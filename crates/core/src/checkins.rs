//! Transformation functions for CheckIns API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;
use crate::people::full_name;

/// Check-in attributes from the CheckIns API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CheckInAttributes {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub checked_out_at: Option<String>,
}

/// Output structure for a single check-in
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct CheckInOutput {
    pub id: String,
    pub name: String,
    pub kind: String,
    pub created_at: Option<String>,
    pub checked_out_at: Option<String>,
    pub checked_out: bool,
}

/// Transform a CheckIns API resource into the check-in domain model
pub fn transform_check_in(resource: Resource<CheckInAttributes>) -> CheckInOutput {
    let attrs = resource.attributes;

    CheckInOutput {
        id: resource.id,
        name: full_name(attrs.first_name.as_deref(), attrs.last_name.as_deref()),
        kind: attrs.kind.unwrap_or_else(|| "Regular".to_string()),
        checked_out: attrs.checked_out_at.is_some(),
        created_at: attrs.created_at,
        checked_out_at: attrs.checked_out_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_check_in() {
        let resource = Resource {
            kind: "CheckIn".to_string(),
            id: "9001".to_string(),
            attributes: CheckInAttributes {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                kind: Some("Guest".to_string()),
                created_at: Some("2024-03-03T09:30:00Z".to_string()),
                checked_out_at: Some("2024-03-03T11:00:00Z".to_string()),
            },
        };

        let output = transform_check_in(resource);

        assert_eq!(output.name, "Ada Lovelace");
        assert_eq!(output.kind, "Guest");
        assert!(output.checked_out);
    }

    #[test]
    fn test_transform_check_in_still_present() {
        let resource = Resource {
            kind: "CheckIn".to_string(),
            id: "9002".to_string(),
            attributes: CheckInAttributes {
                first_name: Some("Grace".to_string()),
                last_name: None,
                kind: None,
                created_at: Some("2024-03-03T09:45:00Z".to_string()),
                checked_out_at: None,
            },
        };

        let output = transform_check_in(resource);

        assert_eq!(output.kind, "Regular");
        assert!(!output.checked_out);
        assert!(output.checked_out_at.is_none());
    }
}
