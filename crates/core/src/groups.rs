//! Transformation functions for Groups API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;
use crate::people::full_name;

/// Group attributes from the Groups API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GroupAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub memberships_count: Option<u64>,
    #[serde(default)]
    pub location_type_preference: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Membership attributes from the Groups API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct MembershipAttributes {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub joined_at: Option<String>,
}

/// Output structure for a single group
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct GroupOutput {
    pub id: String,
    pub name: String,
    pub members: u64,
    pub location: String,
    pub created_at: Option<String>,
}

/// Output structure for a single group membership
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MembershipOutput {
    pub id: String,
    pub name: String,
    pub role: String,
    pub joined_at: Option<String>,
}

/// Transform a Groups API resource into the group domain model
pub fn transform_group(resource: Resource<GroupAttributes>) -> GroupOutput {
    let attrs = resource.attributes;

    GroupOutput {
        id: resource.id,
        name: attrs.name.unwrap_or_else(|| "(unnamed)".to_string()),
        members: attrs.memberships_count.unwrap_or(0),
        location: attrs
            .location_type_preference
            .unwrap_or_else(|| "physical".to_string()),
        created_at: attrs.created_at,
    }
}

/// Transform a membership resource into the membership domain model
pub fn transform_membership(resource: Resource<MembershipAttributes>) -> MembershipOutput {
    let attrs = resource.attributes;

    MembershipOutput {
        id: resource.id,
        name: full_name(attrs.first_name.as_deref(), attrs.last_name.as_deref()),
        role: attrs.role.unwrap_or_else(|| "member".to_string()),
        joined_at: attrs.joined_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_group() {
        let resource = Resource {
            kind: "Group".to_string(),
            id: "77".to_string(),
            attributes: GroupAttributes {
                name: Some("Young Adults".to_string()),
                memberships_count: Some(14),
                location_type_preference: Some("virtual".to_string()),
                created_at: Some("2023-09-01T08:00:00Z".to_string()),
            },
        };

        let output = transform_group(resource);

        assert_eq!(output.name, "Young Adults");
        assert_eq!(output.members, 14);
        assert_eq!(output.location, "virtual");
    }

    #[test]
    fn test_transform_membership_default_role() {
        let resource = Resource {
            kind: "Membership".to_string(),
            id: "m-12".to_string(),
            attributes: MembershipAttributes {
                first_name: Some("Ada".to_string()),
                last_name: Some("Lovelace".to_string()),
                role: None,
                joined_at: None,
            },
        };

        let output = transform_membership(resource);

        assert_eq!(output.name, "Ada Lovelace");
        assert_eq!(output.role, "member");
    }
}
