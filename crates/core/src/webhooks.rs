//! Transformation functions for Webhooks API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Subscription attributes from the Webhooks API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SubscriptionAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
}

/// Output structure for a single webhook subscription
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SubscriptionOutput {
    pub id: String,
    pub name: String,
    pub url: String,
    pub active: bool,
}

/// Transform a Webhooks API resource into the subscription domain model
pub fn transform_subscription(resource: Resource<SubscriptionAttributes>) -> SubscriptionOutput {
    let attrs = resource.attributes;

    SubscriptionOutput {
        id: resource.id,
        name: attrs.name.unwrap_or_else(|| "(unnamed)".to_string()),
        url: attrs.url.unwrap_or_default(),
        active: attrs.active.unwrap_or(false),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_subscription() {
        let resource = Resource {
            kind: "Subscription".to_string(),
            id: "sub-3".to_string(),
            attributes: SubscriptionAttributes {
                name: Some("people.updated".to_string()),
                url: Some("https://example.com/hooks/flock".to_string()),
                active: Some(true),
            },
        };

        let output = transform_subscription(resource);

        assert_eq!(output.name, "people.updated");
        assert_eq!(output.url, "https://example.com/hooks/flock");
        assert!(output.active);
    }
}
