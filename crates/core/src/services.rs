//! Transformation functions for Services API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Service type attributes from the Services API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServiceTypeAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub frequency: Option<String>,
}

/// Plan attributes from the Services API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlanAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub series_title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Output structure for a single service type
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ServiceTypeOutput {
    pub id: String,
    pub name: String,
    pub frequency: String,
}

/// Output structure for a single plan
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PlanOutput {
    pub id: String,
    pub title: String,
    pub dates: Option<String>,
    pub series: Option<String>,
}

/// Transform a service type resource into the domain model
pub fn transform_service_type(resource: Resource<ServiceTypeAttributes>) -> ServiceTypeOutput {
    let attrs = resource.attributes;

    ServiceTypeOutput {
        id: resource.id,
        name: attrs.name.unwrap_or_else(|| "(unnamed)".to_string()),
        frequency: attrs.frequency.unwrap_or_else(|| "weekly".to_string()),
    }
}

/// Transform a plan resource into the domain model
///
/// Plans are often untitled; the dates string is the fallback display name
/// the remote UI uses, so it is ours too.
pub fn transform_plan(resource: Resource<PlanAttributes>) -> PlanOutput {
    let attrs = resource.attributes;

    let title = attrs
        .title
        .or_else(|| attrs.dates.clone())
        .unwrap_or_else(|| "(untitled)".to_string());

    PlanOutput {
        id: resource.id,
        title,
        dates: attrs.dates,
        series: attrs.series_title,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_plan_falls_back_to_dates() {
        let resource = Resource {
            kind: "Plan".to_string(),
            id: "p-1".to_string(),
            attributes: PlanAttributes {
                title: None,
                dates: Some("June 2 2024".to_string()),
                series_title: None,
                created_at: None,
            },
        };

        let output = transform_plan(resource);

        assert_eq!(output.title, "June 2 2024");
        assert_eq!(output.dates.as_deref(), Some("June 2 2024"));
    }

    #[test]
    fn test_transform_service_type_defaults() {
        let resource = Resource {
            kind: "ServiceType".to_string(),
            id: "st-1".to_string(),
            attributes: ServiceTypeAttributes {
                name: None,
                frequency: None,
            },
        };

        let output = transform_service_type(resource);

        assert_eq!(output.name, "(unnamed)");
        assert_eq!(output.frequency, "weekly");
    }
}
