//! Transformation functions for Registrations API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Signup attributes from the Registrations API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SignupAttributes {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub archived: Option<bool>,
    #[serde(default)]
    pub open_signup: Option<bool>,
    #[serde(default)]
    pub opens_at: Option<String>,
    #[serde(default)]
    pub closes_at: Option<String>,
}

/// Output structure for a single signup
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SignupOutput {
    pub id: String,
    pub name: String,
    pub open: bool,
    pub archived: bool,
    pub opens_at: Option<String>,
    pub closes_at: Option<String>,
}

/// Transform a Registrations API resource into the signup domain model
pub fn transform_signup(resource: Resource<SignupAttributes>) -> SignupOutput {
    let attrs = resource.attributes;

    SignupOutput {
        id: resource.id,
        name: attrs.name.unwrap_or_else(|| "(unnamed)".to_string()),
        open: attrs.open_signup.unwrap_or(false),
        archived: attrs.archived.unwrap_or(false),
        opens_at: attrs.opens_at,
        closes_at: attrs.closes_at,
    }
}
