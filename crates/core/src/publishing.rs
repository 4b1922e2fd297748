//! Transformation functions for Publishing API responses

use serde::{Deserialize, Serialize};

use crate::envelope::Resource;

/// Episode attributes from the Publishing API
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EpisodeAttributes {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub published_to_library_at: Option<String>,
    #[serde(default)]
    pub library_video_url: Option<String>,
}

/// Output structure for a single episode
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct EpisodeOutput {
    pub id: String,
    pub title: String,
    pub published_at: Option<String>,
    pub video_url: Option<String>,
    pub published: bool,
}

/// Transform a Publishing API resource into the episode domain model
pub fn transform_episode(resource: Resource<EpisodeAttributes>) -> EpisodeOutput {
    let attrs = resource.attributes;

    EpisodeOutput {
        id: resource.id,
        title: attrs.title.unwrap_or_else(|| "(untitled)".to_string()),
        published: attrs.published_to_library_at.is_some(),
        published_at: attrs.published_to_library_at,
        video_url: attrs.library_video_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transform_episode() {
        let resource = Resource {
            kind: "Episode".to_string(),
            id: "e-9".to_string(),
            attributes: EpisodeAttributes {
                title: Some("Week 3: Grace".to_string()),
                published_to_library_at: Some("2024-05-12T10:00:00Z".to_string()),
                library_video_url: Some("https://media.flockhq.com/e-9.mp4".to_string()),
            },
        };

        let output = transform_episode(resource);

        assert_eq!(output.title, "Week 3: Grace");
        assert!(output.published);
        assert!(output.video_url.is_some());
    }
}
