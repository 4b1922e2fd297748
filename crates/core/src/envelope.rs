//! JSON:API envelope types shared by every Flock module
//!
//! The Flock API wraps every response in the conventional JSON:API
//! `{data, meta, links}` envelope. These types model the parts the client
//! consumes; attributes stay generic so each domain module plugs in its
//! own attribute struct.

use serde::{Deserialize, Serialize};

/// A single JSON:API resource object
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Resource<A> {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: String,
    pub attributes: A,
}

/// Top-level links on a collection document
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Links {
    #[serde(rename = "self", default)]
    pub self_link: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

/// Count metadata reported alongside collections
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Meta {
    #[serde(default)]
    pub total_count: Option<u64>,
    #[serde(default)]
    pub count: Option<u64>,
}

/// A collection document from the API
#[derive(Debug, Deserialize, Clone)]
pub struct CollectionDocument<A> {
    pub data: Vec<Resource<A>>,
    #[serde(default)]
    pub links: Links,
    #[serde(default)]
    pub meta: Meta,
}

/// A single-resource document from the API
#[derive(Debug, Deserialize, Clone)]
pub struct SingleDocument<A> {
    pub data: Resource<A>,
}

/// One bounded batch of items plus the cursor to the following batch.
///
/// `next == None` marks the terminal page.
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next: Option<String>,
    pub total_count: Option<u64>,
}

impl<A> CollectionDocument<A> {
    /// Flatten the envelope into a page of resources
    pub fn into_page(self) -> Page<Resource<A>> {
        Page {
            items: self.data,
            next: self.links.next,
            total_count: self.meta.total_count,
        }
    }
}

impl<T> Page<T> {
    /// Map the page items while keeping cursor and count metadata
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            next: self.next,
            total_count: self.total_count,
        }
    }
}

/// Build a JSON:API write envelope for create and update requests
pub fn write_document(kind: &str, attributes: serde_json::Value) -> serde_json::Value {
    serde_json::json!({
        "data": {
            "type": kind,
            "attributes": attributes,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, Clone, PartialEq)]
    struct NameAttributes {
        name: String,
    }

    #[test]
    fn test_collection_document_into_page() {
        let body = r#"{
            "data": [
                {"type": "Person", "id": "1", "attributes": {"name": "Ada"}},
                {"type": "Person", "id": "2", "attributes": {"name": "Grace"}}
            ],
            "links": {
                "self": "https://api.flockhq.com/people/v2/people",
                "next": "https://api.flockhq.com/people/v2/people?offset=25"
            },
            "meta": {"total_count": 120, "count": 2}
        }"#;

        let document: CollectionDocument<NameAttributes> = serde_json::from_str(body).unwrap();
        let page = document.into_page();

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].id, "1");
        assert_eq!(page.items[1].attributes.name, "Grace");
        assert_eq!(
            page.next.as_deref(),
            Some("https://api.flockhq.com/people/v2/people?offset=25")
        );
        assert_eq!(page.total_count, Some(120));
    }

    #[test]
    fn test_collection_document_terminal_page() {
        let body = r#"{
            "data": [],
            "links": {"self": "https://api.flockhq.com/people/v2/people"},
            "meta": {"total_count": 0, "count": 0}
        }"#;

        let document: CollectionDocument<NameAttributes> = serde_json::from_str(body).unwrap();
        let page = document.into_page();

        assert!(page.items.is_empty());
        assert!(page.next.is_none());
    }

    #[test]
    fn test_collection_document_missing_links_and_meta() {
        let body = r#"{"data": []}"#;

        let document: CollectionDocument<NameAttributes> = serde_json::from_str(body).unwrap();
        let page = document.into_page();

        assert!(page.next.is_none());
        assert!(page.total_count.is_none());
    }

    #[test]
    fn test_single_document() {
        let body = r#"{"data": {"type": "Person", "id": "42", "attributes": {"name": "Ada"}}}"#;

        let document: SingleDocument<NameAttributes> = serde_json::from_str(body).unwrap();

        assert_eq!(document.data.kind, "Person");
        assert_eq!(document.data.id, "42");
    }

    #[test]
    fn test_page_map_keeps_cursor() {
        let page = Page {
            items: vec![1, 2, 3],
            next: Some("/x?offset=3".to_string()),
            total_count: Some(9),
        };

        let mapped = page.map(|n| n * 10);

        assert_eq!(mapped.items, vec![10, 20, 30]);
        assert_eq!(mapped.next.as_deref(), Some("/x?offset=3"));
        assert_eq!(mapped.total_count, Some(9));
    }

    #[test]
    fn test_write_document_shape() {
        let body = write_document(
            "Person",
            serde_json::json!({"first_name": "Ada", "last_name": "Lovelace"}),
        );

        assert_eq!(body["data"]["type"], "Person");
        assert_eq!(body["data"]["attributes"]["first_name"], "Ada");
    }
}
