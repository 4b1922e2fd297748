//! HTTP connection to the Flock API
//!
//! A thin authenticated wrapper over `reqwest`: four verbs, bearer-token
//! headers, JSON:API envelope decoding, and typed errors carrying the
//! remote status, body, and request id. Retry and backoff policy belongs
//! here if it ever exists; the pagination walker stays a pass-through.

use serde::de::DeserializeOwned;

use flocktools_core::envelope::{CollectionDocument, Page, Resource};
use flocktools_core::query::QueryParams;

use crate::error::ApiError;
use crate::prelude::*;

pub mod paginate;

/// Default Flock API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.flockhq.com";

/// Flock configuration resolved from CLI flags and environment variables
#[derive(Debug, Clone)]
pub struct FlockConfig {
    pub base_url: String,
    pub api_token: String,
}

impl FlockConfig {
    /// Resolve configuration, preferring CLI flags over the environment.
    ///
    /// `FLOCK_API_URL` falls back to the hosted default; the token has no
    /// fallback and is required for every command that talks to the API.
    pub fn resolve(api_url: Option<String>, api_token: Option<String>) -> Result<Self> {
        let base_url = api_url
            .or_else(|| std::env::var("FLOCK_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let api_token = api_token
            .or_else(|| std::env::var("FLOCK_API_TOKEN").ok())
            .ok_or_else(|| {
                eyre!("No API token: set FLOCK_API_TOKEN or pass --api-token")
            })?;

        Ok(Self {
            base_url,
            api_token,
        })
    }
}

/// Thin authenticated connection to the Flock API
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client with bearer-token auth headers
    pub fn new(config: &FlockConfig) -> Result<Self, ApiError> {
        use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| ApiError::InvalidArgument(format!("invalid API token: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| ApiError::Network(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Join a relative path onto the base URL; absolute next links pass through
    fn url(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}/{}", self.base_url, path.trim_start_matches('/'))
        }
    }

    /// Map a non-success response into `ApiError::Api`
    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let request_id = response
            .headers()
            .get("x-request-id")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response.text().await.unwrap_or_default();

        Err(ApiError::Api {
            status: status.as_u16(),
            request_id,
            body,
        })
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// GET that maps a remote 404 to `None`.
    ///
    /// This is the uniform not-found policy for single resources; every
    /// other failure stays a typed error.
    pub async fn get_optional<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<Option<T>, ApiError> {
        match self.get(path, query).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.is_not_found() => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .post(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn patch<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, ApiError> {
        let response = self
            .http
            .patch(self.url(path))
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let response = Self::check(response).await?;

        response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        Self::check(response).await?;
        Ok(())
    }

    /// Fetch one page of a collection endpoint
    pub async fn fetch_page<A: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(String, String)],
    ) -> Result<Page<Resource<A>>, ApiError> {
        let document: CollectionDocument<A> = self.get(url, query).await?;
        Ok(document.into_page())
    }
}

/// Build a start URL for a list endpoint with its query string attached.
///
/// Next links from the API arrive with their query already embedded, so
/// the walker deals only in full URLs; this puts the first request in the
/// same shape.
pub fn list_url(path: &str, params: &QueryParams) -> String {
    let query = params.to_query();
    if query.is_empty() {
        return path.to_string();
    }

    let encoded: Vec<String> = query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect();

    format!("{}?{}", path, encoded.join("&"))
}
