/// Errors raised by the Flock API connection and the pagination walker.
///
/// The walker itself never retries and never wraps: whatever the
/// connection layer raises is what callers see, at whatever point in the
/// walk it occurred.
#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    /// The caller handed the connection or walker an unusable input
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The remote call completed with a non-success status
    #[error("Flock API error [{status}] (request {}): {body}", .request_id.as_deref().unwrap_or("unknown"))]
    Api {
        status: u16,
        request_id: Option<String>,
        body: String,
    },

    /// The request never completed
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape
    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether this error is a remote 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Api { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_includes_request_id() {
        let err = ApiError::Api {
            status: 422,
            request_id: Some("req-abc123".to_string()),
            body: "Validation failed".to_string(),
        };

        let message = err.to_string();

        assert!(message.contains("422"));
        assert!(message.contains("req-abc123"));
        assert!(message.contains("Validation failed"));
    }

    #[test]
    fn test_api_error_display_without_request_id() {
        let err = ApiError::Api {
            status: 500,
            request_id: None,
            body: "boom".to_string(),
        };

        assert!(err.to_string().contains("unknown"));
    }

    #[test]
    fn test_is_not_found() {
        let not_found = ApiError::Api {
            status: 404,
            request_id: None,
            body: String::new(),
        };
        let forbidden = ApiError::Api {
            status: 403,
            request_id: None,
            body: String::new(),
        };

        assert!(not_found.is_not_found());
        assert!(!forbidden.is_not_found());
        assert!(!ApiError::Network("reset".to_string()).is_not_found());
    }
}
