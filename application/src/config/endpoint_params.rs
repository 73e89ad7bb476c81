//! Endpoint parameters: how the gateway reaches the ask service.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default ask endpoint of a locally running server.
pub const DEFAULT_ASK_ENDPOINT: &str = "http://localhost:8000/ask";

/// Connection parameters for the ask endpoint.
///
/// `timeout` is `None` by default: a slow server is waited on indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointParams {
    /// Absolute URL the query is POSTed to.
    pub url: String,
    /// Per-request timeout, if any.
    pub timeout: Option<Duration>,
}

impl Default for EndpointParams {
    fn default() -> Self {
        Self {
            url: DEFAULT_ASK_ENDPOINT.to_string(),
            timeout: None,
        }
    }
}

impl EndpointParams {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_server() {
        let params = EndpointParams::default();
        assert_eq!(params.url, "http://localhost:8000/ask");
        assert!(params.timeout.is_none());
    }

    #[test]
    fn test_builder() {
        let params = EndpointParams::new("http://example.test/ask")
            .with_timeout(Some(Duration::from_secs(30)));
        assert_eq!(params.url, "http://example.test/ask");
        assert_eq!(params.timeout, Some(Duration::from_secs(30)));
    }
}
