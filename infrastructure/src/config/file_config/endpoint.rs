//! Endpoint configuration from TOML (`[endpoint]` section)

use qachat_application::EndpointParams;
use qachat_application::config::DEFAULT_ASK_ENDPOINT;
use qachat_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
///
/// # Example
///
/// ```toml
/// [endpoint]
/// url = "http://localhost:8000/ask"
/// timeout_seconds = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Absolute URL of the ask endpoint
    pub url: String,
    /// Request timeout in seconds (unset: wait indefinitely)
    pub timeout_seconds: Option<u64>,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ASK_ENDPOINT.to_string(),
            timeout_seconds: None,
        }
    }
}

impl FileEndpointConfig {
    /// Convert to application parameters. A zero timeout means "no timeout".
    pub fn to_endpoint_params(&self) -> EndpointParams {
        let timeout = self
            .timeout_seconds
            .filter(|&secs| secs > 0)
            .map(Duration::from_secs);
        EndpointParams::new(self.url.clone()).with_timeout(timeout)
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.url.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "endpoint.url".to_string(),
                },
                "endpoint.url: must not be empty",
            ));
        } else {
            match reqwest::Url::parse(&self.url) {
                Ok(url) if matches!(url.scheme(), "http" | "https") => {}
                _ => issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidUrl {
                        field: "endpoint.url".to_string(),
                        value: self.url.clone(),
                    },
                    format!(
                        "endpoint.url: '{}' is not an absolute http(s) URL",
                        self.url
                    ),
                )),
            }
        }

        if self.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "endpoint.timeout_seconds".to_string(),
                    value: 0,
                },
                "endpoint.timeout_seconds: 0 disables the timeout; omit the key instead",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qachat_domain::Severity;

    #[test]
    fn test_default_has_no_timeout() {
        let params = FileEndpointConfig::default().to_endpoint_params();
        assert_eq!(params.url, "http://localhost:8000/ask");
        assert!(params.timeout.is_none());
    }

    #[test]
    fn test_timeout_converts_to_duration() {
        let config = FileEndpointConfig {
            timeout_seconds: Some(15),
            ..Default::default()
        };
        assert_eq!(
            config.to_endpoint_params().timeout,
            Some(Duration::from_secs(15))
        );
    }

    #[test]
    fn test_zero_timeout_warns_and_disables() {
        let config = FileEndpointConfig {
            timeout_seconds: Some(0),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::Warning);
        assert!(config.to_endpoint_params().timeout.is_none());
    }

    #[test]
    fn test_relative_url_is_error() {
        let config = FileEndpointConfig {
            url: "/ask".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert_eq!(issues.len(), 1);
        assert!(issues[0].is_error());
        assert!(matches!(issues[0].code, ConfigIssueCode::InvalidUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_is_error() {
        let config = FileEndpointConfig {
            url: "ftp://example.com/ask".to_string(),
            ..Default::default()
        };
        assert!(config.validate()[0].is_error());
    }

    #[test]
    fn test_empty_url_is_error() {
        let config = FileEndpointConfig {
            url: "  ".to_string(),
            ..Default::default()
        };
        let issues = config.validate();
        assert!(matches!(issues[0].code, ConfigIssueCode::EmptyValue { .. }));
    }
}
