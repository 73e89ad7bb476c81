//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod endpoint;
mod logging;
mod output;
mod tui;

pub use endpoint::FileEndpointConfig;
pub use logging::FileLoggingConfig;
pub use output::FileOutputConfig;
pub use tui::FileTuiConfig;

use qachat_domain::ConfigIssue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigValidationError {
    #[error("invalid configuration:\n  {}", .0.join("\n  "))]
    Invalid(Vec<String>),
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Ask endpoint settings
    pub endpoint: FileEndpointConfig,
    /// TUI settings
    pub tui: FileTuiConfig,
    /// One-shot output settings
    pub output: FileOutputConfig,
    /// Conversation log settings
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        issues.extend(self.endpoint.validate());
        issues.extend(self.tui.validate());
        issues
    }

    /// Validate and split the result: any error fails the whole config,
    /// otherwise the remaining warnings are returned for display.
    pub fn check(&self) -> Result<Vec<ConfigIssue>, ConfigValidationError> {
        let (errors, warnings): (Vec<_>, Vec<_>) =
            self.validate().into_iter().partition(ConfigIssue::is_error);
        if errors.is_empty() {
            Ok(warnings)
        } else {
            Err(ConfigValidationError::Invalid(
                errors.into_iter().map(|issue| issue.message).collect(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qachat_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[endpoint]
url = "http://chat.internal:9000/ask"
timeout_seconds = 30

[tui]
title = "Support Bot"
placeholder = "Ask away..."
tick_ms = 100

[output]
format = "json"
color = false

[logging]
conversation_log = "/tmp/qachat.jsonl"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "http://chat.internal:9000/ask");
        assert_eq!(config.endpoint.timeout_seconds, Some(30));
        assert_eq!(config.tui.title, "Support Bot");
        assert_eq!(config.tui.tick_ms, 100);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
        assert!(!config.output.color);
        assert_eq!(
            config.logging.conversation_log.as_deref(),
            Some("/tmp/qachat.jsonl")
        );
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[endpoint]
timeout_seconds = 5
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.endpoint.url, "http://localhost:8000/ask");
        assert_eq!(config.endpoint.timeout_seconds, Some(5));
        assert_eq!(config.tui.title, "AI Q&A Agent");
        assert!(config.output.color);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let mut config = FileConfig::default();
        config.endpoint.url = String::new();
        config.tui.tick_ms = 0;
        assert_eq!(config.validate().len(), 2);
    }

    #[test]
    fn test_check_fails_on_errors() {
        let mut config = FileConfig::default();
        config.endpoint.url = "not a url".to_string();
        let err = config.check().unwrap_err();
        assert!(err.to_string().contains("endpoint.url"));
    }

    #[test]
    fn test_check_passes_warnings_through() {
        let mut config = FileConfig::default();
        config.endpoint.timeout_seconds = Some(0);
        let warnings = config.check().unwrap();
        assert_eq!(warnings.len(), 1);
        assert!(!warnings[0].is_error());
    }
}
