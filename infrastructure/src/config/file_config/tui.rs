//! TUI configuration from TOML (`[tui]` section)

use qachat_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Raw TUI configuration from TOML
///
/// # Example
///
/// ```toml
/// [tui]
/// title = "AI Q&A Agent"
/// placeholder = "Type your question..."
/// tick_ms = 250
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTuiConfig {
    /// Static title shown in the header
    pub title: String,
    /// Hint shown in the empty input line
    pub placeholder: String,
    /// Redraw interval in milliseconds
    pub tick_ms: u64,
}

impl Default for FileTuiConfig {
    fn default() -> Self {
        Self {
            title: "AI Q&A Agent".to_string(),
            placeholder: "Type your question...".to_string(),
            tick_ms: 250,
        }
    }
}

impl FileTuiConfig {
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.tick_ms == 0 {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::OutOfRange {
                    field: "tui.tick_ms".to_string(),
                    value: 0,
                },
                "tui.tick_ms: must be at least 1, falling back to 250",
            ));
        }
        issues
    }

    /// Tick interval with the zero case replaced by the default.
    pub fn effective_tick_ms(&self) -> u64 {
        if self.tick_ms == 0 {
            Self::default().tick_ms
        } else {
            self.tick_ms
        }
    }
}
