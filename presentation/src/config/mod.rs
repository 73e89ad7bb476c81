//! Presentation configuration
//!
//! Plain settings the binary builds from the merged file config and CLI
//! flags. The presentation layer never reads config files itself.

use qachat_domain::OutputFormat;
use std::time::Duration;

/// Settings for the interactive chat view
#[derive(Debug, Clone)]
pub struct ChatViewConfig {
    /// Static title shown in the header
    pub title: String,
    /// Hint shown in the empty input line
    pub placeholder: String,
    /// Redraw interval
    pub tick: Duration,
}

impl Default for ChatViewConfig {
    fn default() -> Self {
        Self {
            title: "AI Q&A Agent".to_string(),
            placeholder: "Type your question...".to_string(),
            tick: Duration::from_millis(250),
        }
    }
}

/// Settings for one-shot output
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Plain,
            color: true,
        }
    }
}
