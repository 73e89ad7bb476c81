//! Output formatter trait

use qachat_domain::{AskResponse, OutputFormat};

/// Trait for turning an ask response into printable text
pub trait OutputFormatter {
    /// Role-labelled transcript of the whole history
    fn format(&self, response: &AskResponse) -> String;

    /// The response body as pretty JSON
    fn format_json(&self, response: &AskResponse) -> String;

    /// Dispatch on the configured format
    fn format_as(&self, response: &AskResponse, format: OutputFormat) -> String {
        match format {
            OutputFormat::Plain => self.format(response),
            OutputFormat::Json => self.format_json(response),
        }
    }
}
