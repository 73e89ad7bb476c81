//! Console output formatter for ask responses

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use qachat_domain::{AskResponse, Message, Role};

/// Formats ask responses for console display
pub struct ConsoleFormatter {
    color: bool,
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self { color: true }
    }
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format the full history, one labelled block per message
    pub fn format_history(&self, history: &[Message]) -> String {
        history
            .iter()
            .map(|msg| {
                format!(
                    "{}\n{}\n",
                    self.role_label(&msg.role),
                    Self::indent(&msg.content, "  ")
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn role_label(&self, role: &Role) -> String {
        let label = format!("{}:", role_display_name(role));
        if !self.color {
            return label;
        }
        match role {
            Role::User => label.cyan().bold().to_string(),
            Role::Assistant => label.green().bold().to_string(),
            Role::System => label.yellow().bold().to_string(),
            Role::Other(_) => label.dimmed().bold().to_string(),
        }
    }

    fn session_line(&self, response: &AskResponse) -> String {
        let line = format!("session: {}", response.session_id);
        if self.color {
            line.dimmed().to_string()
        } else {
            line
        }
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Human label for a role, shared with the TUI
pub fn role_display_name(role: &Role) -> &str {
    match role {
        Role::User => "You",
        Role::Assistant => "Assistant",
        Role::System => "System",
        Role::Other(raw) => raw,
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, response: &AskResponse) -> String {
        let mut output = self.format_history(&response.history);
        output.push('\n');
        output.push_str(&self.session_line(response));
        output.push('\n');
        output
    }

    fn format_json(&self, response: &AskResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qachat_domain::OutputFormat;

    fn sample() -> AskResponse {
        AskResponse::new(
            "s1",
            vec![
                Message::user("What is Rust?"),
                Message::assistant("A systems language.\nWith ownership."),
            ],
        )
    }

    #[test]
    fn test_plain_without_color() {
        let out = ConsoleFormatter::new(false).format(&sample());
        assert_eq!(
            out,
            "You:\n  What is Rust?\n\nAssistant:\n  A systems language.\n  With ownership.\n\nsession: s1\n"
        );
    }

    #[test]
    fn test_unknown_role_uses_raw_label() {
        let history = vec![Message::new("moderator", "hold on")];
        let out = ConsoleFormatter::new(false).format_history(&history);
        assert!(out.starts_with("moderator:"));
    }

    #[test]
    fn test_json_round_trips() {
        let response = sample().with_response("A systems language.");
        let out = ConsoleFormatter::new(false).format_as(&response, OutputFormat::Json);
        let parsed: AskResponse = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed, response);
    }

    #[test]
    fn test_empty_history() {
        let out = ConsoleFormatter::new(false).format_history(&[]);
        assert!(out.is_empty());
    }
}
