//! Role-based message styling
//!
//! Each history entry is drawn according to its `role`: label, colour and
//! side of the pane. Unknown roles keep their raw name and a neutral colour.

use crate::output::console::role_display_name;
use qachat_domain::Role;
use ratatui::layout::Alignment;
use ratatui::style::{Color, Modifier, Style};

/// Visual treatment of one role
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleStyle {
    pub label: String,
    pub color: Color,
    pub alignment: Alignment,
}

impl RoleStyle {
    pub fn for_role(role: &Role) -> Self {
        let (color, alignment) = match role {
            Role::User => (Color::Cyan, Alignment::Right),
            Role::Assistant => (Color::Green, Alignment::Left),
            Role::System => (Color::Yellow, Alignment::Left),
            Role::Other(_) => (Color::Gray, Alignment::Left),
        };
        Self {
            label: role_display_name(role).to_string(),
            color,
            alignment,
        }
    }

    pub fn label_style(&self) -> Style {
        Style::default().fg(self.color).add_modifier(Modifier::BOLD)
    }

    pub fn content_style(&self) -> Style {
        Style::default().fg(self.color)
    }
}
