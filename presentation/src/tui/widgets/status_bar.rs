//! Status bar widget: session and pending requests

use crate::tui::state::TuiState;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Characters of the session id shown before eliding
const SESSION_PREVIEW: usize = 8;

pub struct StatusBarWidget<'a> {
    state: &'a TuiState,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(state: &'a TuiState) -> Self {
        Self { state }
    }

    fn session_text(&self) -> String {
        match self.state.chat.session_id() {
            Some(id) => {
                let short: String = id.as_str().chars().take(SESSION_PREVIEW).collect();
                if id.as_str().chars().count() > SESSION_PREVIEW {
                    format!("session {}…", short)
                } else {
                    format!("session {}", short)
                }
            }
            None => "new session".to_string(),
        }
    }

    fn hint_text(&self) -> String {
        if self.state.alert.is_some() {
            "Enter/Esc:dismiss  Ctrl+C:quit".to_string()
        } else if self.state.pending_requests > 0 {
            format!("waiting for {} response(s)…", self.state.pending_requests)
        } else {
            "Enter:send  ↑/↓:scroll  Esc:quit".to_string()
        }
    }
}

impl<'a> Widget for StatusBarWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 {
            return;
        }

        let bg_style = Style::default().bg(Color::DarkGray).fg(Color::White);
        for x in area.left()..area.right() {
            buf[(x, area.y)].set_style(bg_style).set_char(' ');
        }

        let session_text = format!(" {} ", self.session_text());
        let session_span = Span::styled(
            session_text.clone(),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        );
        let session_width = session_text.chars().count() as u16;
        buf.set_line(area.x, area.y, &Line::from(session_span), session_width);

        let hint = self.hint_text();
        let hint_width = hint.chars().count() as u16;
        let hint_x = area.right().saturating_sub(hint_width + 1);
        if hint_x > area.x + session_width {
            let hint_line = Line::from(Span::styled(
                hint,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ));
            buf.set_line(hint_x, area.y, &hint_line, hint_width + 1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qachat_domain::ChatState;

    fn render(state: &TuiState) -> String {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        StatusBarWidget::new(state).render(area, &mut buf);
        (0..area.width)
            .map(|x| buf[(x, 0)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_new_session_label() {
        let state = TuiState::new(ChatState::new());
        assert!(render(&state).contains("new session"));
    }

    #[test]
    fn test_long_session_is_elided() {
        let state = TuiState::new(ChatState::with_session("0123456789abcdef"));
        let line = render(&state);
        assert!(line.contains("session 01234567…"));
        assert!(!line.contains("89abcdef"));
    }

    #[test]
    fn test_zero_height_area_draws_nothing() {
        let state = TuiState::new(ChatState::with_session("s1"));
        let mut buf = Buffer::empty(Rect::new(0, 0, 80, 5));
        let before = buf.clone();
        // Sits just below the buffer, as MainLayout yields on short terminals
        StatusBarWidget::new(&state).render(Rect::new(0, 5, 80, 0), &mut buf);
        assert_eq!(buf, before);
    }

    #[test]
    fn test_pending_hint() {
        let mut state = TuiState::new(ChatState::new());
        state.pending_requests = 2;
        assert!(render(&state).contains("waiting for 2 response(s)"));
    }
}
