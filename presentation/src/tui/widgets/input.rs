//! Input widget: single-line query input with placeholder and send hint

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

const PROMPT: &str = "> ";

pub struct InputWidget<'a> {
    text: &'a str,
    cursor_pos: usize,
    placeholder: &'a str,
    /// Dimmed while an alert is blocking input
    active: bool,
}

impl<'a> InputWidget<'a> {
    pub fn new(text: &'a str, cursor_pos: usize, placeholder: &'a str) -> Self {
        Self {
            text,
            cursor_pos,
            placeholder,
            active: true,
        }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Cursor byte offset snapped back onto a char boundary
    fn cursor(&self) -> usize {
        let mut pos = self.cursor_pos.min(self.text.len());
        while pos > 0 && !self.text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn build_line(&self) -> Line<'a> {
        let color = if self.active {
            Color::Green
        } else {
            Color::DarkGray
        };
        let cursor_style = Style::default().fg(Color::Black).bg(color);

        let mut spans = vec![Span::styled(
            PROMPT,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )];

        if self.text.is_empty() {
            if self.active {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(
                self.placeholder,
                Style::default().fg(Color::DarkGray),
            ));
            return Line::from(spans);
        }

        if !self.active {
            spans.push(Span::styled(self.text, Style::default().fg(color)));
            return Line::from(spans);
        }

        let (before, after) = self.text.split_at(self.cursor());
        spans.push(Span::raw(before));

        match after.chars().next() {
            None => spans.push(Span::styled(" ", cursor_style)),
            Some(ch) => {
                let ch_len = ch.len_utf8();
                spans.push(Span::styled(&after[..ch_len], cursor_style));
                spans.push(Span::raw(&after[ch_len..]));
            }
        }

        Line::from(spans)
    }
}

impl<'a> Widget for InputWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.active {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Input ")
            .title(Line::from(" [Send] Enter ").alignment(Alignment::Right))
            .style(border_style);

        // Keep the cursor visible when the text is wider than the box
        let inner_width = area.width.saturating_sub(2) as usize;
        let used = PROMPT.len() + self.text[..self.cursor()].chars().count() + 1;
        let scroll_x = used.saturating_sub(inner_width) as u16;

        Paragraph::new(self.build_line())
            .block(block)
            .scroll((0, scroll_x))
            .render(area, buf);
    }
}
