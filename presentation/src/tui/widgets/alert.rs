//! Alert widget: blocking error notice drawn over the chat view

use super::MainLayout;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct AlertWidget<'a> {
    message: &'a str,
}

impl<'a> AlertWidget<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Area the alert occupies within the full frame
    pub fn area(frame: Rect) -> Rect {
        MainLayout::centered_overlay(60, 30, frame)
    }
}

impl<'a> Widget for AlertWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.message,
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "[Enter] OK",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Error ")
            .border_style(Style::default().fg(Color::Red));

        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(area, buf);
    }
}
