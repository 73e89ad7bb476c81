//! History widget: the conversation as returned by the server

use crate::tui::style::RoleStyle;
use qachat_domain::Message;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

pub struct HistoryWidget<'a> {
    messages: &'a [Message],
    scroll_offset: usize,
}

impl<'a> HistoryWidget<'a> {
    pub fn new(messages: &'a [Message], scroll_offset: usize) -> Self {
        Self {
            messages,
            scroll_offset,
        }
    }

    fn format_messages(&self) -> Text<'a> {
        let mut lines: Vec<Line> = Vec::new();

        for msg in self.messages {
            let style = RoleStyle::for_role(&msg.role);

            lines.push(
                Line::from(Span::styled(style.label.clone(), style.label_style()))
                    .alignment(style.alignment),
            );

            for content_line in msg.content.lines() {
                lines.push(
                    Line::from(Span::styled(content_line, style.content_style()))
                        .alignment(style.alignment),
                );
            }
            lines.push(Line::from(""));
        }

        Text::from(lines)
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.format_messages()).wrap(Wrap { trim: false })
    }

    /// Largest useful scroll offset for `messages` drawn into `area`.
    pub fn max_scroll(messages: &[Message], area: Rect) -> usize {
        let visible_height = usize::from(area.height.saturating_sub(2)); // borders
        let content_width = area.width.saturating_sub(2); // borders
        HistoryWidget::new(messages, 0)
            .paragraph()
            .line_count(content_width)
            .saturating_sub(visible_height)
    }
}

impl<'a> Widget for HistoryWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let max_scroll = Self::max_scroll(self.messages, area);

        // scroll_offset=0 means "show bottom"
        let top = max_scroll - self.scroll_offset.min(max_scroll);
        let scroll = u16::try_from(top).unwrap_or(u16::MAX);

        // Built without block so line_count returns pure content lines.
        let paragraph = self.paragraph();

        let block = Block::default()
            .borders(Borders::ALL)
            .title(" Conversation ")
            .style(Style::default().fg(Color::White));

        paragraph.block(block).scroll((scroll, 0)).render(area, buf);
    }
}
