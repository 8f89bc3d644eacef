use ratatui::{prelude::*, widgets::*};

use crate::domain::text::{truncate_text, wrap_text};

/// A single card: bordered box with wrapped, height-limited content
#[derive(Debug, Clone)]
pub struct CardWidget<'a> {
    content: &'a str,
    style: Style,
    max_lines: usize,
}

impl<'a> CardWidget<'a> {
    pub const DEFAULT_MAX_LINES: usize = 3;

    pub fn new(content: &'a str) -> Self {
        Self {
            content,
            style: Style::default(),
            max_lines: Self::DEFAULT_MAX_LINES,
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines.max(1);
        self
    }

    fn body(&self, inner_width: u16) -> String {
        let wrapped = wrap_text(self.content, usize::from(inner_width));
        truncate_text(&wrapped, self.max_lines)
    }

    /// Rows needed at `width`, borders included
    pub fn height(&self, width: u16) -> u16 {
        let lines = self.body(width.saturating_sub(2)).lines().count().max(1);
        u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
    }
}

impl Widget for CardWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let body = self.body(area.width.saturating_sub(2));
        Paragraph::new(body)
            .style(self.style)
            .block(Block::bordered().border_type(BorderType::Rounded))
            .render(area, buf);
    }
}
