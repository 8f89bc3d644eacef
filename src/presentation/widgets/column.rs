use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::ui::TextAreaState, infrastructure::tui::textarea_engine::TuiTextAreaEngine,
    presentation::widgets::card::CardWidget,
};

/// One card as the column should draw it
#[derive(Debug, Clone)]
pub struct CardView<'a> {
    pub content: &'a str,
    pub style: Style,
}

/// Input box at the bottom of a column
#[derive(Debug, Clone)]
pub struct InputView<'a> {
    pub draft: Option<&'a TextAreaState>,
    pub active: bool,
    pub hint: String,
    pub style: Style,
}

/// A column: titled border, a vertically scrolled stack of cards and an input box
#[derive(Debug, Clone)]
pub struct ColumnWidget<'a> {
    pub title: &'a str,
    pub cards: Vec<CardView<'a>>,
    /// Card kept in view when the column is taller than its area
    pub selected: Option<usize>,
    pub border_style: Style,
    pub title_style: Style,
    pub input: InputView<'a>,
}

const INPUT_HEIGHT: u16 = 3;

impl ColumnWidget<'_> {
    fn render_cards(&self, area: Rect, buf: &mut Buffer) {
        let heights: Vec<u16> = self
            .cards
            .iter()
            .map(|card| CardWidget::new(card.content).height(area.width))
            .collect();
        let offset = scroll_offset(&heights, self.selected, area.height);

        let mut y = area.y;
        for (card, height) in self.cards.iter().zip(&heights).skip(offset) {
            let remaining = area.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let card_area = Rect::new(area.x, y, area.width, (*height).min(remaining));
            CardWidget::new(card.content)
                .style(card.style)
                .render(card_area, buf);
            y = y.saturating_add(*height);
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .border_style(self.input.style)
            .title(if self.input.active { " New card " } else { "" });

        if self.input.active {
            let mut textarea = self
                .input
                .draft
                .map(TuiTextAreaEngine::hydrate)
                .unwrap_or_default();
            textarea.set_block(block);
            textarea.set_cursor_line_style(Style::default());
            textarea.set_style(self.input.style);
            Widget::render(&textarea, area, buf);
            return;
        }

        let text = match self.input.draft {
            Some(draft) if !draft.is_empty() => Line::from(draft.content.as_str()),
            _ => Line::from(self.input.hint.as_str()).italic(),
        };
        Paragraph::new(text)
            .style(self.input.style)
            .block(block)
            .render(area, buf);
    }
}

impl Widget for ColumnWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = Line::from(vec![
            Span::styled(format!(" {} ", self.title), self.title_style),
            Span::raw(format!("({}) ", self.cards.len())),
        ]);
        let block = Block::bordered()
            .border_style(self.border_style)
            .title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let [cards_area, input_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(INPUT_HEIGHT)]).areas(inner);
        self.render_cards(cards_area, buf);
        self.render_input(input_area, buf);
    }
}

/// First card to draw so that `selected` ends inside `available` rows
pub fn scroll_offset(heights: &[u16], selected: Option<usize>, available: u16) -> usize {
    let Some(selected) = selected.filter(|i| *i < heights.len()) else {
        return 0;
    };
    let mut used: u16 = 0;
    let mut offset = selected + 1;
    while offset > 0 {
        let next = used.saturating_add(heights[offset - 1]);
        if next > available && offset <= selected {
            break;
        }
        used = next;
        offset -= 1;
    }
    offset
}
