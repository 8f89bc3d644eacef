//! Board component
//!
//! Draws every column side by side. While a card is held the board shown is
//! the preview of dropping it at the current hover slot.

use std::borrow::Cow;

use ratatui::prelude::*;

use crate::{
    core::state::{ui::UiMode, AppState},
    domain::board::{Board, CardId, Column},
    presentation::{
        config::keybindings::Action,
        widgets::column::{CardView, ColumnWidget, InputView},
    },
};

#[derive(Debug, Clone, Default)]
pub struct BoardComponent;

impl BoardComponent {
    pub fn new() -> Self {
        Self
    }

    /// Board as it should appear right now
    pub fn displayed_board(state: &AppState) -> Cow<'_, Board> {
        let board = state.board.get();
        match &state.ui.drag {
            Some(session) => Cow::Owned(session.preview(board)),
            None => Cow::Borrowed(board),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let board = Self::displayed_board(state);
        let columns: Vec<&Column> = board.columns_in_order().collect();
        if columns.is_empty() {
            return;
        }

        let count = u32::try_from(columns.len()).unwrap_or(u32::MAX);
        let areas = Layout::horizontal(vec![Constraint::Ratio(1, count); columns.len()]).split(area);
        for (index, (column, column_area)) in columns.iter().zip(areas.iter()).enumerate() {
            let widget = self.column_widget(state, &board, column, index);
            frame.render_widget(widget, *column_area);
        }
    }

    fn column_widget<'a>(
        &self,
        state: &'a AppState,
        board: &'a Board,
        column: &'a Column,
        index: usize,
    ) -> ColumnWidget<'a> {
        let styles = &state.config.config.styles;
        let ui = &state.ui;
        let dragged: Option<&CardId> = ui.drag.as_ref().map(|session| session.card_id());
        let is_drop_target = ui
            .drag
            .as_ref()
            .is_some_and(|session| session.hover().droppable_id == column.id);
        let is_focused = ui.mode() != UiMode::Dragging && ui.focus.column == index;

        let cards = column
            .card_ids
            .iter()
            .enumerate()
            .filter_map(|(position, id)| {
                let card = board.card(id)?;
                let style = if Some(id) == dragged {
                    styles.style("card_dragging")
                } else if is_focused && ui.is_normal() && ui.focus.card == Some(position) {
                    styles.style("card_focused")
                } else {
                    styles.style("card")
                };
                Some(CardView {
                    content: card.content.as_str(),
                    style,
                })
            })
            .collect();

        let selected = match dragged {
            Some(id) if is_drop_target => column.position(id),
            _ if is_focused => ui.focus.card,
            _ => None,
        };
        let border_style = if is_drop_target {
            styles.style("drop_target")
        } else if is_focused {
            styles.style("column_focused")
        } else {
            Style::default()
        };

        let active = ui.composing.as_ref() == Some(&column.id);
        let hint = match state.config.config.keybindings.key_for(Action::NewCard) {
            Some(key) if is_focused => format!("{key} add card"),
            _ => String::new(),
        };
        let input = InputView {
            draft: ui.draft(&column.id),
            active,
            hint,
            style: if active {
                styles.style("input_active")
            } else {
                styles.style("input")
            },
        };

        ColumnWidget {
            title: column.title.as_str(),
            cards,
            selected,
            border_style,
            title_style: styles.style("column_title"),
            input,
        }
    }
}
