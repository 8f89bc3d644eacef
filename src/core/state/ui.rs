use std::collections::HashMap;

use crate::{
    core::{cmd::Cmd, msg::ui::UiMsg, textarea_engine::TextAreaEngine},
    domain::{
        board::{Board, CardId, Column, ColumnId},
        drag::DragSession,
        ui::{CursorPosition, TextSelection},
    },
};

/// Complete state representation of a TextArea component
/// This struct encapsulates all mutable state that needs to be
/// preserved across TextArea recreation in the stateless approach
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextAreaState {
    /// The complete text content
    pub content: String,
    /// Current cursor position within the text
    pub cursor_position: CursorPosition,
    /// Active text selection range, if any
    pub selection: Option<TextSelection>,
}

impl TextAreaState {
    pub fn new(
        content: String,
        cursor_position: CursorPosition,
        selection: Option<TextSelection>,
    ) -> Self {
        Self {
            content,
            cursor_position,
            selection,
        }
    }

    /// Snapshot holding `content` with the cursor at its end
    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor_position = CursorPosition::end_of(&content);
        Self::new(content, cursor_position, None)
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

/// High-level UI mode for keybindings and view switching
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum UiMode {
    #[default]
    Normal,
    Dragging,
    Composing,
}

/// Focused column (by position in the column order) and card within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Focus {
    pub column: usize,
    pub card: Option<usize>,
}

/// UI-related state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UiState {
    pub focus: Focus,
    pub drag: Option<DragSession>,
    pub composing: Option<ColumnId>,
    drafts: HashMap<ColumnId, TextAreaState>,
}

impl UiState {
    /// Fresh UI state focused on the first card of the first column
    pub fn new(board: &Board) -> Self {
        let mut ui = Self::default();
        ui.clamp_focus(board);
        ui
    }

    pub fn mode(&self) -> UiMode {
        if self.composing.is_some() {
            UiMode::Composing
        } else if self.drag.is_some() {
            UiMode::Dragging
        } else {
            UiMode::Normal
        }
    }

    pub fn is_composing(&self) -> bool {
        self.mode() == UiMode::Composing
    }

    pub fn is_dragging(&self) -> bool {
        self.mode() == UiMode::Dragging
    }

    pub fn is_normal(&self) -> bool {
        self.mode() == UiMode::Normal
    }

    pub fn focused_column<'b>(&self, board: &'b Board) -> Option<&'b Column> {
        let id = board.column_order().get(self.focus.column)?;
        board.column(id)
    }

    pub fn focused_card_id<'b>(&self, board: &'b Board) -> Option<&'b CardId> {
        let column = self.focused_column(board)?;
        column.card_ids.get(self.focus.card?)
    }

    pub fn draft(&self, column_id: &ColumnId) -> Option<&TextAreaState> {
        self.drafts.get(column_id)
    }

    /// Draft of the column currently being composed in
    pub fn composing_draft(&self) -> Option<&TextAreaState> {
        self.composing.as_ref().and_then(|id| self.drafts.get(id))
    }

    pub fn set_draft(&mut self, column_id: ColumnId, draft: TextAreaState) {
        self.drafts.insert(column_id, draft);
    }

    pub fn clear_draft(&mut self, column_id: &ColumnId) {
        self.drafts.remove(column_id);
    }

    /// Keep the focus inside the board after it changed shape
    pub fn clamp_focus(&mut self, board: &Board) {
        let column_count = board.column_count();
        if column_count == 0 {
            self.focus = Focus::default();
            return;
        }
        self.focus.column = self.focus.column.min(column_count - 1);
        let len = self.focused_column(board).map_or(0, Column::len);
        self.focus.card = if len == 0 {
            None
        } else {
            Some(self.focus.card.unwrap_or(0).min(len - 1))
        };
    }

    /// Move the focus onto `card_id`, wherever it is on `board`
    pub fn focus_card(&mut self, board: &Board, card_id: &CardId) {
        let Some(location) = board.position_of(card_id) else {
            return;
        };
        if let Some(column) = board
            .column_order()
            .iter()
            .position(|id| id == &location.droppable_id)
        {
            self.focus = Focus {
                column,
                card: Some(location.index),
            };
        }
    }

    /// UI-specific update function
    ///
    /// Drop, cancel and submit touch the board as well and are routed by the
    /// coordinator in `core::update`; they are no-ops here.
    pub fn update(
        &mut self,
        msg: UiMsg,
        board: &Board,
        text_area: &dyn TextAreaEngine,
    ) -> Vec<Cmd> {
        match msg {
            UiMsg::FocusLeft => {
                self.focus.column = self.focus.column.saturating_sub(1);
                self.clamp_focus(board);
                vec![Cmd::RequestRender]
            }
            UiMsg::FocusRight => {
                self.focus.column += 1;
                self.clamp_focus(board);
                vec![Cmd::RequestRender]
            }
            UiMsg::FocusUp => {
                self.focus.card = self.focus.card.map(|i| i.saturating_sub(1));
                self.clamp_focus(board);
                vec![Cmd::RequestRender]
            }
            UiMsg::FocusDown => {
                self.focus.card = self.focus.card.map(|i| i + 1);
                self.clamp_focus(board);
                vec![Cmd::RequestRender]
            }

            UiMsg::StartDrag => {
                if self.drag.is_some() {
                    return vec![];
                }
                let Some(card_id) = self.focused_card_id(board) else {
                    return vec![];
                };
                self.drag = DragSession::start(board, card_id);
                vec![Cmd::RequestRender]
            }
            UiMsg::DragLeft | UiMsg::DragRight | UiMsg::DragUp | UiMsg::DragDown => {
                let Some(session) = self.drag.as_mut() else {
                    return vec![];
                };
                match msg {
                    UiMsg::DragLeft => session.move_left(board),
                    UiMsg::DragRight => session.move_right(board),
                    UiMsg::DragUp => session.move_up(),
                    _ => session.move_down(board),
                }
                vec![Cmd::RequestRender]
            }

            UiMsg::StartComposing => {
                let Some(column_id) = self.focused_column(board).map(|c| c.id.clone()) else {
                    return vec![];
                };
                self.drafts.entry(column_id.clone()).or_default();
                self.composing = Some(column_id);
                vec![Cmd::RequestRender]
            }
            UiMsg::CancelComposing => {
                // The draft is kept so that composing can resume later.
                self.composing = None;
                vec![Cmd::RequestRender]
            }
            UiMsg::ProcessTextAreaInput(key) => {
                let Some(column_id) = self.composing.clone() else {
                    return vec![];
                };
                let draft = self.drafts.entry(column_id).or_default();
                *draft = text_area.apply_keys(draft, &[key]);
                vec![Cmd::RequestRender]
            }
            UiMsg::InsertText(text) => {
                let Some(column_id) = self.composing.clone() else {
                    return vec![];
                };
                // Card input is a single line.
                let text = text.replace("\r\n", " ").replace(['\r', '\n'], " ");
                let draft = self.drafts.entry(column_id).or_default();
                *draft = text_area.insert_str(draft, &text);
                vec![Cmd::RequestRender]
            }

            UiMsg::ReleaseDrag | UiMsg::CancelDrag | UiMsg::SubmitCard => vec![],
        }
    }
}
