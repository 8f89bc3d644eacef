use crate::{
    core::{cmd::Cmd, msg::board::BoardMsg},
    domain::{
        board::{Board, CardId, ColumnId},
        drag::{DragEnd, DraggableLocation},
    },
};

/// State container for the board.
///
/// Every operation replaces the held [`Board`] with a new value; readers that
/// kept an earlier value through [`BoardState::get`] keep seeing it unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    board: Board,
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new(Board::initial())
    }
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Current board value
    pub fn get(&self) -> &Board {
        &self.board
    }

    /// Reorder a card after a drag gesture.
    ///
    /// `destination` is `None` when the card was dropped outside every column.
    /// Returns true when the board changed.
    pub fn move_card(
        &mut self,
        source_column_id: &ColumnId,
        source_index: usize,
        destination: Option<(&ColumnId, usize)>,
        card_id: &CardId,
    ) -> bool {
        let drag = DragEnd::new(
            card_id.clone(),
            DraggableLocation::new(source_column_id.clone(), source_index),
            destination.map(|(id, index)| DraggableLocation::new(id.clone(), index)),
        );
        self.apply_drop(&drag)
    }

    /// Apply a finished drag. Returns true when the board changed.
    pub fn apply_drop(&mut self, drag: &DragEnd) -> bool {
        let next = self.board.move_card(drag);
        let changed = !next.same_allocation(&self.board);
        self.board = next;
        changed
    }

    /// Append a card to `column_id` and return its id, or `None` when the
    /// column does not exist.
    pub fn add_card(&mut self, column_id: &ColumnId, content: impl Into<String>) -> Option<CardId> {
        let (next, id) = self.board.add_card(column_id, content)?;
        self.board = next;
        Some(id)
    }

    /// Board-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: BoardMsg) -> Vec<Cmd> {
        match msg {
            BoardMsg::CardDropped(drag) => {
                if !self.apply_drop(&drag) {
                    return vec![];
                }
                let Some(destination) = drag.destination else {
                    return vec![];
                };
                vec![
                    Cmd::log_info(format!(
                        "moved {} from {}/{} to {}/{}",
                        drag.draggable_id,
                        drag.source.droppable_id,
                        drag.source.index,
                        destination.droppable_id,
                        destination.index
                    )),
                    Cmd::RequestRender,
                ]
            }
            BoardMsg::CardAdded { column_id, content } => {
                match self.add_card(&column_id, content) {
                    Some(id) => vec![
                        Cmd::log_info(format!("added {id} to {column_id}")),
                        Cmd::RequestRender,
                    ],
                    None => vec![],
                }
            }
        }
    }
}
