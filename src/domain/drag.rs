//! Drag gestures
//!
//! [`DragEnd`] is the payload a drag-and-drop host delivers when a card is
//! released. [`DragSession`] is the keyboard equivalent of holding a card:
//! it tracks the hover slot while the user moves the card around, and turns
//! into a [`DragEnd`] when released or cancelled.

use serde::{Deserialize, Serialize};

use crate::domain::board::{Board, CardId, Column, ColumnId};

/// A slot inside a column
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DraggableLocation {
    pub droppable_id: ColumnId,
    pub index: usize,
}

impl DraggableLocation {
    pub fn new(droppable_id: ColumnId, index: usize) -> Self {
        Self {
            droppable_id,
            index,
        }
    }
}

/// Result of a finished drag. `destination` is `None` when the card was
/// released outside of every column or the drag was cancelled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragEnd {
    pub source: DraggableLocation,
    pub destination: Option<DraggableLocation>,
    pub draggable_id: CardId,
}

impl DragEnd {
    pub fn new(
        draggable_id: CardId,
        source: DraggableLocation,
        destination: Option<DraggableLocation>,
    ) -> Self {
        Self {
            source,
            destination,
            draggable_id,
        }
    }

    /// Whether applying this drop leaves the board untouched.
    pub fn is_noop(&self) -> bool {
        self.destination
            .as_ref()
            .is_none_or(|destination| destination == &self.source)
    }
}

/// A card currently held by the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    card_id: CardId,
    source: DraggableLocation,
    hover: DraggableLocation,
}

impl DragSession {
    /// Pick up `card_id` from wherever it currently sits.
    pub fn start(board: &Board, card_id: &CardId) -> Option<Self> {
        let source = board.position_of(card_id)?;
        Some(Self {
            card_id: card_id.clone(),
            hover: source.clone(),
            source,
        })
    }

    pub fn card_id(&self) -> &CardId {
        &self.card_id
    }

    pub fn source(&self) -> &DraggableLocation {
        &self.source
    }

    pub fn hover(&self) -> &DraggableLocation {
        &self.hover
    }

    pub fn move_up(&mut self) {
        self.hover.index = self.hover.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, board: &Board) {
        let max = self.max_index(board, &self.hover.droppable_id);
        self.hover.index = (self.hover.index + 1).min(max);
    }

    pub fn move_left(&mut self, board: &Board) {
        self.move_horizontally(board, -1);
    }

    pub fn move_right(&mut self, board: &Board) {
        self.move_horizontally(board, 1);
    }

    fn move_horizontally(&mut self, board: &Board, step: isize) {
        let order = board.column_order();
        let Some(current) = order.iter().position(|id| id == &self.hover.droppable_id) else {
            return;
        };
        let Some(next) = current
            .checked_add_signed(step)
            .and_then(|index| order.get(index))
        else {
            return;
        };
        let max = self.max_index(board, next);
        self.hover = DraggableLocation::new(next.clone(), self.hover.index.min(max));
    }

    /// Highest slot the card can occupy in `column_id`. The card still sits
    /// in its source column, so that column offers one slot fewer.
    fn max_index(&self, board: &Board, column_id: &ColumnId) -> usize {
        let len = board.column(column_id).map_or(0, Column::len);
        if column_id == &self.source.droppable_id {
            len.saturating_sub(1)
        } else {
            len
        }
    }

    /// The drop that would happen if the card were released now.
    pub fn pending(&self) -> DragEnd {
        DragEnd::new(
            self.card_id.clone(),
            self.source.clone(),
            Some(self.hover.clone()),
        )
    }

    /// Board as it would look after dropping at the hover slot.
    pub fn preview(&self, board: &Board) -> Board {
        board.move_card(&self.pending())
    }

    pub fn release(self) -> DragEnd {
        DragEnd::new(self.card_id, self.source, Some(self.hover))
    }

    pub fn cancel(self) -> DragEnd {
        DragEnd::new(self.card_id, self.source, None)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    #[fixture]
    fn board() -> Board {
        Board::initial()
    }

    fn location(column: &str, index: usize) -> DraggableLocation {
        DraggableLocation::new(ColumnId::from(column), index)
    }

    #[test]
    fn test_is_noop() {
        let source = location("column-1", 0);
        let card = CardId::from("card-1");

        assert!(DragEnd::new(card.clone(), source.clone(), None).is_noop());
        assert!(DragEnd::new(card.clone(), source.clone(), Some(source.clone())).is_noop());
        assert!(!DragEnd::new(card.clone(), source.clone(), Some(location("column-1", 1))).is_noop());
        assert!(!DragEnd::new(card, source, Some(location("column-2", 0))).is_noop());
    }

    #[rstest]
    fn test_start_at_card_position(board: Board) {
        let session = DragSession::start(&board, &CardId::from("card-2")).expect("card exists");

        assert_eq!(session.source(), &location("column-1", 1));
        assert_eq!(session.hover(), &location("column-1", 1));
        assert!(DragSession::start(&board, &CardId::from("card-9")).is_none());
    }

    #[rstest]
    fn test_vertical_moves_are_clamped(board: Board) {
        let mut session = DragSession::start(&board, &CardId::from("card-1")).expect("card exists");

        session.move_up();
        assert_eq!(session.hover(), &location("column-1", 0));

        session.move_down(&board);
        session.move_down(&board);
        assert_eq!(session.hover(), &location("column-1", 1));
    }

    #[rstest]
    fn test_horizontal_moves(board: Board) {
        let mut session = DragSession::start(&board, &CardId::from("card-2")).expect("card exists");

        session.move_left(&board);
        assert_eq!(session.hover(), &location("column-1", 1));

        session.move_right(&board);
        assert_eq!(session.hover(), &location("column-2", 1));

        session.move_right(&board);
        assert_eq!(session.hover(), &location("column-3", 0));

        session.move_right(&board);
        assert_eq!(session.hover(), &location("column-3", 0));
    }

    #[rstest]
    fn test_other_columns_accept_tail_slot(board: Board) {
        let mut session = DragSession::start(&board, &CardId::from("card-1")).expect("card exists");

        session.move_right(&board);
        session.move_down(&board);
        assert_eq!(session.hover(), &location("column-2", 1));

        session.move_down(&board);
        assert_eq!(session.hover(), &location("column-2", 1));
    }

    #[rstest]
    fn test_drop_and_cancel(board: Board) {
        let mut session = DragSession::start(&board, &CardId::from("card-2")).expect("card exists");
        session.move_right(&board);
        session.move_right(&board);

        let cancelled = session.clone().cancel();
        assert_eq!(cancelled.destination, None);
        assert_eq!(board.move_card(&cancelled), board);

        let dropped = session.release();
        assert_eq!(dropped.draggable_id, CardId::from("card-2"));
        assert_eq!(dropped.source, location("column-1", 1));
        assert_eq!(dropped.destination, Some(location("column-3", 0)));
    }

    #[rstest]
    fn test_preview_matches_drop(board: Board) {
        let mut session = DragSession::start(&board, &CardId::from("card-3")).expect("card exists");
        session.move_left(&board);
        session.move_down(&board);

        let preview = session.preview(&board);
        let dropped = board.move_card(&session.release());

        assert_eq!(preview, dropped);
        assert_eq!(
            preview
                .column(&ColumnId::from("column-1"))
                .map(|c| c.card_ids.clone()),
            Some(vec![
                CardId::from("card-1"),
                CardId::from("card-3"),
                CardId::from("card-2")
            ])
        );
    }
}
