use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// UI-specific messages for UiState transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UiMsg {
    // Focus navigation
    FocusLeft,
    FocusRight,
    FocusUp,
    FocusDown,

    // Keyboard drag session
    StartDrag,
    DragLeft,
    DragRight,
    DragUp,
    DragDown,
    ReleaseDrag,
    CancelDrag,

    // Per-column card input
    StartComposing,
    CancelComposing,
    SubmitCard,
    ProcessTextAreaInput(KeyEvent),
    InsertText(String),
}

impl UiMsg {
    /// Messages that only make sense while a card is held
    pub fn is_drag(&self) -> bool {
        matches!(
            self,
            UiMsg::DragLeft
                | UiMsg::DragRight
                | UiMsg::DragUp
                | UiMsg::DragDown
                | UiMsg::ReleaseDrag
                | UiMsg::CancelDrag
        )
    }
}
