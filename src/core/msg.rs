use serde::{Deserialize, Serialize};

pub mod board;
pub mod system;
pub mod ui;

use board::BoardMsg;
use system::SystemMsg;
use ui::UiMsg;

/// Domain messages representing application intent
/// These are processed by the update function and represent pure domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Board mutations (delegated to BoardState)
    Board(BoardMsg),

    // Focus, drag session and drafts (delegated to UiState)
    Ui(UiMsg),
}
