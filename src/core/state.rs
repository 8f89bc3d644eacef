use color_eyre::eyre::Result;

use crate::{domain::board::Board, infrastructure::config::Config};

pub mod board;
pub mod system;
pub mod ui;

pub use board::BoardState;
pub use system::SystemState;
pub use ui::UiState;

/// Unified application state
#[derive(Debug, Clone)]
pub struct AppState {
    pub board: BoardState,
    pub ui: UiState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_board(Board::initial(), Config::default())
    }
}

impl AppState {
    /// Build the state from configuration, seeding the board from it
    pub fn new_with_config(config: Config) -> Result<Self> {
        let board = if config.board.is_empty() {
            Board::initial()
        } else {
            Board::from_seed(&config.board)?
        };
        Ok(Self::with_board(board, config))
    }

    pub fn with_board(board: Board, config: Config) -> Self {
        Self {
            ui: UiState::new(&board),
            board: BoardState::new(board),
            system: SystemState::default(),
            config: ConfigState { config },
        }
    }
}
