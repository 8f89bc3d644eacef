//! # kanban-tui
//!
//! A kanban board for the terminal, built with Rust and Ratatui.
//! State changes follow an Elm-like architecture.
//!
//! ## Architecture Overview
//!
//! - **Domain** (`domain`): the board, drag gestures and text helpers
//! - **Model** (`core::state`): application state, with [`BoardState`] owning the board
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects for the host to execute
//! - **View** (`presentation`): rendering based on the current state
//!
//! ## Example Usage
//!
//! ```rust
//! use kanban_tui::{
//!     core::msg::board::BoardMsg,
//!     domain::{
//!         board::{CardId, ColumnId},
//!         drag::{DragEnd, DraggableLocation},
//!     },
//!     update, AppState, Msg,
//! };
//!
//! let state = AppState::default();
//! let drop = DragEnd::new(
//!     CardId::from("card-2"),
//!     DraggableLocation::new(ColumnId::from("column-1"), 1),
//!     Some(DraggableLocation::new(ColumnId::from("column-3"), 0)),
//! );
//!
//! let (state, _commands) = update(Msg::Board(BoardMsg::CardDropped(drop)), state);
//!
//! let done = state.board.get().cards_in(&ColumnId::from("column-3"));
//! assert_eq!(done[0].content, "Task 2");
//! ```

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

pub use crate::core::{
    cmd::Cmd,
    msg::Msg,
    raw_msg::RawMsg,
    state::{AppState, BoardState},
    translator::translate_raw_to_domain,
    update::update,
};
pub use domain::board::Board;
pub use integration::{
    app_runner::AppRunner,
    runtime::{Runtime, RuntimeStats},
};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
