//! Domain logic
//!
//! This module contains the board model and everything that operates on it
//! without touching the terminal:
//! - Normalized board, column and card types
//! - Drag gestures and the keyboard drag session
//! - Text layout helpers used by the card widgets

pub mod board;
pub mod drag;
pub mod text;
pub mod ui;
