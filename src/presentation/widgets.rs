//! Reusable widgets
//!
//! Stateless ratatui widgets used by the board components.

pub mod card;
pub mod column;
