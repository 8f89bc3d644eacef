//! Keybindings and styles read from the `keybindings` and `styles` config sections.

pub mod keybindings;
pub mod styles;

pub use keybindings::{Action, KeyBindings};
pub use styles::Styles;
