//! Components
//!
//! Components are stateless renderers that receive `AppState` as a parameter
//! and draw a region of the frame.

pub mod board;
pub mod status_bar;

pub use board::BoardComponent;
pub use status_bar::StatusBarComponent;
