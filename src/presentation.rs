//! Presentation layer
//!
//! This module contains UI components and widgets:
//! - Board and status bar components
//! - Reusable widgets
//! - Configuration (styles, keybindings)

pub mod components;
pub mod config;
pub mod widgets;
