//! Integration layer
//!
//! Glues the pure core to the terminal host:
//! - Runtime: message queues, update cycle, command execution
//! - AppRunner: event loop driving the runtime and the TUI
//! - Renderer and render/resize coalescing

pub mod app_runner;
pub mod coalescer;
pub mod renderer;
pub mod runtime;
