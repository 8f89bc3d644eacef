//! Terminal host
//!
//! [`TuiLike`] is everything the runner needs from a terminal. [`real::RealTui`]
//! drives crossterm, [`test::TestTui`] draws into an in-memory buffer.

pub mod event_source;
pub mod real;
pub mod textarea_engine;

use std::{future::Future, pin::Pin};

use color_eyre::eyre::Result;
use crossterm::event::KeyEvent;
use ratatui::prelude::Rect;
use serde::{Deserialize, Serialize};

pub type IO = std::io::Stdout;
pub fn io() -> IO {
    std::io::stdout()
}
pub type Frame<'a> = ratatui::Frame<'a>;

/// Boxed future returned by [`TuiLike::next`]
pub type NextEvent<'a> = Pin<Box<dyn Future<Output = Option<Event>> + Send + 'a>>;

/// Terminal-level events delivered to the runner
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Init,
    Quit,
    Error,
    /// The input stream ended; no further events will arrive
    Closed,
    Tick,
    /// Frame timer fired
    Render,
    FocusGained,
    FocusLost,
    Paste(String),
    Key(KeyEvent),
    Resize(u16, u16),
}

pub trait TuiLike: Send {
    fn enter(&mut self) -> Result<()>;
    fn exit(&mut self) -> Result<()>;
    /// Leave the terminal and stop the process until it is continued
    fn suspend(&mut self) -> Result<()>;
    fn resume(&mut self) -> Result<()>;
    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()>;
    fn resize(&mut self, area: Rect) -> Result<()>;
    fn next(&mut self) -> NextEvent<'_>;
}
