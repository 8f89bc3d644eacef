use std::{
    ops::{Deref, DerefMut},
    time::Duration,
};

use color_eyre::eyre::Result;
use crossterm::{
    cursor,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream,
        KeyEventKind,
    },
    terminal::{EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::{FutureExt, StreamExt};
use ratatui::{backend::CrosstermBackend as Backend, prelude::Rect};
use tokio::{
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
    task::JoinHandle,
};
use tokio_util::sync::CancellationToken;

use crate::infrastructure::tui::{io, Event, Frame, NextEvent, TuiLike, IO};

/// Crossterm terminal with a background task turning terminal input and
/// tick/render timers into [`Event`]s.
pub struct RealTui {
    pub terminal: ratatui::Terminal<Backend<IO>>,
    task: JoinHandle<()>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
    paste: bool,
}

impl RealTui {
    pub fn new() -> Result<Self> {
        let terminal = ratatui::Terminal::new(Backend::new(io()))?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal,
            task: tokio::spawn(async {}),
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate: 60.0,
            tick_rate: 4.0,
            paste: true,
        })
    }

    pub fn tick_rate(mut self, tick_rate: f64) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn frame_rate(mut self, frame_rate: f64) -> Self {
        self.frame_rate = frame_rate;
        self
    }

    pub fn paste(mut self, paste: bool) -> Self {
        self.paste = paste;
        self
    }

    fn start(&mut self) {
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let token = self.cancellation_token.clone();
        let tx = self.event_tx.clone();
        let tick_delay = Duration::from_secs_f64(1.0 / self.tick_rate);
        let render_delay = Duration::from_secs_f64(1.0 / self.frame_rate);
        self.task = tokio::spawn(event_loop(tx, token, tick_delay, render_delay));
    }

    fn stop(&self) -> Result<()> {
        self.cancel();
        let mut counter = 0;
        while !self.task.is_finished() {
            std::thread::sleep(Duration::from_millis(1));
            counter += 1;
            if counter > 50 {
                self.task.abort();
            }
            if counter > 100 {
                log::error!("Failed to abort task in 100 milliseconds for unknown reason");
                break;
            }
        }
        Ok(())
    }

    fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    /// Put the terminal back into cooked mode without touching any instance.
    /// Used from the panic hook.
    pub fn restore() -> Result<()> {
        if crossterm::terminal::is_raw_mode_enabled()? {
            crossterm::execute!(io(), DisableBracketedPaste, LeaveAlternateScreen, cursor::Show)?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }
}

async fn event_loop(
    tx: UnboundedSender<Event>,
    token: CancellationToken,
    tick_delay: Duration,
    render_delay: Duration,
) {
    let mut reader = EventStream::new();
    let mut tick_interval = tokio::time::interval(tick_delay);
    let mut render_interval = tokio::time::interval(render_delay);
    let _ = tx.send(Event::Init);
    loop {
        let tick_delay = tick_interval.tick();
        let render_delay = render_interval.tick();
        let crossterm_event = reader.next().fuse();
        let event = tokio::select! {
            _ = token.cancelled() => break,
            maybe_event = crossterm_event => match maybe_event {
                Some(Ok(event)) => match translate_event(event) {
                    Some(event) => event,
                    None => continue,
                },
                Some(Err(_)) => Event::Error,
                None => Event::Closed,
            },
            _ = tick_delay => Event::Tick,
            _ = render_delay => Event::Render,
        };
        let closed = event == Event::Closed;
        if tx.send(event).is_err() || closed {
            break;
        }
    }
}

fn translate_event(event: CrosstermEvent) -> Option<Event> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Some(Event::Key(key)),
        CrosstermEvent::Resize(x, y) => Some(Event::Resize(x, y)),
        CrosstermEvent::FocusLost => Some(Event::FocusLost),
        CrosstermEvent::FocusGained => Some(Event::FocusGained),
        CrosstermEvent::Paste(s) => Some(Event::Paste(s)),
        _ => None,
    }
}

impl TuiLike for RealTui {
    fn enter(&mut self) -> Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(io(), EnterAlternateScreen, cursor::Hide)?;
        if self.paste {
            crossterm::execute!(io(), EnableBracketedPaste)?;
        }
        self.start();
        Ok(())
    }

    fn exit(&mut self) -> Result<()> {
        self.stop()?;
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            if self.paste {
                crossterm::execute!(io(), DisableBracketedPaste)?;
            }
            crossterm::execute!(io(), LeaveAlternateScreen, cursor::Show)?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    fn suspend(&mut self) -> Result<()> {
        self.exit()?;
        #[cfg(not(windows))]
        signal_hook::low_level::raise(signal_hook::consts::signal::SIGTSTP)?;
        Ok(())
    }

    fn resume(&mut self) -> Result<()> {
        self.enter()?;
        self.terminal.clear()?;
        Ok(())
    }

    fn draw(&mut self, f: &mut dyn FnMut(&mut Frame<'_>)) -> Result<()> {
        self.terminal.draw(|frame| f(frame))?;
        Ok(())
    }

    fn resize(&mut self, area: Rect) -> Result<()> {
        self.terminal.resize(area)?;
        Ok(())
    }

    fn next(&mut self) -> NextEvent<'_> {
        Box::pin(self.event_rx.recv())
    }
}

impl Deref for RealTui {
    type Target = ratatui::Terminal<Backend<IO>>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for RealTui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for RealTui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            log::error!("Unable to exit terminal: {e:?}");
        }
    }
}
