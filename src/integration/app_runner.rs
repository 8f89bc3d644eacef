use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::Rect;
use tokio::sync::{mpsc, Mutex};

use crate::{
    core::{cmd::TuiCommand, raw_msg::RawMsg, state::AppState},
    infrastructure::{
        config::Config,
        tui::{event_source::EventSource, real::RealTui, Event, TuiLike},
    },
    integration::{coalescer::Coalescer, renderer::Renderer, runtime::Runtime},
};

/// Drives the board: terminal events in, update cycle, coalesced resize and render out.
pub struct AppRunner {
    runtime: Runtime,
    tui: Arc<Mutex<dyn TuiLike + Send>>,
    events: EventSource,
    renderer: Renderer,
    tui_rx: mpsc::UnboundedReceiver<TuiCommand>,
    render_rx: mpsc::UnboundedReceiver<()>,
    last_size: Option<(u16, u16)>,
}

impl AppRunner {
    /// Runner over the real terminal
    pub fn new(config: Config, tick_rate: f64, frame_rate: f64) -> Result<Self> {
        let state = AppState::new_with_config(config)?;
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::new(Mutex::new(
            RealTui::new()?.tick_rate(tick_rate).frame_rate(frame_rate),
        ));
        let events = EventSource::real(Arc::clone(&tui));
        Ok(Self::new_with_tui(state, tui, events))
    }

    /// Runner over any terminal and event source
    pub fn new_with_tui(
        state: AppState,
        tui: Arc<Mutex<dyn TuiLike + Send>>,
        events: EventSource,
    ) -> Self {
        let mut runtime = Runtime::new(state);
        let (tui_tx, tui_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        runtime.set_tui_sender(tui_tx);
        runtime.set_render_request_sender(render_tx);

        Self {
            runtime,
            tui,
            events,
            renderer: Renderer::new(),
            tui_rx,
            render_rx,
            last_size: None,
        }
    }

    pub fn state(&self) -> &AppState {
        self.runtime.state()
    }

    /// Run until quit is requested or the event source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        self.tui.lock().await.enter()?;
        self.render().await?;

        loop {
            let Some(event) = self.events.next().await else {
                log::debug!("event source exhausted");
                break;
            };

            let mut saw_tui_render = false;
            match event {
                Event::Render => saw_tui_render = true,
                Event::Closed => {
                    log::info!("terminal event stream closed");
                    break;
                }
                other => {
                    if let Some(raw) = raw_msg_for(other) {
                        self.runtime.send_raw_msg(raw);
                    }
                }
            }

            self.run_update_cycle();

            if self.apply_resizes().await? {
                saw_tui_render = true;
            }

            if self.runtime.state().system.should_quit {
                break;
            }

            if self.runtime.state().system.should_suspend {
                self.suspend_and_resume().await?;
            }

            if Coalescer::decide_render(self.drain_render_requests(), saw_tui_render) {
                self.render().await?;
            }
        }

        self.tui.lock().await.exit()?;
        Ok(())
    }

    fn run_update_cycle(&mut self) {
        for result in self.runtime.run_update_cycle() {
            if result.starts_with('✗') {
                log::warn!("{result}");
            } else {
                log::trace!("{result}");
            }
        }
    }

    /// Apply the last resize requested since the previous iteration
    async fn apply_resizes(&mut self) -> Result<bool> {
        let mut sizes = Vec::new();
        while let Ok(TuiCommand::Resize { width, height }) = self.tui_rx.try_recv() {
            sizes.push((width, height));
        }
        if sizes.is_empty() {
            return Ok(false);
        }

        self.last_size = Coalescer::decide_resize(self.last_size, &sizes);
        if let Some((width, height)) = self.last_size {
            self.tui
                .lock()
                .await
                .resize(Rect::new(0, 0, width, height))?;
        }
        Ok(true)
    }

    async fn suspend_and_resume(&mut self) -> Result<()> {
        log::info!("suspending");
        {
            let mut tui = self.tui.lock().await;
            tui.suspend()?;
            tui.resume()?;
        }
        self.runtime.send_raw_msg(RawMsg::Resume);
        self.run_update_cycle();
        Ok(())
    }

    fn drain_render_requests(&mut self) -> usize {
        let mut count = 0;
        while self.render_rx.try_recv().is_ok() {
            count += 1;
        }
        count
    }

    async fn render(&self) -> Result<()> {
        self.renderer.render(&self.tui, self.runtime.state()).await
    }
}

/// Terminal event as a raw message, if the core cares about it
fn raw_msg_for(event: Event) -> Option<RawMsg> {
    match event {
        Event::Quit => Some(RawMsg::Quit),
        Event::Tick => Some(RawMsg::Tick),
        Event::Render => Some(RawMsg::Render),
        Event::Key(key) => Some(RawMsg::Key(key)),
        Event::Paste(text) => Some(RawMsg::Paste(text)),
        Event::Resize(width, height) => Some(RawMsg::Resize(width, height)),
        Event::Error => Some(RawMsg::Error("terminal event error".into())),
        Event::Init | Event::Closed | Event::FocusGained | Event::FocusLost => None,
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;
    use crate::{
        domain::board::ColumnId,
        infrastructure::tui::test::TestTui,
    };

    fn key(c: char) -> Event {
        Event::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn runner_with(
        events: impl IntoIterator<Item = Event>,
    ) -> Result<(AppRunner, Arc<Mutex<TestTui>>)> {
        let test_tui = Arc::new(Mutex::new(TestTui::with_events(60, 12, events)?));
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
        let events = EventSource::real(Arc::clone(&tui));
        let state = AppState::new_with_config(Config::embedded()?)?;
        Ok((AppRunner::new_with_tui(state, tui, events), test_tui))
    }

    #[rstest]
    #[case(Event::Quit, Some(RawMsg::Quit))]
    #[case(Event::Tick, Some(RawMsg::Tick))]
    #[case(Event::Resize(3, 4), Some(RawMsg::Resize(3, 4)))]
    #[case(Event::Paste("x".into()), Some(RawMsg::Paste("x".into())))]
    #[case(Event::Init, None)]
    #[case(Event::FocusLost, None)]
    fn test_raw_msg_for(#[case] event: Event, #[case] expected: Option<RawMsg>) {
        assert_eq!(raw_msg_for(event), expected);
    }

    #[tokio::test]
    async fn test_quit_stops_the_loop() -> Result<()> {
        let (mut runner, test_tui) = runner_with([key('q'), key('l')])?;

        runner.run().await?;

        assert!(runner.state().system.should_quit);
        // 'l' after quit is never read
        assert_eq!(runner.state().ui.focus.column, 0);
        let tui = test_tui.lock().await;
        assert!(!tui.is_entered());
        assert_eq!(tui.draw_count(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn test_runs_until_events_are_exhausted() -> Result<()> {
        let (mut runner, test_tui) = runner_with([key('j'), key(' '), key('l'), Event::Render])?;

        runner.run().await?;

        assert!(runner.state().ui.is_dragging());
        assert!(!runner.state().system.should_quit);
        assert!(test_tui.lock().await.draw_count() >= 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_drop_renders_moved_card() -> Result<()> {
        let events = [
            key('j'),
            key(' '),
            key('l'),
            key('l'),
            Event::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
        ];
        let (mut runner, test_tui) = runner_with(events)?;

        runner.run().await?;

        let done: Vec<&str> = runner
            .state()
            .board
            .get()
            .cards_in(&ColumnId::from("column-3"))
            .iter()
            .map(|card| card.content.as_str())
            .collect();
        assert_eq!(done, vec!["Task 2"]);

        let tui = test_tui.lock().await;
        let buffer = tui.buffer();
        let top: String = (0..buffer.area.width)
            .map(|x| buffer[(x, 0)].symbol())
            .collect();
        assert!(top.contains("To Do (1)"));
        assert!(top.contains("Done (1)"));
        Ok(())
    }

    #[tokio::test]
    async fn test_resize_is_applied_to_terminal() -> Result<()> {
        let (mut runner, test_tui) = runner_with([Event::Resize(80, 20)])?;

        runner.run().await?;

        let tui = test_tui.lock().await;
        assert_eq!(tui.buffer().area, Rect::new(0, 0, 80, 20));
        Ok(())
    }

    #[tokio::test]
    async fn test_suspend_round_trip() -> Result<()> {
        let suspend = Event::Key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        let (mut runner, test_tui) = runner_with([suspend])?;

        runner.run().await?;

        assert!(!runner.state().system.should_suspend);
        assert_eq!(test_tui.lock().await.suspend_count(), 1);
        Ok(())
    }
}
