use std::sync::Arc;

use color_eyre::eyre::Result;
use ratatui::prelude::*;
use tokio::sync::Mutex;

use crate::{
    core::state::AppState,
    infrastructure::tui::{Frame, TuiLike},
    presentation::components::{board::BoardComponent, status_bar::StatusBarComponent},
};

const STATUS_BAR_HEIGHT: u16 = 2;

#[derive(Debug, Default)]
pub struct Renderer {
    board: BoardComponent,
    status_bar: StatusBarComponent,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            board: BoardComponent::new(),
            status_bar: StatusBarComponent::new(),
        }
    }

    /// Draw the whole screen for `state`
    pub fn draw(&self, frame: &mut Frame<'_>, state: &AppState) {
        let [board_area, status_area] = Layout::vertical([
            Constraint::Min(0),
            Constraint::Length(STATUS_BAR_HEIGHT),
        ])
        .areas(frame.area());
        self.board.view(state, frame, board_area);
        self.status_bar.view(state, frame, status_area);
    }

    pub async fn render(&self, tui: &Arc<Mutex<dyn TuiLike + Send>>, state: &AppState) -> Result<()> {
        let mut guard = tui.lock().await;
        guard.draw(&mut |frame: &mut Frame<'_>| self.draw(frame, state))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::tui::test::TestTui;

    fn row(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol())
            .collect()
    }

    #[tokio::test]
    async fn renderer_draws_board_and_status_bar() -> Result<()> {
        let test_tui = Arc::new(Mutex::new(TestTui::new(60, 12)?));
        let tui: Arc<Mutex<dyn TuiLike + Send>> = Arc::<Mutex<TestTui>>::clone(&test_tui);
        let renderer = Renderer::new();

        renderer.render(&tui, &AppState::default()).await?;

        let guard = test_tui.lock().await;
        assert_eq!(guard.draw_count(), 1);
        let buffer = guard.buffer();
        assert!(row(buffer, 0).contains("To Do (2)"));
        assert!(row(buffer, 0).contains("Done (0)"));
        assert!(row(buffer, 10).starts_with(" NORMAL "));
        Ok(())
    }
}
