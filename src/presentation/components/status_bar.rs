//! Status bar component
//!
//! Two lines at the bottom of the screen: the current mode with key hints,
//! then the latest status message.

use ratatui::{prelude::*, widgets::*};

use crate::{
    core::state::{ui::UiMode, AppState},
    presentation::config::keybindings::{Action, KeyBindings},
};

#[derive(Debug, Clone, Default)]
pub struct StatusBarComponent;

impl StatusBarComponent {
    pub fn new() -> Self {
        Self
    }

    /// Key hints for `mode`, built from the active keybindings
    pub fn hints(mode: UiMode, keybindings: &KeyBindings) -> String {
        let key = |action| keybindings.key_for(action).unwrap_or_else(|| "?".into());
        let moves = format!(
            "{}{}{}{}",
            key(Action::FocusLeft),
            key(Action::FocusDown),
            key(Action::FocusUp),
            key(Action::FocusRight)
        );
        match mode {
            UiMode::Normal => format!(
                "{moves} focus  {} pick up  {} add card  {} quit",
                key(Action::Grab),
                key(Action::NewCard),
                key(Action::Quit)
            ),
            UiMode::Dragging => format!(
                "{moves} move  {} drop  {} cancel",
                key(Action::Drop),
                key(Action::Cancel)
            ),
            UiMode::Composing => "<enter> add  <esc> cancel".to_string(),
        }
    }

    pub fn view(&self, state: &AppState, frame: &mut Frame, area: Rect) {
        let [mode_line, message_line] =
            Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);
        let styles = &state.config.config.styles;
        let mode = state.ui.mode();

        frame.render_widget(Clear, area);
        let line = Line::from(vec![
            Span::styled(format!(" {mode} "), styles.style("status_mode")),
            Span::raw(" "),
            Span::styled(
                Self::hints(mode, &state.config.config.keybindings),
                styles.style("status_hint"),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), mode_line);

        let message = state.system.status_message.clone().unwrap_or_default();
        frame.render_widget(Paragraph::new(message), message_line);
    }
}
