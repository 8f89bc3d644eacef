use crossterm::event::KeyEvent;

use crate::core::state::ui::TextAreaState;

/// Edits a card draft.
///
/// The update path stays pure: an engine takes a draft snapshot and returns
/// the edited snapshot without keeping any state of its own.
pub trait TextAreaEngine {
    /// Feed key presses to the draft
    fn apply_keys(&self, draft: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState;

    /// Insert text at the cursor
    fn insert_str(&self, draft: &TextAreaState, text: &str) -> TextAreaState;
}

/// Leaves drafts untouched. Used by [`crate::core::update::update`].
pub struct NoopTextAreaEngine;

impl TextAreaEngine for NoopTextAreaEngine {
    fn apply_keys(&self, draft: &TextAreaState, _keys: &[KeyEvent]) -> TextAreaState {
        draft.clone()
    }

    fn insert_str(&self, draft: &TextAreaState, _text: &str) -> TextAreaState {
        draft.clone()
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn noop_engine_keeps_draft() {
        let engine: &dyn TextAreaEngine = &NoopTextAreaEngine;
        let draft = TextAreaState::with_content("Task");
        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);

        assert_eq!(engine.apply_keys(&draft, &[key]), draft);
        assert_eq!(engine.insert_str(&draft, " 4"), draft);
    }
}
