use crossterm::event::{Event, KeyEvent};
use tui_textarea::{CursorMove, TextArea};

use crate::core::state::ui::TextAreaState;
use crate::core::textarea_engine::TextAreaEngine;
use crate::domain::ui::{CursorPosition, TextSelection};

/// Production engine based on tui-textarea. It constructs a temporary TextArea,
/// hydrates it from the given snapshot, applies the edit, then extracts the new snapshot.
pub struct TuiTextAreaEngine;

impl TuiTextAreaEngine {
    /// Build a TextArea holding `snapshot`, with cursor and selection restored
    pub fn hydrate(snapshot: &TextAreaState) -> TextArea<'static> {
        let mut textarea = TextArea::default();
        if !snapshot.content.is_empty() {
            textarea.insert_str(&snapshot.content);
        }
        Self::jump(&mut textarea, &snapshot.cursor_position);
        if let Some(selection) = &snapshot.selection {
            Self::jump(&mut textarea, &selection.start);
            textarea.start_selection();
            Self::jump(&mut textarea, &selection.end);
        }
        textarea
    }

    fn jump(textarea: &mut TextArea<'_>, position: &CursorPosition) {
        let line = u16::try_from(position.line).unwrap_or(u16::MAX);
        let column = u16::try_from(position.column).unwrap_or(u16::MAX);
        textarea.move_cursor(CursorMove::Jump(line, column));
    }

    fn snapshot_of(textarea: &TextArea<'_>) -> TextAreaState {
        let (line, column) = textarea.cursor();
        let selection = textarea
            .selection_range()
            .map(|((sl, sc), (el, ec))| TextSelection {
                start: CursorPosition {
                    line: sl,
                    column: sc,
                },
                end: CursorPosition {
                    line: el,
                    column: ec,
                },
            });
        TextAreaState::new(
            textarea.lines().join("\n"),
            CursorPosition { line, column },
            selection,
        )
    }
}

impl TextAreaEngine for TuiTextAreaEngine {
    fn apply_keys(&self, snapshot: &TextAreaState, keys: &[KeyEvent]) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        for key in keys {
            textarea.input(Event::Key(*key));
        }
        Self::snapshot_of(&textarea)
    }

    fn insert_str(&self, snapshot: &TextAreaState, text: &str) -> TextAreaState {
        let mut textarea = Self::hydrate(snapshot);
        textarea.insert_str(text);
        Self::snapshot_of(&textarea)
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn types_into_empty_draft() {
        let out = TuiTextAreaEngine.apply_keys(
            &TextAreaState::default(),
            &[press(KeyCode::Char('T')), press(KeyCode::Char('o'))],
        );
        assert_eq!(out, TextAreaState::with_content("To"));
    }

    #[test]
    fn edits_at_the_cursor() {
        let snap = TextAreaState::with_content("ab");
        let out = TuiTextAreaEngine.apply_keys(
            &snap,
            &[press(KeyCode::Left), press(KeyCode::Char('X'))],
        );
        assert_eq!(out.content, "aXb");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 2 });
        assert_eq!(snap.content, "ab");
    }

    #[test]
    fn backspace_and_selection_delete() {
        let out = TuiTextAreaEngine.apply_keys(
            &TextAreaState::with_content("ab"),
            &[press(KeyCode::Backspace)],
        );
        assert_eq!(out, TextAreaState::with_content("a"));

        let with_selection = TextAreaState::new(
            "hello".into(),
            CursorPosition { line: 0, column: 5 },
            Some(TextSelection {
                start: CursorPosition { line: 0, column: 1 },
                end: CursorPosition { line: 0, column: 4 },
            }),
        );
        let out = TuiTextAreaEngine.apply_keys(&with_selection, &[press(KeyCode::Backspace)]);
        assert_eq!(out.content, "ho");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 1 });
    }

    #[test]
    fn inserts_pasted_text_at_cursor() {
        let snap = TextAreaState::new("Task".into(), CursorPosition { line: 0, column: 0 }, None);
        let out = TuiTextAreaEngine.insert_str(&snap, "New ");
        assert_eq!(out.content, "New Task");
        assert_eq!(out.cursor_position, CursorPosition { line: 0, column: 4 });
    }
}
