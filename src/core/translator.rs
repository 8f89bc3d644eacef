use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::{
    core::{
        msg::{system::SystemMsg, ui::UiMsg, Msg},
        raw_msg::RawMsg,
        state::{ui::UiMode, AppState},
    },
    presentation::config::keybindings::Action,
};

/// Translates raw external events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        // System events - direct mapping
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        // User input - translate based on mode and key bindings
        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) if state.ui.is_composing() => vec![Msg::Ui(UiMsg::InsertText(text))],
        RawMsg::Paste(_) => vec![],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::ShowError(error))],

        // Ignore frequent system events in domain layer
        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

/// Translates keyboard input to domain events based on current application state
fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    // Handle global key bindings first
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Quit)],

        KeyEvent {
            code: KeyCode::Char('z'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => return vec![Msg::System(SystemMsg::Suspend)],

        _ => {}
    }

    match state.ui.mode() {
        UiMode::Composing => translate_composing_keys(key),
        UiMode::Dragging => translate_dragging_keys(key, state),
        UiMode::Normal => translate_normal_mode_keys(key, state),
    }
}

/// Key bindings when a column input is active
fn translate_composing_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter => vec![Msg::Ui(UiMsg::SubmitCard)],
        KeyCode::Esc => vec![Msg::Ui(UiMsg::CancelComposing)],
        // Card input is a single line; the textarea treats these as newlines.
        KeyCode::Char('m' | 'j') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            vec![Msg::Ui(UiMsg::SubmitCard)]
        }
        // All other input goes to the textarea
        _ => vec![Msg::Ui(UiMsg::ProcessTextAreaInput(key))],
    }
}

/// Key bindings while a card is held
fn translate_dragging_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let Some(action) = state.config.config.keybindings.action_for(&key) else {
        return vec![];
    };
    match action {
        Action::FocusLeft => vec![Msg::Ui(UiMsg::DragLeft)],
        Action::FocusRight => vec![Msg::Ui(UiMsg::DragRight)],
        Action::FocusUp => vec![Msg::Ui(UiMsg::DragUp)],
        Action::FocusDown => vec![Msg::Ui(UiMsg::DragDown)],
        Action::Grab | Action::Drop => vec![Msg::Ui(UiMsg::ReleaseDrag)],
        Action::Cancel => vec![Msg::Ui(UiMsg::CancelDrag)],
        // Quitting while holding a card puts it back first.
        Action::Quit => vec![Msg::Ui(UiMsg::CancelDrag), Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::NewCard => vec![],
    }
}

/// Key bindings when in normal navigation mode
fn translate_normal_mode_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    let Some(action) = state.config.config.keybindings.action_for(&key) else {
        return vec![];
    };
    match action {
        Action::Quit => vec![Msg::System(SystemMsg::Quit)],
        Action::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        Action::FocusLeft => vec![Msg::Ui(UiMsg::FocusLeft)],
        Action::FocusRight => vec![Msg::Ui(UiMsg::FocusRight)],
        Action::FocusUp => vec![Msg::Ui(UiMsg::FocusUp)],
        Action::FocusDown => vec![Msg::Ui(UiMsg::FocusDown)],
        Action::Grab => translate_grab_key(state),
        Action::Drop => vec![],
        Action::Cancel => vec![Msg::System(SystemMsg::ClearStatusMessage)],
        Action::NewCard => vec![Msg::Ui(UiMsg::StartComposing)],
    }
}

/// Pick up the focused card, or explain why nothing happened
fn translate_grab_key(state: &AppState) -> Vec<Msg> {
    let board = state.board.get();
    match state.ui.focused_card_id(board) {
        Some(card_id) => {
            let content = board
                .card(card_id)
                .map_or(card_id.as_str(), |card| card.content.as_str());
            vec![
                Msg::Ui(UiMsg::StartDrag),
                Msg::System(SystemMsg::status("Holding", content)),
            ]
        }
        None => vec![Msg::System(SystemMsg::status(
            "Info",
            "No card to pick up in this column",
        ))],
    }
}
