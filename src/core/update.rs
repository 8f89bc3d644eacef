use crate::core::{
    cmd::Cmd,
    msg::{board::BoardMsg, system::SystemMsg, ui::UiMsg, Msg},
    state::AppState,
    textarea_engine::{NoopTextAreaEngine, TextAreaEngine},
};

/// Collaborators the pure update path may consult
pub struct UpdateContext<'a> {
    pub text_area: &'a dyn TextAreaEngine,
}

/// Elm-like update function
/// Returns new state and list of commands from current state and message.
/// Text editing is skipped; use [`update_with_context`] to route keys to a
/// real textarea engine.
pub fn update(msg: Msg, state: AppState) -> (AppState, Vec<Cmd>) {
    update_with_context(
        msg,
        state,
        &UpdateContext {
            text_area: &NoopTextAreaEngine,
        },
    )
}

pub fn update_with_context(
    msg: Msg,
    mut state: AppState,
    ctx: &UpdateContext<'_>,
) -> (AppState, Vec<Cmd>) {
    match msg {
        // System messages (delegated to SystemState)
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }

        // Board messages from outside the keyboard drag session
        Msg::Board(board_msg) => {
            if matches!(board_msg, BoardMsg::CardDropped(_)) {
                // A foreign drop can invalidate the held card's source slot.
                state.ui.drag = None;
            }
            let commands = apply_board_msg(&mut state, board_msg);
            (state, commands)
        }

        Msg::Ui(UiMsg::ReleaseDrag) => {
            let Some(session) = state.ui.drag.take() else {
                return (state, vec![]);
            };
            let commands = apply_board_msg(&mut state, BoardMsg::CardDropped(session.release()));
            (state, commands)
        }

        Msg::Ui(UiMsg::CancelDrag) => {
            let Some(session) = state.ui.drag.take() else {
                return (state, vec![]);
            };
            let mut commands = apply_board_msg(&mut state, BoardMsg::CardDropped(session.cancel()));
            commands.extend(state.system.update(SystemMsg::ClearStatusMessage));
            (state, commands)
        }

        Msg::Ui(UiMsg::SubmitCard) => {
            let Some(column_id) = state.ui.composing.take() else {
                return (state, vec![]);
            };
            let content = state
                .ui
                .draft(&column_id)
                .map(|draft| draft.content.clone())
                .unwrap_or_default();
            let mut commands =
                apply_board_msg(&mut state, BoardMsg::CardAdded { column_id, content });
            // Leaving composing mode needs a redraw even when nothing was added.
            commands.push(Cmd::RequestRender);
            (state, commands)
        }

        // Focus, drag hover and draft editing (delegated to UiState)
        Msg::Ui(ui_msg) => {
            let commands = state.ui.update(ui_msg, state.board.get(), ctx.text_area);
            (state, commands)
        }
    }
}

/// Apply a board change and keep focus, drafts and status in step with it
fn apply_board_msg(state: &mut AppState, msg: BoardMsg) -> Vec<Cmd> {
    match msg {
        BoardMsg::CardDropped(drag) => {
            let card_id = drag.draggable_id.clone();
            let destination = drag.destination.clone();
            let mut commands = state.board.update(BoardMsg::CardDropped(drag));

            let board = state.board.get();
            if !commands.is_empty() {
                if let (Some(card), Some(destination)) = (board.card(&card_id), destination) {
                    let column = board
                        .column(&destination.droppable_id)
                        .map_or(destination.droppable_id.as_str(), |c| c.title.as_str());
                    let message = format!("{} to {column}", card.content);
                    commands.extend(state.system.update(SystemMsg::status("Moved", message)));
                }
                // Focus follows the card only when it actually moved.
                state.ui.focus_card(board, &card_id);
            }
            state.ui.clamp_focus(board);
            commands.push(Cmd::RequestRender);
            commands
        }

        BoardMsg::CardAdded { column_id, content } => {
            let mut commands = state.board.update(BoardMsg::CardAdded {
                column_id: column_id.clone(),
                content: content.clone(),
            });
            if commands.is_empty() {
                return commands;
            }

            state.ui.clear_draft(&column_id);
            let board = state.board.get();
            if let Some(card_id) = board.column(&column_id).and_then(|c| c.card_ids.last()) {
                state.ui.focus_card(board, card_id);
            }
            commands.extend(state.system.update(SystemMsg::status("Added", content)));
            commands
        }
    }
}
