use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pretty_assertions::assert_eq;

use kanban_tui::{
    core::msg::{board::BoardMsg, system::SystemMsg, ui::UiMsg},
    domain::{
        board::{Board, CardId, ColumnId},
        drag::{DragEnd, DraggableLocation},
    },
    infrastructure::config::Config,
    update, AppState, Cmd, Msg, RawMsg, Runtime, VERSION,
};

fn ids(board: &Board, column: &str) -> Vec<String> {
    board
        .cards_in(&ColumnId::from(column))
        .iter()
        .map(|card| card.id.to_string())
        .collect()
}

fn drop(card: &str, from: (&str, usize), to: Option<(&str, usize)>) -> Msg {
    Msg::Board(BoardMsg::CardDropped(DragEnd::new(
        CardId::from(card),
        DraggableLocation::new(ColumnId::from(from.0), from.1),
        to.map(|(column, index)| DraggableLocation::new(ColumnId::from(column), index)),
    )))
}

fn key(code: KeyCode) -> RawMsg {
    RawMsg::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn chars(text: &str) -> impl Iterator<Item = RawMsg> + '_ {
    text.chars().map(|c| key(KeyCode::Char(c)))
}

#[test]
fn test_move_card_across_columns() {
    let (state, cmds) = update(
        drop("card-2", ("column-1", 1), Some(("column-3", 0))),
        AppState::default(),
    );

    let board = state.board.get();
    assert_eq!(ids(board, "column-1"), vec!["card-1"]);
    assert_eq!(ids(board, "column-2"), vec!["card-3"]);
    assert_eq!(ids(board, "column-3"), vec!["card-2"]);
    assert!(cmds.contains(&Cmd::RequestRender));
    assert_eq!(
        state.system.status_message.as_deref(),
        Some("[Moved] Task 2 to Done")
    );
}

#[test]
fn test_drop_on_own_slot_leaves_board_unchanged() {
    let before = AppState::default();
    let board = before.board.get().clone();

    let (state, _) = update(drop("card-1", ("column-1", 0), Some(("column-1", 0))), before);

    assert_eq!(state.board.get(), &board);
    assert!(state.board.get().same_allocation(&board));
    assert_eq!(state.system.status_message, None);
}

#[test]
fn test_drop_outside_any_column_is_ignored() {
    let before = AppState::default();
    let board = before.board.get().clone();

    let (state, _) = update(drop("card-3", ("column-2", 0), None), before);

    assert_eq!(state.board.get(), &board);
}

#[test]
fn test_move_within_column_and_back() {
    let state = AppState::default();
    let original = state.board.get().clone();

    let (state, _) = update(drop("card-1", ("column-1", 0), Some(("column-1", 1))), state);
    assert_eq!(ids(state.board.get(), "column-1"), vec!["card-2", "card-1"]);

    let (state, _) = update(drop("card-1", ("column-1", 1), Some(("column-1", 0))), state);
    assert_eq!(state.board.get(), &original);
}

#[test]
fn test_add_card_to_empty_column() {
    let (state, _) = update(
        Msg::Board(BoardMsg::CardAdded {
            column_id: ColumnId::from("column-3"),
            content: "Task 4".into(),
        }),
        AppState::default(),
    );

    let board = state.board.get();
    assert_eq!(ids(board, "column-3"), vec!["card-4"]);
    assert_eq!(
        board.card(&CardId::from("card-4")).map(|c| c.content.as_str()),
        Some("Task 4")
    );
    assert_eq!(board.card_count(), 4);
    assert_eq!(ids(board, "column-1"), vec!["card-1", "card-2"]);
}

#[test]
fn test_compose_and_submit_through_runtime() {
    let mut runtime = Runtime::new(AppState::new_with_config(Config::embedded().unwrap()).unwrap());

    // Focus "Done", open its input, type and submit.
    runtime.send_raw_msg(key(KeyCode::Char('l')));
    runtime.send_raw_msg(key(KeyCode::Char('l')));
    runtime.send_raw_msg(key(KeyCode::Char('a')));
    chars("Ship it").for_each(|raw| runtime.send_raw_msg(raw));
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.run_update_cycle();

    let state = runtime.state();
    let board = state.board.get();
    assert_eq!(ids(board, "column-3"), vec!["card-4"]);
    assert_eq!(
        board.card(&CardId::from("card-4")).map(|c| c.content.as_str()),
        Some("Ship it")
    );
    assert!(state.ui.is_normal());
    assert_eq!(state.ui.draft(&ColumnId::from("column-3")), None);
    assert_eq!(state.ui.focused_card_id(board), Some(&CardId::from("card-4")));
}

#[test]
fn test_cancelled_draft_survives_until_submitted() {
    let mut runtime = Runtime::new(AppState::new_with_config(Config::embedded().unwrap()).unwrap());

    runtime.send_raw_msg(key(KeyCode::Char('a')));
    chars("half").for_each(|raw| runtime.send_raw_msg(raw));
    runtime.send_raw_msg(key(KeyCode::Esc));
    runtime.run_update_cycle();

    assert!(runtime.state().ui.is_normal());
    assert_eq!(
        runtime
            .state()
            .ui
            .draft(&ColumnId::from("column-1"))
            .map(|d| d.content.as_str()),
        Some("half")
    );

    runtime.send_raw_msg(key(KeyCode::Char('a')));
    chars(" done").for_each(|raw| runtime.send_raw_msg(raw));
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.run_update_cycle();

    let board = runtime.state().board.get();
    assert_eq!(ids(board, "column-1"), vec!["card-1", "card-2", "card-4"]);
    assert_eq!(
        board.card(&CardId::from("card-4")).map(|c| c.content.as_str()),
        Some("half done")
    );
}

#[test]
fn test_line_break_key_submits_single_line_card() {
    let mut runtime = Runtime::new(AppState::new_with_config(Config::embedded().unwrap()).unwrap());

    runtime.send_raw_msg(key(KeyCode::Char('a')));
    runtime.send_raw_msg(key(KeyCode::Char('x')));
    runtime.send_raw_msg(RawMsg::Key(KeyEvent::new(
        KeyCode::Char('m'),
        KeyModifiers::CONTROL,
    )));
    runtime.send_raw_msg(key(KeyCode::Char('y')));
    runtime.send_raw_msg(key(KeyCode::Enter));
    runtime.run_update_cycle();

    let state = runtime.state();
    let board = state.board.get();
    assert_eq!(ids(board, "column-1"), vec!["card-1", "card-2", "card-4"]);
    assert_eq!(
        board.card(&CardId::from("card-4")).map(|c| c.content.as_str()),
        Some("x")
    );
    assert!(board
        .columns_in_order()
        .flat_map(|column| board.cards_in(&column.id))
        .all(|card| !card.content.contains('\n')));
    assert!(state.ui.is_normal());
}

#[test]
fn test_empty_submit_adds_empty_card() {
    let state = update(Msg::Ui(UiMsg::StartComposing), AppState::default()).0;
    let (state, _) = update(Msg::Ui(UiMsg::SubmitCard), state);

    let board = state.board.get();
    assert_eq!(ids(board, "column-1"), vec!["card-1", "card-2", "card-4"]);
    assert_eq!(
        board.card(&CardId::from("card-4")).map(|c| c.content.as_str()),
        Some("")
    );
}

#[test]
fn test_error_is_shown_in_status() {
    let (state, cmds) = update(
        Msg::System(SystemMsg::ShowError("boom".into())),
        AppState::default(),
    );
    assert_eq!(state.system.status_message.as_deref(), Some("Error: boom"));
    assert_eq!(cmds, vec![Cmd::log_error("boom"), Cmd::RequestRender]);
}

#[test]
fn test_version_info() {
    assert!(!VERSION.is_empty());
}
