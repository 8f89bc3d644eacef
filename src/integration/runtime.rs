use std::collections::VecDeque;

use tokio::sync::mpsc;

use crate::{
    core::{
        cmd::{Cmd, TuiCommand},
        cmd_executor::CmdExecutor,
        msg::Msg,
        raw_msg::RawMsg,
        state::AppState,
        textarea_engine::TextAreaEngine,
        translator::translate_raw_to_domain,
        update::{update_with_context, UpdateContext},
    },
    infrastructure::tui::textarea_engine::TuiTextAreaEngine,
};

static TUI_TEXTAREA_ENGINE: TuiTextAreaEngine = TuiTextAreaEngine;

/// Owns the application state and runs the translate/update/execute cycle
pub struct Runtime {
    ctx: UpdateContext<'static>,
    state: AppState,
    msg_queue: VecDeque<Msg>,
    raw_msg_queue: VecDeque<RawMsg>,
    cmd_queue: VecDeque<Cmd>,
    raw_msg_tx: mpsc::UnboundedSender<RawMsg>,
    raw_msg_rx: mpsc::UnboundedReceiver<RawMsg>,
    cmd_executor: CmdExecutor,
}

impl Runtime {
    /// Runtime editing drafts with tui-textarea
    pub fn new(initial_state: AppState) -> Self {
        Self::with_text_area(initial_state, &TUI_TEXTAREA_ENGINE)
    }

    pub fn with_text_area(initial_state: AppState, text_area: &'static dyn TextAreaEngine) -> Self {
        let (raw_msg_tx, raw_msg_rx) = mpsc::unbounded_channel();
        Self {
            ctx: UpdateContext { text_area },
            state: initial_state,
            msg_queue: VecDeque::new(),
            raw_msg_queue: VecDeque::new(),
            cmd_queue: VecDeque::new(),
            raw_msg_tx,
            raw_msg_rx,
            cmd_executor: CmdExecutor::new(),
        }
    }

    /// Route TuiCommand to the host
    pub fn set_tui_sender(&mut self, tui_sender: mpsc::UnboundedSender<TuiCommand>) {
        self.cmd_executor.set_tui_sender(tui_sender);
    }

    /// Route render requests to the host
    pub fn set_render_request_sender(&mut self, render_sender: mpsc::UnboundedSender<()>) {
        self.cmd_executor.set_render_request_sender(render_sender);
    }

    /// Get current state (read-only)
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Queue a domain message, processed after pending raw messages
    pub fn send_msg(&mut self, msg: Msg) {
        self.msg_queue.push_back(msg);
    }

    /// Queue a raw message
    pub fn send_raw_msg(&mut self, raw_msg: RawMsg) {
        self.raw_msg_queue.push_back(raw_msg);
    }

    /// Sender for raw messages produced outside the runner loop
    pub fn raw_sender(&self) -> mpsc::UnboundedSender<RawMsg> {
        self.raw_msg_tx.clone()
    }

    /// Drain commands produced since the last call
    pub fn pending_commands(&mut self) -> Vec<Cmd> {
        self.cmd_queue.drain(..).collect()
    }

    pub fn execute_pending_commands(&mut self) -> Vec<String> {
        let commands = self.pending_commands();
        if commands.is_empty() {
            return vec![];
        }
        self.cmd_executor.execute_commands(&commands)
    }

    /// Apply one domain message
    pub fn process_message(&mut self, msg: Msg) -> Vec<Cmd> {
        let state = std::mem::take(&mut self.state);
        let (new_state, commands) = update_with_context(msg, state, &self.ctx);
        self.state = new_state;
        self.cmd_queue.extend(commands.iter().cloned());
        commands
    }

    /// Translate one raw message against the current state and apply the result
    fn process_raw_message(&mut self, raw_msg: RawMsg) -> Vec<Cmd> {
        if !raw_msg.is_frequent() {
            log::debug!("raw message: {raw_msg:?}");
        }
        translate_raw_to_domain(raw_msg, &self.state)
            .into_iter()
            .flat_map(|msg| self.process_message(msg))
            .collect()
    }

    /// Process every queued message.
    ///
    /// Raw messages are translated one at a time, after the previous one was
    /// applied, so that a key that switches mode affects the next key.
    pub fn process_all_messages(&mut self) -> Vec<Cmd> {
        let mut all_commands = Vec::new();

        while let Some(raw_msg) = self.raw_msg_queue.pop_front() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        while let Ok(raw_msg) = self.raw_msg_rx.try_recv() {
            all_commands.extend(self.process_raw_message(raw_msg));
        }

        while let Some(msg) = self.msg_queue.pop_front() {
            all_commands.extend(self.process_message(msg));
        }

        all_commands
    }

    /// Process all messages and execute commands in one step
    pub fn run_update_cycle(&mut self) -> Vec<String> {
        self.process_all_messages();
        self.execute_pending_commands()
    }

    pub fn stats(&self) -> RuntimeStats {
        RuntimeStats {
            queued_messages: self.msg_queue.len(),
            queued_raw_messages: self.raw_msg_queue.len(),
            queued_commands: self.cmd_queue.len(),
            card_count: self.state.board.get().card_count(),
            mode: self.state.ui.mode().to_string(),
        }
    }
}

/// Runtime statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeStats {
    pub queued_messages: usize,
    pub queued_raw_messages: usize,
    pub queued_commands: usize,
    pub card_count: usize,
    pub mode: String,
}
