use color_eyre::eyre::Result;
use tokio::sync::mpsc;

use crate::core::cmd::{Cmd, TuiCommand};

/// Command executor that routes Elm commands to the host channels
#[derive(Clone, Default)]
pub struct CmdExecutor {
    tui_sender: Option<mpsc::UnboundedSender<TuiCommand>>,
    render_req_sender: Option<mpsc::UnboundedSender<()>>,
}

impl CmdExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject TUI command sender for executing TuiCommand asynchronously.
    pub fn set_tui_sender(&mut self, sender: mpsc::UnboundedSender<TuiCommand>) {
        self.tui_sender = Some(sender);
    }

    /// Inject render request sender for AppRunner-orchestrated rendering.
    pub fn set_render_request_sender(&mut self, sender: mpsc::UnboundedSender<()>) {
        self.render_req_sender = Some(sender);
    }

    /// Execute a single command
    pub fn execute_command(&self, cmd: &Cmd) -> Result<()> {
        match cmd {
            Cmd::RequestRender => {
                if let Some(rtx) = &self.render_req_sender {
                    let _ = rtx.send(());
                } else {
                    log::debug!("CmdExecutor: no render sender configured; dropping RequestRender");
                }
            }

            Cmd::Tui(TuiCommand::Resize { width, height }) => {
                if let Some(tx) = &self.tui_sender {
                    tx.send(TuiCommand::Resize {
                        width: *width,
                        height: *height,
                    })?;
                } else {
                    log::warn!(
                        "CmdExecutor: TUI sender not configured; dropping Resize command {width}x{height}"
                    );
                }
            }

            Cmd::LogError { message } => {
                log::error!("{message}");
            }

            Cmd::LogInfo { message } => {
                log::info!("{message}");
            }
        }

        Ok(())
    }

    /// Execute multiple commands
    pub fn execute_commands(&self, commands: &[Cmd]) -> Vec<String> {
        let mut execution_log = Vec::new();

        for cmd in commands {
            match self.execute_command(cmd) {
                Ok(()) => {
                    execution_log.push(format!("✓ Executed: {}", cmd.name()));
                }
                Err(e) => {
                    let error_msg = format!("✗ Failed to execute {}: {e}", cmd.name());
                    log::error!("{error_msg}");
                    execution_log.push(error_msg);
                }
            }
        }

        execution_log
    }
}
