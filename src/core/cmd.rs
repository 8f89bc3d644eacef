use serde::{Deserialize, Serialize};

/// UI (TUI) specific sub-commands executed by the host/runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TuiCommand {
    // Render requests go through Cmd::RequestRender and are coalesced by AppRunner.
    Resize { width: u16, height: u16 },
}

/// Elm-like command definitions
/// Represents side effects the update function wants the host to perform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cmd {
    // UI-related commands
    Tui(TuiCommand),
    /// Request a render; delivered via render_req_sender and coalesced by AppRunner
    RequestRender,

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },
}

impl Cmd {
    pub fn log_info(message: impl Into<String>) -> Cmd {
        Cmd::LogInfo {
            message: message.into(),
        }
    }

    pub fn log_error(message: impl Into<String>) -> Cmd {
        Cmd::LogError {
            message: message.into(),
        }
    }

    /// Human-readable name used in execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::RequestRender => "RequestRender".to_string(),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Tui(TuiCommand::Resize { .. }) => "Tui(Resize)".to_string(),
        }
    }
}
