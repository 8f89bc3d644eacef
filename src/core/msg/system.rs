use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Suspend,
    Resume,
    Resize(u16, u16),

    // Status management
    UpdateStatusMessage { label: String, message: String },
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    pub fn status(label: impl Into<String>, message: impl Into<String>) -> Self {
        SystemMsg::UpdateStatusMessage {
            label: label.into(),
            message: message.into(),
        }
    }
}
