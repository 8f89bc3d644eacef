use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (terminal input, host loop)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,
    Suspend,
    Resume,

    // User input
    Key(KeyEvent),
    Paste(String),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[test]
    fn test_raw_msg_frequent_detection() {
        assert!(RawMsg::Tick.is_frequent());
        assert!(RawMsg::Render.is_frequent());
        assert!(!RawMsg::Quit.is_frequent());
        assert!(!RawMsg::Key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)).is_frequent());
        assert!(!RawMsg::Paste("text".into()).is_frequent());
    }

    #[test]
    fn test_raw_msg_serialization() -> Result<()> {
        let msg = RawMsg::Error("test error".to_string());
        let serialized = serde_json::to_string(&msg)?;
        let deserialized: RawMsg = serde_json::from_str(&serialized)?;
        assert_eq!(msg, deserialized);

        Ok(())
    }
}
