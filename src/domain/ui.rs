use serde::{Deserialize, Serialize};

/// Canonical cursor position type used across UI domain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub line: usize,
    pub column: usize,
}

/// Text selection range within a draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSelection {
    pub start: CursorPosition,
    pub end: CursorPosition,
}

impl CursorPosition {
    pub fn end_of(content: &str) -> Self {
        Self {
            line: 0,
            column: content.chars().count(),
        }
    }
}
