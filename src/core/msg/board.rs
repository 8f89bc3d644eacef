use serde::{Deserialize, Serialize};

use crate::domain::{board::ColumnId, drag::DragEnd};

/// Messages that change the board itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoardMsg {
    /// A drag ended, possibly outside of any column
    CardDropped(DragEnd),
    /// A column's input was submitted
    CardAdded { column_id: ColumnId, content: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use color_eyre::Result;

    #[test]
    fn test_board_msg_serde() -> Result<()> {
        let msg = BoardMsg::CardAdded {
            column_id: ColumnId::from("column-3"),
            content: "Task 4".into(),
        };
        let s = serde_json::to_string(&msg)?;
        assert_eq!(
            s,
            r#"{"CardAdded":{"column_id":"column-3","content":"Task 4"}}"#
        );
        let back: BoardMsg = serde_json::from_str(&s)?;
        assert_eq!(msg, back);

        Ok(())
    }
}
