//! Serializable edit commands
//!
//! Hosts that forward named commands from a UI layer can deserialize them
//! into [`EditCommand`] and hand them to [`EditEngine::execute`].

use crate::{EditEngine, Result};
use serde::{Deserialize, Serialize};

/// A single edit operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditCommand {
    InsertText { at: usize, text: String },
    InsertEmoji { at: usize, name: String },
    DeleteRange { from: usize, to: usize },
    SetSelection { anchor: isize, head: isize },
    ReplaceAll { text: String },
    TypeText { text: String },
    InsertEmojiAtCursor { name: String },
    DeleteBackward,
    DeleteForward,
    SelectAll,
}

impl EditCommand {
    /// Get a display name for this command
    pub fn display_name(&self) -> &'static str {
        match self {
            EditCommand::InsertText { .. } => "Insert Text",
            EditCommand::InsertEmoji { .. } => "Insert Emoji",
            EditCommand::DeleteRange { .. } => "Delete",
            EditCommand::SetSelection { .. } => "Select",
            EditCommand::ReplaceAll { .. } => "Set Text",
            EditCommand::TypeText { .. } => "Typing",
            EditCommand::InsertEmojiAtCursor { .. } => "Insert Emoji",
            EditCommand::DeleteBackward => "Backspace",
            EditCommand::DeleteForward => "Delete",
            EditCommand::SelectAll => "Select All",
        }
    }
}

impl EditEngine {
    /// Execute a command
    ///
    /// Only `InsertEmoji`, `InsertEmojiAtCursor` and an inverted
    /// `DeleteRange` can fail; a rejected or empty edit is not an error.
    pub fn execute(&mut self, command: &EditCommand) -> Result<()> {
        tracing::trace!("Executing {}", command.display_name());
        match command {
            EditCommand::InsertText { at, text } => {
                self.insert_text(*at, text);
            }
            EditCommand::InsertEmoji { at, name } => {
                self.insert_emoji(*at, name)?;
            }
            EditCommand::DeleteRange { from, to } => {
                self.delete_range(*from, *to)?;
            }
            EditCommand::SetSelection { anchor, head } => {
                self.set_selection(*anchor, *head);
            }
            EditCommand::ReplaceAll { text } => {
                self.replace_all(text);
            }
            EditCommand::TypeText { text } => {
                self.type_text(text);
            }
            EditCommand::InsertEmojiAtCursor { name } => {
                self.insert_emoji_at_cursor(name)?;
            }
            EditCommand::DeleteBackward => {
                self.delete_backward()?;
            }
            EditCommand::DeleteForward => {
                self.delete_forward()?;
            }
            EditCommand::SelectAll => {
                self.select_all();
            }
        }
        Ok(())
    }
}
