//! Notifications fired after successful edits

use serde::{Deserialize, Serialize};

/// An edit notification
///
/// Events are delivered synchronously, in the order they are listed here,
/// after the mutation that caused them has been fully applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum EditEvent {
    /// The buffer content changed
    TextChanged { text: String, length: usize },
    /// An emoji was inserted by name
    EmojiInserted { name: String, text: String },
    /// The caret or selection moved
    SelectionChanged { anchor: usize, head: usize },
}

/// Callback receiving edit events
pub type EditListener = Box<dyn Fn(&EditEvent) + Send + Sync>;
