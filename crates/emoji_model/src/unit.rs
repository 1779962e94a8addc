//! Units - the atoms of a rich-text buffer

use crate::{EmojiDescriptor, ShortcodeSyntax};
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

/// One addressable element of a [`RichText`](crate::RichText)
///
/// Every unit has length 1 for cursor and length arithmetic, whatever it
/// serializes to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Unit {
    /// A single grapheme cluster of literal text
    Text { grapheme: String },
    /// An inline emoji image
    Emoji { descriptor: EmojiDescriptor },
}

impl Unit {
    /// Create a text unit. `grapheme` should be exactly one grapheme cluster.
    pub fn text(grapheme: impl Into<String>) -> Self {
        Unit::Text {
            grapheme: grapheme.into(),
        }
    }

    /// Create an emoji unit
    pub fn emoji(descriptor: EmojiDescriptor) -> Self {
        Unit::Emoji { descriptor }
    }

    /// Split literal text into one unit per grapheme cluster
    pub fn graphemes(text: &str) -> impl Iterator<Item = Unit> + '_ {
        text.graphemes(true).map(Unit::text)
    }

    pub fn is_emoji(&self) -> bool {
        matches!(self, Unit::Emoji { .. })
    }

    /// Emoji name, for emoji units
    pub fn emoji_name(&self) -> Option<&str> {
        match self {
            Unit::Emoji { descriptor } => Some(&descriptor.name),
            Unit::Text { .. } => None,
        }
    }

    /// Whether this unit is a line break
    pub fn is_line_break(&self) -> bool {
        match self {
            Unit::Text { grapheme } => matches!(grapheme.as_str(), "\n" | "\r\n" | "\r"),
            Unit::Emoji { .. } => false,
        }
    }

    /// Append the canonical plain-text form of this unit to `out`
    pub fn write_plain(&self, syntax: ShortcodeSyntax, out: &mut String) {
        match self {
            Unit::Text { grapheme } => out.push_str(grapheme),
            Unit::Emoji { descriptor } => {
                out.push(syntax.open);
                out.push_str(&descriptor.name);
                out.push(syntax.close);
            }
        }
    }
}
