//! Error types for editing operations

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    #[error("Unknown emoji: {0}")]
    UnknownEmoji(String),

    #[error("Range {from}..{to} is out of range for {len} units")]
    OutOfRange { from: usize, to: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, EditError>;
