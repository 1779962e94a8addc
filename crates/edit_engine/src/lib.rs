//! Edit Engine - atomic, emoji-aware text editing
//!
//! This crate holds the editing state of one input surface: a unit-based
//! rich-text buffer, its selection, and an optional maximum length. Every
//! edit is applied whole or not at all, and no edit ever splits an emoji.

mod executor;
mod command;
mod navigation;
mod event;
mod error;

pub use executor::*;
pub use command::*;
pub use navigation::*;
pub use event::*;
pub use error::*;
