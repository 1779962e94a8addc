//! Emoji Host - the adapter between a UI layer and the editing core
//!
//! Loads emoji configuration, owns open editor sessions, and pairs rendered
//! segments with image assets from a host-provided resolver.

mod error;
mod logging;
mod config_file;
mod host;
mod assets;

pub use error::*;
pub use logging::*;
pub use config_file::*;
pub use host::*;
pub use assets::*;

pub use edit_engine::{EditCommand, EditEngine, EditEvent};
pub use emoji_model::{EmojiConfig, EmojiRegistry, RichText};
