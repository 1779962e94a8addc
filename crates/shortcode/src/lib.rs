//! Shortcode - scanning and plain-text / rich-text conversion
//!
//! This crate turns plain text containing emoji shortcodes into unit-based
//! rich text and back again.
//!
//! # Modules
//!
//! - `scanner`: Lazy tokenizer for delimited shortcodes
//! - `builder`: Token stream to rich text
//! - `projector`: Rich text to canonical plain text
//! - `text_utils`: Counting, stripping, and truncating shortcode strings

mod scanner;
mod builder;
mod projector;
pub mod text_utils;

pub use scanner::*;
pub use builder::*;
pub use projector::*;

pub use text_utils::{
    clean_invalid_shortcodes, count_emojis, display_length, extract_shortcode_names,
    replace_emojis, strip_emojis, truncate, validate_text_format,
};
