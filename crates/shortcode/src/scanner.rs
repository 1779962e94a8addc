//! Shortcode scanner
//!
//! Scans plain text left to right and yields literal runs and references to
//! registered emojis. Matching is leftmost-first and non-overlapping. A
//! delimiter that does not start a registered shortcode is literal text and
//! scanning resumes at the following character, so the closing delimiter of
//! an unknown name can still open the next shortcode (`10:30:wave:` yields
//! `10:30` and `wave`).

use emoji_model::{EmojiRegistry, ShortcodeSyntax};
use serde::Serialize;

/// A scanned token. Both variants borrow from the scanned text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum Token<'a> {
    /// A maximal run of literal text
    Literal(&'a str),
    /// The name of a registered emoji, without delimiters
    EmojiRef(&'a str),
}

/// Match a delimited shortcode at byte offset `start`.
///
/// Returns the bounded name and the byte offset just past the closing
/// delimiter. Names are non-empty and consist of name characters only.
pub fn match_shortcode(text: &str, start: usize, syntax: ShortcodeSyntax) -> Option<(&str, usize)> {
    let rest = text.get(start..)?;
    let mut chars = rest.char_indices();
    let (_, first) = chars.next()?;
    if first != syntax.open {
        return None;
    }

    let name_start = start + first.len_utf8();
    for (offset, c) in chars {
        if c == syntax.close {
            let name_end = start + offset;
            if name_end == name_start {
                return None;
            }
            return Some((&text[name_start..name_end], name_end + c.len_utf8()));
        }
        if !ShortcodeSyntax::is_name_char(c) {
            return None;
        }
    }
    None
}

/// Lazy token iterator over a string
///
/// Created by [`scan`]. Cloning a scanner (or calling [`scan`] again) gives
/// an independent sequence over the same input.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    text: &'a str,
    registry: &'a EmojiRegistry,
    syntax: ShortcodeSyntax,
    pos: usize,
    pending: Option<Token<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str, registry: &'a EmojiRegistry) -> Self {
        Self {
            text,
            registry,
            syntax: registry.syntax(),
            pos: 0,
            pending: None,
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        if let Some(token) = self.pending.take() {
            return Some(token);
        }

        let text = self.text;
        if self.pos >= text.len() {
            return None;
        }

        let literal_start = self.pos;
        let mut cursor = self.pos;
        while let Some(c) = text[cursor..].chars().next() {
            if c == self.syntax.open {
                if let Some((name, end)) = match_shortcode(text, cursor, self.syntax) {
                    if self.registry.contains(name) {
                        self.pos = end;
                        let emoji = Token::EmojiRef(name);
                        if cursor > literal_start {
                            self.pending = Some(emoji);
                            return Some(Token::Literal(&text[literal_start..cursor]));
                        }
                        return Some(emoji);
                    }
                }
            }
            cursor += c.len_utf8();
        }

        self.pos = text.len();
        Some(Token::Literal(&text[literal_start..]))
    }
}

/// Scan `text` against `registry`
pub fn scan<'a>(text: &'a str, registry: &'a EmojiRegistry) -> Scanner<'a> {
    Scanner::new(text, registry)
}
