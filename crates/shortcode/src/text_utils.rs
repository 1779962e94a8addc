//! Plain-text helpers for shortcode strings
//!
//! These operate directly on canonical plain text, for hosts that need
//! counts or cleaned-up strings without holding an editor.

use crate::{match_shortcode, parse, project, scan, Token};
use emoji_model::{EmojiRegistry, ShortcodeSyntax};
use std::collections::HashMap;
use unicode_segmentation::UnicodeSegmentation;

/// All delimiter-bounded names in `text`, registered or not
///
/// Matches are non-overlapping: a matched closing delimiter is consumed.
pub fn extract_shortcode_names(text: &str, syntax: ShortcodeSyntax) -> Vec<&str> {
    let mut names = Vec::new();
    let mut pos = 0;
    while let Some(c) = text[pos..].chars().next() {
        if c == syntax.open {
            if let Some((name, end)) = match_shortcode(text, pos, syntax) {
                names.push(name);
                pos = end;
                continue;
            }
        }
        pos += c.len_utf8();
    }
    names
}

/// Number of shortcodes in `text` that resolve in `registry`
pub fn count_emojis(text: &str, registry: &EmojiRegistry) -> usize {
    scan(text, registry)
        .filter(|token| matches!(token, Token::EmojiRef(_)))
        .count()
}

/// Replace every resolved shortcode with `replacement`
pub fn strip_emojis(text: &str, registry: &EmojiRegistry, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for token in scan(text, registry) {
        match token {
            Token::Literal(literal) => out.push_str(literal),
            Token::EmojiRef(_) => out.push_str(replacement),
        }
    }
    out
}

/// Replace resolved shortcodes that have an entry in `replacements`.
/// Other shortcodes are kept as they are.
pub fn replace_emojis(
    text: &str,
    registry: &EmojiRegistry,
    replacements: &HashMap<&str, &str>,
) -> String {
    let syntax = registry.syntax();
    let mut out = String::with_capacity(text.len());
    for token in scan(text, registry) {
        match token {
            Token::Literal(literal) => out.push_str(literal),
            Token::EmojiRef(name) => match replacements.get(name) {
                Some(replacement) => out.push_str(replacement),
                None => out.push_str(&syntax.shortcode(name)),
            },
        }
    }
    out
}

/// Remove the delimiters from bounded names that are not registered,
/// keeping the bare name; registered shortcodes are left untouched
///
/// The closing delimiter of an unregistered name is kept when it opens a
/// registered shortcode, the same way the scanner reads it.
pub fn clean_invalid_shortcodes(text: &str, registry: &EmojiRegistry) -> String {
    let syntax = registry.syntax();
    let registered_at = |pos: usize| {
        match_shortcode(text, pos, syntax).filter(|(name, _)| registry.contains(name))
    };

    let mut out = String::with_capacity(text.len());
    let mut pos = 0;
    while let Some(c) = text[pos..].chars().next() {
        if c == syntax.open {
            if let Some((name, end)) = match_shortcode(text, pos, syntax) {
                if registry.contains(name) {
                    out.push_str(&text[pos..end]);
                    pos = end;
                } else {
                    out.push_str(name);
                    let close = end - syntax.close.len_utf8();
                    pos = if registered_at(close).is_some() { close } else { end };
                }
                continue;
            }
        }
        out.push(c);
        pos += c.len_utf8();
    }
    out
}

/// Whether the delimiters in `text` are well formed.
///
/// With distinct open and close delimiters every opener must be closed
/// before the next one and no closer may appear unopened. With a shared
/// delimiter the count must be even.
pub fn validate_text_format(text: &str, syntax: ShortcodeSyntax) -> bool {
    if syntax.open == syntax.close {
        return text.chars().filter(|&c| c == syntax.open).count() % 2 == 0;
    }

    let mut open = false;
    for c in text.chars() {
        if c == syntax.open {
            if open {
                return false;
            }
            open = true;
        } else if c == syntax.close {
            if !open {
                return false;
            }
            open = false;
        }
    }
    !open
}

/// Length of `text` in units: graphemes plus one per resolved shortcode
pub fn display_length(text: &str, registry: &EmojiRegistry) -> usize {
    scan(text, registry)
        .map(|token| match token {
            Token::Literal(literal) => literal.graphemes(true).count(),
            Token::EmojiRef(_) => 1,
        })
        .sum()
}

/// Longest prefix of `text` that is at most `max_units` units long,
/// never cutting through a shortcode or grapheme
pub fn truncate(text: &str, max_units: usize, registry: &EmojiRegistry) -> String {
    let mut rich = parse(text, registry);
    if rich.len() <= max_units {
        return text.to_string();
    }
    rich.truncate(max_units);
    project(&rich, registry.syntax())
}
