//! Token stream to rich text

use crate::{scan, Token};
use emoji_model::{EmojiRegistry, RichText, Unit};

/// Build rich text from scanned tokens
///
/// Literal runs become one text unit per grapheme cluster and every emoji
/// reference becomes exactly one emoji unit. A reference the registry cannot
/// resolve degrades to its literal shortcode text.
pub fn build<'a>(tokens: impl IntoIterator<Item = Token<'a>>, registry: &EmojiRegistry) -> RichText {
    let mut units = Vec::new();
    for token in tokens {
        match token {
            Token::Literal(text) => units.extend(Unit::graphemes(text)),
            Token::EmojiRef(name) => match registry.lookup(name) {
                Some(descriptor) => units.push(Unit::emoji(descriptor.clone())),
                None => {
                    let shortcode = registry.syntax().shortcode(name);
                    units.extend(Unit::graphemes(&shortcode));
                }
            },
        }
    }
    RichText::from_units(units)
}

/// Scan and build in one step
pub fn parse(text: &str, registry: &EmojiRegistry) -> RichText {
    build(scan(text, registry), registry)
}
