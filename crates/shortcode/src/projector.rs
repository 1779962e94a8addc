//! Rich text to canonical plain text

use emoji_model::{RichText, ShortcodeSyntax};

/// Serialize rich text to its shortcode form
///
/// Text units emit their grapheme and emoji units emit `open + name + close`.
/// For any text `t`, `project(&parse(t, r), r.syntax()) == t`.
pub fn project(text: &RichText, syntax: ShortcodeSyntax) -> String {
    let mut out = String::with_capacity(text.len());
    for unit in text.units() {
        unit.write_plain(syntax, &mut out);
    }
    out
}
