//! Property tests for the plain text / rich text round trip

use emoji_model::{EmojiConfig, EmojiRegistry, ShortcodeSyntax};
use proptest::prelude::*;
use shortcode::{display_length, parse, project, truncate};

fn registry(syntax: ShortcodeSyntax) -> EmojiRegistry {
    EmojiRegistry::register(
        &EmojiConfig::new()
            .with_emoji("wave", "wave.gif", true)
            .with_emoji("heart", "heart.png", false)
            .with_emoji("+1", "plus_one.png", false)
            .with_syntax(syntax),
    )
}

/// Text built from fragments that exercise delimiters, shortcodes, and
/// multi-codepoint graphemes
fn shortcode_text() -> impl Strategy<Value = String> {
    let fragment = prop_oneof![
        Just(":".to_string()),
        Just(":wave:".to_string()),
        Just(":heart:".to_string()),
        Just(":+1:".to_string()),
        Just(":nonexistent_xyz:".to_string()),
        Just("[wave]".to_string()),
        Just("e\u{301}".to_string()),
        Just("\r\n".to_string()),
        Just("👨‍👩‍👧".to_string()),
        "[a-z ]{0,4}",
    ];
    prop::collection::vec(fragment, 0..12).prop_map(|parts| parts.concat())
}

proptest! {
    #[test]
    fn prop_round_trip_colon(text in shortcode_text()) {
        let registry = registry(ShortcodeSyntax::COLON);
        prop_assert_eq!(project(&parse(&text, &registry), registry.syntax()), text);
    }

    #[test]
    fn prop_round_trip_bracket(text in shortcode_text()) {
        let registry = registry(ShortcodeSyntax::BRACKET);
        prop_assert_eq!(project(&parse(&text, &registry), registry.syntax()), text);
    }

    #[test]
    fn prop_round_trip_arbitrary_strings(text in any::<String>()) {
        let registry = registry(ShortcodeSyntax::COLON);
        prop_assert_eq!(project(&parse(&text, &registry), registry.syntax()), text);
    }

    #[test]
    fn prop_truncate_is_prefix_within_limit(text in shortcode_text(), max in 0usize..20) {
        let registry = registry(ShortcodeSyntax::COLON);
        let truncated = truncate(&text, max, &registry);
        prop_assert!(text.starts_with(&truncated));
        prop_assert_eq!(display_length(&truncated, &registry), max.min(display_length(&text, &registry)));
    }
}

#[test]
fn test_unknown_shortcode_stability() {
    let registry = registry(ShortcodeSyntax::COLON);
    let text = parse(":nonexistent_xyz:", &registry);
    assert_eq!(text.emoji_count(), 0);
    assert_eq!(project(&text, registry.syntax()), ":nonexistent_xyz:");
}
