//! Property tests for the edit engine
//!
//! Random sequences of edits are applied to an engine and the buffer is
//! checked after every step.

use edit_engine::{EditCommand, EditEngine};
use emoji_model::{EmojiConfig, EmojiRegistry, Unit};
use proptest::prelude::*;
use std::sync::Arc;

fn registry() -> Arc<EmojiRegistry> {
    Arc::new(EmojiRegistry::register(
        &EmojiConfig::new()
            .with_emoji("wave", "wave.gif", true)
            .with_emoji("heart", "heart.png", false),
    ))
}

fn text_fragment() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(":wave:".to_string()),
        Just(":heart:".to_string()),
        Just(":nope:".to_string()),
        Just(":".to_string()),
        Just("e\u{301}".to_string()),
        "[a-z ]{1,5}",
    ]
}

fn command() -> impl Strategy<Value = EditCommand> {
    prop_oneof![
        (0usize..30, text_fragment()).prop_map(|(at, text)| EditCommand::InsertText { at, text }),
        (0usize..30, prop_oneof![Just("wave"), Just("heart")])
            .prop_map(|(at, name)| EditCommand::InsertEmoji { at, name: name.to_string() }),
        (0usize..30, 0usize..5).prop_map(|(from, n)| EditCommand::DeleteRange { from, to: from + n }),
        (-5isize..35, -5isize..35).prop_map(|(anchor, head)| EditCommand::SetSelection { anchor, head }),
        text_fragment().prop_map(|text| EditCommand::TypeText { text }),
        Just(EditCommand::DeleteBackward),
        Just(EditCommand::DeleteForward),
        Just(EditCommand::InsertEmojiAtCursor { name: "wave".to_string() }),
    ]
}

proptest! {
    #[test]
    fn prop_length_never_exceeds_max(max in 0usize..12, commands in prop::collection::vec(command(), 0..40)) {
        let mut engine = EditEngine::new(registry()).with_max_length(Some(max));
        for command in &commands {
            engine.execute(command).unwrap();
            prop_assert!(engine.length() <= max);
            prop_assert_eq!(engine.length(), engine.rich_text().units().len());
            let selection = engine.selection();
            prop_assert!(selection.anchor <= engine.length());
            prop_assert!(selection.head <= engine.length());
        }
    }

    #[test]
    fn prop_plain_text_reparses_to_same_units(commands in prop::collection::vec(command(), 0..40)) {
        let mut engine = EditEngine::new(registry());
        for command in &commands {
            engine.execute(command).unwrap();
        }
        // every emoji unit survives whole and projects to its full shortcode
        let emojis: Vec<_> = engine.rich_text().emoji_names().map(String::from).collect();
        let plain = engine.plain_text();
        for name in &emojis {
            let shortcode = format!(":{}:", name);
            prop_assert!(plain.contains(&shortcode));
        }
        prop_assert!(engine.rich_text().units().iter().all(|unit| match unit {
            Unit::Text { grapheme } => !grapheme.is_empty(),
            Unit::Emoji { descriptor } => registry().contains(&descriptor.name),
        }), "rich text contains an invalid unit");
    }

    #[test]
    fn prop_round_trip_through_replace_all(text in prop::collection::vec(text_fragment(), 0..10).prop_map(|p| p.concat())) {
        let mut engine = EditEngine::new(registry());
        engine.replace_all(&text);
        prop_assert_eq!(engine.plain_text(), text);
    }

    #[test]
    fn prop_insert_accepts_maximal_prefix(
        existing in "[a-z]{0,6}",
        inserted in prop::collection::vec(text_fragment(), 1..6).prop_map(|p| p.concat()),
        max in 0usize..10,
        at in 0usize..10,
    ) {
        let mut engine = EditEngine::new(registry()).with_max_length(Some(max));
        engine.replace_all(&existing);
        let before = engine.length();

        let parsed = shortcode::parse(&inserted, &registry());
        let accepted = engine.insert_text(at, &inserted);

        prop_assert_eq!(accepted, parsed.len().min(max - before));
        prop_assert_eq!(engine.length(), before + accepted);
    }

    #[test]
    fn prop_typing_matches_parsing_whole_text(
        pieces in prop::collection::vec(
            prop_oneof![
                Just("e"), Just("\u{301}"), Just("\r"), Just("\n"),
                Just(" "), Just("a"), Just("\u{1F44D}"), Just("\u{1F3FD}"),
            ],
            0..20,
        ),
    ) {
        let mut typed = EditEngine::new(registry());
        for piece in &pieces {
            typed.type_text(piece);
        }

        let mut parsed = EditEngine::new(registry());
        parsed.replace_all(&pieces.concat());

        prop_assert_eq!(typed.rich_text(), parsed.rich_text());
        prop_assert_eq!(typed.selection(), parsed.selection());
    }
}
