//! Rich text - an ordered sequence of units

use crate::{EmojiDescriptor, Unit};
use serde::{Deserialize, Serialize};
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// A run of consecutive units of the same kind, for renderers
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Segment<'a> {
    /// Literal text formed from adjacent text units
    Text { content: String, units: Range<usize> },
    /// A single emoji at unit index `index`
    Emoji { descriptor: &'a EmojiDescriptor, index: usize },
}

/// Editable rich text
///
/// All cursor and length arithmetic is in units; no unit is ever partially
/// present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RichText {
    units: Vec<Unit>,
}

impl RichText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_units(units: impl IntoIterator<Item = Unit>) -> Self {
        Self {
            units: units.into_iter().collect(),
        }
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn units(&self) -> &[Unit] {
        &self.units
    }

    pub fn unit(&self, index: usize) -> Option<&Unit> {
        self.units.get(index)
    }

    pub fn clear(&mut self) {
        self.units.clear();
    }

    /// Insert units before `index` (clamped to the end). Returns how many
    /// units were inserted.
    pub fn insert_units(&mut self, index: usize, units: impl IntoIterator<Item = Unit>) -> usize {
        let index = index.min(self.units.len());
        let before = self.units.len();
        self.units.splice(index..index, units);
        self.units.len() - before
    }

    /// Remove the units in `range` (clamped) and return them
    pub fn remove_range(&mut self, range: Range<usize>) -> Vec<Unit> {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        self.units.drain(start..end).collect()
    }

    /// Join the text units on either side of boundary `index` if together
    /// they form a single grapheme cluster, such as a letter followed by a
    /// combining mark or `\r` followed by `\n`. Returns whether they were
    /// joined.
    pub fn join_graphemes_at(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.units.len() {
            return false;
        }
        let joined = match (&self.units[index - 1], &self.units[index]) {
            (Unit::Text { grapheme: left }, Unit::Text { grapheme: right }) => {
                let joined = format!("{}{}", left, right);
                if joined.graphemes(true).nth(1).is_some() {
                    return false;
                }
                joined
            }
            _ => return false,
        };
        self.units[index - 1] = Unit::text(joined);
        self.units.remove(index);
        true
    }

    /// Keep at most `len` units, dropping from the end
    pub fn truncate(&mut self, len: usize) {
        self.units.truncate(len);
    }

    /// A copy of the units in `range` (clamped)
    pub fn slice(&self, range: Range<usize>) -> RichText {
        let end = range.end.min(self.units.len());
        let start = range.start.min(end);
        Self::from_units(self.units[start..end].iter().cloned())
    }

    /// Number of emoji units
    pub fn emoji_count(&self) -> usize {
        self.units.iter().filter(|u| u.is_emoji()).count()
    }

    /// Names of the emoji units, in order
    pub fn emoji_names(&self) -> impl Iterator<Item = &str> {
        self.units.iter().filter_map(Unit::emoji_name)
    }

    /// Group units into text runs and single emojis
    pub fn segments(&self) -> Vec<Segment<'_>> {
        let mut segments = Vec::new();
        let mut run = String::new();
        let mut run_start = 0;

        for (index, unit) in self.units.iter().enumerate() {
            match unit {
                Unit::Text { grapheme } => {
                    if run.is_empty() {
                        run_start = index;
                    }
                    run.push_str(grapheme);
                }
                Unit::Emoji { descriptor } => {
                    if !run.is_empty() {
                        segments.push(Segment::Text {
                            content: std::mem::take(&mut run),
                            units: run_start..index,
                        });
                    }
                    segments.push(Segment::Emoji { descriptor, index });
                }
            }
        }

        if !run.is_empty() {
            segments.push(Segment::Text {
                content: run,
                units: run_start..self.units.len(),
            });
        }

        segments
    }

    /// Unit ranges of each line, excluding the line-break units themselves
    pub fn lines(&self) -> Vec<Range<usize>> {
        let mut lines = Vec::new();
        let mut start = 0;
        for (index, unit) in self.units.iter().enumerate() {
            if unit.is_line_break() {
                lines.push(start..index);
                start = index + 1;
            }
        }
        lines.push(start..self.units.len());
        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave() -> Unit {
        Unit::emoji(EmojiDescriptor::new("wave", "wave.gif", true))
    }

    fn sample() -> RichText {
        let mut text = RichText::from_units(Unit::graphemes("hi "));
        text.insert_units(3, [wave()]);
        text.insert_units(4, Unit::graphemes("!"));
        text
    }

    #[test]
    fn test_insert_and_len() {
        let text = sample();
        assert_eq!(text.len(), 5);
        assert!(text.unit(3).unwrap().is_emoji());
        assert_eq!(text.emoji_count(), 1);
        assert_eq!(text.emoji_names().collect::<Vec<_>>(), vec!["wave"]);
    }

    #[test]
    fn test_insert_clamps_index() {
        let mut text = sample();
        let inserted = text.insert_units(100, Unit::graphemes("ab"));
        assert_eq!(inserted, 2);
        assert_eq!(text.len(), 7);
        assert_eq!(text.unit(6), Some(&Unit::text("b")));
    }

    #[test]
    fn test_remove_range_removes_whole_emoji() {
        let mut text = sample();
        let removed = text.remove_range(3..4);
        assert_eq!(removed, vec![wave()]);
        assert_eq!(text.len(), 4);
        assert_eq!(text.emoji_count(), 0);
    }

    #[test]
    fn test_remove_range_clamps() {
        let mut text = sample();
        assert!(text.remove_range(10..20).is_empty());
        assert_eq!(text.remove_range(4..99).len(), 1);
        assert_eq!(text.len(), 4);
    }

    #[test]
    fn test_segments() {
        let text = sample();
        let segments = text.segments();
        assert_eq!(segments.len(), 3);
        assert_eq!(
            segments[0],
            Segment::Text {
                content: "hi ".to_string(),
                units: 0..3
            }
        );
        assert!(matches!(segments[1], Segment::Emoji { index: 3, .. }));
        assert_eq!(
            segments[2],
            Segment::Text {
                content: "!".to_string(),
                units: 4..5
            }
        );
    }

    #[test]
    fn test_lines() {
        let mut text = RichText::from_units(Unit::graphemes("ab\n"));
        text.insert_units(3, [wave()]);
        assert_eq!(text.lines(), vec![0..2, 3..4]);
        assert_eq!(RichText::new().lines(), vec![0..0]);
    }

    #[test]
    fn test_join_graphemes_at() {
        let mut text = RichText::from_units([Unit::text("e"), Unit::text("\u{301}"), Unit::text("x")]);
        assert!(!text.join_graphemes_at(2));
        assert!(text.join_graphemes_at(1));
        assert_eq!(text.units(), &[Unit::text("e\u{301}"), Unit::text("x")]);

        let mut text = RichText::from_units([Unit::text("\r"), Unit::text("\n")]);
        assert!(text.join_graphemes_at(1));
        assert_eq!(text.lines(), vec![0..0, 1..1]);
    }

    #[test]
    fn test_join_graphemes_skips_emoji_and_edges() {
        let mut text = RichText::from_units([wave(), Unit::text("\u{301}")]);
        assert!(!text.join_graphemes_at(1));
        assert!(!text.join_graphemes_at(0));
        assert!(!text.join_graphemes_at(2));
        assert_eq!(text.len(), 2);
    }

    #[test]
    fn test_slice() {
        let text = sample();
        let slice = text.slice(2..4);
        assert_eq!(slice.len(), 2);
        assert!(slice.unit(1).unwrap().is_emoji());
        assert_eq!(text.slice(4..2).len(), 0);
    }
}
