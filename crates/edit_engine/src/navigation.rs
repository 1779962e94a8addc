//! Caret navigation and single-unit deletion
//!
//! Movement and deletion step one unit at a time, so an emoji is always
//! crossed or removed as a whole.

use crate::{EditEngine, Result};
use emoji_model::Selection;

/// Direction of a one-unit step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl EditEngine {
    /// Move the caret one unit. With `extend`, the head moves and the anchor
    /// stays; otherwise a non-empty selection collapses to its edge in the
    /// direction of travel.
    pub fn move_caret(&mut self, direction: Direction, extend: bool) -> Selection {
        let selection = self.selection();
        let len = self.length();

        let target = if !extend && !selection.is_collapsed() {
            let edge = match direction {
                Direction::Backward => selection.start(),
                Direction::Forward => selection.end(),
            };
            Selection::collapsed(edge)
        } else {
            let head = match direction {
                Direction::Backward => selection.head.saturating_sub(1),
                Direction::Forward => (selection.head + 1).min(len),
            };
            if extend {
                selection.extend_to(head)
            } else {
                Selection::collapsed(head)
            }
        };

        self.set_selection(to_signed(target.anchor), to_signed(target.head))
    }

    pub fn move_left(&mut self, extend: bool) -> Selection {
        self.move_caret(Direction::Backward, extend)
    }

    pub fn move_right(&mut self, extend: bool) -> Selection {
        self.move_caret(Direction::Forward, extend)
    }

    /// Move the caret to the start or end of the buffer
    pub fn move_to_edge(&mut self, direction: Direction, extend: bool) -> Selection {
        let position = match direction {
            Direction::Backward => 0,
            Direction::Forward => self.length(),
        };
        let anchor = if extend { self.selection().anchor } else { position };
        self.set_selection(to_signed(anchor), to_signed(position))
    }

    pub fn select_all(&mut self) -> Selection {
        self.set_selection(0, to_signed(self.length()))
    }

    /// Backspace: delete the selection, or the unit before the caret
    pub fn delete_backward(&mut self) -> Result<usize> {
        let selection = self.selection();
        if !selection.is_collapsed() {
            return self.delete_range(selection.start(), selection.end());
        }
        match selection.head {
            0 => Ok(0),
            head => self.delete_range(head - 1, head),
        }
    }

    /// Delete: delete the selection, or the unit after the caret
    pub fn delete_forward(&mut self) -> Result<usize> {
        let selection = self.selection();
        if !selection.is_collapsed() {
            return self.delete_range(selection.start(), selection.end());
        }
        self.delete_range(selection.head, selection.head + 1)
    }
}

fn to_signed(index: usize) -> isize {
    isize::try_from(index).unwrap_or(isize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use emoji_model::{EmojiConfig, EmojiRegistry};
    use std::sync::Arc;

    fn engine_with(text: &str) -> EditEngine {
        let registry = Arc::new(EmojiRegistry::register(
            &EmojiConfig::new().with_emoji("wave", "wave.gif", true),
        ));
        let mut engine = EditEngine::new(registry);
        engine.replace_all(text);
        engine
    }

    #[test]
    fn test_backspace_removes_whole_emoji() {
        let mut engine = engine_with("hi :wave:");
        assert_eq!(engine.length(), 4);

        assert_eq!(engine.delete_backward(), Ok(1));
        assert_eq!(engine.plain_text(), "hi ");
        assert_eq!(engine.selection(), Selection::collapsed(3));
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut engine = engine_with("ab");
        engine.set_selection(0, 0);
        assert_eq!(engine.delete_backward(), Ok(0));
        assert_eq!(engine.plain_text(), "ab");
    }

    #[test]
    fn test_delete_forward_removes_whole_emoji() {
        let mut engine = engine_with(":wave:x");
        engine.set_selection(0, 0);
        assert_eq!(engine.delete_forward(), Ok(1));
        assert_eq!(engine.plain_text(), "x");

        engine.set_selection(1, 1);
        assert_eq!(engine.delete_forward(), Ok(0));
    }

    #[test]
    fn test_delete_selection() {
        let mut engine = engine_with("a:wave:bc");
        engine.set_selection(3, 1);
        assert_eq!(engine.delete_backward(), Ok(2));
        assert_eq!(engine.plain_text(), "ac");
        assert_eq!(engine.selection(), Selection::collapsed(1));
    }

    #[test]
    fn test_move_crosses_emoji_in_one_step() {
        let mut engine = engine_with("a:wave:b");
        engine.set_selection(1, 1);
        assert_eq!(engine.move_right(false), Selection::collapsed(2));
        assert_eq!(engine.move_left(false), Selection::collapsed(1));
    }

    #[test]
    fn test_move_clamps_at_edges() {
        let mut engine = engine_with("ab");
        assert_eq!(engine.move_right(false), Selection::collapsed(2));
        engine.set_selection(0, 0);
        assert_eq!(engine.move_left(false), Selection::collapsed(0));
    }

    #[test]
    fn test_extend_and_collapse() {
        let mut engine = engine_with("abcd");
        engine.set_selection(1, 1);
        engine.move_right(true);
        assert_eq!(engine.move_right(true), Selection::new(1, 3));
        assert_eq!(engine.move_left(false), Selection::collapsed(1));

        engine.select_all();
        assert_eq!(engine.move_right(false), Selection::collapsed(4));
    }

    #[test]
    fn test_move_to_edge() {
        let mut engine = engine_with("abcd");
        engine.set_selection(2, 2);
        assert_eq!(engine.move_to_edge(Direction::Backward, true), Selection::new(2, 0));
        assert_eq!(engine.move_to_edge(Direction::Forward, false), Selection::collapsed(4));
    }
}
