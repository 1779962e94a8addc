//! The edit engine - rich-text buffer, selection, and atomic edits

use crate::{EditError, EditEvent, EditListener, Result};
use emoji_model::{EmojiRegistry, RichText, Selection, Unit};
use shortcode::{parse, project};
use std::ops::Range;
use std::sync::Arc;

/// Editing state for one input surface
///
/// Every operation either applies completely or leaves the buffer untouched.
/// Emoji units are indivisible: indices always address unit boundaries and
/// each unit, emoji or grapheme, counts as exactly one towards `length()`
/// and `max_length`.
pub struct EditEngine {
    /// Current buffer
    text: RichText,
    /// Current selection
    selection: Selection,
    /// Maximum number of units, if limited
    max_length: Option<usize>,
    /// Whether line breaks are accepted
    multiline: bool,
    /// Registry used to parse inserted text
    registry: Arc<EmojiRegistry>,
    listeners: Vec<EditListener>,
}

impl std::fmt::Debug for EditEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditEngine")
            .field("text", &self.text)
            .field("selection", &self.selection)
            .field("max_length", &self.max_length)
            .field("multiline", &self.multiline)
            .field("registry_len", &self.registry.len())
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl EditEngine {
    /// Create an engine with an empty buffer
    pub fn new(registry: Arc<EmojiRegistry>) -> Self {
        Self {
            text: RichText::new(),
            selection: Selection::default(),
            max_length: None,
            multiline: true,
            registry,
            listeners: Vec::new(),
        }
    }

    /// Limit the buffer to `max_length` units
    pub fn with_max_length(mut self, max_length: Option<usize>) -> Self {
        self.max_length = max_length;
        self
    }

    /// Accept or drop line breaks in inserted text
    pub fn with_multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    /// Register a listener for edit events
    pub fn subscribe(&mut self, listener: EditListener) {
        self.listeners.push(listener);
    }

    pub fn rich_text(&self) -> &RichText {
        &self.text
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn max_length(&self) -> Option<usize> {
        self.max_length
    }

    pub fn is_multiline(&self) -> bool {
        self.multiline
    }

    pub fn registry(&self) -> &Arc<EmojiRegistry> {
        &self.registry
    }

    /// Use a new registry for subsequent inserts. The current buffer is kept
    /// as is; call [`replace_all`](Self::replace_all) to re-parse it.
    pub fn set_registry(&mut self, registry: Arc<EmojiRegistry>) {
        self.registry = registry;
    }

    /// Number of units in the buffer
    pub fn length(&self) -> usize {
        self.text.len()
    }

    /// Canonical shortcode form of the buffer
    pub fn plain_text(&self) -> String {
        project(&self.text, self.registry.syntax())
    }

    /// The unit at `index`
    pub fn unit(&self, index: usize) -> Result<&Unit> {
        self.text.unit(index).ok_or(EditError::OutOfRange {
            from: index,
            to: index.saturating_add(1),
            len: self.text.len(),
        })
    }

    /// Parse `text` and insert it before unit `at` (clamped).
    ///
    /// When a maximum length is set, only the longest prefix of the new
    /// units that fits is inserted; existing content is never dropped.
    /// Returns the number of units inserted. The caret moves to the end of
    /// the inserted span.
    pub fn insert_text(&mut self, at: usize, text: &str) -> usize {
        let at = at.min(self.text.len());
        let units = self.parse_units(text, self.capacity(0));
        if units.is_empty() {
            tracing::trace!("insert_text at {} inserted nothing", at);
            return 0;
        }

        let before = self.text.len();
        let caret = self.splice(at..at, units);
        let inserted = self.text.len().saturating_sub(before);
        tracing::debug!("Inserted {} units at {}", inserted, at);

        self.emit_text_changed();
        self.update_selection(Selection::collapsed(caret));
        inserted
    }

    /// Insert one registered emoji before unit `at` (clamped).
    ///
    /// Fails with [`EditError::UnknownEmoji`] if the name is not registered.
    /// Returns `Ok(false)` without changing anything when the buffer is full.
    pub fn insert_emoji(&mut self, at: usize, name: &str) -> Result<bool> {
        let at = at.min(self.text.len());
        let unit = self.emoji_unit(name)?;
        if self.capacity(0) == 0 {
            tracing::debug!("Rejected emoji '{}': buffer is at max length", name);
            return Ok(false);
        }

        self.text.insert_units(at, [unit]);
        tracing::debug!("Inserted emoji '{}' at {}", name, at);

        self.emit_text_changed();
        self.emit(EditEvent::EmojiInserted {
            name: name.to_string(),
            text: self.plain_text(),
        });
        self.update_selection(Selection::collapsed(at + 1));
        Ok(true)
    }

    /// Remove the units in `[from, to)`.
    ///
    /// Both ends are clamped to the buffer; a range whose start lies after
    /// its end is rejected with [`EditError::OutOfRange`]. Returns the number
    /// of units removed.
    pub fn delete_range(&mut self, from: usize, to: usize) -> Result<usize> {
        let len = self.text.len();
        if from > to {
            return Err(EditError::OutOfRange { from, to, len });
        }
        let range = from.min(len)..to.min(len);
        if range.is_empty() {
            return Ok(0);
        }

        let removed = self.text.remove_range(range.clone()).len();
        let joined = self.text.join_graphemes_at(range.start);
        tracing::debug!("Deleted units {:?}", range);

        self.emit_text_changed();
        let map = |i: usize| {
            let i = shift_after_delete(i, &range);
            if joined && i > range.start {
                i - 1
            } else {
                i
            }
        };
        self.update_selection(Selection::new(map(self.selection.anchor), map(self.selection.head)));
        Ok(removed)
    }

    /// Move the selection. Both ends are clamped to `[0, length()]`.
    pub fn set_selection(&mut self, anchor: isize, head: isize) -> Selection {
        let selection = Selection::clamped(anchor, head, self.text.len());
        self.update_selection(selection);
        selection
    }

    /// Replace the whole buffer with the parse of `text`.
    ///
    /// Returns the number of units in the new buffer.
    pub fn replace_all(&mut self, text: &str) -> usize {
        let units = self.parse_units(text, self.max_length.unwrap_or(usize::MAX));
        let was_empty = self.text.is_empty();
        if was_empty && units.is_empty() {
            return 0;
        }

        self.text = RichText::from_units(units);
        tracing::debug!("Replaced buffer with {} units", self.text.len());

        self.emit_text_changed();
        self.update_selection(Selection::collapsed(self.text.len()));
        self.text.len()
    }

    /// Replace the selection with the parse of `text`, like typing.
    ///
    /// The selected units do not count against the maximum length. Returns
    /// the number of units inserted.
    pub fn type_text(&mut self, text: &str) -> usize {
        let range = self.selection.range();
        let units = self.parse_units(text, self.capacity(range.len()));
        if units.is_empty() && range.is_empty() {
            return 0;
        }

        let before = self.text.len() - range.len();
        let caret = self.splice(range.clone(), units);
        let inserted = self.text.len().saturating_sub(before);
        tracing::debug!("Typed {} units over {:?}", inserted, range);

        self.emit_text_changed();
        self.update_selection(Selection::collapsed(caret));
        inserted
    }

    /// Replace the selection with one registered emoji
    ///
    /// Nothing changes if the name is unknown or the emoji does not fit.
    pub fn insert_emoji_at_cursor(&mut self, name: &str) -> Result<bool> {
        let unit = self.emoji_unit(name)?;
        let range = self.selection.range();
        if self.capacity(range.len()) == 0 {
            tracing::debug!("Rejected emoji '{}': buffer is at max length", name);
            return Ok(false);
        }

        self.text.remove_range(range.clone());
        self.text.insert_units(range.start, [unit]);
        tracing::debug!("Inserted emoji '{}' over {:?}", name, range);

        self.emit_text_changed();
        self.emit(EditEvent::EmojiInserted {
            name: name.to_string(),
            text: self.plain_text(),
        });
        self.update_selection(Selection::collapsed(range.start + 1));
        Ok(true)
    }

    /// Change the maximum length, truncating from the end if the buffer no
    /// longer fits
    pub fn set_max_length(&mut self, max_length: Option<usize>) {
        self.max_length = max_length;
        let Some(max) = max_length else {
            return;
        };
        if self.text.len() <= max {
            return;
        }

        tracing::debug!("Truncating buffer from {} to {} units", self.text.len(), max);
        self.text.truncate(max);
        self.emit_text_changed();
        self.update_selection(self.selection.clamp_to(max));
    }

    /// Accept or drop line breaks in subsequently inserted text
    pub fn set_multiline(&mut self, multiline: bool) {
        self.multiline = multiline;
    }

    /// Plain text of the selected units
    pub fn selected_text(&self) -> String {
        project(&self.text.slice(self.selection.range()), self.registry.syntax())
    }

    /// Units that may still be added once `replacing` units are removed
    fn capacity(&self, replacing: usize) -> usize {
        match self.max_length {
            Some(max) => max.saturating_sub(self.text.len().saturating_sub(replacing)),
            None => usize::MAX,
        }
    }

    /// Replace `range` with `units`, then join graphemes split across
    /// either edge of the new span. Returns the caret position just past the
    /// new units.
    fn splice(&mut self, range: Range<usize>, units: Vec<Unit>) -> usize {
        self.text.remove_range(range.clone());
        let start = range.start;
        let end = start + self.text.insert_units(start, units);
        if end == start {
            self.text.join_graphemes_at(start);
            return start;
        }

        self.text.join_graphemes_at(end);
        if self.text.join_graphemes_at(start) {
            end - 1
        } else {
            end
        }
    }

    /// Parse `text` for insertion, keeping at most `limit` units
    fn parse_units(&self, text: &str, limit: usize) -> Vec<Unit> {
        let parsed = parse(text, &self.registry);
        let total = parsed.len();
        let mut kept = RichText::from_units(
            parsed
                .units()
                .iter()
                .filter(|unit| self.multiline || !unit.is_line_break())
                .cloned(),
        );
        if kept.len() < total {
            // dropped line breaks may leave a base and its marks adjacent
            let mut index = 1;
            while index < kept.len() {
                if !kept.join_graphemes_at(index) {
                    index += 1;
                }
            }
        }
        let units: Vec<Unit> = kept.units().iter().take(limit).cloned().collect();

        if units.len() < total {
            tracing::debug!("Accepted {} of {} parsed units", units.len(), total);
        }
        units
    }

    fn emoji_unit(&self, name: &str) -> Result<Unit> {
        match self.registry.lookup(name) {
            Some(descriptor) => Ok(Unit::emoji(descriptor.clone())),
            None => {
                tracing::warn!("Cannot insert unknown emoji '{}'", name);
                Err(EditError::UnknownEmoji(name.to_string()))
            }
        }
    }

    fn update_selection(&mut self, selection: Selection) {
        if selection == self.selection {
            return;
        }
        self.selection = selection;
        self.emit(EditEvent::SelectionChanged {
            anchor: selection.anchor,
            head: selection.head,
        });
    }

    fn emit_text_changed(&self) {
        if self.listeners.is_empty() {
            return;
        }
        self.emit(EditEvent::TextChanged {
            text: self.plain_text(),
            length: self.text.len(),
        });
    }

    fn emit(&self, event: EditEvent) {
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

/// Position of index `i` after the units in `range` are removed
fn shift_after_delete(i: usize, range: &Range<usize>) -> usize {
    if i <= range.start {
        i
    } else if i >= range.end {
        i - range.len()
    } else {
        range.start
    }
}
