use ropey::Rope;

use crate::markup::{Style, ToggleResult};
use crate::text::{Selection, SelectionError};

/// A text buffer with one selection, backed by a rope.
///
/// Plays the part of the host text widget: it owns the text, tracks the
/// selection in UTF-16 units and applies toggle results back onto itself.
pub struct EditorBuffer {
    rope: Rope,
    selection: Selection,
    dirty: bool,
}

impl EditorBuffer {
    /// Create a new buffer from a string, with the caret at the start.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selection: Selection::caret(0),
            dirty: false,
        }
    }

    /// Create an empty buffer.
    pub fn empty() -> Self {
        Self::from_text("")
    }

    /// The current selection, in UTF-16 units.
    pub const fn selection(&self) -> Selection {
        self.selection
    }

    /// Whether the buffer has been modified since creation or last save.
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark the buffer as clean (e.g., after saving).
    pub const fn mark_clean(&mut self) {
        self.dirty = false;
    }

    /// Total number of lines in the buffer.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Length of the buffer in UTF-16 code units.
    pub fn len_utf16(&self) -> usize {
        self.rope.len_utf16_cu()
    }

    /// The full text content of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Select a range given in UTF-16 units.
    pub fn select(&mut self, start: usize, end: usize) -> Result<(), SelectionError> {
        if start > end {
            return Err(SelectionError::Inverted { start, end });
        }
        let len = self.len_utf16();
        if end > len {
            return Err(SelectionError::OutOfBounds { end, len });
        }
        self.selection = Selection::new(start, end);
        Ok(())
    }

    /// The currently selected text.
    pub fn selected_text(&self) -> String {
        let start = self.rope.utf16_cu_to_char(self.selection.start);
        let end = self.rope.utf16_cu_to_char(self.selection.end);
        self.rope.slice(start..end).to_string()
    }

    /// Toggle `style` on the current selection and adopt the result.
    pub fn toggle(&mut self, style: Style) -> ToggleResult {
        let before = self.text();
        let result = style.toggle(&before, self.selection);
        if result.text != before {
            self.rope = Rope::from_str(&result.text);
            self.dirty = true;
        }
        self.selection = result.selection;
        result
    }
}

impl Default for EditorBuffer {
    fn default() -> Self {
        Self::empty()
    }
}

impl std::fmt::Debug for EditorBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorBuffer")
            .field(
                "rope",
                &format_args!("Rope({} lines)", self.rope.len_lines()),
            )
            .field("selection", &self.selection)
            .field("dirty", &self.dirty)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Construction and basic queries ---

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::empty();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.text(), "");
        assert_eq!(buf.selection(), Selection::caret(0));
    }

    #[test]
    fn test_from_text_preserves_content() {
        let buf = EditorBuffer::from_text("hello\nworld");
        assert_eq!(buf.line_count(), 2);
        assert_eq!(buf.text(), "hello\nworld");
    }

    #[test]
    fn test_len_counts_utf16_units() {
        let buf = EditorBuffer::from_text("é😀");
        assert_eq!(buf.len_utf16(), 3);
    }

    // --- Selection ---

    #[test]
    fn test_select_and_read_back() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.select(6, 11).unwrap();
        assert_eq!(buf.selection(), Selection::new(6, 11));
        assert_eq!(buf.selected_text(), "world");
    }

    #[test]
    fn test_selected_text_past_surrogate_pair() {
        let mut buf = EditorBuffer::from_text("😀 hi");
        buf.select(3, 5).unwrap();
        assert_eq!(buf.selected_text(), "hi");
    }

    #[test]
    fn test_select_rejects_out_of_bounds() {
        let mut buf = EditorBuffer::from_text("abc");
        assert_eq!(
            buf.select(1, 4),
            Err(SelectionError::OutOfBounds { end: 4, len: 3 })
        );
        assert_eq!(buf.selection(), Selection::caret(0));
    }

    #[test]
    fn test_select_rejects_inverted_range() {
        let mut buf = EditorBuffer::from_text("abc");
        assert_eq!(
            buf.select(2, 1),
            Err(SelectionError::Inverted { start: 2, end: 1 })
        );
    }

    // --- Dirty tracking ---

    #[test]
    fn test_new_buffer_is_clean() {
        let buf = EditorBuffer::from_text("hello");
        assert!(!buf.is_dirty());
    }

    #[test]
    fn test_toggle_marks_dirty() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.select(0, 5).unwrap();
        buf.toggle(Style::Italic);
        assert!(buf.is_dirty());
    }

    #[test]
    fn test_mark_clean_resets_dirty() {
        let mut buf = EditorBuffer::from_text("hello");
        buf.select(0, 5).unwrap();
        buf.toggle(Style::Italic);
        buf.mark_clean();
        assert!(!buf.is_dirty());
    }

    // --- Toggling ---

    #[test]
    fn test_toggle_adopts_text_and_selection() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.select(0, 5).unwrap();
        buf.toggle(Style::Bold);
        assert_eq!(buf.text(), "**hello** world");
        assert_eq!(buf.selected_text(), "hello");
    }

    #[test]
    fn test_repeated_toggles_round_trip() {
        let mut buf = EditorBuffer::from_text("hello world");
        buf.select(0, 5).unwrap();
        buf.toggle(Style::Strikethrough);
        buf.toggle(Style::Strikethrough);
        assert_eq!(buf.text(), "hello world");
        assert_eq!(buf.selection(), Selection::new(0, 5));
    }

    #[test]
    fn test_stacked_styles() {
        let mut buf = EditorBuffer::from_text("word");
        buf.select(0, 4).unwrap();
        buf.toggle(Style::Bold);
        buf.toggle(Style::Italic);
        assert_eq!(buf.text(), "**_word_**");
        assert_eq!(buf.selected_text(), "word");
    }

    #[test]
    fn test_list_typing_session() {
        let mut buf = EditorBuffer::empty();
        buf.toggle(Style::UnorderedList);
        assert_eq!(buf.text(), "- ");
        assert_eq!(buf.selection(), Selection::caret(2));
        buf.toggle(Style::UnorderedList);
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_debug_summarises_rope() {
        let buf = EditorBuffer::from_text("a\nb");
        let debug = format!("{buf:?}");
        assert!(debug.contains("Rope(2 lines)"));
    }
}
