//! In-memory editor host.
//!
//! [`BufferEditor`] keeps a document in a [`Rope`] together with its selections, and implements
//! [`TextEditor`] so that the commands can run without a real editor (tests, scripts, embedders
//! that manage their own text). [`BufferHost`] wraps an optional editor as an [`EditorHost`].
//!
//! Lines are delimited by `"\r\n"`, `'\r'` or `'\n'`, matching the three line endings the
//! commands understand.
//!
//! # Example
//!
//! ```rust
//! use edlin_core::{BufferEditor, BufferHost, CommandExecutor, Config, InvocationContext};
//! use edlin_core::{LineCommand, Position, Selection};
//!
//! let editor = BufferEditor::new("a,b,c\nrest")
//!     .with_selections(vec![Selection::new(Position::new(0, 1), Position::new(0, 2))]);
//! let mut executor = CommandExecutor::new(BufferHost::new(editor), Config::default());
//!
//! executor
//!     .execute(LineCommand::Split { keep_delimiter: false }, InvocationContext::Command)
//!     .unwrap();
//! assert_eq!(executor.host().editor().unwrap().text(), "a\nb\nc\nrest");
//! ```

use ropey::Rope;

use crate::host::{EditBatch, EditorHost, HostError, LineSpan, TextEditor};
use crate::line_ending::LineEnding;
use crate::selection::{Position, Range, Selection};

/// A document held in memory.
#[derive(Debug, Clone)]
pub struct BufferEditor {
    rope: Rope,
    selections: Vec<Selection>,
    language_id: String,
    line_ending: LineEnding,
}

impl BufferEditor {
    /// Open `text` with a single caret at the start of the document.
    ///
    /// The document line ending is detected from `text`, defaulting to LF for text without any
    /// terminator.
    pub fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            selections: vec![Selection::caret(Position::new(0, 0))],
            language_id: "plaintext".to_string(),
            line_ending: LineEnding::detect_in_text_or(text, LineEnding::Lf),
        }
    }

    /// Replace the selections (primary first).
    pub fn with_selections(mut self, selections: Vec<Selection>) -> Self {
        self.set_selections(selections);
        self
    }

    /// Set the document language identifier.
    pub fn with_language_id(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = language_id.into();
        self
    }

    /// Override the detected document line ending.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Replace the selections (primary first).
    pub fn set_selections(&mut self, selections: Vec<Selection>) {
        self.selections = selections;
    }

    /// Full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Number of logical lines (a trailing terminator opens one more, empty, line).
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Character count of line `line` without its terminator.
    fn line_content_len(&self, line: usize) -> Option<usize> {
        if line >= self.rope.len_lines() {
            return None;
        }
        let slice = self.rope.line(line);
        let len = slice.len_chars();
        let terminator = match (
            len.checked_sub(2).map(|i| slice.char(i)),
            len.checked_sub(1).map(|i| slice.char(i)),
        ) {
            (Some('\r'), Some('\n')) => 2,
            (_, Some('\n' | '\r')) => 1,
            _ => 0,
        };
        Some(len - terminator)
    }

    fn char_offset(&self, pos: Position) -> Result<usize, HostError> {
        match self.line_content_len(pos.line) {
            Some(len) if pos.column <= len => Ok(self.rope.line_to_char(pos.line) + pos.column),
            _ => Err(HostError::invalid_position(pos)),
        }
    }

    fn clamp_position(&self, pos: Position) -> Position {
        let last_line = self.rope.len_lines().saturating_sub(1);
        let line = pos.line.min(last_line);
        let column = pos.column.min(self.line_content_len(line).unwrap_or(0));
        Position::new(line, column)
    }

    fn clamped_char_offset(&self, pos: Position) -> usize {
        let pos = self.clamp_position(pos);
        self.rope.line_to_char(pos.line) + pos.column
    }
}

impl TextEditor for BufferEditor {
    fn selections(&self) -> Vec<Selection> {
        self.selections.clone()
    }

    fn text_in(&self, range: Range) -> String {
        let start = self.clamped_char_offset(range.start);
        let end = self.clamped_char_offset(range.end).max(start);
        self.rope.slice(start..end).to_string()
    }

    fn line_at(&self, line: usize) -> Option<LineSpan> {
        let len = self.line_content_len(line)?;
        let start = self.rope.line_to_char(line);
        Some(LineSpan {
            range: Range::new(Position::new(line, 0), Position::new(line, len)),
            text: self.rope.slice(start..start + len).to_string(),
        })
    }

    fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    fn language_id(&self) -> &str {
        &self.language_id
    }

    fn apply_edits(&mut self, batch: EditBatch) -> Result<(), HostError> {
        // Resolve every range against the unmodified document before touching it.
        let mut ops = Vec::with_capacity(batch.len());
        for edit in batch {
            let start = self.char_offset(edit.range.start)?;
            let end = self.char_offset(edit.range.end)?;
            ops.push((edit.range.start, start, end, edit.new_text));
        }

        ops.sort_by_key(|&(_, start, end, _)| (start, end));
        for pair in ops.windows(2) {
            let (_, _, prev_end, _) = &pair[0];
            let (pos, start, _, _) = &pair[1];
            if start < prev_end {
                return Err(HostError::OverlappingEdits {
                    line: pos.line,
                    column: pos.column,
                });
            }
        }

        for (_, start, end, text) in ops.into_iter().rev() {
            self.rope.remove(start..end);
            self.rope.insert(start, &text);
        }

        let selections = std::mem::take(&mut self.selections);
        self.selections = selections
            .into_iter()
            .map(|sel| {
                Selection::new(self.clamp_position(sel.start), self.clamp_position(sel.end))
            })
            .collect();
        Ok(())
    }
}

/// An [`EditorHost`] with at most one open editor.
#[derive(Debug, Clone, Default)]
pub struct BufferHost {
    active: Option<BufferEditor>,
}

impl BufferHost {
    /// A host whose active editor is `editor`.
    pub fn new(editor: BufferEditor) -> Self {
        Self {
            active: Some(editor),
        }
    }

    /// A host with no open editor.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The active editor, if any.
    pub fn editor(&self) -> Option<&BufferEditor> {
        self.active.as_ref()
    }

    /// Open `editor`, replacing the previous one.
    pub fn open(&mut self, editor: BufferEditor) {
        self.active = Some(editor);
    }

    /// Close the active editor and return it.
    pub fn close(&mut self) -> Option<BufferEditor> {
        self.active.take()
    }
}

impl EditorHost for BufferHost {
    type Editor = BufferEditor;

    fn active_editor(&mut self) -> Option<&mut BufferEditor> {
        self.active.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::TextEdit;

    fn range(a: (usize, usize), b: (usize, usize)) -> Range {
        Range::new(Position::new(a.0, a.1), Position::new(b.0, b.1))
    }

    #[test]
    fn test_line_at_excludes_terminators() {
        let editor = BufferEditor::new("ab\r\ncd\ref\ngh");
        assert_eq!(editor.line_count(), 4);
        assert_eq!(editor.line_at(0).unwrap().text, "ab");
        assert_eq!(editor.line_at(1).unwrap().text, "cd");
        assert_eq!(editor.line_at(2).unwrap().text, "ef");
        assert_eq!(editor.line_at(3).unwrap().range, range((3, 0), (3, 2)));
        assert!(editor.line_at(4).is_none());
    }

    #[test]
    fn test_text_in_spans_lines() {
        let editor = BufferEditor::new("one\ntwo\nthree");
        assert_eq!(editor.text_in(range((0, 1), (2, 2))), "ne\ntwo\nth");
        // Out-of-range reads clamp to the document.
        assert_eq!(editor.text_in(range((2, 3), (9, 9))), "ee");
    }

    #[test]
    fn test_line_ending_detection() {
        assert_eq!(BufferEditor::new("a\r\nb").line_ending(), LineEnding::Crlf);
        assert_eq!(BufferEditor::new("a").line_ending(), LineEnding::Lf);
    }

    #[test]
    fn test_apply_batch_uses_original_coordinates() {
        let mut editor = BufferEditor::new("aa\nbb\ncc");
        let batch: EditBatch = [
            TextEdit::replace(range((0, 0), (0, 2)), "A\nA"),
            TextEdit::replace(range((2, 0), (2, 2)), "C"),
        ]
        .into_iter()
        .collect();
        editor.apply_edits(batch).unwrap();
        assert_eq!(editor.text(), "A\nA\nbb\nC");
    }

    #[test]
    fn test_overlapping_batch_is_rejected_untouched() {
        let mut editor = BufferEditor::new("abcdef");
        let batch: EditBatch = [
            TextEdit::replace(range((0, 0), (0, 4)), "x"),
            TextEdit::replace(range((0, 2), (0, 6)), "y"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            editor.apply_edits(batch),
            Err(HostError::OverlappingEdits { line: 0, column: 2 })
        );
        assert_eq!(editor.text(), "abcdef");
    }

    #[test]
    fn test_invalid_position_is_rejected_untouched() {
        let mut editor = BufferEditor::new("abc\ndef");
        let batch: EditBatch = [
            TextEdit::replace(range((0, 0), (0, 1)), "x"),
            TextEdit::replace(range((1, 0), (1, 9)), "y"),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            editor.apply_edits(batch),
            Err(HostError::InvalidPosition { line: 1, column: 9 })
        );
        assert_eq!(editor.text(), "abc\ndef");
    }

    #[test]
    fn test_selections_are_clamped_after_edit() {
        let mut editor = BufferEditor::new("abcdef")
            .with_selections(vec![Selection::new(Position::new(0, 2), Position::new(0, 6))]);
        let batch: EditBatch = [TextEdit::replace(range((0, 0), (0, 6)), "ab")]
            .into_iter()
            .collect();
        editor.apply_edits(batch).unwrap();
        assert_eq!(
            editor.selections(),
            vec![Selection::new(Position::new(0, 2), Position::new(0, 2))]
        );
    }
}
