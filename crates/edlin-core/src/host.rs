//! The editor host boundary.
//!
//! Commands never own a document. They talk to whatever editor embeds them through two traits:
//! [`EditorHost`] answers "is there an active editor?", and [`TextEditor`] reads selections and
//! text from it and applies one [`EditBatch`] per command invocation.
//!
//! [`crate::buffer`] provides an in-memory implementation.

use thiserror::Error;

use crate::line_ending::LineEnding;
use crate::selection::{Position, Range, Selection};

/// A whole logical line as seen by the host, terminator excluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineSpan {
    /// Span of the line content (column 0 to end of line).
    pub range: Range,
    /// The line's text without its terminator.
    pub text: String,
}

/// Replace `range` with `new_text`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEdit {
    /// Span being replaced.
    pub range: Range,
    /// Replacement text.
    pub new_text: String,
}

impl TextEdit {
    /// Create a replacement edit.
    pub fn replace(range: Range, new_text: impl Into<String>) -> Self {
        Self {
            range,
            new_text: new_text.into(),
        }
    }
}

/// Edits produced by one command invocation, in document order.
///
/// Ranges refer to the document as it was before any edit of the batch is applied. A host must
/// apply the batch atomically: all edits or none.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
    edits: Vec<TextEdit>,
}

impl EditBatch {
    /// Create an empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an edit.
    pub fn push(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    /// The queued edits.
    pub fn edits(&self) -> &[TextEdit] {
        &self.edits
    }

    /// Number of queued edits.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// Returns `true` if nothing was queued.
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Consume the batch.
    pub fn into_edits(self) -> Vec<TextEdit> {
        self.edits
    }
}

impl FromIterator<TextEdit> for EditBatch {
    fn from_iter<I: IntoIterator<Item = TextEdit>>(iter: I) -> Self {
        Self {
            edits: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for EditBatch {
    type Item = TextEdit;
    type IntoIter = std::vec::IntoIter<TextEdit>;

    fn into_iter(self) -> Self::IntoIter {
        self.edits.into_iter()
    }
}

/// Errors a host may report when applying an [`EditBatch`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A position does not exist in the document.
    #[error("invalid position: line {line}, column {column}")]
    InvalidPosition {
        /// Logical line index.
        line: usize,
        /// Column in characters.
        column: usize,
    },

    /// Two edits of the same batch touch overlapping text.
    #[error("overlapping edits at line {line}, column {column}")]
    OverlappingEdits {
        /// Line where the second edit starts.
        line: usize,
        /// Column where the second edit starts.
        column: usize,
    },

    /// The host refused the batch for its own reasons (read-only document, stale version...).
    #[error("edit rejected by host: {0}")]
    Rejected(String),
}

impl HostError {
    /// Build an [`HostError::InvalidPosition`] from a position.
    pub fn invalid_position(pos: Position) -> Self {
        Self::InvalidPosition {
            line: pos.line,
            column: pos.column,
        }
    }
}

/// An open document with its selections.
pub trait TextEditor {
    /// All current selections, primary first, in the host's own order.
    fn selections(&self) -> Vec<Selection>;

    /// Text covered by `range`.
    fn text_in(&self, range: Range) -> String;

    /// The full line at index `line`, or `None` past the end of the document.
    fn line_at(&self, line: usize) -> Option<LineSpan>;

    /// The document's own line ending, used when a single line gives no hint.
    fn line_ending(&self) -> LineEnding;

    /// Language identifier of the document (e.g. `"json"`).
    fn language_id(&self) -> &str;

    /// Apply all edits of `batch` or none of them.
    fn apply_edits(&mut self, batch: EditBatch) -> Result<(), HostError>;
}

/// The embedding editor.
pub trait EditorHost {
    /// Concrete editor type handed out by the host.
    type Editor: TextEditor;

    /// The editor that has focus, if any.
    fn active_editor(&mut self) -> Option<&mut Self::Editor>;
}
