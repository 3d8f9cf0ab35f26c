//! Line transforms.
//!
//! The functions in this module are the whole of what the commands compute: each one maps the
//! text of a single selection (or a single line) to its replacement text. They never fail and
//! never touch an editor; [`crate::commands`] is responsible for reading selections and writing
//! the results back through an [`EditorHost`](crate::EditorHost).
//!
//! # Example
//!
//! ```rust
//! use edlin_core::{LineEnding, SplitMode, TrimSide, transform};
//!
//! let split = transform::split_line("a\tb\tc", "\t", LineEnding::Lf, SplitMode::Discard);
//! assert_eq!(split, "a\nb\nc");
//!
//! assert_eq!(transform::remove_blank_lines("line1\n\n  \nline2"), "line1\nline2");
//! assert_eq!(transform::trim_lines("  hi  \n  bye  ", TrimSide::Both), "hi\nbye");
//! ```

use crate::line_ending::LineEnding;
use crate::text::{self, is_blank, split_block};

/// Delimiter used by the split commands when nothing is selected.
pub const DEFAULT_DELIMITER: &str = "\t";

/// Which end(s) of a line [`trim_lines`] strips whitespace from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrimSide {
    /// Strip the leading whitespace run.
    Left,
    /// Strip the trailing whitespace run.
    Right,
    /// Strip both runs.
    #[default]
    Both,
}

impl TrimSide {
    /// Apply this trim to a single line.
    pub fn apply(self, line: &str) -> &str {
        match self {
            Self::Left => text::trim_start(line),
            Self::Right => text::trim_end(line),
            Self::Both => text::trim(line),
        }
    }
}

/// What happens to the delimiter when a line is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SplitMode {
    /// The delimiter is consumed; fragments are joined by the line ending alone.
    #[default]
    Discard,
    /// The delimiter stays at the end of every produced line but the last.
    Keep,
}

/// Resolve the split delimiter from the text currently selected.
///
/// An empty selection falls back to [`DEFAULT_DELIMITER`].
pub fn resolve_delimiter(selected: &str) -> &str {
    if selected.is_empty() {
        DEFAULT_DELIMITER
    } else {
        selected
    }
}

/// Split one line on every occurrence of `delimiter` and rejoin the fragments with `ending`.
///
/// A line without the delimiter comes back unchanged. An empty `delimiter` also leaves the line
/// unchanged.
pub fn split_line(line: &str, delimiter: &str, ending: LineEnding, mode: SplitMode) -> String {
    if delimiter.is_empty() {
        return line.to_string();
    }

    let fragments: Vec<&str> = line.split(delimiter).collect();
    match mode {
        SplitMode::Discard => fragments.join(ending.as_str()),
        SplitMode::Keep => {
            let separator = format!("{delimiter}{}", ending.as_str());
            fragments.join(&separator)
        }
    }
}

/// Join every line of `text` into one, dropping the detected line ending.
///
/// Only terminators of the detected style are removed; in a mixed block the other styles are
/// ordinary content.
pub fn combine_lines(text: &str) -> String {
    let ending = LineEnding::detect_in_text(text);
    split_block(text, ending).concat()
}

/// Drop every line of `text` whose trimmed content is empty.
///
/// Retained lines keep their order and their original content (including surrounding
/// whitespace) and are rejoined with the detected line ending.
pub fn remove_blank_lines(text: &str) -> String {
    let ending = LineEnding::detect_in_text(text);
    let kept: Vec<&str> = split_block(text, ending)
        .into_iter()
        .filter(|line| !is_blank(line))
        .collect();
    kept.join(ending.as_str())
}

/// Trim whitespace from each line of `text` on the given side(s).
pub fn trim_lines(text: &str, side: TrimSide) -> String {
    let ending = LineEnding::detect_in_text(text);
    let trimmed: Vec<&str> = split_block(text, ending)
        .into_iter()
        .map(|line| side.apply(line))
        .collect();
    trimmed.join(ending.as_str())
}
