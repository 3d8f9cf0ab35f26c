//! Positions, ranges and selections as reported by an editor host.
//!
//! Coordinates are zero-based; columns count characters (Unicode scalar values) within a
//! logical line, not bytes.

use std::cmp::Ordering;

/// Position coordinates (line and column numbers)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// Zero-based logical line index.
    pub line: usize,
    /// Zero-based column in characters within the logical line.
    pub column: usize,
}

impl Position {
    /// Create a new logical position.
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A span of the document in document order (`start <= end`), end exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    /// Inclusive start position.
    pub start: Position,
    /// Exclusive end position.
    pub end: Position,
}

impl Range {
    /// Build a range from two positions in any order.
    pub fn new(a: Position, b: Position) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Returns `true` if the range covers no text.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Selection direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelectionDirection {
    /// Forward selection (anchor before caret)
    Forward,
    /// Backward selection (caret before anchor)
    Backward,
}

/// A user selection: the anchor (`start`) and the caret (`end`), in either order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    /// Anchor position.
    pub start: Position,
    /// Active (caret) position.
    pub end: Position,
    /// Selection direction
    pub direction: SelectionDirection,
}

impl Selection {
    /// Create a selection from anchor to caret, deriving its direction.
    pub fn new(start: Position, end: Position) -> Self {
        Self {
            start,
            end,
            direction: selection_direction(start, end),
        }
    }

    /// A caret with no span.
    pub fn caret(pos: Position) -> Self {
        Self::new(pos, pos)
    }

    /// The covered span in document order.
    pub fn range(&self) -> Range {
        Range::new(self.start, self.end)
    }

    /// Returns `true` for a bare caret.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Direction implied by an anchor/caret pair.
pub fn selection_direction(start: Position, end: Position) -> SelectionDirection {
    if start <= end {
        SelectionDirection::Forward
    } else {
        SelectionDirection::Backward
    }
}

fn selection_min_max(selection: &Selection) -> (Position, Position) {
    let range = selection.range();
    (range.start, range.end)
}

/// Sort selections into document order (left to right, top to bottom) and merge overlaps.
///
/// Selections that overlap are replaced by their union so that no two resulting selections touch
/// the same text. Selections that merely meet (one starts where the previous ends) stay separate,
/// and exact duplicates collapse into one.
pub fn normalize_selections(mut selections: Vec<Selection>) -> Vec<Selection> {
    selections.sort_by(|a, b| {
        let (a_min, a_max) = selection_min_max(a);
        let (b_min, b_max) = selection_min_max(b);
        a_min.cmp(&b_min).then_with(|| a_max.cmp(&b_max))
    });

    let mut merged: Vec<Selection> = Vec::with_capacity(selections.len());
    for sel in selections {
        let Some(last) = merged.last_mut() else {
            merged.push(sel);
            continue;
        };

        let (last_min, last_max) = selection_min_max(last);
        let (sel_min, sel_max) = selection_min_max(&sel);

        if sel_min < last_max {
            *last = Selection::new(last_min.min(sel_min), last_max.max(sel_max));
        } else if sel_min == last_min && sel_max == last_max {
            continue;
        } else {
            merged.push(sel);
        }
    }
    merged
}
