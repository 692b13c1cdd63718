//! Cursor position tracking in the text buffer.
//!
//! This module provides [`Position`], a zero-based `(column, row)` pair, and
//! [`CursorInfo`], which adds the *preferred column*: the column the cursor
//! wants to return to after moving vertically through shorter lines.
//!
//! Horizontal moves set the preferred column; vertical moves restore it,
//! clamped to the length of the line they land on. Moving down through a
//! short line and back up therefore returns to the original column.
//!
//! # Example
//!
//! ```
//! use vincent::editor::cursor::{CursorInfo, Position};
//!
//! let mut cursor = CursorInfo::new();
//! cursor.move_by(8, 0, true);
//! assert_eq!(cursor.preferred_column, 8);
//!
//! // Down onto a two-character line (Normal mode clamps to the last char)
//! cursor.move_by(0, 1, false);
//! cursor.restore_preferred();
//! cursor.clamp_to_line(2, false);
//! assert_eq!(cursor.position, Position::new(1, 1));
//!
//! // And back up onto the long line
//! cursor.move_by(0, -1, false);
//! cursor.restore_preferred();
//! cursor.clamp_to_line(20, false);
//! assert_eq!(cursor.position, Position::new(8, 0));
//! ```

use std::cmp::Ordering;
use std::fmt;

/// A zero-based document or screen coordinate.
///
/// `row` is the logical line index, `column` the codepoint offset in it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub column: usize,
    pub row: usize,
}

impl Position {
    pub fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }
}

impl Ord for Position {
    /// Document order: by row, then by column.
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.column).cmp(&(other.row, other.column))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    /// Formats as `row:column`, both 1-based, as shown in the status line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.row + 1, self.column + 1)
    }
}

/// The logical cursor plus its sticky column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CursorInfo {
    pub position: Position,
    pub preferred_column: usize,
}

impl CursorInfo {
    /// A cursor at the top-left corner of the document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(position: Position) -> Self {
        Self {
            position,
            preferred_column: position.column,
        }
    }

    /// Moves by a signed delta, saturating at zero.
    ///
    /// When `update_preferred` is set and the move is horizontal, the
    /// preferred column becomes the new column.
    pub fn move_by(&mut self, dx: isize, dy: isize, update_preferred: bool) {
        self.position.column = self.position.column.saturating_add_signed(dx);
        self.position.row = self.position.row.saturating_add_signed(dy);
        if update_preferred && dx != 0 {
            self.preferred_column = self.position.column;
        }
    }

    /// Puts the column back on the preferred column. Used after vertical
    /// moves, before clamping to the new line.
    pub fn restore_preferred(&mut self) {
        self.position.column = self.preferred_column;
    }

    /// Makes the preferred column follow the current column.
    pub fn sync_preferred(&mut self) {
        self.preferred_column = self.position.column;
    }

    /// Clamps the column to a line of `line_len` codepoints.
    ///
    /// With `allow_past_end` (Insert and Command mode) the cursor may sit in
    /// the slot after the last character; otherwise it must sit on a
    /// character, which on an empty line means column 0.
    pub fn clamp_to_line(&mut self, line_len: usize, allow_past_end: bool) {
        let max_column = if allow_past_end {
            line_len
        } else {
            line_len.saturating_sub(1)
        };
        self.position.column = self.position.column.min(max_column);
    }

    /// Clamps the row to a document of `line_count` lines.
    pub fn clamp_row(&mut self, line_count: usize) {
        self.position.row = self.position.row.min(line_count.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_saturates_at_origin() {
        let mut cursor = CursorInfo::new();
        cursor.move_by(-1, -1, true);
        assert_eq!(cursor.position, Position::new(0, 0));
        assert_eq!(cursor.preferred_column, 0);
    }

    #[test]
    fn test_vertical_move_keeps_preferred_column() {
        let mut cursor = CursorInfo::at(Position::new(5, 0));
        cursor.move_by(0, 3, true);
        assert_eq!(cursor.preferred_column, 5);
        assert_eq!(cursor.position.row, 3);
    }

    #[test]
    fn test_clamp_to_line_modes() {
        let mut cursor = CursorInfo::at(Position::new(10, 0));
        cursor.clamp_to_line(4, true);
        assert_eq!(cursor.position.column, 4);

        cursor.clamp_to_line(4, false);
        assert_eq!(cursor.position.column, 3);

        cursor.clamp_to_line(0, false);
        assert_eq!(cursor.position.column, 0);
    }

    #[test]
    fn test_clamp_row() {
        let mut cursor = CursorInfo::at(Position::new(0, 42));
        cursor.clamp_row(10);
        assert_eq!(cursor.position.row, 9);
    }

    #[test]
    fn test_position_orders_by_row_first() {
        assert!(Position::new(9, 0) < Position::new(0, 1));
        assert!(Position::new(1, 2) < Position::new(2, 2));
    }

    #[test]
    fn test_position_display_is_one_based() {
        assert_eq!(Position::new(0, 0).to_string(), "1:1");
        assert_eq!(Position::new(4, 9).to_string(), "10:5");
    }
}
