//! Visible window onto the buffer.
//!
//! The [`Viewport`] tracks the top-left document cell shown on screen (the
//! *offset*) and the terminal size. The bottom row is reserved for the
//! status line, so `height - 1` rows show text.
//!
//! Scrolling is minimal: when the cursor leaves the window the offset moves
//! just far enough to bring it back onto the nearest edge. Rows are handled
//! before columns, and the view is never re-centered.

use super::cursor::{CursorInfo, Position};

/// Rows reserved at the bottom of the screen for the status line.
pub const STATUS_LINE_HEIGHT: usize = 1;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    offset: Position,
    width: usize,
    height: usize,
}

impl Viewport {
    /// A viewport for a `width` x `height` terminal, scrolled to the origin.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            offset: Position::default(),
            width,
            height,
        }
    }

    /// Top-left visible document cell.
    pub fn offset(&self) -> Position {
        self.offset
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Full terminal height, status line included.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Rows available for text.
    pub fn usable_height(&self) -> usize {
        self.height.saturating_sub(STATUS_LINE_HEIGHT)
    }

    /// Updates the cached terminal size. The offset is left alone until the
    /// next [`scroll_to`](Self::scroll_to).
    pub fn set_size(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
    }

    /// Scrolls the least amount needed to put `cursor` inside the window.
    ///
    /// An axis with no room (zero width or zero usable height) is not
    /// scrolled.
    ///
    /// ```
    /// use vincent::editor::cursor::Position;
    /// use vincent::editor::viewport::Viewport;
    ///
    /// // 21 rows: 20 for text, 1 for the status line
    /// let mut viewport = Viewport::new(80, 21);
    /// viewport.scroll_to(Position::new(0, 50));
    /// assert_eq!(viewport.offset(), Position::new(0, 31));
    ///
    /// // Moving back inside the window does not scroll
    /// viewport.scroll_to(Position::new(0, 40));
    /// assert_eq!(viewport.offset(), Position::new(0, 31));
    /// ```
    pub fn scroll_to(&mut self, cursor: Position) {
        let usable = self.usable_height();
        if usable > 0 {
            if cursor.row >= self.offset.row + usable {
                self.offset.row = cursor.row - usable + 1;
            } else if cursor.row < self.offset.row {
                self.offset.row = cursor.row;
            }
        }

        if self.width > 0 {
            if cursor.column >= self.offset.column + self.width {
                self.offset.column = cursor.column - self.width + 1;
            } else if cursor.column < self.offset.column {
                self.offset.column = cursor.column;
            }
        }
    }

    /// Clamps the cursor into the visible window, intersected with the
    /// document bounds: `line_count` lines, and `max_column(row)` as the
    /// last valid column of a row.
    ///
    /// After [`scroll_to`](Self::scroll_to) the cursor is already visible in
    /// every non-degenerate case. An axis with no room only clamps to the
    /// document, matching `scroll_to`.
    pub fn clamp_cursor<F>(&self, cursor: &mut CursorInfo, line_count: usize, max_column: F)
    where
        F: Fn(usize) -> usize,
    {
        let last_row = line_count.saturating_sub(1);
        cursor.position.row = clamp_axis(
            cursor.position.row,
            self.offset.row,
            self.usable_height(),
            last_row,
        );

        let last_column = max_column(cursor.position.row);
        cursor.position.column = clamp_axis(
            cursor.position.column,
            self.offset.column,
            self.width,
            last_column,
        );
    }

    /// Maps a document position to a screen cell, or `None` when it is
    /// outside the window.
    pub fn to_screen(&self, pos: Position) -> Option<Position> {
        let column = pos.column.checked_sub(self.offset.column)?;
        let row = pos.row.checked_sub(self.offset.row)?;
        if column >= self.width || row >= self.usable_height() {
            return None;
        }
        Some(Position::new(column, row))
    }
}

/// Clamps `value` into the `size` cells starting at `start`, intersected with
/// `[0, last]`. A zero `size` only applies the document bound.
fn clamp_axis(value: usize, start: usize, size: usize, last: usize) -> usize {
    if size == 0 {
        return value.min(last);
    }
    let low = start.min(last);
    let high = (start + size - 1).min(last).max(low);
    value.clamp(low, high)
}
