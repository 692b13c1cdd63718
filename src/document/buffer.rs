//! Line-oriented view over a [`Rope`].
//!
//! The buffer keeps a table with the rope offset at which every line starts.
//! Converting a `(column, row)` position to a flat offset is then a single
//! lookup, and every edit patches the table instead of rescanning the text.
//!
//! Lines are separated by `'\n'`. An empty buffer has one empty line, and a
//! trailing newline produces a trailing empty line.

use super::rope::Rope;
use crate::editor::cursor::Position;
use crate::error::{EditorError, Result};

/// Text of the document plus its line-start table.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    rope: Rope,
    /// Codepoint offset of the first character of each line. Never empty;
    /// `line_starts[0] == 0`.
    line_starts: Vec<usize>,
}

impl Buffer {
    /// Creates a buffer holding a single empty line.
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Creates a buffer from existing text.
    ///
    /// ```
    /// use vincent::document::buffer::Buffer;
    ///
    /// let buffer = Buffer::from_text("one\ntwo\n");
    /// assert_eq!(buffer.line_count(), 3);
    /// assert_eq!(buffer.line_at(1).unwrap(), "two");
    /// assert_eq!(buffer.line_at(2).unwrap(), "");
    /// ```
    pub fn from_text(text: &str) -> Self {
        let mut line_starts = vec![0];
        line_starts.extend(
            text.chars()
                .enumerate()
                .filter(|(_, ch)| *ch == '\n')
                .map(|(i, _)| i + 1),
        );
        Self {
            rope: Rope::build(text),
            line_starts,
        }
    }

    /// Full contents of the buffer.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    /// Total number of codepoints, newlines included.
    pub fn total_length(&self) -> usize {
        self.rope.len()
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Length of line `row` in codepoints, without its newline.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row >= self.line_count()`.
    pub fn line_len(&self, row: usize) -> Result<usize> {
        let (start, end) = self.line_bounds(row)?;
        Ok(end - start)
    }

    /// Text of line `row`, without its newline.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` when `row >= self.line_count()`.
    pub fn line_at(&self, row: usize) -> Result<String> {
        let (start, end) = self.line_bounds(row)?;
        self.rope.slice(start, end)
    }

    /// Converts a position to a flat rope offset.
    ///
    /// The column may sit one past the last character of the line (the
    /// newline slot), but not further.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` for a row past the last line or a column past the
    /// end of its line.
    pub fn offset_of(&self, pos: Position) -> Result<usize> {
        let (start, end) = self.line_bounds(pos.row)?;
        let line_len = end - start;
        if pos.column > line_len {
            return Err(EditorError::out_of_range(pos.column, line_len));
        }
        Ok(start + pos.column)
    }

    /// Inserts `ch` at `pos` and returns the position just after it.
    ///
    /// A `'\n'` is handled as [`insert_newline`](Self::insert_newline).
    pub fn insert_char(&mut self, pos: Position, ch: char) -> Result<Position> {
        if ch == '\n' {
            return self.insert_newline(pos);
        }

        let offset = self.offset_of(pos)?;
        let mut encoded = [0u8; 4];
        self.rope.insert(offset, ch.encode_utf8(&mut encoded))?;
        self.shift_line_starts(pos.row + 1, 1, true);
        Ok(Position::new(pos.column + 1, pos.row))
    }

    /// Splits the line at `pos` and returns the start of the new line.
    pub fn insert_newline(&mut self, pos: Position) -> Result<Position> {
        let offset = self.offset_of(pos)?;
        self.rope.insert(offset, "\n")?;
        self.shift_line_starts(pos.row + 1, 1, true);
        self.line_starts.insert(pos.row + 1, offset + 1);
        Ok(Position::new(0, pos.row + 1))
    }

    /// Removes the codepoint before `pos` and returns where the cursor
    /// should go.
    ///
    /// At the very start of the buffer nothing happens. At column 0 of any
    /// other line the newline before it is removed, joining the line onto
    /// the previous one; the returned position is the join point.
    ///
    /// ```
    /// use vincent::document::buffer::Buffer;
    /// use vincent::editor::cursor::Position;
    ///
    /// let mut buffer = Buffer::from_text("ab\ncd");
    /// let pos = buffer.delete_backward(Position::new(0, 1)).unwrap();
    /// assert_eq!(pos, Position::new(2, 0));
    /// assert_eq!(buffer.text(), "abcd");
    /// ```
    pub fn delete_backward(&mut self, pos: Position) -> Result<Position> {
        let offset = self.offset_of(pos)?;
        if offset == 0 {
            return Ok(pos);
        }

        self.rope.delete_range(offset - 1, offset)?;

        if pos.column == 0 {
            let previous_len = self.line_len(pos.row - 1)?;
            self.line_starts.remove(pos.row);
            self.shift_line_starts(pos.row, 1, false);
            Ok(Position::new(previous_len, pos.row - 1))
        } else {
            self.shift_line_starts(pos.row + 1, 1, false);
            Ok(Position::new(pos.column - 1, pos.row))
        }
    }

    /// Start (inclusive) and end (exclusive, before the newline) of a line.
    fn line_bounds(&self, row: usize) -> Result<(usize, usize)> {
        let start = *self
            .line_starts
            .get(row)
            .ok_or_else(|| EditorError::out_of_range(row, self.line_count()))?;
        let end = match self.line_starts.get(row + 1) {
            Some(next) => next - 1,
            None => self.rope.len(),
        };
        Ok((start, end))
    }

    /// Moves the starts of all lines from `first_row` on by `delta`.
    fn shift_line_starts(&mut self, first_row: usize, delta: usize, forward: bool) {
        for start in self.line_starts.iter_mut().skip(first_row) {
            if forward {
                *start += delta;
            } else {
                *start -= delta;
            }
        }
    }
}
