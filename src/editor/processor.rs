//! The modal processor: the editing core driven by the event loop.
//!
//! [`ModalProcessor`] owns the buffer, the cursor, the viewport and the mode
//! state. Each [`EditorEvent`] is handled to completion:
//!
//! 1. the key goes through [`transition`] to get the next mode and an effect,
//! 2. the effect is applied to the buffer or the cursor,
//! 3. the cursor is clamped to the document for the new mode,
//! 4. the viewport scrolls to reveal it.
//!
//! The renderer reads the result through [`ModalProcessor::snapshot`].
//!
//! # Example
//!
//! ```
//! use vincent::editor::mode::EditorMode;
//! use vincent::editor::processor::{Control, ModalProcessor};
//! use vincent::input::keys::{EditorEvent, KeyEvent};
//!
//! let mut editor = ModalProcessor::new(80, 24);
//! for key in [KeyEvent::Char('i'), KeyEvent::Char('h'), KeyEvent::Char('i'), KeyEvent::Escape] {
//!     assert_eq!(editor.handle(EditorEvent::Key(key)).unwrap(), Control::Continue);
//! }
//! assert_eq!(editor.mode(), EditorMode::Normal);
//! assert_eq!(editor.buffer().text(), "hi");
//! assert_eq!(editor.cursor().position.column, 1);
//! ```

use std::mem;

use super::command::CommandBuffer;
use super::cursor::{CursorInfo, Position};
use super::mode::EditorMode;
use super::state::{transition, Effect, ModeState};
use super::viewport::Viewport;
use crate::document::buffer::Buffer;
use crate::error::Result;
use crate::input::keys::EditorEvent;

/// What the event loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    /// A quit command ran; shut down normally.
    Quit,
    /// Ctrl-C; shut down immediately.
    Interrupt,
}

/// An inclusive character-wise selection, in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: Position,
    pub end: Position,
}

impl Selection {
    /// Orders the two ends so `start <= end` in document order.
    pub fn between(a: Position, b: Position) -> Self {
        Self {
            start: a.min(b),
            end: a.max(b),
        }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.start <= pos && pos <= self.end
    }
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewSnapshot {
    pub mode: EditorMode,
    /// Visible text rows, already clipped to the window.
    pub lines: Vec<String>,
    /// Hardware cursor cell in screen coordinates, if it is on screen.
    pub cursor: Option<Position>,
    /// Status line text, padded or cut to the screen width.
    pub status: String,
    pub selection: Option<Selection>,
    /// Document cell shown at the top-left of the screen.
    pub offset: Position,
}

impl ViewSnapshot {
    /// Whether the screen cell `cell` shows a selected character.
    pub fn is_selected(&self, cell: Position) -> bool {
        let doc = Position::new(cell.column + self.offset.column, cell.row + self.offset.row);
        self.selection.is_some_and(|s| s.contains(doc))
    }
}

/// Buffer, cursor, viewport and mode, updated one event at a time.
#[derive(Debug, Clone)]
pub struct ModalProcessor {
    buffer: Buffer,
    cursor: CursorInfo,
    viewport: Viewport,
    state: ModeState,
    show_cursor_position: bool,
}

impl ModalProcessor {
    /// An empty document in a `width` x `height` terminal.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_text("", width, height)
    }

    /// A document holding `text`, cursor at the origin, Normal mode.
    pub fn with_text(text: &str, width: usize, height: usize) -> Self {
        Self {
            buffer: Buffer::from_text(text),
            cursor: CursorInfo::new(),
            viewport: Viewport::new(width, height),
            state: ModeState::default(),
            show_cursor_position: true,
        }
    }

    /// Toggles the `row:col` indicator at the right of the status line.
    pub fn set_show_cursor_position(&mut self, show: bool) {
        self.show_cursor_position = show;
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode()
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn cursor(&self) -> CursorInfo {
        self.cursor
    }

    pub fn offset(&self) -> Position {
        self.viewport.offset()
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    pub fn command_buffer(&self) -> Option<&CommandBuffer> {
        self.state.command_buffer()
    }

    /// Handles one event to completion.
    ///
    /// # Errors
    ///
    /// `IndexOutOfRange` if an edit was attempted at a position outside the
    /// document. Cursor clamping keeps this from happening; the error is
    /// logged and returned unchanged.
    pub fn handle(&mut self, event: EditorEvent) -> Result<Control> {
        let mut resync_preferred = false;
        let control = match event {
            EditorEvent::Resize { width, height } => {
                tracing::debug!(width, height, "terminal resized");
                self.viewport.set_size(width as usize, height as usize);
                Control::Continue
            }
            EditorEvent::Key(key) => {
                let before = self.state.mode();
                let state = mem::take(&mut self.state);
                let next = transition(state, key, self.cursor.position);
                self.state = next.state;

                let after = self.state.mode();
                if before != after {
                    tracing::debug!(from = %before, to = %after, "mode change");
                    // Leaving Insert pulls the cursor back onto the line.
                    resync_preferred = before == EditorMode::Insert;
                }

                match next.effect {
                    Some(effect) => self.apply(effect).inspect_err(|err| {
                        tracing::warn!(?effect, "edit rejected: {}", err);
                    })?,
                    None => Control::Continue,
                }
            }
        };

        self.reveal_cursor()?;
        if resync_preferred {
            self.cursor.sync_preferred();
        }
        Ok(control)
    }

    fn apply(&mut self, effect: Effect) -> Result<Control> {
        let pos = self.cursor.position;
        let moved_to = match effect {
            Effect::MoveCursor { dx, dy } => {
                self.move_cursor(dx, dy)?;
                return Ok(Control::Continue);
            }
            Effect::InsertChar(ch) => self.buffer.insert_char(pos, ch)?,
            Effect::InsertNewline => self.buffer.insert_newline(pos)?,
            Effect::DeleteBackward => self.buffer.delete_backward(pos)?,
            Effect::Quit => return Ok(Control::Quit),
            Effect::Interrupt => return Ok(Control::Interrupt),
        };
        self.cursor = CursorInfo::at(moved_to);
        Ok(Control::Continue)
    }

    fn move_cursor(&mut self, dx: isize, dy: isize) -> Result<()> {
        self.cursor.move_by(dx, dy, true);
        self.cursor.clamp_row(self.buffer.line_count());
        if dy != 0 {
            self.cursor.restore_preferred();
        }

        let line_len = self.buffer.line_len(self.cursor.position.row)?;
        self.cursor
            .clamp_to_line(line_len, self.mode().allows_cursor_past_end());
        if dx != 0 {
            self.cursor.sync_preferred();
        }
        Ok(())
    }

    /// Clamps the cursor for the current mode, then scrolls to it.
    fn reveal_cursor(&mut self) -> Result<()> {
        let allow_past_end = self.mode().allows_cursor_past_end();
        let line_count = self.buffer.line_count();

        self.cursor.clamp_row(line_count);
        let line_len = self.buffer.line_len(self.cursor.position.row)?;
        self.cursor.clamp_to_line(line_len, allow_past_end);

        self.viewport.scroll_to(self.cursor.position);

        let buffer = &self.buffer;
        self.viewport
            .clamp_cursor(&mut self.cursor, line_count, |row| {
                let len = buffer.line_len(row).unwrap_or_default();
                if allow_past_end {
                    len
                } else {
                    len.saturating_sub(1)
                }
            });
        Ok(())
    }

    /// Builds the status line text for the current state.
    ///
    /// ```
    /// use vincent::editor::processor::ModalProcessor;
    ///
    /// let editor = ModalProcessor::new(12, 5);
    /// assert_eq!(editor.status_text(), " NOR     1:1");
    /// ```
    ///
    /// The result is exactly the screen width. When it does not fit, the
    /// cursor position is dropped first, then the text is cut at the right.
    pub fn status_text(&self) -> String {
        let width = self.viewport.width();
        if let Some(buffer) = self.state.command_buffer() {
            let line: String = format!(":{}", buffer).chars().take(width).collect();
            return format!("{:<width$}", line);
        }

        let tag = self.mode().tag();
        let position = if self.show_cursor_position {
            self.cursor.position.to_string()
        } else {
            String::new()
        };
        if tag.len() + position.len() > width {
            let tag: String = tag.chars().take(width).collect();
            return format!("{:<width$}", tag);
        }
        let fill = width - tag.len() - position.len();
        format!("{}{}{}", tag, " ".repeat(fill), position)
    }

    /// Captures what is visible right now.
    pub fn snapshot(&self) -> ViewSnapshot {
        let offset = self.viewport.offset();
        let width = self.viewport.width();
        let last_row = (offset.row + self.viewport.usable_height()).min(self.buffer.line_count());

        let lines = (offset.row..last_row)
            .filter_map(|row| self.buffer.line_at(row).ok())
            .map(|line| line.chars().skip(offset.column).take(width).collect())
            .collect();

        let cursor = match self.state.command_buffer() {
            Some(buffer) if self.viewport.height() > 0 && width > 0 => Some(Position::new(
                (buffer.as_chars().len() + 1).min(width - 1),
                self.viewport.usable_height(),
            )),
            Some(_) => None,
            None => self.viewport.to_screen(self.cursor.position),
        };

        let selection = self
            .state
            .selection_anchor()
            .map(|anchor| Selection::between(anchor, self.cursor.position));

        ViewSnapshot {
            mode: self.mode(),
            lines,
            cursor,
            status: self.status_text(),
            selection,
            offset,
        }
    }
}
