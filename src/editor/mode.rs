//! Editor mode management for modal editing.
//!
//! This module provides the `EditorMode` enum that represents the current
//! editing mode. Following vim-style modal editing, the same key does
//! different things depending on the mode.
//!
//! # Modes
//!
//! - **Normal**: The default mode for navigation
//! - **Insert**: Typing inserts text at the cursor
//! - **Visual**: Navigation that extends a selection from an anchor
//! - **Command**: Typing builds a `:` command line
//!
//! # Example
//!
//! ```
//! use vincent::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode by default
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! assert_eq!(format!("{}", mode), "NORMAL");
//! assert_eq!(mode.tag(), " NOR ");
//! ```

use std::fmt;

/// Represents the current editing mode of the editor.
///
/// The mode is shown in the status line through [`EditorMode::tag`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum EditorMode {
    /// Navigation; the cursor always sits on a character.
    #[default]
    Normal,
    /// Text entry; the cursor may sit after the last character of a line.
    Insert,
    /// Navigation with an active selection.
    Visual,
    /// Typing a `:` command.
    Command,
}

impl EditorMode {
    /// The fixed-width tag drawn at the left of the status line.
    ///
    /// Command mode has no tag: the status line shows the command line
    /// instead.
    pub fn tag(&self) -> &'static str {
        match self {
            EditorMode::Normal => " NOR ",
            EditorMode::Insert => " INS ",
            EditorMode::Visual => " VIS ",
            EditorMode::Command => "",
        }
    }

    /// Whether the cursor may sit one past the last character of a line.
    pub fn allows_cursor_past_end(&self) -> bool {
        matches!(self, EditorMode::Insert | EditorMode::Command)
    }
}

impl fmt::Display for EditorMode {
    /// Formats the mode as an uppercase name.
    ///
    /// ```
    /// use vincent::editor::mode::EditorMode;
    ///
    /// assert_eq!(format!("{}", EditorMode::Insert), "INSERT");
    /// assert_eq!(format!("{}", EditorMode::Command), "COMMAND");
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EditorMode::Normal => write!(f, "NORMAL"),
            EditorMode::Insert => write!(f, "INSERT"),
            EditorMode::Visual => write!(f, "VISUAL"),
            EditorMode::Command => write!(f, "COMMAND"),
        }
    }
}
