//! Command-line buffer and command parsing.
//!
//! Typing `:` in Normal or Visual mode opens a [`CommandBuffer`]. Enter runs
//! it through [`parse_command`]; the only command is quit.

use std::fmt;

use crate::error::{EditorError, Result};

/// Characters typed after `:`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandBuffer {
    chars: Vec<char>,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) {
        self.chars.push(ch);
    }

    /// Removes the last character.
    ///
    /// # Errors
    ///
    /// `EmptyCommandBuffer` when there is nothing to remove.
    pub fn pop(&mut self) -> Result<char> {
        self.chars.pop().ok_or(EditorError::EmptyCommandBuffer)
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }
}

impl fmt::Display for CommandBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|ch| write!(f, "{}", ch))
    }
}

impl From<&str> for CommandBuffer {
    fn from(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
        }
    }
}

/// A recognized `:` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `:q` or `:quit`
    Quit,
}

/// Parses a command line. Matching is exact: no trimming, no abbreviations
/// beyond `q`.
///
/// ```
/// use vincent::editor::command::{parse_command, Command, CommandBuffer};
///
/// assert_eq!(parse_command(&CommandBuffer::from("quit")), Some(Command::Quit));
/// assert_eq!(parse_command(&CommandBuffer::from("q")), Some(Command::Quit));
/// assert_eq!(parse_command(&CommandBuffer::from("w")), None);
/// ```
pub fn parse_command(buffer: &CommandBuffer) -> Option<Command> {
    match buffer.as_chars() {
        ['q'] | ['q', 'u', 'i', 't'] => Some(Command::Quit),
        _ => None,
    }
}
