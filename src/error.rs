//! Error types for the editing core.

use std::io;
use thiserror::Error;

/// Errors raised by the rope, the buffer and the modal processor.
///
/// Only `IndexOutOfRange` ever leaves the core: it means a caller handed in
/// a coordinate that clamping should have prevented. `EmptyCommandBuffer` is
/// recovered inside the state machine, and `TerminalInit` is produced by the
/// terminal adapter in `main`.
#[derive(Debug, Error)]
pub enum EditorError {
    /// An offset, row or column outside the valid range.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Popped a character from an empty command line.
    #[error("nothing in command buffer")]
    EmptyCommandBuffer,

    /// The terminal could not be put into raw mode or queried.
    #[error("failed to initialize terminal: {0}")]
    TerminalInit(#[source] io::Error),
}

impl EditorError {
    pub(crate) fn out_of_range(index: usize, len: usize) -> Self {
        EditorError::IndexOutOfRange { index, len }
    }
}

/// Result alias used throughout the core.
pub type Result<T> = std::result::Result<T, EditorError>;
