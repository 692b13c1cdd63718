//! Modal editing core.
//!
//! This module turns key presses into edits, cursor motion and scrolling.
//! It follows vim-style modal editing with Normal, Insert, Visual and Command
//! modes.
//!
//! # Modules
//!
//! - `mode`: Editor mode enumeration and status tags
//! - `cursor`: Cursor position and sticky column
//! - `viewport`: Visible window and minimal scrolling
//! - `command`: `:` command line buffer and parsing
//! - `state`: Mode state and the pure transition function
//! - `processor`: Applies transitions to the buffer, cursor and viewport
//!
//! # Example
//!
//! ```
//! use vincent::editor::mode::EditorMode;
//!
//! // Editor starts in Normal mode
//! let mode = EditorMode::default();
//! assert_eq!(mode, EditorMode::Normal);
//! ```

pub mod command;
pub mod cursor;
pub mod mode;
pub mod processor;
pub mod state;
pub mod viewport;
