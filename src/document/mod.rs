//! Document model.
//!
//! - `rope`: balanced binary tree of text chunks with sub-linear edits
//! - `buffer`: line-oriented view over a rope, addressed by [`Position`]
//!
//! [`Position`]: crate::editor::cursor::Position

pub mod buffer;
pub mod rope;
