//! Vincent - a modal, vim-like text editor for the terminal.
//!
//! The document lives in a rope ([`document::rope`]) wrapped by a line
//! oriented [`document::buffer::Buffer`]. The [`editor`] module turns key
//! presses into edits and cursor motion through a pure mode transition
//! function, and [`ui`] draws the resulting snapshot with ratatui.

pub mod config;
pub mod document;
pub mod editor;
pub mod error;
pub mod file;
pub mod input;
pub mod logging;
pub mod theme;
pub mod ui;
