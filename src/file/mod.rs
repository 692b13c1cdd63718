//! File I/O for the editor.
//!
//! This module loads the initial document text from disk or stdin. Documents
//! are opened read-only; nothing is written back.

pub mod loader;
