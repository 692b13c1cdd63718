//! Input handling: terminal events mapped to editor keys.

pub mod handler;
pub mod keys;

pub use handler::InputHandler;
pub use keys::{EditorEvent, KeyEvent};
