//! Keyboard event mapping and input event types.

use termion::event::{Event, Key};

/// A key press, abstracted from the terminal library.
///
/// Named keys are listed explicitly; anything printable arrives as `Char`.
/// Keys the editor has no use for map to `Unknown` so they still reach the
/// processor (and trigger a redraw) without doing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Escape,
    Enter,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    /// Ctrl-C: terminate the session immediately
    Interrupt,
    /// A printable codepoint
    Char(char),
    /// Unknown or unmapped key
    Unknown,
}

/// Everything the event loop feeds into the processor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorEvent {
    Key(KeyEvent),
    /// The terminal now has this many columns and rows.
    Resize { width: u16, height: u16 },
}

/// Maps a termion key to a [`KeyEvent`].
///
/// # Example
///
/// ```
/// use termion::event::Key;
/// use vincent::input::keys::{map_key, KeyEvent};
///
/// assert_eq!(map_key(Key::Char('j')), KeyEvent::Char('j'));
/// assert_eq!(map_key(Key::Char('\n')), KeyEvent::Enter);
/// assert_eq!(map_key(Key::Ctrl('c')), KeyEvent::Interrupt);
/// ```
pub fn map_key(key: Key) -> KeyEvent {
    match key {
        Key::Esc => KeyEvent::Escape,
        Key::Char('\n') | Key::Char('\r') => KeyEvent::Enter,
        Key::Backspace => KeyEvent::Backspace,
        Key::Delete => KeyEvent::Delete,
        Key::Left => KeyEvent::Left,
        Key::Right => KeyEvent::Right,
        Key::Up => KeyEvent::Up,
        Key::Down => KeyEvent::Down,
        Key::Ctrl('c') => KeyEvent::Interrupt,
        Key::Char(c) if c == '\t' || !c.is_control() => KeyEvent::Char(c),
        _ => KeyEvent::Unknown,
    }
}

/// Maps a termion event to an [`EditorEvent`].
///
/// Mouse and unsupported events yield `None`: they are dropped before the
/// processor sees them.
pub fn map_termion_event(event: Event) -> Option<EditorEvent> {
    match event {
        Event::Key(key) => Some(EditorEvent::Key(map_key(key))),
        _ => None,
    }
}
