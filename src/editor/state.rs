//! Modal state machine.
//!
//! The active mode is a tagged union, [`ModeState`], owned by the processor.
//! Mode-specific data lives in its variant: the Visual selection anchor and
//! the Command line buffer only exist while their mode is active, so leaving
//! the mode discards them.
//!
//! [`transition`] is a pure function from the current state and a key to the
//! next state plus at most one [`Effect`] for the processor to apply. It
//! touches neither the buffer nor the terminal, so the whole table can be
//! exercised directly.
//!
//! # Example
//!
//! ```
//! use vincent::editor::cursor::Position;
//! use vincent::editor::mode::EditorMode;
//! use vincent::editor::state::{transition, Effect, ModeState};
//! use vincent::input::keys::KeyEvent;
//!
//! let t = transition(ModeState::Normal, KeyEvent::Char('i'), Position::default());
//! assert_eq!(t.state.mode(), EditorMode::Insert);
//! assert_eq!(t.effect, None);
//!
//! let t = transition(t.state, KeyEvent::Char('x'), Position::default());
//! assert_eq!(t.effect, Some(Effect::InsertChar('x')));
//! ```

use super::command::{parse_command, Command, CommandBuffer};
use super::cursor::Position;
use super::mode::EditorMode;
use crate::input::keys::KeyEvent;

/// The active mode together with the data that only exists in that mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ModeState {
    #[default]
    Normal,
    Insert,
    /// Selection from `anchor` to the cursor, both ends inclusive.
    Visual { anchor: Position },
    Command(CommandBuffer),
}

impl ModeState {
    pub fn mode(&self) -> EditorMode {
        match self {
            ModeState::Normal => EditorMode::Normal,
            ModeState::Insert => EditorMode::Insert,
            ModeState::Visual { .. } => EditorMode::Visual,
            ModeState::Command(_) => EditorMode::Command,
        }
    }

    /// The command line, while in Command mode.
    pub fn command_buffer(&self) -> Option<&CommandBuffer> {
        match self {
            ModeState::Command(buffer) => Some(buffer),
            _ => None,
        }
    }

    /// Where the selection started, while in Visual mode.
    pub fn selection_anchor(&self) -> Option<Position> {
        match self {
            ModeState::Visual { anchor } => Some(*anchor),
            _ => None,
        }
    }
}

/// Work the processor performs after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Move the cursor by a delta; horizontal moves reset the sticky column.
    MoveCursor { dx: isize, dy: isize },
    InsertChar(char),
    InsertNewline,
    DeleteBackward,
    /// A quit command was entered.
    Quit,
    /// The hard-interrupt key was pressed.
    Interrupt,
}

/// Result of feeding one key to the state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub state: ModeState,
    pub effect: Option<Effect>,
}

impl Transition {
    fn to(state: ModeState) -> Self {
        Self {
            state,
            effect: None,
        }
    }

    fn with(state: ModeState, effect: Effect) -> Self {
        Self {
            state,
            effect: Some(effect),
        }
    }
}

/// Computes the next state for `key`. `cursor` is where the cursor is now;
/// entering Visual mode anchors the selection there.
pub fn transition(state: ModeState, key: KeyEvent, cursor: Position) -> Transition {
    if key == KeyEvent::Interrupt {
        return Transition::with(state, Effect::Interrupt);
    }

    match state {
        ModeState::Normal => normal_key(key, cursor),
        ModeState::Visual { anchor } => visual_key(anchor, key),
        ModeState::Insert => insert_key(key),
        ModeState::Command(buffer) => command_key(buffer, key),
    }
}

fn arrow_motion(key: KeyEvent) -> Option<Effect> {
    let (dx, dy) = match key {
        KeyEvent::Left => (-1, 0),
        KeyEvent::Right => (1, 0),
        KeyEvent::Up => (0, -1),
        KeyEvent::Down => (0, 1),
        _ => return None,
    };
    Some(Effect::MoveCursor { dx, dy })
}

/// Arrow keys plus `h j k l`.
fn navigation_motion(key: KeyEvent) -> Option<Effect> {
    let (dx, dy) = match key {
        KeyEvent::Char('h') => (-1, 0),
        KeyEvent::Char('l') => (1, 0),
        KeyEvent::Char('k') => (0, -1),
        KeyEvent::Char('j') => (0, 1),
        _ => return arrow_motion(key),
    };
    Some(Effect::MoveCursor { dx, dy })
}

fn normal_key(key: KeyEvent, cursor: Position) -> Transition {
    match key {
        KeyEvent::Char('i') => Transition::to(ModeState::Insert),
        KeyEvent::Char('v') => Transition::to(ModeState::Visual { anchor: cursor }),
        KeyEvent::Char(':') => Transition::to(ModeState::Command(CommandBuffer::new())),
        _ => match navigation_motion(key) {
            Some(motion) => Transition::with(ModeState::Normal, motion),
            None => Transition::to(ModeState::Normal),
        },
    }
}

fn visual_key(anchor: Position, key: KeyEvent) -> Transition {
    match key {
        KeyEvent::Escape | KeyEvent::Char('v') => Transition::to(ModeState::Normal),
        KeyEvent::Char('i') => Transition::to(ModeState::Insert),
        KeyEvent::Char(':') => Transition::to(ModeState::Command(CommandBuffer::new())),
        _ => {
            let state = ModeState::Visual { anchor };
            match navigation_motion(key) {
                Some(motion) => Transition::with(state, motion),
                None => Transition::to(state),
            }
        }
    }
}

fn insert_key(key: KeyEvent) -> Transition {
    match key {
        KeyEvent::Escape => Transition::to(ModeState::Normal),
        KeyEvent::Enter => Transition::with(ModeState::Insert, Effect::InsertNewline),
        KeyEvent::Backspace | KeyEvent::Delete => {
            Transition::with(ModeState::Insert, Effect::DeleteBackward)
        }
        KeyEvent::Char(c) => Transition::with(ModeState::Insert, Effect::InsertChar(c)),
        _ => match arrow_motion(key) {
            Some(motion) => Transition::with(ModeState::Insert, motion),
            None => Transition::to(ModeState::Insert),
        },
    }
}

fn command_key(mut buffer: CommandBuffer, key: KeyEvent) -> Transition {
    match key {
        KeyEvent::Escape => Transition::to(ModeState::Normal),
        KeyEvent::Backspace | KeyEvent::Delete => match buffer.pop() {
            Ok(_) => Transition::to(ModeState::Command(buffer)),
            Err(err) => {
                tracing::debug!("{}, leaving command mode", err);
                Transition::to(ModeState::Normal)
            }
        },
        KeyEvent::Enter => match parse_command(&buffer) {
            Some(Command::Quit) => Transition::with(ModeState::Command(buffer), Effect::Quit),
            None => {
                tracing::debug!(command = %buffer, "unknown command");
                Transition::to(ModeState::Command(buffer))
            }
        },
        KeyEvent::Char(c) => {
            buffer.push(c);
            Transition::to(ModeState::Command(buffer))
        }
        _ => Transition::to(ModeState::Command(buffer)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(keys: &[KeyEvent]) -> (ModeState, Vec<Effect>) {
        let mut state = ModeState::Normal;
        let mut effects = Vec::new();
        for key in keys {
            let t = transition(state, *key, Position::default());
            state = t.state;
            effects.extend(t.effect);
        }
        (state, effects)
    }

    fn chars(text: &str) -> Vec<KeyEvent> {
        text.chars().map(KeyEvent::Char).collect()
    }

    #[test]
    fn test_normal_mode_entries() {
        assert_eq!(run(&chars("i")).0, ModeState::Insert);
        assert_eq!(run(&chars(":")).0, ModeState::Command(CommandBuffer::new()));
        assert_eq!(
            run(&chars("v")).0,
            ModeState::Visual {
                anchor: Position::default()
            }
        );
    }

    #[test]
    fn test_normal_mode_ignores_other_printables() {
        let (state, effects) = run(&chars("xyz"));
        assert_eq!(state, ModeState::Normal);
        assert!(effects.is_empty());
    }

    #[test]
    fn test_navigation_keys_in_normal_mode() {
        let (_, effects) = run(&[KeyEvent::Char('h'), KeyEvent::Down, KeyEvent::Char('k')]);
        assert_eq!(
            effects,
            vec![
                Effect::MoveCursor { dx: -1, dy: 0 },
                Effect::MoveCursor { dx: 0, dy: 1 },
                Effect::MoveCursor { dx: 0, dy: -1 },
            ]
        );
    }

    #[test]
    fn test_hjkl_are_text_in_insert_mode() {
        let mut keys = chars("ihj");
        keys.push(KeyEvent::Right);
        let (state, effects) = run(&keys);
        assert_eq!(state, ModeState::Insert);
        assert_eq!(
            effects,
            vec![
                Effect::InsertChar('h'),
                Effect::InsertChar('j'),
                Effect::MoveCursor { dx: 1, dy: 0 },
            ]
        );
    }

    #[test]
    fn test_visual_mode_exits() {
        for exit in [KeyEvent::Escape, KeyEvent::Char('v')] {
            let (state, _) = run(&[KeyEvent::Char('v'), exit]);
            assert_eq!(state, ModeState::Normal);
        }
        let (state, _) = run(&chars("vi"));
        assert_eq!(state, ModeState::Insert);
    }

    #[test]
    fn test_command_backspace_on_empty_returns_to_normal() {
        let (state, _) = run(&[KeyEvent::Char(':'), KeyEvent::Char('q'), KeyEvent::Backspace]);
        assert_eq!(state, ModeState::Command(CommandBuffer::new()));

        let (state, _) = run(&[
            KeyEvent::Char(':'),
            KeyEvent::Char('q'),
            KeyEvent::Backspace,
            KeyEvent::Backspace,
        ]);
        assert_eq!(state, ModeState::Normal);
    }

    #[test]
    fn test_unknown_command_keeps_buffer() {
        let mut keys = chars(":wq");
        keys.push(KeyEvent::Enter);
        let (state, effects) = run(&keys);
        assert_eq!(state, ModeState::Command(CommandBuffer::from("wq")));
        assert!(effects.is_empty());
    }

    #[test]
    fn test_interrupt_from_every_mode() {
        for prefix in ["", "i", "v", ":"] {
            let mut keys = chars(prefix);
            keys.push(KeyEvent::Interrupt);
            let (_, effects) = run(&keys);
            assert_eq!(effects, vec![Effect::Interrupt], "prefix {:?}", prefix);
        }
    }
}
