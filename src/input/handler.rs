//! Input event source for the terminal.

use super::keys::{map_termion_event, EditorEvent};
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, Stdin};
use termion::input::{Events, TermRead};

/// Event source for reading terminal events.
///
/// This enum wraps the events iterator to maintain its state across
/// multiple calls, so keys arriving in one read (a paste) are not lost.
enum EventSource {
    /// Reading from stdin
    Stdin(Events<Stdin>),
    /// Reading from /dev/tty (when stdin was piped)
    Tty(Events<File>),
}

/// Reads termion events and converts them to [`EditorEvent`]s.
pub struct InputHandler {
    events: EventSource,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new InputHandler that reads from stdin.
    ///
    /// # Example
    ///
    /// ```
    /// use vincent::input::InputHandler;
    ///
    /// let handler = InputHandler::new();
    /// ```
    pub fn new() -> Self {
        Self {
            events: EventSource::Stdin(io::stdin().events()),
        }
    }

    /// Creates a new InputHandler that reads from /dev/tty.
    /// Use this when stdin has been consumed for piped text.
    pub fn new_with_tty() -> Result<Self> {
        let tty_file = File::options()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .context("Failed to open /dev/tty for keyboard input")?;

        Ok(Self {
            events: EventSource::Tty(tty_file.events()),
        })
    }

    /// Blocks until the next event the editor cares about.
    ///
    /// Events with no [`EditorEvent`] counterpart (mouse, unsupported escape
    /// sequences) are skipped. Returns `None` once the input is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if reading from the terminal fails.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use vincent::input::InputHandler;
    ///
    /// let mut handler = InputHandler::new();
    /// while let Some(event) = handler.poll_event().unwrap() {
    ///     println!("{:?}", event);
    /// }
    /// ```
    pub fn poll_event(&mut self) -> Result<Option<EditorEvent>> {
        loop {
            let next = match &mut self.events {
                EventSource::Stdin(events) => events.next(),
                EventSource::Tty(events) => events.next(),
            };

            let Some(event) = next else {
                return Ok(None);
            };
            let event = event.context("Failed to read terminal input")?;
            if let Some(mapped) = map_termion_event(event) {
                return Ok(Some(mapped));
            }
        }
    }
}
