//! UI module for the vincent terminal interface.
//!
//! This module renders [`ViewSnapshot`]s produced by the modal processor:
//! the text area above and the status line on the last row.

pub mod status_line;
pub mod text_view;

use anyhow::Result;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Terminal;

use crate::editor::processor::ViewSnapshot;
use crate::editor::viewport::STATUS_LINE_HEIGHT;
use crate::theme::Theme;

/// Main UI structure that manages the terminal interface rendering.
///
/// The UI is composed of two areas:
/// - Text area (top): the visible part of the document
/// - Status line (bottom): mode tag and cursor position, or the command line
///
/// # Example
///
/// ```no_run
/// use vincent::ui::UI;
/// use vincent::theme::get_builtin_theme;
/// use vincent::editor::processor::ModalProcessor;
/// use ratatui::backend::TermionBackend;
/// use ratatui::Terminal;
/// use std::io;
/// use termion::raw::IntoRawMode;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// let ui = UI::new(theme);
/// let editor = ModalProcessor::new(80, 24);
/// let backend = TermionBackend::new(io::stdout().into_raw_mode().unwrap());
/// let mut terminal = Terminal::new(backend).unwrap();
/// ui.render(&mut terminal, &editor.snapshot()).unwrap();
/// ```
pub struct UI {
    theme: Theme,
}

impl UI {
    /// Creates a new UI instance with the specified theme.
    ///
    /// # Example
    ///
    /// ```
    /// use vincent::ui::UI;
    /// use vincent::theme::get_builtin_theme;
    ///
    /// let theme = get_builtin_theme("default-dark").unwrap();
    /// let ui = UI::new(theme);
    /// assert_eq!(ui.theme_name(), "default-dark");
    /// ```
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Returns the current theme name.
    pub fn theme_name(&self) -> &str {
        &self.theme.name
    }

    /// Renders one frame.
    ///
    /// The whole frame is redrawn from the snapshot; ratatui diffs it
    /// against the previous frame before writing to the terminal. The
    /// hardware cursor is shown where the snapshot puts it and hidden when
    /// it is off screen.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal drawing fails.
    pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>, snapshot: &ViewSnapshot) -> Result<()> {
        terminal.draw(|f| {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Min(0),                             // Text area
                    Constraint::Length(STATUS_LINE_HEIGHT as u16), // Status line
                ])
                .split(f.area());

            text_view::render_text_view(f, chunks[0], snapshot, &self.theme.colors);
            status_line::render_status_line(f, chunks[1], snapshot, &self.theme.colors);

            if let Some(cursor) = snapshot.cursor {
                f.set_cursor_position((cursor.column as u16, cursor.row as u16));
            }
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::processor::ModalProcessor;
    use crate::input::keys::{EditorEvent, KeyEvent};
    use crate::theme::get_builtin_theme;
    use ratatui::backend::TestBackend;

    fn row_text(terminal: &Terminal<TestBackend>, row: u16) -> String {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.width)
            .map(|x| buffer[(x, row)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_render_text_and_status() {
        let ui = UI::new(get_builtin_theme("default-dark").unwrap());
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let editor = ModalProcessor::with_text("hello\nworld", 10, 3);

        ui.render(&mut terminal, &editor.snapshot()).unwrap();

        assert_eq!(row_text(&terminal, 0), "hello     ");
        assert_eq!(row_text(&terminal, 1), "world     ");
        assert_eq!(row_text(&terminal, 2), " NOR   1:1");
        assert_eq!(
            terminal.get_cursor_position().unwrap(),
            ratatui::layout::Position::new(0, 0)
        );
    }

    #[test]
    fn test_render_selection_background() {
        let theme = get_builtin_theme("gruvbox-dark").unwrap();
        let selection_bg = theme.colors.selection_bg;
        let ui = UI::new(theme);
        let mut terminal = Terminal::new(TestBackend::new(10, 3)).unwrap();
        let mut editor = ModalProcessor::with_text("hello", 10, 3);
        for key in [KeyEvent::Char('v'), KeyEvent::Char('l')] {
            editor.handle(EditorEvent::Key(key)).unwrap();
        }

        ui.render(&mut terminal, &editor.snapshot()).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, selection_bg);
        assert_eq!(buffer[(1, 0)].bg, selection_bg);
        assert_ne!(buffer[(2, 0)].bg, selection_bg);
    }
}
