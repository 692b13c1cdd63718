//! Color definitions for vincent themes.
//!
//! This module defines the [`ThemeColors`] struct which contains all color
//! values used in the terminal UI: the text area, the status line and the
//! per-mode tags drawn at its left end.

use crate::editor::mode::EditorMode;
use ratatui::style::Color;

/// Defines all colors used in a vincent theme.
///
/// # Examples
///
/// ```
/// use vincent::theme::colors::ThemeColors;
///
/// // Get the default dark theme colors
/// let dark = ThemeColors::default_dark();
/// println!("Background: {:?}", dark.background);
///
/// // Get the default light theme colors
/// let light = ThemeColors::default_light();
/// println!("Background: {:?}", light.background);
/// ```
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Text area
    /// Main background color for the editor.
    pub background: Color,
    /// Main foreground/text color for the editor.
    pub foreground: Color,
    /// Background color for visual mode selection.
    pub selection_bg: Color,

    // Status line
    /// Background color for the status line.
    pub status_line_bg: Color,
    /// Foreground/text color for the status line.
    pub status_line_fg: Color,
    /// Text color inside the mode tag.
    pub mode_tag_fg: Color,
    /// Tag background in Normal mode.
    pub normal_tag_bg: Color,
    /// Tag background in Insert mode.
    pub insert_tag_bg: Color,
    /// Tag background in Visual mode.
    pub visual_tag_bg: Color,
}

impl ThemeColors {
    /// Returns the default dark color scheme.
    ///
    /// This theme uses ANSI colors, which adapt to the user's terminal color
    /// scheme. Mode tags follow the usual convention: blue for Normal,
    /// green for Insert, magenta for Visual.
    ///
    /// # Examples
    ///
    /// ```
    /// use vincent::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_dark();
    /// assert_eq!(colors.background, Color::Reset);
    /// assert_eq!(colors.normal_tag_bg, Color::Blue);
    /// ```
    pub fn default_dark() -> Self {
        Self {
            background: Color::Reset, // Use terminal's default background
            foreground: Color::Gray,  // ANSI 7 (terminal default light)
            selection_bg: Color::DarkGray,

            status_line_bg: Color::White,
            status_line_fg: Color::Black,
            mode_tag_fg: Color::White,
            normal_tag_bg: Color::Blue,
            insert_tag_bg: Color::Green,
            visual_tag_bg: Color::Magenta,
        }
    }

    /// Returns the default light color scheme.
    ///
    /// # Examples
    ///
    /// ```
    /// use vincent::theme::colors::ThemeColors;
    /// use ratatui::style::Color;
    ///
    /// let colors = ThemeColors::default_light();
    /// assert_eq!(colors.background, Color::Rgb(250, 250, 250));
    /// ```
    pub fn default_light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            selection_bg: Color::Rgb(208, 208, 208),

            status_line_bg: Color::Rgb(56, 58, 66),
            status_line_fg: Color::Rgb(250, 250, 250),
            mode_tag_fg: Color::Rgb(250, 250, 250),
            normal_tag_bg: Color::Rgb(64, 120, 242),
            insert_tag_bg: Color::Rgb(80, 161, 79),
            visual_tag_bg: Color::Rgb(166, 38, 164),
        }
    }

    /// Returns the gruvbox dark color scheme.
    pub fn gruvbox_dark() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),    // bg
            foreground: Color::Rgb(235, 219, 178), // fg
            selection_bg: Color::Rgb(80, 73, 69),  // bg2

            status_line_bg: Color::Rgb(60, 56, 54), // bg1
            status_line_fg: Color::Rgb(235, 219, 178),
            mode_tag_fg: Color::Rgb(40, 40, 40),
            normal_tag_bg: Color::Rgb(131, 165, 152), // blue
            insert_tag_bg: Color::Rgb(184, 187, 38),  // green
            visual_tag_bg: Color::Rgb(211, 134, 155), // purple
        }
    }

    /// Background of the status line tag for `mode`.
    ///
    /// Command mode has no tag, so it gets the plain status line background.
    pub fn mode_tag_bg(&self, mode: EditorMode) -> Color {
        match mode {
            EditorMode::Normal => self.normal_tag_bg,
            EditorMode::Insert => self.insert_tag_bg,
            EditorMode::Visual => self.visual_tag_bg,
            EditorMode::Command => self.status_line_bg,
        }
    }
}
