//! Theme system for vincent.
//!
//! This module provides the theme infrastructure, including:
//! - Color definitions ([`colors`] module)
//! - Theme data structure ([`Theme`])
//! - Built-in theme access ([`get_builtin_theme`])
//!
//! # Built-in Themes
//!
//! - `"default-dark"`: A dark theme optimized for low-light environments
//! - `"default-light"`: A light theme for well-lit environments
//! - `"gruvbox-dark"`: Retro groove color scheme with warm, earthy tones
//!
//! # Examples
//!
//! ```
//! use vincent::theme::get_builtin_theme;
//!
//! // Load the default dark theme
//! let theme = get_builtin_theme("default-dark").unwrap();
//! println!("Theme: {}", theme.name);
//!
//! // Access theme colors
//! println!("Background: {:?}", theme.colors.background);
//! ```

pub mod colors;

use colors::ThemeColors;

/// The theme used when a configured name is unknown.
pub const DEFAULT_THEME: &str = "default-dark";

/// A color theme for the terminal UI.
///
/// Each theme has a name and a set of colors defined by [`ThemeColors`].
///
/// # Examples
///
/// ```
/// use vincent::theme::get_builtin_theme;
///
/// let theme = get_builtin_theme("default-dark").unwrap();
/// assert_eq!(theme.name, "default-dark");
/// ```
#[derive(Debug, Clone)]
pub struct Theme {
    /// The name of the theme (e.g., "default-dark").
    pub name: String,
    /// The color definitions for this theme.
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: DEFAULT_THEME.to_string(),
            colors: ThemeColors::default_dark(),
        }
    }
}

/// Returns a built-in theme by name, or `None` if the name is not found.
///
/// # Examples
///
/// ```
/// use vincent::theme::get_builtin_theme;
///
/// // Get a valid theme
/// let dark = get_builtin_theme("default-dark");
/// assert!(dark.is_some());
///
/// // Try an invalid theme name
/// let invalid = get_builtin_theme("nonexistent");
/// assert!(invalid.is_none());
/// ```
pub fn get_builtin_theme(name: &str) -> Option<Theme> {
    let colors = match name {
        "default-dark" => ThemeColors::default_dark(),
        "default-light" => ThemeColors::default_light(),
        "gruvbox-dark" => ThemeColors::gruvbox_dark(),
        _ => return None,
    };
    Some(Theme {
        name: name.to_string(),
        colors,
    })
}

/// Returns a sorted list of all available built-in theme names.
///
/// # Examples
///
/// ```
/// use vincent::theme::list_builtin_themes;
///
/// let themes = list_builtin_themes();
/// assert!(themes.contains(&"default-dark".to_string()));
/// assert!(themes.contains(&"default-light".to_string()));
/// ```
pub fn list_builtin_themes() -> Vec<String> {
    let mut themes = vec![
        "default-dark".to_string(),
        "default-light".to_string(),
        "gruvbox-dark".to_string(),
    ];
    themes.sort();
    themes
}
