//! Status line widget.
//!
//! The status line shows the mode tag (` NOR `, ` INS `, ` VIS `) on a
//! colored background, then the cursor position right-aligned. In Command
//! mode it shows the command line instead.
//!
//! Example status line: ` NOR                                   12:4`

use crate::editor::processor::ViewSnapshot;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Splits the status text into the mode tag and the rest.
///
/// The text is built by the processor with the tag at the front, so the
/// split is by the tag's length. On a screen narrower than the tag the
/// status holds a cut tag plus padding, all of which keeps the tag style.
fn split_tag(snapshot: &ViewSnapshot) -> (&str, &str) {
    let tag = snapshot.mode.tag();
    let status = snapshot.status.as_str();
    if tag.is_empty() {
        return ("", status);
    }
    match status.strip_prefix(tag) {
        Some(rest) => (tag, rest),
        None if tag.starts_with(status.trim_end()) => (status, ""),
        None => ("", status),
    }
}

/// Renders the status line for `snapshot` into `area`.
///
/// # Example
///
/// ```no_run
/// use ratatui::Frame;
/// use ratatui::layout::Rect;
/// use vincent::editor::processor::ModalProcessor;
/// use vincent::theme;
///
/// # fn example(f: &mut Frame, area: Rect) {
/// let editor = ModalProcessor::new(80, 24);
/// let theme = theme::get_builtin_theme("default-dark").unwrap();
/// vincent::ui::status_line::render_status_line(f, area, &editor.snapshot(), &theme.colors);
/// # }
/// ```
pub fn render_status_line(f: &mut Frame, area: Rect, snapshot: &ViewSnapshot, colors: &ThemeColors) {
    let default_style = Style::default()
        .fg(colors.status_line_fg)
        .bg(colors.status_line_bg);
    let tag_style = Style::default()
        .fg(colors.mode_tag_fg)
        .bg(colors.mode_tag_bg(snapshot.mode))
        .add_modifier(Modifier::BOLD);

    let (tag, rest) = split_tag(snapshot);
    let mut spans = Vec::with_capacity(2);
    if !tag.is_empty() {
        spans.push(Span::styled(tag, tag_style));
    }
    spans.push(Span::styled(rest, default_style));

    let status = Paragraph::new(Line::from(spans)).style(default_style);
    f.render_widget(status, area);
}
