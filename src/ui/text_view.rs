//! Text area widget.
//!
//! Draws the visible lines of a [`ViewSnapshot`] and highlights the Visual
//! selection. Lines arrive already clipped to the window, so screen column
//! `x` of row `y` is simply the `x`th character of `lines[y]`.

use crate::editor::cursor::Position;
use crate::editor::processor::ViewSnapshot;
use crate::theme::colors::ThemeColors;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn render_line<'a>(text: &'a str, row: usize, snapshot: &ViewSnapshot, colors: &ThemeColors) -> Line<'a> {
    let base = Style::default().fg(colors.foreground).bg(colors.background);
    if snapshot.selection.is_none() {
        return Line::from(Span::styled(text, base));
    }

    let selected = base.bg(colors.selection_bg);
    let mut spans: Vec<Span> = text
        .chars()
        .enumerate()
        .map(|(column, ch)| {
            let style = if snapshot.is_selected(Position::new(column, row)) {
                selected
            } else {
                base
            };
            Span::styled(ch.to_string(), style)
        })
        .collect();

    // A selected empty line still gets one highlighted cell.
    if spans.is_empty() && snapshot.is_selected(Position::new(0, row)) {
        spans.push(Span::styled(" ", selected));
    }
    Line::from(spans)
}

/// Renders the text area.
pub fn render_text_view(f: &mut Frame, area: Rect, snapshot: &ViewSnapshot, colors: &ThemeColors) {
    let lines: Vec<Line> = snapshot
        .lines
        .iter()
        .enumerate()
        .map(|(row, text)| render_line(text, row, snapshot, colors))
        .collect();

    let style = Style::default().fg(colors.foreground).bg(colors.background);
    f.render_widget(Paragraph::new(lines).style(style), area);
}
