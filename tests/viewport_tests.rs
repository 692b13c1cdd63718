//! Integration tests for scrolling.

use vincent::editor::cursor::Position;
use vincent::editor::processor::ModalProcessor;
use vincent::editor::viewport::Viewport;
use vincent::input::keys::{EditorEvent, KeyEvent};

fn numbered_lines(n: usize) -> String {
    (0..n)
        .map(|i| format!("line {}", i))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_cursor_to_row_fifty_scrolls_minimally() {
    // 20 rows of text plus the status line
    let mut editor = ModalProcessor::with_text(&numbered_lines(100), 80, 21);
    for _ in 0..50 {
        editor.handle(EditorEvent::Key(KeyEvent::Char('j'))).unwrap();
    }
    assert_eq!(editor.cursor().position.row, 50);
    assert_eq!(editor.offset(), Position::new(0, 31));

    let snapshot = editor.snapshot();
    assert_eq!(snapshot.lines.len(), 20);
    assert_eq!(snapshot.lines[0], "line 31");
    assert_eq!(snapshot.cursor, Some(Position::new(0, 19)));
}

#[test]
fn test_scrolling_back_up_stops_at_top_edge() {
    let mut editor = ModalProcessor::with_text(&numbered_lines(100), 80, 21);
    for _ in 0..50 {
        editor.handle(EditorEvent::Key(KeyEvent::Down)).unwrap();
    }
    for _ in 0..19 {
        editor.handle(EditorEvent::Key(KeyEvent::Up)).unwrap();
    }
    assert_eq!(editor.offset().row, 31);

    editor.handle(EditorEvent::Key(KeyEvent::Up)).unwrap();
    assert_eq!(editor.offset().row, 30);
    assert_eq!(editor.snapshot().cursor, Some(Position::new(0, 0)));
}

#[test]
fn test_horizontal_scroll_follows_insert() {
    let mut editor = ModalProcessor::new(10, 5);
    editor.handle(EditorEvent::Key(KeyEvent::Char('i'))).unwrap();
    for ch in "abcdefghijkl".chars() {
        editor.handle(EditorEvent::Key(KeyEvent::Char(ch))).unwrap();
    }
    // Cursor at column 12, ten columns visible
    assert_eq!(editor.offset(), Position::new(3, 0));
    let snapshot = editor.snapshot();
    assert_eq!(snapshot.lines, vec!["defghijkl".to_string()]);
    assert_eq!(snapshot.cursor, Some(Position::new(9, 0)));
}

#[test]
fn test_short_document_does_not_scroll() {
    let mut viewport = Viewport::new(80, 24);
    viewport.scroll_to(Position::new(5, 10));
    assert_eq!(viewport.offset(), Position::default());
    assert_eq!(viewport.usable_height(), 23);
}

#[test]
fn test_set_size_keeps_offset_until_next_scroll() {
    let mut viewport = Viewport::new(80, 11);
    viewport.scroll_to(Position::new(0, 40));
    assert_eq!(viewport.offset().row, 31);

    viewport.set_size(80, 51);
    assert_eq!(viewport.offset().row, 31);
    viewport.scroll_to(Position::new(0, 40));
    assert_eq!(viewport.offset().row, 31);
}
