//! Integration tests for the line-oriented buffer.

use vincent::document::buffer::Buffer;
use vincent::editor::cursor::Position;
use vincent::error::EditorError;

#[test]
fn test_line_count_and_trailing_newline() {
    assert_eq!(Buffer::from_text("").line_count(), 1);
    assert_eq!(Buffer::from_text("one").line_count(), 1);
    assert_eq!(Buffer::from_text("one\n").line_count(), 2);
    assert_eq!(Buffer::from_text("\n\n\n").line_count(), 4);
}

#[test]
fn test_line_at_and_line_len() {
    let buffer = Buffer::from_text("alpha\n\nγάμμα");
    assert_eq!(buffer.line_at(0).unwrap(), "alpha");
    assert_eq!(buffer.line_at(1).unwrap(), "");
    assert_eq!(buffer.line_at(2).unwrap(), "γάμμα");
    assert_eq!(buffer.line_len(2).unwrap(), 5);
    assert_eq!(buffer.total_length(), 12);

    assert!(matches!(
        buffer.line_at(3),
        Err(EditorError::IndexOutOfRange { index: 3, len: 3 })
    ));
}

#[test]
fn test_insert_char_returns_next_column() {
    let mut buffer = Buffer::new();
    let mut pos = Position::default();
    for ch in "hi".chars() {
        pos = buffer.insert_char(pos, ch).unwrap();
    }
    assert_eq!(buffer.text(), "hi");
    assert_eq!(pos, Position::new(2, 0));
}

#[test]
fn test_insert_newline_mid_line() {
    let mut buffer = Buffer::from_text("headtail\nnext");
    let pos = buffer.insert_newline(Position::new(4, 0)).unwrap();
    assert_eq!(pos, Position::new(0, 1));
    assert_eq!(buffer.line_count(), 3);
    assert_eq!(buffer.line_at(0).unwrap(), "head");
    assert_eq!(buffer.line_at(1).unwrap(), "tail");
    assert_eq!(buffer.line_at(2).unwrap(), "next");
}

#[test]
fn test_insert_char_newline_delegates() {
    let mut buffer = Buffer::from_text("ab");
    let pos = buffer.insert_char(Position::new(1, 0), '\n').unwrap();
    assert_eq!(pos, Position::new(0, 1));
    assert_eq!(buffer.text(), "a\nb");
}

#[test]
fn test_delete_backward_at_origin_is_noop() {
    let mut buffer = Buffer::from_text("abc");
    let pos = buffer.delete_backward(Position::new(0, 0)).unwrap();
    assert_eq!(pos, Position::new(0, 0));
    assert_eq!(buffer.text(), "abc");
}

#[test]
fn test_delete_backward_joins_lines() {
    let mut buffer = Buffer::from_text("one\ntwo\nthree");
    let pos = buffer.delete_backward(Position::new(0, 2)).unwrap();
    assert_eq!(pos, Position::new(3, 1));
    assert_eq!(buffer.line_count(), 2);
    assert_eq!(buffer.line_at(1).unwrap(), "twothree");
    assert_eq!(buffer.offset_of(Position::new(3, 1)).unwrap(), 7);
}

#[test]
fn test_edits_out_of_range_are_rejected() {
    let mut buffer = Buffer::from_text("ab\ncd");
    assert!(buffer.insert_char(Position::new(5, 0), 'x').is_err());
    assert!(buffer.insert_newline(Position::new(0, 9)).is_err());
    assert!(buffer.delete_backward(Position::new(3, 1)).is_err());
    assert_eq!(buffer.text(), "ab\ncd");
}

#[test]
fn test_long_document_offsets() {
    let text: String = (0..500).map(|i| format!("line {}\n", i)).collect();
    let mut buffer = Buffer::from_text(&text);
    assert_eq!(buffer.line_count(), 501);
    assert_eq!(buffer.line_at(250).unwrap(), "line 250");

    let pos = buffer.insert_char(Position::new(0, 250), '>').unwrap();
    assert_eq!(pos, Position::new(1, 250));
    assert_eq!(buffer.line_at(250).unwrap(), ">line 250");
    assert_eq!(buffer.line_at(251).unwrap(), "line 251");
    assert_eq!(buffer.text(), text.replacen("line 250", ">line 250", 1));
}
