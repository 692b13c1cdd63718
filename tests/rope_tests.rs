//! Integration tests for the rope.

use vincent::document::rope::{Rope, MAX_CHUNK_LEN};
use vincent::error::EditorError;

fn long_text(n: usize) -> String {
    (0..n).map(|i| char::from(b'a' + (i % 26) as u8)).collect()
}

#[test]
fn test_concat_preserves_contents() {
    let cases = [
        ("", ""),
        ("abc", ""),
        ("", "xyz"),
        ("Hello, ", "world"),
        ("ünï", "cødé ✓"),
    ];
    for (a, b) in cases {
        let rope = Rope::concat(Rope::build(a), Rope::build(b));
        assert_eq!(rope.to_string(), format!("{}{}", a, b));
        assert_eq!(rope.len(), a.chars().count() + b.chars().count());
    }

    let a = long_text(300);
    let b = long_text(170);
    let rope = Rope::concat(Rope::build(&a), Rope::build(&b));
    assert_eq!(rope.to_string(), a + &b);
}

#[test]
fn test_insert_splices_at_offset() {
    let text = long_text(200);
    for at in [0, 1, 63, 64, 65, 128, 199, 200] {
        let mut rope = Rope::build(&text);
        rope.insert(at, "<ins>").unwrap();

        let mut expected: String = text.chars().take(at).collect();
        expected.push_str("<ins>");
        expected.extend(text.chars().skip(at));
        assert_eq!(rope.to_string(), expected, "insert at {}", at);
    }
}

#[test]
fn test_insert_past_end_leaves_rope_untouched() {
    let mut rope = Rope::build("abc");
    let err = rope.insert(4, "x").unwrap_err();
    assert!(matches!(err, EditorError::IndexOutOfRange { index: 4, len: 3 }));
    assert_eq!(rope.to_string(), "abc");
}

#[test]
fn test_delete_range_shrinks_by_width() {
    let text = long_text(250);
    for (from, to) in [(0, 1), (10, 70), (60, 200), (0, 250), (249, 250)] {
        let mut rope = Rope::build(&text);
        rope.delete_range(from, to).unwrap();
        assert_eq!(rope.len(), 250 - (to - from));

        let expected: String = text
            .chars()
            .take(from)
            .chain(text.chars().skip(to))
            .collect();
        assert_eq!(rope.to_string(), expected);
    }
}

#[test]
fn test_empty_delete_is_noop() {
    let text = long_text(100);
    let mut rope = Rope::build(&text);
    rope.delete_range(40, 40).unwrap();
    rope.delete_range(40, 40).unwrap();
    assert_eq!(rope.to_string(), text);
}

#[test]
fn test_delete_rejects_bad_ranges() {
    let mut rope = Rope::build("hello");
    assert!(rope.delete_range(3, 6).is_err());
    assert!(rope.delete_range(4, 2).is_err());
    assert_eq!(rope.to_string(), "hello");
}

#[test]
fn test_char_at_bounds() {
    let rope = Rope::build("añb");
    assert_eq!(rope.char_at(1).unwrap(), 'ñ');
    assert!(matches!(
        rope.char_at(3),
        Err(EditorError::IndexOutOfRange { index: 3, len: 3 })
    ));
    assert!(Rope::new().char_at(0).is_err());
}

#[test]
fn test_slice_and_split() {
    let text = long_text(150);
    let rope = Rope::build(&text);
    let expected: String = text.chars().skip(50).take(70).collect();
    assert_eq!(rope.slice(50, 120).unwrap(), expected);
    assert_eq!(rope.slice(7, 7).unwrap(), "");
    assert!(rope.slice(10, 151).is_err());

    let (prefix, suffix) = rope.split(90).unwrap();
    assert_eq!(prefix.len(), 90);
    assert_eq!(suffix.len(), 60);
    assert_eq!(prefix.to_string() + &suffix.to_string(), text);
}

#[test]
fn test_split_past_end_is_error() {
    assert!(Rope::build("abc").split(4).is_err());
}

#[test]
fn test_chunks_are_bounded_and_in_order() {
    let text = long_text(1000);
    let rope = Rope::build(&text);
    let chunks: Vec<&str> = rope.chunks().collect();
    assert!(chunks.len() > 1);
    assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CHUNK_LEN));
    assert_eq!(chunks.concat(), text);
}

#[test]
fn test_typing_stays_balanced() {
    let mut rope = Rope::new();
    for i in 0..5000 {
        rope.insert(i, "x").unwrap();
        assert!(rope.is_balanced(), "unbalanced after {} inserts", i + 1);
    }
    assert_eq!(rope.len(), 5000);
}

#[test]
fn test_repeated_concat_then_rebalance() {
    let mut rope = Rope::new();
    for _ in 0..200 {
        rope = Rope::concat(rope, Rope::build("ab"));
    }
    assert_eq!(rope.depth(), 199);
    assert!(!rope.is_balanced());

    rope.rebalance();
    assert!(rope.is_balanced());
    assert_eq!(rope.to_string(), "ab".repeat(200));
}
