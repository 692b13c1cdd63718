use termion::event::{Event, Key};
use vincent::input::keys::{map_key, map_termion_event, EditorEvent, KeyEvent};

#[test]
fn test_enter_variants() {
    assert_eq!(map_key(Key::Char('\n')), KeyEvent::Enter);
    assert_eq!(map_key(Key::Char('\r')), KeyEvent::Enter);
}

#[test]
fn test_arrow_keys() {
    assert_eq!(map_key(Key::Left), KeyEvent::Left);
    assert_eq!(map_key(Key::Right), KeyEvent::Right);
    assert_eq!(map_key(Key::Up), KeyEvent::Up);
    assert_eq!(map_key(Key::Down), KeyEvent::Down);
}

#[test]
fn test_ctrl_c_is_interrupt_other_ctrl_unknown() {
    assert_eq!(map_key(Key::Ctrl('c')), KeyEvent::Interrupt);
    assert_eq!(map_key(Key::Ctrl('d')), KeyEvent::Unknown);
    assert_eq!(map_key(Key::Alt('x')), KeyEvent::Unknown);
}

#[test]
fn test_vim_letters_are_plain_chars() {
    for ch in ['h', 'j', 'k', 'l', 'i', 'v', ':', 'q'] {
        assert_eq!(map_key(Key::Char(ch)), KeyEvent::Char(ch));
    }
}

#[test]
fn test_key_events_are_wrapped() {
    assert_eq!(
        map_termion_event(Event::Key(Key::Esc)),
        Some(EditorEvent::Key(KeyEvent::Escape))
    );
    assert_eq!(
        map_termion_event(Event::Unsupported(vec![0x1b, b'[', b'9', b'9', b'~'])),
        None
    );
}
