use proptest::{prop_assert_eq, proptest};

use super::CharacterStream;
use crate::source_file::Location;

#[test]
fn test_position_tracking() {
    let mut stream = CharacterStream::new("ab\nc".as_bytes());
    assert_eq!(stream.current(), None);

    assert_eq!(stream.read().unwrap(), Some(b'a'));
    assert_eq!(stream.location(), Location { line: 1, column: 1 });

    assert_eq!(stream.read().unwrap(), Some(b'b'));
    assert_eq!(stream.location(), Location { line: 1, column: 2 });

    assert_eq!(stream.read().unwrap(), Some(b'\n'));
    assert_eq!(stream.location(), Location { line: 2, column: 0 });

    assert_eq!(stream.read().unwrap(), Some(b'c'));
    assert_eq!(stream.location(), Location { line: 2, column: 1 });
    assert_eq!(stream.current(), Some(b'c'));
}

#[test]
fn test_end_of_stream_is_sticky() {
    let mut stream = CharacterStream::new("x".as_bytes());
    stream.read().unwrap();

    assert_eq!(stream.read().unwrap(), None);
    assert!(stream.is_exhausted());
    assert_eq!(stream.location(), Location { line: 1, column: 2 });

    assert_eq!(stream.read().unwrap(), None);
    assert_eq!(stream.location(), Location { line: 1, column: 2 });
    assert_eq!(stream.current(), None);
}

#[test]
fn test_empty_stream() {
    let mut stream = CharacterStream::new(std::io::empty());

    assert_eq!(stream.peek().unwrap(), None);
    assert_eq!(stream.read().unwrap(), None);
    assert_eq!(stream.location(), Location { line: 1, column: 1 });
}

#[test]
fn test_peek_does_not_move() {
    let mut stream = CharacterStream::new("xyz".as_bytes());
    stream.read().unwrap();

    assert_eq!(stream.peek().unwrap(), Some(b'y'));
    assert_eq!(stream.peek_nth(1).unwrap(), Some(b'z'));
    assert_eq!(stream.peek_nth(2).unwrap(), None);
    assert_eq!(stream.location(), Location { line: 1, column: 1 });

    assert_eq!(stream.read().unwrap(), Some(b'y'));
    assert_eq!(stream.read().unwrap(), Some(b'z'));
    assert_eq!(stream.read().unwrap(), None);
}

#[test]
fn test_upcoming_eq_ignore_ascii_case() {
    let mut stream = CharacterStream::new("#InClUdE \"a\"".as_bytes());
    stream.read().unwrap();

    assert!(stream.upcoming_eq_ignore_ascii_case(b"include ").unwrap());
    assert!(!stream.upcoming_eq_ignore_ascii_case(b"included").unwrap());
    assert!(!stream
        .upcoming_eq_ignore_ascii_case(b"include \"a\" and more")
        .unwrap());

    // nothing was consumed
    assert_eq!(stream.read().unwrap(), Some(b'I'));
}

#[test]
fn test_skip() {
    let mut stream = CharacterStream::new("include x".as_bytes());
    stream.skip(8).unwrap();

    assert_eq!(stream.current(), Some(b' '));
    assert_eq!(stream.read().unwrap(), Some(b'x'));

    stream.skip(5).unwrap();
    assert!(stream.is_exhausted());
}

proptest! {
    #[test]
    fn line_count_matches_newlines(text in "[a-z \n\t]{0,64}") {
        let mut stream = CharacterStream::new(text.as_bytes());
        let mut read = Vec::new();

        while let Some(character) = stream.read().unwrap() {
            read.push(character);
        }

        prop_assert_eq!(read.as_slice(), text.as_bytes());
        prop_assert_eq!(stream.line(), text.matches('\n').count() + 1);

        let last_line_length = text.rsplit('\n').next().map_or(0, str::len);
        prop_assert_eq!(stream.column(), last_line_length + 1);
    }
}
