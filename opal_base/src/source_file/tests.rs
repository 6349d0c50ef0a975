use std::path::Path;

use super::{Location, SourceFile};

#[test]
fn test_get_line_byte_positions() {
    let text = "Hello\nworld\r\n!\rtes";
    let byte_positions = super::get_line_byte_positions(text);
    assert_eq!(byte_positions, vec![0..6, 6..13, 13..18]);
}

#[test]
fn test_lines_agree_with_stream() {
    let source_file = SourceFile::stage(b"a\rb\nc = 1;", "cr.opl").unwrap();
    let mut stream = source_file.stream();

    while stream.read().unwrap() != Some(b'c') {}

    let location = stream.location();
    assert_eq!(location, Location { line: 2, column: 1 });
    assert_eq!(source_file.get_line(location.line), Some("c = 1;"));
    assert_eq!(source_file.get_line(1), Some("a\rb\n"));
    assert_eq!(source_file.line_number(), 2);
}

#[test]
fn test_mapped_file() {
    const TEST_FILE: &str = "print(x);";
    let source_file = SourceFile::temp(TEST_FILE).unwrap();
    assert_eq!(source_file.content(), TEST_FILE);
}

#[test]
fn test_empty_file() {
    let source_file = SourceFile::temp("").unwrap();
    assert_eq!(source_file.content(), "");
    assert_eq!(source_file.line_number(), 1);
    assert_eq!(source_file.get_line(1), Some(""));
}

#[test]
fn test_stage_keeps_label() {
    let source_file = SourceFile::stage(b"a = 1;\nb = 2;\n", "hello.opl").unwrap();

    assert_eq!(source_file.full_path(), Path::new("hello.opl"));
    assert_eq!(source_file.get_line(0), None);
    assert_eq!(source_file.get_line(1), Some("a = 1;\n"));
    assert_eq!(source_file.get_line(2), Some("b = 2;\n"));
    assert_eq!(source_file.get_line(3), Some(""));
    assert_eq!(source_file.get_line(4), None);
}

#[test]
fn test_invalid_utf8_is_kept_as_bytes() {
    let source_file = SourceFile::stage(&[b'a', 0xE9, b'\n', b'b'], "latin1.opl").unwrap();

    assert_eq!(source_file.bytes(), &[b'a', 0xE9, b'\n', b'b']);
    assert_eq!(source_file.content(), "a\u{FFFD}\nb");
    assert_eq!(source_file.get_line(1), Some("a\u{FFFD}\n"));

    let mut stream = source_file.stream();
    assert_eq!(stream.read().unwrap(), Some(b'a'));
    assert_eq!(stream.read().unwrap(), Some(0xE9));
}

#[test]
fn test_stream_reads_content() {
    let source_file = SourceFile::stage(b"ab", "ab.opl").unwrap();
    let mut stream = source_file.stream();

    assert_eq!(stream.read().unwrap(), Some(b'a'));
    assert_eq!(stream.read().unwrap(), Some(b'b'));
    assert_eq!(stream.read().unwrap(), None);
}

#[test]
fn test_location_display() {
    let location = Location { line: 3, column: 14 };
    assert_eq!(location.to_string(), "3:14");
}
