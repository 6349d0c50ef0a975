use super::{formatting::strip_styles, Message, Severity, SourceCodeDisplay};
use crate::source_file::{Location, SourceFile};

#[test]
fn test_message() {
    let message = Message::new(Severity::Error, "found an unclosed `/*` comment");
    assert_eq!(
        strip_styles(&message.to_string()),
        "[error]: found an unclosed `/*` comment"
    );

    let message = Message::new(Severity::Info, 42);
    assert_eq!(strip_styles(&message.to_string()), "[info]: 42");
}

#[test]
fn test_source_code_display() {
    let source_file = SourceFile::stage(b"a = 1;\nb = &;\nc = 3;\n", "hello.opl").unwrap();
    let display = SourceCodeDisplay::new(
        &source_file,
        Location { line: 2, column: 5 },
        Option::<&str>::None,
    );

    let expected = concat!(
        " --> hello.opl:2:5\n",
        "  ┃\n",
        "1 ┃ a = 1;\n",
        "2 ┃ b = &;\n",
        "  ┃     ^\n",
        "3 ┃ c = 3;\n",
        "  ┃\n",
    );

    assert_eq!(strip_styles(&display.to_string()), expected);
}

#[test]
fn test_source_code_display_with_help() {
    let source_file = SourceFile::stage(b"\tx |", "tab.opl").unwrap();
    let display = SourceCodeDisplay::new(
        &source_file,
        Location { line: 1, column: 4 },
        Some("did you mean `||`?"),
    );

    let expected = concat!(
        " --> tab.opl:1:4\n",
        "  ┃\n",
        "1 ┃     x |\n",
        "  ┃       ^ help: did you mean `||`?\n",
        "  ┃\n",
    );

    assert_eq!(strip_styles(&display.to_string()), expected);
}
