use opal_base::{char_stream::CharacterStream, source_file::SourceFile};
use proptest::{prop_assert, prop_assert_eq, proptest};

use super::SymbolTable;
use crate::lexeme::LexemeType;

fn build(source: &str) -> Result<SymbolTable, crate::error::Error> {
    SymbolTable::build(CharacterStream::new(source.as_bytes()))
}

#[test]
fn test_empty_source() {
    let table = build("").unwrap();

    assert_eq!(table.len(), 1);
    assert_eq!(table.end_of_file().lexeme_type(), LexemeType::EndOfFile);
}

#[test]
fn test_serialization() {
    let table = build("if (a <= 10)\n  print(a);").unwrap();

    let expected = "\
{line:   1, col:   1, lx_type: Keyword_If, val: 'if'}
{line:   1, col:   4, lx_type: LeftParen, val: ''}
{line:   1, col:   5, lx_type: Identifier, val: 'a'}
{line:   1, col:   7, lx_type: Op_LessEqual, val: ''}
{line:   1, col:  10, lx_type: Integer, val: '', int: 10}
{line:   1, col:  12, lx_type: RightParen, val: ''}
{line:   2, col:   3, lx_type: Keyword_print, val: 'print'}
{line:   2, col:   8, lx_type: LeftParen, val: ''}
{line:   2, col:   9, lx_type: Identifier, val: 'a'}
{line:   2, col:  10, lx_type: RightParen, val: ''}
{line:   2, col:  11, lx_type: Semicolon, val: ''}
{line:   2, col:  12, lx_type: End_of_file, val: ''}
";

    assert_eq!(table.to_string(), expected);

    let mut output = Vec::new();
    table.write_to(&mut output).unwrap();
    assert_eq!(String::from_utf8(output).unwrap(), expected);
}

#[test]
fn test_first_error_aborts() {
    assert!(build("a = 1;\nb = &c;\n").unwrap_err().is_illegal_character());
}

#[test]
fn test_build_from_source_file() {
    let source_file = SourceFile::temp("while (x) { x = x - 1; }\n").unwrap();
    let table = SymbolTable::build(source_file.stream()).unwrap();

    assert_eq!(table[0].lexeme_type(), LexemeType::While);
    assert_eq!(table.end_of_file().line(), 2);
    assert_eq!((&table).into_iter().count(), 13);
}

proptest! {
    #[test]
    fn single_end_of_file(source in "[a-z0-9 \n;(){}+*<>=!-]{0,64}") {
        if let Ok(table) = build(&source) {
            let ends = table
                .iter()
                .filter(|lexeme| lexeme.lexeme_type() == LexemeType::EndOfFile)
                .count();

            prop_assert_eq!(ends, 1);
            prop_assert_eq!(table.end_of_file().lexeme_type(), LexemeType::EndOfFile);
        }
    }

    #[test]
    fn errors_are_located(source in proptest::collection::vec(proptest::num::u8::ANY, 0..64)) {
        match SymbolTable::build(CharacterStream::new(source.as_slice())) {
            Ok(table) => {
                prop_assert_eq!(table.end_of_file().lexeme_type(), LexemeType::EndOfFile);
            }
            Err(error) => {
                prop_assert!(error.location().is_some());
            }
        }
    }
}
