//! Is a module containing the [`Lexeme`] type and all of its related types.

use std::{collections::HashMap, fmt::Display, str::FromStr};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use getset::{CopyGetters, Getters};
use lazy_static::lazy_static;
use opal_base::source_file::Location;
use strum::IntoEnumIterator;
use strum_macros::EnumIter;
use thiserror::Error;

/// Is an enumeration of every kind of lexeme in the OPaL programming language.
///
/// `NoOperation`, `String` and `Negate` are part of the vocabulary but are never produced by the
/// lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum LexemeType {
    NoOperation,
    EndOfFile,
    Identifier,
    Integer,
    String,
    Assign,
    Add,
    Subtract,
    Negate,
    Multiply,
    Divide,
    Mod,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    And,
    Or,
    Not,
    If,
    Else,
    While,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,
    Semicolon,
    Comma,
    Print,
    Input,
}

impl LexemeType {
    /// Gets the name of the lexeme type used in the serialized symbol table.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::NoOperation => "No_operation",
            Self::EndOfFile => "End_of_file",
            Self::Identifier => "Identifier",
            Self::Integer => "Integer",
            Self::String => "String",
            Self::Assign => "Op_Assign",
            Self::Add => "Op_Add",
            Self::Subtract => "Op_Subtract",
            Self::Negate => "Op_Negate",
            Self::Multiply => "Op_Multiply",
            Self::Divide => "Op_Divide",
            Self::Mod => "Op_Mod",
            Self::Equal => "Op_Equal",
            Self::NotEqual => "Op_NotEqual",
            Self::Less => "Op_Less",
            Self::Greater => "Op_Greater",
            Self::LessEqual => "Op_LessEqual",
            Self::GreaterEqual => "Op_GreaterEqual",
            Self::And => "Op_And",
            Self::Or => "Op_Or",
            Self::Not => "Op_Not",
            Self::If => "Keyword_If",
            Self::Else => "Keyword_Else",
            Self::While => "Keyword_While",
            Self::LeftParen => "LeftParen",
            Self::RightParen => "RightParen",
            Self::LeftBrace => "LeftBrace",
            Self::RightBrace => "RightBrace",
            Self::Semicolon => "Semicolon",
            Self::Comma => "Comma",
            Self::Print => "Keyword_print",
            Self::Input => "Keyword_input",
        }
    }

    /// Checks whether the lexeme type is one of the keywords.
    #[must_use]
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Self::If | Self::Else | Self::While | Self::Print | Self::Input
        )
    }
}

impl Display for LexemeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Is an error that is returned when a string cannot be parsed into a [`LexemeType`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid name of lexeme type.")]
pub struct LexemeTypeParseError;

impl FromStr for LexemeType {
    type Err = LexemeTypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref NAME_TYPE_MAP: HashMap<&'static str, LexemeType> =
                LexemeType::iter().map(|ty| (ty.name(), ty)).collect();
        }

        NAME_TYPE_MAP.get(s).copied().ok_or(LexemeTypeParseError)
    }
}

/// Is an enumeration representing keywords in the OPaL programming language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter)]
#[allow(missing_docs)]
pub enum KeywordKind {
    If,
    Else,
    While,
    Print,
    Input,
}

/// Is an error that is returned when a string cannot be parsed into a [`KeywordKind`] in
/// [`FromStr`] trait implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Error)]
#[error("invalid string representation of keyword.")]
pub struct KeywordParseError;

impl FromStr for KeywordKind {
    type Err = KeywordParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        lazy_static! {
            static ref STRING_KEYWORD_MAP: HashMap<&'static str, KeywordKind> = {
                let mut map = HashMap::new();

                for keyword in KeywordKind::iter() {
                    map.insert(keyword.as_str(), keyword);
                }

                map
            };
        }
        STRING_KEYWORD_MAP.get(s).copied().ok_or(KeywordParseError)
    }
}

impl KeywordKind {
    /// Gets the string representation of the keyword as a `&str`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::If => "if",
            Self::Else => "else",
            Self::While => "while",
            Self::Print => "print",
            Self::Input => "input",
        }
    }

    /// Gets the [`LexemeType`] of the lexemes spelling this keyword.
    #[must_use]
    pub fn lexeme_type(self) -> LexemeType {
        match self {
            Self::If => LexemeType::If,
            Self::Else => LexemeType::Else,
            Self::While => LexemeType::While,
            Self::Print => LexemeType::Print,
            Self::Input => LexemeType::Input,
        }
    }
}

impl Display for KeywordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.as_str()) }
}

/// Is the value carried by a [`Lexeme`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Value {
    Integer(i64),
    Text(String),
}

/// Represents a classified unit of the source code.
///
/// Identifiers and keywords carry their text, integers carry their value and every other lexeme
/// carries nothing.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Getters, CopyGetters)]
pub struct Lexeme {
    /// Gets the type of the lexeme.
    #[get_copy = "pub"]
    lexeme_type: LexemeType,

    /// Gets the location of the first character of the lexeme.
    #[get_copy = "pub"]
    location: Location,

    /// Gets the value carried by the lexeme.
    #[get = "pub"]
    value: Option<Value>,
}

impl Lexeme {
    /// Creates a lexeme that carries no value.
    ///
    /// `lexeme_type` must be neither a keyword, an identifier nor an integer.
    pub(crate) fn simple(lexeme_type: LexemeType, location: Location) -> Self {
        debug_assert!(
            !lexeme_type.is_keyword()
                && lexeme_type != LexemeType::Identifier
                && lexeme_type != LexemeType::Integer
        );

        Self {
            lexeme_type,
            location,
            value: None,
        }
    }

    pub(crate) fn keyword(keyword: KeywordKind, location: Location) -> Self {
        Self {
            lexeme_type: keyword.lexeme_type(),
            location,
            value: Some(Value::Text(keyword.as_str().to_owned())),
        }
    }

    pub(crate) fn identifier(text: String, location: Location) -> Self {
        Self {
            lexeme_type: LexemeType::Identifier,
            location,
            value: Some(Value::Text(text)),
        }
    }

    pub(crate) fn integer(value: i64, location: Location) -> Self {
        Self {
            lexeme_type: LexemeType::Integer,
            location,
            value: Some(Value::Integer(value)),
        }
    }

    /// Gets the line the lexeme starts on.
    #[must_use]
    pub fn line(&self) -> usize { self.location.line }

    /// Gets the column the lexeme starts at.
    #[must_use]
    pub fn column(&self) -> usize { self.location.column }

    /// Gets the value of an integer lexeme.
    #[must_use]
    pub fn int_value(&self) -> Option<i64> {
        self.value.as_ref().and_then(Value::as_integer).copied()
    }

    /// Gets the text of an identifier or keyword lexeme.
    #[must_use]
    pub fn text_value(&self) -> Option<&str> {
        self.value.as_ref().and_then(Value::as_text).map(String::as_str)
    }
}

impl Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // each number takes a space followed by a right-aligned field of two
        write!(
            f,
            "{{line:  {:>2}, col:  {:>2}, lx_type: {}, val: '{}'",
            self.line(),
            self.column(),
            self.lexeme_type,
            self.text_value().unwrap_or_default()
        )?;

        if let Some(value) = self.int_value() {
            write!(f, ", int: {value}")?;
        }

        f.write_str("}")
    }
}
