//! Contains all kinds of lexical errors that can occur while tokenizing the source code.

use std::{fmt::Display, io};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use opal_base::{
    log::{Message, Severity},
    source_file::Location,
};

/// The source code contains a character that cannot start any lexeme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IllegalCharacter {
    /// The offending character.
    pub character: u8,

    /// The location of the offending character.
    pub location: Location,

    /// Whether the source code ends right after the character, which then starts an incomplete
    /// operator.
    pub at_end_of_file: bool,
}

impl IllegalCharacter {
    /// Gets a hint on how to fix the source code, if there is one.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self.character {
            b'&' => Some("the logical and operator is written `&&`"),
            b'|' => Some("the logical or operator is written `||`"),
            b'"' => Some("string literals are not supported"),
            _ => None,
        }
    }
}

impl Display for IllegalCharacter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let character = char::from(self.character).escape_default();

        if self.at_end_of_file {
            write!(
                f,
                "{}",
                Message::new(
                    Severity::Error,
                    format_args!(
                        "found an unexpected end of file after `{character}` at {}",
                        self.location
                    )
                )
            )
        } else {
            write!(
                f,
                "{}",
                Message::new(
                    Severity::Error,
                    format_args!("found an illegal character `{character}` at {}", self.location)
                )
            )
        }
    }
}

/// An integer literal does not fit into a signed 64-bit integer.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IntegerOutOfRange {
    /// The digits of the literal.
    pub text: String,

    /// The location of the first digit.
    pub location: Location,
}

impl Display for IntegerOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!(
                    "the integer literal `{}` at {} is out of range",
                    self.text, self.location
                )
            )
        )
    }
}

/// Is an enumeration containing all kinds of lexical errors that can occur while tokenizing the
/// source code.
#[derive(Debug, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    IllegalCharacter(IllegalCharacter),
    IntegerOutOfRange(IntegerOutOfRange),
    IoError(io::Error),
}

impl Error {
    /// Gets the location of the error in the tokenized source code.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::IllegalCharacter(err) => Some(err.location),
            Self::IntegerOutOfRange(err) => Some(err.location),
            Self::IoError(..) => None,
        }
    }

    /// Gets a hint on how to fix the source code, if there is one.
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        self.as_illegal_character()
            .and_then(IllegalCharacter::help)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter(err) => write!(f, "{err}"),
            Self::IntegerOutOfRange(err) => write!(f, "{err}"),
            Self::IoError(err) => write!(
                f,
                "{}",
                Message::new(Severity::Error, format_args!("I/O error: {err}"))
            ),
        }
    }
}

impl std::error::Error for Error {}
