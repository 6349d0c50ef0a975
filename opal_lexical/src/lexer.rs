//! Contains the [`Lexer`], which turns a character stream into [`Lexeme`]s one at a time.

use std::{io::Read, str::FromStr};

use lazy_static::lazy_static;
use opal_base::{char_stream::CharacterStream, source_file::Location};
use regex::Regex;
use tracing::trace;

use crate::{
    error::{Error, IllegalCharacter, IntegerOutOfRange},
    lexeme::{KeywordKind, Lexeme, LexemeType},
};

lazy_static! {
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+$").unwrap();
}

/// Is a lazy, forward-only reader of [`Lexeme`]s.
///
/// The lexer owns the [`CharacterStream`] it reads. Once the end of the stream is reached, every
/// call to [`Lexer::next_lexeme`] returns the same end-of-file lexeme.
///
/// As an [`Iterator`], the lexer yields the end-of-file lexeme once and stops after it or after
/// the first error.
#[derive(Debug)]
pub struct Lexer<R> {
    stream: CharacterStream<R>,
    primed: bool,
    finished: bool,
}

impl<R: Read> Lexer<R> {
    /// Creates a lexer reading `stream` from its current position.
    pub fn new(stream: CharacterStream<R>) -> Self {
        Self {
            stream,
            primed: false,
            finished: false,
        }
    }

    /// Checks if the given character can be part of an identifier, a keyword or an integer.
    #[must_use]
    pub fn is_word_character(character: u8) -> bool {
        character.is_ascii_alphanumeric() || character == b'_'
    }

    /// Reads the next lexeme.
    ///
    /// Whitespace between lexemes is skipped. The location of the returned lexeme is the location
    /// of its first character.
    ///
    /// # Errors
    /// - [`Error::IllegalCharacter`]: the next character cannot start a lexeme, or the stream
    ///   ends in the middle of an operator.
    /// - [`Error::IntegerOutOfRange`]: an integer literal does not fit into an `i64`.
    /// - [`Error::IoError`]: reading the stream failed.
    pub fn next_lexeme(&mut self) -> Result<Lexeme, Error> {
        if !self.primed {
            self.stream.read()?;
            self.primed = true;
        }

        while self
            .stream
            .current()
            .is_some_and(|character| character.is_ascii_whitespace())
        {
            self.stream.read()?;
        }

        let location = self.stream.location();

        let Some(character) = self.stream.current() else {
            return Ok(Lexeme::simple(LexemeType::EndOfFile, location));
        };

        let lexeme = match character {
            b'{' => self.single(LexemeType::LeftBrace, location)?,
            b'}' => self.single(LexemeType::RightBrace, location)?,
            b'(' => self.single(LexemeType::LeftParen, location)?,
            b')' => self.single(LexemeType::RightParen, location)?,
            b'+' => self.single(LexemeType::Add, location)?,
            b'-' => self.single(LexemeType::Subtract, location)?,
            b'*' => self.single(LexemeType::Multiply, location)?,
            b'/' => self.single(LexemeType::Divide, location)?,
            b'%' => self.single(LexemeType::Mod, location)?,
            b';' => self.single(LexemeType::Semicolon, location)?,
            b',' => self.single(LexemeType::Comma, location)?,
            b'<' => self.compound(b'=', LexemeType::LessEqual, Some(LexemeType::Less), location)?,
            b'>' => self.compound(
                b'=',
                LexemeType::GreaterEqual,
                Some(LexemeType::Greater),
                location,
            )?,
            b'=' => self.compound(b'=', LexemeType::Equal, Some(LexemeType::Assign), location)?,
            b'!' => self.compound(b'=', LexemeType::NotEqual, Some(LexemeType::Not), location)?,
            b'&' => self.compound(b'&', LexemeType::And, None, location)?,
            b'|' => self.compound(b'|', LexemeType::Or, None, location)?,
            character if Self::is_word_character(character) => self.word(location)?,
            character => {
                return Err(IllegalCharacter {
                    character,
                    location,
                    at_end_of_file: false,
                }
                .into())
            }
        };

        trace!(target: "opal::alex", "{lexeme}");

        Ok(lexeme)
    }

    /// Consumes a one-character lexeme.
    fn single(&mut self, lexeme_type: LexemeType, location: Location) -> Result<Lexeme, Error> {
        self.stream.read()?;
        Ok(Lexeme::simple(lexeme_type, location))
    }

    /// Consumes an operator that is either its current character followed by `second` or, when
    /// `single` is given, the current character alone.
    fn compound(
        &mut self,
        second: u8,
        compound_type: LexemeType,
        single: Option<LexemeType>,
        location: Location,
    ) -> Result<Lexeme, Error> {
        let first = self.stream.current().unwrap_or_default();

        let illegal = |at_end_of_file| IllegalCharacter {
            character: first,
            location,
            at_end_of_file,
        };

        match self.stream.read()? {
            None => Err(illegal(true).into()),
            Some(character) if character == second => {
                self.stream.read()?;
                Ok(Lexeme::simple(compound_type, location))
            }
            // the lookahead starts the next lexeme
            Some(_) => single
                .map(|single| Lexeme::simple(single, location))
                .ok_or_else(|| illegal(false).into()),
        }
    }

    /// Consumes the longest run of word characters and classifies it.
    fn word(&mut self, location: Location) -> Result<Lexeme, Error> {
        let mut text = String::new();

        while let Some(character) = self
            .stream
            .current()
            .filter(|character| Self::is_word_character(*character))
        {
            text.push(char::from(character));
            self.stream.read()?;
        }

        Self::classify(text, location)
    }

    /// Classifies a word: a keyword first, then an integer, otherwise an identifier.
    fn classify(text: String, location: Location) -> Result<Lexeme, Error> {
        if let Ok(keyword) = KeywordKind::from_str(&text) {
            return Ok(Lexeme::keyword(keyword, location));
        }

        if INTEGER_PATTERN.is_match(&text) {
            return match text.parse::<i64>() {
                Ok(value) => Ok(Lexeme::integer(value, location)),
                Err(..) => Err(IntegerOutOfRange { text, location }.into()),
            };
        }

        Ok(Lexeme::identifier(text, location))
    }
}

impl<R: Read> Iterator for Lexer<R> {
    type Item = Result<Lexeme, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_lexeme();
        self.finished = !matches!(
            &result,
            Ok(lexeme) if lexeme.lexeme_type() != LexemeType::EndOfFile
        );

        Some(result)
    }
}
