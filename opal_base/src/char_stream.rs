//! Contains the [`CharacterStream`], the cursor every stage of the front end reads its input
//! through.

use std::{
    collections::VecDeque,
    io::{self, BufReader, Bytes, Read},
};

use getset::CopyGetters;

use crate::source_file::Location;

/// Is a forward-only cursor over a readable byte source that tracks the position of the most
/// recently read character.
///
/// Every stage owns its own stream, so nested readers (e.g. an included file) never share a
/// cursor with the stream that spawned them.
#[derive(Debug, CopyGetters)]
pub struct CharacterStream<R> {
    bytes: Bytes<BufReader<R>>,

    /// Characters that have been peeked at but not read yet.
    lookahead: VecDeque<u8>,

    /// Gets the line of the most recently read character (starts at 1).
    ///
    /// A newline character belongs to the line it opens.
    #[get_copy = "pub"]
    line: usize,

    /// Gets the column of the most recently read character within its line.
    ///
    /// The first character of a line is at column 1; a newline character is at column 0.
    #[get_copy = "pub"]
    column: usize,

    /// Gets the most recently read character, [`None`] before the first read and at the end of
    /// the stream.
    #[get_copy = "pub"]
    current: Option<u8>,

    exhausted: bool,
}

impl<R: Read> CharacterStream<R> {
    /// Creates a new stream positioned before the first character of `reader`.
    pub fn new(reader: R) -> Self {
        Self {
            bytes: BufReader::new(reader).bytes(),
            lookahead: VecDeque::new(),
            line: 1,
            column: 0,
            current: None,
            exhausted: false,
        }
    }

    /// Gets the [`Location`] of the most recently read character.
    #[must_use]
    pub fn location(&self) -> Location {
        Location {
            line: self.line,
            column: self.column,
        }
    }

    /// Checks whether the end of the stream has been read.
    #[must_use]
    pub fn is_exhausted(&self) -> bool { self.exhausted }

    /// Reads the next character and advances the position.
    ///
    /// Returns [`None`] at the end of the stream. The first read past the last character moves
    /// the column one past it; every later read leaves the position untouched.
    ///
    /// # Errors
    /// Returns the error of the underlying reader.
    pub fn read(&mut self) -> io::Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }

        let next = match self.lookahead.pop_front() {
            Some(character) => Some(character),
            None => self.bytes.next().transpose()?,
        };

        match next {
            Some(b'\n') => {
                self.line += 1;
                self.column = 0;
            }
            Some(_) => self.column += 1,
            None => {
                self.column += 1;
                self.exhausted = true;
            }
        }

        self.current = next;
        Ok(next)
    }

    /// Peeks at the character `offset` positions after the most recently read one without
    /// advancing (`offset` 0 is the next character).
    ///
    /// # Errors
    /// Returns the error of the underlying reader.
    pub fn peek_nth(&mut self, offset: usize) -> io::Result<Option<u8>> {
        if self.exhausted {
            return Ok(None);
        }

        while self.lookahead.len() <= offset {
            match self.bytes.next().transpose()? {
                Some(character) => self.lookahead.push_back(character),
                None => return Ok(None),
            }
        }

        Ok(self.lookahead.get(offset).copied())
    }

    /// Peeks at the next character without advancing.
    ///
    /// # Errors
    /// Returns the error of the underlying reader.
    pub fn peek(&mut self) -> io::Result<Option<u8>> { self.peek_nth(0) }

    /// Checks whether the upcoming characters spell `literal`, ignoring ASCII case. Nothing is
    /// consumed.
    ///
    /// # Errors
    /// Returns the error of the underlying reader.
    pub fn upcoming_eq_ignore_ascii_case(&mut self, literal: &[u8]) -> io::Result<bool> {
        for (offset, expected) in literal.iter().enumerate() {
            match self.peek_nth(offset)? {
                Some(character) if character.eq_ignore_ascii_case(expected) => {}
                _ => return Ok(false),
            }
        }

        Ok(true)
    }

    /// Reads and discards `count` characters.
    ///
    /// # Errors
    /// Returns the error of the underlying reader.
    pub fn skip(&mut self, count: usize) -> io::Result<()> {
        for _ in 0..count {
            if self.read()?.is_none() {
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
