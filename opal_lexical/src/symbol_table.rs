//! Contains the [`SymbolTable`], the final output of the lexical analysis phase.

use std::{
    fmt::Display,
    io::{self, Read, Write},
};

use derive_more::Deref;
use opal_base::char_stream::CharacterStream;
use tracing::{debug, info};

use crate::{
    error::Error,
    lexeme::{Lexeme, LexemeType},
    lexer::Lexer,
};

/// Represents the ordered list of the lexemes of a source text.
///
/// The table always ends with exactly one end-of-file lexeme.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Deref)]
pub struct SymbolTable {
    #[deref]
    lexemes: Vec<Lexeme>,
}

impl SymbolTable {
    /// Tokenizes the whole `stream` into a symbol table.
    ///
    /// # Errors
    /// Returns the first error reported by [`Lexer::next_lexeme`]; no partial table is produced.
    pub fn build<R: Read>(stream: CharacterStream<R>) -> Result<Self, Error> {
        info!(target: "opal::alex", "ALEX start.");

        let mut lexer = Lexer::new(stream);
        let mut lexemes = Vec::new();

        loop {
            let lexeme = lexer.next_lexeme()?;
            let is_end_of_file = lexeme.lexeme_type() == LexemeType::EndOfFile;

            lexemes.push(lexeme);

            if is_end_of_file {
                break;
            }
        }

        debug!(target: "opal::alex", "collected {} lexemes", lexemes.len());

        Ok(Self { lexemes })
    }

    /// Gets the end-of-file lexeme terminating the table.
    #[must_use]
    pub fn end_of_file(&self) -> &Lexeme {
        // a table is never built without its end-of-file lexeme
        &self.lexemes[self.lexemes.len() - 1]
    }

    /// Writes the serialized table to `output`, one lexeme per line.
    ///
    /// # Errors
    /// Returns the error of the underlying writer.
    pub fn write_to<W: Write>(&self, output: &mut W) -> io::Result<()> {
        for lexeme in &self.lexemes {
            writeln!(output, "{lexeme}")?;
        }

        output.flush()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for lexeme in &self.lexemes {
            writeln!(f, "{lexeme}")?;
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a Lexeme;
    type IntoIter = std::slice::Iter<'a, Lexeme>;

    fn into_iter(self) -> Self::IntoIter { self.lexemes.iter() }
}

#[cfg(test)]
mod tests;
