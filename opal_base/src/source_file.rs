#![allow(clippy::future_not_send)]

//! Contains the code related to loading the source code input and staging the intermediate
//! output of the front end stages.

use std::{
    borrow::Cow,
    fmt::{Debug, Display},
    fs::File,
    io::Write,
    ops::Range,
    path::PathBuf,
    sync::Arc,
};

use getset::Getters;
use memmap::MmapOptions;
use ouroboros::self_referencing;
use tempfile::NamedTempFile;
use thiserror::Error;

use crate::char_stream::CharacterStream;

/// Represents an error that occurs when loading/staging a source file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum Error {
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Represents a memory mapped source text: either an input file given by the user or the staged
/// output of one of the preprocessing stages.
///
/// The stages read the raw bytes; the text is only decoded (lossily) for diagnostics and
/// reports.
#[derive(Getters)]
pub struct SourceFile {
    source: MappedSource,

    /// Gets the path that identifies the source file in diagnostics.
    #[get = "pub"]
    full_path: PathBuf,

    lines: Vec<Range<usize>>,
}

impl Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("full_path", &self.full_path)
            .field("lines", &self.lines.len())
            .finish()
    }
}

#[self_referencing]
struct MappedSource {
    file: File,
    mapped: Option<memmap::Mmap>,

    /// Borrows the mapping unless it contains invalid UTF-8.
    #[borrows(mapped)]
    #[covariant]
    text: Cow<'this, str>,
}

impl MappedSource {
    fn create(file: File) -> Result<Self, Error> {
        // zero-length files cannot be mapped
        let mapped = if file.metadata()?.len() == 0 {
            None
        } else {
            Some(unsafe { MmapOptions::new().map(&file)? })
        };

        Ok(MappedSourceBuilder {
            file,
            mapped,
            text_builder: |mapped| {
                mapped
                    .as_deref()
                    .map_or(Cow::Borrowed(""), String::from_utf8_lossy)
            },
        }
        .build())
    }

    fn bytes(&self) -> &[u8] { self.borrow_mapped().as_deref().unwrap_or_default() }

    fn content(&self) -> &str { self.borrow_text() }
}

impl SourceFile {
    fn new(full_path: PathBuf, source: MappedSource) -> Arc<Self> {
        let lines = get_line_byte_positions(source.content());
        Arc::new(Self {
            source,
            full_path,
            lines,
        })
    }

    /// Gets the raw bytes of the source file.
    #[must_use]
    pub fn bytes(&self) -> &[u8] { self.source.bytes() }

    /// Gets the content of the source file decoded as UTF-8, invalid sequences replaced by
    /// `U+FFFD`.
    #[must_use]
    pub fn content(&self) -> &str { self.source.content() }

    /// Gets the line of the source file at the given line number.
    ///
    /// The line number starts at 1.
    #[must_use]
    pub fn get_line(&self, line: usize) -> Option<&str> {
        if line == 0 {
            return None;
        }

        self.lines
            .get(line - 1)
            .map(|range| &self.source.content()[range.clone()])
    }

    /// Gets the number of lines in the source file.
    #[must_use]
    pub fn line_number(&self) -> usize { self.lines.len() }

    /// Creates a new [`CharacterStream`] reading the raw bytes of the source file from the start.
    #[must_use]
    pub fn stream(&self) -> CharacterStream<&[u8]> { CharacterStream::new(self.source.bytes()) }

    /// Loads the source file from the given file handle.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when mapping the file to memory.
    pub fn load(file: File, path: PathBuf) -> Result<Arc<Self>, Error> {
        let source = MappedSource::create(file)?;
        Ok(Self::new(path, source))
    }

    /// Opens and loads the source file at the given path.
    ///
    /// # Errors
    /// - [`Error::IoError`]: The file does not exist, cannot be read or cannot be mapped.
    pub fn open(path: impl Into<PathBuf>) -> Result<Arc<Self>, Error> {
        let path = path.into();
        let file = File::open(&path)?;
        Self::load(file, path)
    }

    /// Stages the given bytes in a temporary file and loads it back as a source file identified
    /// by `label` in diagnostics.
    ///
    /// The temporary file is removed from the file system immediately; its content lives as long
    /// as the returned source file.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating, writing to or mapping the temporary
    ///   file.
    pub fn stage(bytes: &[u8], label: impl Into<PathBuf>) -> Result<Arc<Self>, Error> {
        let mut tempfile = Self::tempfile()?;
        tempfile.as_file_mut().write_all(bytes)?;

        Self::load(tempfile.into_file(), label.into())
    }

    /// Creates a temporary source file and writes the given displayable object to it.
    ///
    /// # Errors
    /// - [`Error::IoError`]: Error occurred when creating the temporary file, writing to, and
    ///   mapping it to memory.
    pub fn temp(display: impl Display) -> Result<Arc<Self>, Error> {
        let mut tempfile = Self::tempfile()?;

        write!(tempfile.as_file_mut(), "{display}")?;
        let path = tempfile.path().to_owned();

        Self::load(tempfile.into_file(), path)
    }

    fn tempfile() -> std::io::Result<NamedTempFile> {
        tempfile::Builder::new()
            .prefix("opal")
            .suffix(".opl")
            .tempfile()
    }
}

/// Is a struct pointing to a particular location in a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Location {
    /// The line number of the location (starts at 1).
    pub line: usize,

    /// The column number of the location (the first character of a line is at column 1).
    pub column: usize,
}

impl Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Splits `text` into lines the way [`CharacterStream`] counts them: only `\n` ends a line, a
/// lone `\r` does not.
fn get_line_byte_positions(text: &str) -> Vec<Range<usize>> {
    let mut current_position = 0;
    let mut results = Vec::new();

    for (byte, _) in text.match_indices('\n') {
        #[allow(clippy::range_plus_one)]
        results.push(current_position..byte + 1);

        current_position = byte + 1;
    }

    results.push(current_position..text.len());

    results
}

#[cfg(test)]
mod tests;
