//! Contains the include expansion stage.
//!
//! Every `#include "path"` (or `#include path`) directive is replaced in place by the content of
//! the named file. Included files are expanded recursively, each one through its own
//! [`CharacterStream`].

use std::{
    fs::{self, File},
    io::{Read, Write},
    path::{Path, PathBuf},
};

use getset::CopyGetters;
use opal_base::{char_stream::CharacterStream, source_file::Location};
use tracing::{debug, trace};

use crate::error::{Error, IncludeCycle, IncludeTooDeep, MissingInclude};

/// The directive keyword following `#`, matched ignoring ASCII case.
const DIRECTIVE: &[u8] = b"include ";

#[derive(Debug, Clone, PartialEq, Eq)]
struct Frame {
    /// The path the file was opened with, used to resolve relative includes.
    path: PathBuf,

    /// The canonical path of the file, used to detect cycles.
    canonical: PathBuf,
}

/// Expands the `#include` directives of a character stream.
///
/// The expander keeps the stack of the files being expanded, starting with the root source
/// file. Including a file that is already on the stack is an [`IncludeCycle`] and nesting deeper
/// than [`IncludeExpander::max_depth`] is an [`IncludeTooDeep`].
#[derive(Debug, Clone, PartialEq, Eq, CopyGetters)]
pub struct IncludeExpander {
    in_progress: Vec<Frame>,

    /// Gets the maximum number of nested includes.
    #[get_copy = "pub"]
    max_depth: usize,
}

impl IncludeExpander {
    /// The default maximum number of nested includes.
    pub const DEFAULT_MAX_DEPTH: usize = 32;

    /// Creates an expander for the stream of the source file at `root`.
    ///
    /// Relative include paths found in the root stream are resolved against the directory of
    /// `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let path = root.into();
        let canonical = fs::canonicalize(&path).unwrap_or_else(|_| path.clone());

        Self {
            in_progress: vec![Frame { path, canonical }],
            max_depth: Self::DEFAULT_MAX_DEPTH,
        }
    }

    /// Sets the maximum number of nested includes.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Copies `stream` into `output`, replacing every include directive by the content of the
    /// file it names.
    ///
    /// The newline ending a directive is written after the included content. Comment spans are
    /// copied verbatim and never searched for directives.
    ///
    /// # Errors
    /// - [`Error::MissingInclude`]: an included file does not exist or cannot be read.
    /// - [`Error::IncludeCycle`]: a file includes itself directly or indirectly.
    /// - [`Error::IncludeTooDeep`]: the includes are nested deeper than the maximum depth.
    /// - [`Error::IoError`]: reading the stream or writing the output failed.
    pub fn expand<R: Read, W: Write>(
        &mut self,
        stream: &mut CharacterStream<R>,
        output: &mut W,
    ) -> Result<(), Error> {
        while let Some(character) = stream.read()? {
            match character {
                b'#' if stream.upcoming_eq_ignore_ascii_case(DIRECTIVE)? => {
                    let location = stream.location();
                    stream.skip(DIRECTIVE.len())?;

                    let (path, terminator) = Self::read_path(stream)?;
                    self.include(&path, location, output)?;

                    if let Some(terminator) = terminator {
                        output.write_all(&[terminator])?;
                    }
                }
                b'/' => Self::copy_comment(stream, output)?,
                character => output.write_all(&[character])?,
            }
        }

        Ok(())
    }

    /// Reads the rest of the directive line, dropping `"` characters.
    ///
    /// Returns the trimmed path and the newline that ended it, if any.
    fn read_path<R: Read>(stream: &mut CharacterStream<R>) -> Result<(String, Option<u8>), Error> {
        let mut buffer = Vec::new();

        let terminator = loop {
            match stream.read()? {
                None => break None,
                Some(b'\n') => break Some(b'\n'),
                Some(b'"') => {}
                Some(character) => buffer.push(character),
            }
        };

        let path = String::from_utf8_lossy(&buffer).trim().to_owned();
        Ok((path, terminator))
    }

    /// Copies the comment starting at the `/` just read, if there is one.
    fn copy_comment<R: Read, W: Write>(
        stream: &mut CharacterStream<R>,
        output: &mut W,
    ) -> Result<(), Error> {
        output.write_all(b"/")?;

        match stream.peek()? {
            Some(b'/') => {
                while let Some(character) = stream.read()? {
                    output.write_all(&[character])?;

                    if character == b'\n' {
                        break;
                    }
                }
            }
            Some(b'*') => {
                output.write_all(&[b'*'])?;
                stream.read()?;

                // an unclosed comment is copied up to the end; the next comment stripping pass
                // reports it
                while let Some(character) = stream.read()? {
                    output.write_all(&[character])?;

                    if character == b'*' && stream.peek()? == Some(b'/') {
                        stream.read()?;
                        output.write_all(b"/")?;
                        break;
                    }
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn resolve(&self, path: &str) -> PathBuf {
        let path = Path::new(path);

        if path.is_absolute() {
            return path.to_path_buf();
        }

        self.current_file()
            .parent()
            .map_or_else(|| path.to_path_buf(), |directory| directory.join(path))
    }

    fn current_file(&self) -> &Path {
        // the root frame is never popped
        &self.in_progress[self.in_progress.len() - 1].path
    }

    fn include<W: Write>(
        &mut self,
        raw_path: &str,
        location: Location,
        output: &mut W,
    ) -> Result<(), Error> {
        let path = self.resolve(raw_path);
        let including = self.current_file().to_path_buf();

        debug!(target: "opal::marc", "including `{}` from {}:{location}", path.display(), including.display());

        let missing = |error: std::io::Error| MissingInclude {
            path: path.clone(),
            including: including.clone(),
            location,
            reason: error.kind(),
        };

        let file = File::open(&path).map_err(missing)?;
        let canonical = fs::canonicalize(&path).map_err(missing)?;

        if let Some(start) = self
            .in_progress
            .iter()
            .position(|frame| frame.canonical == canonical)
        {
            let mut chain = self.in_progress[start..]
                .iter()
                .map(|frame| frame.path.clone())
                .collect::<Vec<_>>();
            chain.push(path);

            return Err(IncludeCycle {
                chain,
                including,
                location,
            }
            .into());
        }

        if self.in_progress.len() > self.max_depth {
            return Err(IncludeTooDeep {
                path,
                max_depth: self.max_depth,
                including,
                location,
            }
            .into());
        }

        self.in_progress.push(Frame {
            path: path.clone(),
            canonical,
        });

        // the included file is released when its stream goes out of scope
        let mut nested = CharacterStream::new(file);
        let result = self.expand(&mut nested, output);

        self.in_progress.pop();

        trace!(target: "opal::marc", "finished including `{}`", path.display());

        result
    }
}

#[cfg(test)]
mod tests;
