//! Contains the comment stripping stage.
//!
//! The stage removes `// ...` and `/* ... */` comments from a character stream. Every newline of
//! the input, including the ones inside removed comments, is kept so the line numbers of the
//! output match the input.

use std::io::{Read, Write};

use opal_base::{char_stream::CharacterStream, source_file::Location};
use tracing::{debug, trace};

use crate::error::{Error, UnterminatedComment};

/// Copies `stream` into `output` without its comments.
///
/// Block comments do not nest: the first `*/` closes the comment. A line comment ends at the
/// next newline or at the end of the stream.
///
/// Returns the number of comments removed.
///
/// # Errors
/// - [`Error::UnterminatedComment`]: the stream ends inside a `/*` comment.
/// - [`Error::IoError`]: reading the stream or writing the output failed.
pub fn strip_comments<R: Read, W: Write>(
    stream: &mut CharacterStream<R>,
    output: &mut W,
) -> Result<usize, Error> {
    debug!(target: "opal::marc", "stripping comments");

    let mut removed = 0;

    while let Some(character) = stream.read()? {
        if character != b'/' {
            output.write_all(&[character])?;
            continue;
        }

        let start = stream.location();

        match stream.peek()? {
            Some(b'/') => {
                stream.read()?;
                trace!(target: "opal::marc", "line comment at {start}");

                skip_line_comment(stream, output)?;
                removed += 1;
            }
            Some(b'*') => {
                stream.read()?;
                trace!(target: "opal::marc", "block comment at {start}");

                skip_block_comment(stream, output, start)?;
                removed += 1;
            }
            // the character after the slash is left for the next iteration
            _ => output.write_all(b"/")?,
        }
    }

    debug!(target: "opal::marc", "removed {removed} comments");

    Ok(removed)
}

fn skip_line_comment<R: Read, W: Write>(
    stream: &mut CharacterStream<R>,
    output: &mut W,
) -> Result<(), Error> {
    while let Some(character) = stream.read()? {
        if character == b'\n' {
            output.write_all(b"\n")?;
            break;
        }
    }

    Ok(())
}

fn skip_block_comment<R: Read, W: Write>(
    stream: &mut CharacterStream<R>,
    output: &mut W,
    start: Location,
) -> Result<(), Error> {
    loop {
        match stream.read()? {
            None => return Err(UnterminatedComment { location: start }.into()),
            Some(b'*') if stream.peek()? == Some(b'/') => {
                stream.read()?;
                return Ok(());
            }
            Some(b'\n') => output.write_all(b"\n")?,
            Some(_) => {}
        }
    }
}
