//! Contains all kinds of errors that can occur while preprocessing the source code.

use std::{fmt::Display, io, path::PathBuf};

use derive_more::From;
use enum_as_inner::EnumAsInner;
use opal_base::{
    log::{Message, Severity},
    source_file::Location,
};

/// The source code contains an unclosed `/*` comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UnterminatedComment {
    /// The location of the `/` that opens the comment.
    pub location: Location,
}

impl Display for UnterminatedComment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!("found an unclosed `/*` comment at {}", self.location)
            )
        )
    }
}

/// The file named by an `#include` directive does not exist or cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MissingInclude {
    /// The path of the file to include, resolved against the including file.
    pub path: PathBuf,

    /// The file containing the directive.
    pub including: PathBuf,

    /// The location of the `#` that starts the directive.
    pub location: Location,

    /// The reason the file cannot be read.
    pub reason: io::ErrorKind,
}

impl Display for MissingInclude {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n  --> {}:{}",
            Message::new(
                Severity::Error,
                format_args!("cannot include `{}`: {}", self.path.display(), self.reason)
            ),
            self.including.display(),
            self.location
        )
    }
}

/// A file includes itself, directly or through other included files.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IncludeCycle {
    /// The files taking part in the cycle, starting and ending with the same file.
    pub chain: Vec<PathBuf>,

    /// The file containing the directive that closes the cycle.
    pub including: PathBuf,

    /// The location of the `#` that starts the directive.
    pub location: Location,
}

impl Display for IncludeCycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let chain = self
            .chain
            .iter()
            .map(|path| path.display().to_string())
            .collect::<Vec<_>>()
            .join(" -> ");

        write!(
            f,
            "{}\n  --> {}:{}",
            Message::new(
                Severity::Error,
                format_args!("found an include cycle: {chain}")
            ),
            self.including.display(),
            self.location
        )
    }
}

/// The `#include` directives are nested deeper than the allowed maximum.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IncludeTooDeep {
    /// The file that would exceed the maximum depth.
    pub path: PathBuf,

    /// The maximum nesting depth.
    pub max_depth: usize,

    /// The file containing the directive.
    pub including: PathBuf,

    /// The location of the `#` that starts the directive.
    pub location: Location,
}

impl Display for IncludeTooDeep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}\n  --> {}:{}",
            Message::new(
                Severity::Error,
                format_args!(
                    "cannot include `{}`: includes are nested deeper than {} levels",
                    self.path.display(),
                    self.max_depth
                )
            ),
            self.including.display(),
            self.location
        )
    }
}

/// Is an enumeration containing all kinds of errors that can occur while preprocessing the
/// source code.
#[derive(Debug, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    UnterminatedComment(UnterminatedComment),
    MissingInclude(MissingInclude),
    IncludeCycle(IncludeCycle),
    IncludeTooDeep(IncludeTooDeep),
    IoError(io::Error),
}

impl Error {
    /// Gets the location of the error in the input stream of the stage that reported it.
    ///
    /// Include errors may point into a nested file and report their own location instead.
    #[must_use]
    pub fn location(&self) -> Option<Location> {
        match self {
            Self::UnterminatedComment(err) => Some(err.location),
            Self::MissingInclude(..)
            | Self::IncludeCycle(..)
            | Self::IncludeTooDeep(..)
            | Self::IoError(..) => None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnterminatedComment(err) => write!(f, "{err}"),
            Self::MissingInclude(err) => write!(f, "{err}"),
            Self::IncludeCycle(err) => write!(f, "{err}"),
            Self::IncludeTooDeep(err) => write!(f, "{err}"),
            Self::IoError(err) => write!(
                f,
                "{}",
                Message::new(Severity::Error, format_args!("I/O error: {err}"))
            ),
        }
    }
}

impl std::error::Error for Error {}
