//! Contains the errors reported by the driver, every one of which aborts the compilation.

use std::{fmt::Display, io, path::PathBuf, sync::Arc};

use derive_more::From;
use derive_new::new;
use enum_as_inner::EnumAsInner;
use opal_base::{
    log::{Message, Severity, SourceCodeDisplay},
    source_file::{self, Location, SourceFile},
};

/// Is implemented by the errors of the front end stages that can point into their input.
pub trait Located {
    /// Gets the location of the error in the input of the stage that reported it.
    fn location(&self) -> Option<Location>;

    /// Gets a hint on how to fix the source code, if there is one.
    fn help(&self) -> Option<&'static str> { None }
}

impl Located for opal_preprocess::error::Error {
    fn location(&self) -> Option<Location> { Self::location(self) }
}

impl Located for opal_lexical::error::Error {
    fn location(&self) -> Option<Location> { Self::location(self) }

    fn help(&self) -> Option<&'static str> { Self::help(self) }
}

/// Is an error of a front end stage together with the source text the stage was reading.
#[derive(Debug, new)]
pub struct Diagnostic<E> {
    /// The error reported by the stage.
    pub error: E,

    /// The input of the stage.
    pub source_file: Arc<SourceFile>,
}

impl<E: Located + Display> Display for Diagnostic<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.error)?;

        if let Some(location) = self.error.location() {
            write!(
                f,
                "\n{}",
                SourceCodeDisplay::new(&self.source_file, location, self.error.help())
            )?;
        }

        Ok(())
    }
}

/// The source file given on the command line cannot be loaded.
#[derive(Debug)]
pub struct InputError {
    /// The path of the source file.
    pub path: PathBuf,

    /// The reason the file cannot be loaded.
    pub error: source_file::Error,
}

impl Display for InputError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!("{}: {}", self.path.display(), self.error)
            )
        )
    }
}

/// An output of the compilation cannot be opened or written.
#[derive(Debug)]
pub struct DestinationError {
    /// The path of the destination, [`None`] for the standard output.
    pub path: Option<PathBuf>,

    /// The reason the destination cannot be written.
    pub error: io::Error,
}

impl Display for DestinationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let destination = self.path.as_ref().map_or_else(
            || "the standard output".to_owned(),
            |path| format!("`{}`", path.display()),
        );

        write!(
            f,
            "{}",
            Message::new(
                Severity::Error,
                format_args!("cannot write to {destination}: {}", self.error)
            )
        )
    }
}

/// Is an enumeration of all errors that can abort a compilation.
#[derive(Debug, EnumAsInner, From)]
#[allow(missing_docs)]
pub enum Error {
    Input(InputError),
    Staging(source_file::Error),
    Preprocess(Diagnostic<opal_preprocess::error::Error>),
    Lexical(Diagnostic<opal_lexical::error::Error>),
    Destination(DestinationError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input(err) => write!(f, "{err}"),
            Self::Staging(err) => write!(
                f,
                "{}",
                Message::new(
                    Severity::Error,
                    format_args!("cannot stage the output of a stage: {err}")
                )
            ),
            Self::Preprocess(err) => write!(f, "{err}"),
            Self::Lexical(err) => write!(f, "{err}"),
            Self::Destination(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for Error {}
