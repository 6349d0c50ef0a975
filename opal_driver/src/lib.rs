//! Drives the OPaL front end: parses the command line, runs the stages and writes the symbol
//! table, the log file and the compilation report.

use std::{
    cell::Cell,
    fmt::Display,
    fs::{File, OpenOptions},
    io,
    path::{Path, PathBuf},
    process::ExitCode,
};

pub use clap::Parser;
use error::{DestinationError, Error};
use opal_base::{diagnostic::Handler, log::formatting::strip_styles};
use opal_preprocess::include::IncludeExpander;
use pipeline::Compilation;
use tracing::{error, info};

pub mod error;
pub mod logging;
pub mod pipeline;
pub mod report;

/// The arguments to the program.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, clap::Parser)]
#[clap(
    name = "opal",
    about = "OPaL compiler front end: removes comments, expands includes and tokenizes a source \
             file."
)]
pub struct Argument {
    /// The source file to compile.
    pub file: PathBuf,

    /// Writes the symbol table to the given file instead of the standard output.
    #[clap(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Appends the log messages to the given file.
    #[clap(short, long, value_name = "FILE", default_value = logging::DEFAULT_LOG_FILE)]
    pub log: PathBuf,

    /// Logs debug messages.
    #[clap(short, long)]
    pub debug: bool,

    /// Writes an HTML compilation report to the given file.
    #[clap(short, long, value_name = "FILE")]
    pub report: Option<PathBuf>,

    /// The maximum number of nested includes.
    #[clap(long, value_name = "N", default_value_t = IncludeExpander::DEFAULT_MAX_DEPTH)]
    pub max_include_depth: usize,
}

/// A struct that implements [`Handler`] but prints all the message to the standard error stream.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct Printer {
    printed: Cell<bool>,
}

impl Printer {
    /// Creates a new [`Printer`].
    fn new() -> Self {
        Self {
            printed: Cell::new(false),
        }
    }

    fn has_printed(&self) -> bool { self.printed.get() }
}

impl<E: Display> Handler<E> for Printer {
    fn receive(&self, error: E) {
        eprintln!("{error}");
        self.printed.set(true);
    }
}

/// Runs the program with the given arguments.
pub fn run(argument: Argument) -> ExitCode {
    let printer = Printer::new();

    let _guard = match logging::init(&argument.log, argument.debug) {
        Ok(guard) => guard,
        Err(error) => {
            printer.receive(Error::from(error));
            return ExitCode::FAILURE;
        }
    };

    let compilation = execute(&argument, &printer);

    if compilation.is_none() || printer.has_printed() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Compiles the source file named by `argument` and writes its outputs.
///
/// Every destination is opened before the compilation starts. The first error aborts the
/// compilation; it is logged and passed to `handler`.
pub fn execute(argument: &Argument, handler: &dyn Handler<Error>) -> Option<Compilation> {
    match try_execute(argument) {
        Ok(compilation) => Some(compilation),
        Err(err) => {
            error!(target: "opal::driver", "{}", strip_styles(&err.to_string()));
            handler.receive(err);
            None
        }
    }
}

fn try_execute(argument: &Argument) -> Result<Compilation, Error> {
    let mut output = argument.output.as_deref().map(create).transpose()?;
    let mut report = argument.report.as_deref().map(create).transpose()?;

    let compilation = pipeline::compile(&argument.file, argument.max_include_depth)?;

    match &mut output {
        Some((path, file)) => compilation
            .symbol_table()
            .write_to(file)
            .map_err(|error| destination_error(Some(*path), error))?,
        None => compilation
            .symbol_table()
            .write_to(&mut io::stdout().lock())
            .map_err(|error| destination_error(None, error))?,
    }

    if let Some((path, file)) = &mut report {
        report::write(&compilation, file)
            .map_err(|error| destination_error(Some(*path), error))?;
        info!(target: "opal::driver", "wrote the report to `{}`", path.display());
    }

    Ok(compilation)
}

/// Creates (or truncates) the destination at `path`.
fn create(path: &Path) -> Result<(&Path, File), DestinationError> {
    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map(|file| (path, file))
        .map_err(|error| destination_error(Some(path), error))
}

fn destination_error(path: Option<&Path>, error: io::Error) -> DestinationError {
    DestinationError {
        path: path.map(Path::to_path_buf),
        error,
    }
}
