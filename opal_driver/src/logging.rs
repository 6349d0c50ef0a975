//! Sets up the log file the front end stages write their `tracing` events to.

use std::{
    fs::{self, File, OpenOptions},
    io,
    path::Path,
    sync::Mutex,
};

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{
    filter::{LevelFilter, Targets},
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};

use crate::error::DestinationError;

/// The default path of the log file.
pub const DEFAULT_LOG_FILE: &str = "log/oc_log";

/// Opens the log file at `path` in append mode, creating it and its directory when needed.
///
/// # Errors
/// Returns the I/O error of creating the directory or opening the file.
pub fn open(path: &Path) -> io::Result<File> {
    if let Some(directory) = path
        .parent()
        .filter(|directory| !directory.as_os_str().is_empty())
    {
        fs::create_dir_all(directory)?;
    }

    OpenOptions::new().create(true).append(true).open(path)
}

/// Routes the events of the `opal` targets to the log file at `path` until the returned guard is
/// dropped.
///
/// Only errors are logged unless `debug` is set, which logs debug messages too.
///
/// # Errors
/// Returns a [`DestinationError`] if the log file cannot be opened.
pub fn init(path: &Path, debug: bool) -> Result<DefaultGuard, DestinationError> {
    let file = open(path).map_err(|error| DestinationError {
        path: Some(path.to_path_buf()),
        error,
    })?;

    let level = if debug {
        LevelFilter::DEBUG
    } else {
        LevelFilter::ERROR
    };

    let targets = Targets::new().with_target("opal", level);

    let file_layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(file))
        .with_filter(targets);

    Ok(tracing_subscriber::registry().with(file_layer).set_default())
}
