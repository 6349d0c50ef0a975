//! Runs the stages of the front end one after another.
//!
//! The output of every stage is staged in a temporary file and loaded back as a [`SourceFile`],
//! so the diagnostics of the next stage can show the text it was reading.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use getset::Getters;
use opal_base::source_file::SourceFile;
use opal_lexical::symbol_table::SymbolTable;
use opal_preprocess::{comment, include::IncludeExpander};
use tracing::{debug, info};

use crate::error::{Diagnostic, Error, InputError};

/// Contains the outputs of every stage of a successful compilation.
#[derive(Debug, Getters)]
pub struct Compilation {
    /// Gets the source file given by the user.
    #[get = "pub"]
    source: Arc<SourceFile>,

    /// Gets the source without its comments, before the includes are expanded.
    #[get = "pub"]
    uncommented: Arc<SourceFile>,

    /// Gets the source with its includes expanded.
    #[get = "pub"]
    expanded: Arc<SourceFile>,

    /// Gets the preprocessed source read by the lexer.
    #[get = "pub"]
    preprocessed: Arc<SourceFile>,

    /// Gets the symbol table of the preprocessed source.
    #[get = "pub"]
    symbol_table: SymbolTable,
}

/// Compiles the source file at `path` down to its symbol table.
///
/// Comments are removed before the includes are expanded and once more afterwards, so comments
/// coming from included files are removed too. Relative include paths are resolved against the
/// directory of the including file.
///
/// # Errors
/// - [`Error::Input`]: the source file cannot be loaded.
/// - [`Error::Preprocess`]: a comment is unclosed or an include cannot be expanded.
/// - [`Error::Lexical`]: the preprocessed source cannot be tokenized.
/// - [`Error::Staging`]: the output of a stage cannot be staged.
pub fn compile(path: &Path, max_include_depth: usize) -> Result<Compilation, Error> {
    info!(target: "opal::marc", "MARC start.");

    let source = SourceFile::open(path).map_err(|error| InputError {
        path: path.to_path_buf(),
        error,
    })?;

    let uncommented = strip_comments(&source, stage_label(path, "uncommented"))?;

    let expanded = {
        let mut expander = IncludeExpander::new(path).with_max_depth(max_include_depth);
        let mut output = Vec::new();

        expander
            .expand(&mut uncommented.stream(), &mut output)
            .map_err(|error| Diagnostic::new(error, uncommented.clone()))?;

        stage(&output, stage_label(path, "expanded"))?
    };

    let preprocessed = strip_comments(&expanded, stage_label(path, "preprocessed"))?;

    let symbol_table = SymbolTable::build(preprocessed.stream())
        .map_err(|error| Diagnostic::new(error, preprocessed.clone()))?;

    Ok(Compilation {
        source,
        uncommented,
        expanded,
        preprocessed,
        symbol_table,
    })
}

fn strip_comments(source: &Arc<SourceFile>, label: PathBuf) -> Result<Arc<SourceFile>, Error> {
    let mut output = Vec::new();

    comment::strip_comments(&mut source.stream(), &mut output)
        .map_err(|error| Diagnostic::new(error, source.clone()))?;

    stage(&output, label)
}

fn stage(bytes: &[u8], label: PathBuf) -> Result<Arc<SourceFile>, Error> {
    debug!(target: "opal::marc", "staging {} bytes as `{}`", bytes.len(), label.display());

    Ok(SourceFile::stage(bytes, label)?)
}

/// Names the staged output of a stage after the source file it comes from.
fn stage_label(path: &Path, stage: &str) -> PathBuf {
    PathBuf::from(format!("{} ({stage})", path.display()))
}
