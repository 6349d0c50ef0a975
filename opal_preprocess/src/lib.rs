//! This crate implements the preprocessing phase of the front end: removing comments and
//! expanding `#include` directives.
//!
//! The phase runs [`comment::strip_comments`], then [`include::IncludeExpander::expand`] over
//! its output, then [`comment::strip_comments`] once more to remove the comments brought in by
//! the included files.

#![deny(
    missing_debug_implementations,
    missing_copy_implementations,
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod comment;
pub mod error;
pub mod include;
