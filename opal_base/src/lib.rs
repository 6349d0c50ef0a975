//! Contains the code shared by every stage of the OPaL front end: loading and staging source
//! files, the position tracking character stream, and console/diagnostic reporting.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    clippy::missing_errors_doc
)]
#![allow(clippy::missing_panics_doc, clippy::missing_const_for_fn)]

pub mod char_stream;
pub mod diagnostic;
pub mod log;
pub mod source_file;
