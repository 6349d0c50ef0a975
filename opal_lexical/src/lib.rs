//! This crate implements the lexical analysis phase of the front end. This phase is responsible
//! for turning the preprocessed source code into a sequence of classified lexemes.
//!
//! The final output of this phase is a [`symbol_table::SymbolTable`], the ordered list of the
//! lexemes of a source file terminated by a single end-of-file lexeme.

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

pub mod error;
pub mod lexeme;
pub mod lexer;
pub mod symbol_table;
