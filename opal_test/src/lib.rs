//! Contains the testing utilities shared by the property based tests of the OPaL front end.

#![deny(
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links
)]
#![allow(clippy::missing_errors_doc)]

pub mod input;
