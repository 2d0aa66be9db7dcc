//! Interactive read-tokenize-print loop.

pub mod repl;
