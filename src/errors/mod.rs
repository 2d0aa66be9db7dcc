//! Error types and error reporting.
//!
//! The lexer itself never fails; these errors come from the layers around
//! it:
//!
//! - Illegal characters rejected by the strict tokenize driver
//! - Bad command-line arguments
//! - I/O failures in the REPL and file driver

pub mod errors;
