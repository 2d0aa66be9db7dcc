//! Lexical analysis module.
//!
//! This module contains the lexer (tokenizer) that converts Monkey source
//! code into a stream of tokens for parsing. It handles:
//!
//! - Pull-based scanning, one token per call
//! - Recognition of keywords, identifiers, integers, and operators
//! - Two-character operators (`==`, `!=`) via one character of lookahead
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
