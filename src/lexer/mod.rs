//! Lexical analysis module for the front end.
//!
//! This module contains the scanner that converts source text into a
//! sequence of tokens for the grammar recognizer. It handles:
//!
//! - Classification of reserved words, operators and punctuation through
//!   immutable lookup tables
//! - Identifiers, integer, string and boolean literals
//! - Line and column tracking through whitespace, comments and literals
//! - Non-fatal diagnostics for malformed input

pub mod lexer;
pub mod tokens;
