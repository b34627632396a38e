//! Grammar recognizer for Decaf programs.
//!
//! This module checks a token sequence against the language grammar without
//! building a syntax tree. It uses a Pratt parser for expressions with
//! operator precedence and handles:
//!
//! - Top-level variable and function declarations
//! - Statements (blocks, control flow, `return`, `Print`)
//! - Expressions (binary and prefix operators, calls, indexing, members)
//! - Types with array suffixes
//!
//! Recognition stops at the first syntax error.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
