//! Error types and error handling for the front end.
//!
//! This module defines the diagnostics produced while scanning and
//! recognizing source text. It includes:
//!
//! - Error structures carrying the offending source span
//! - Specific error variants for the scanner and the recognizer
//! - Tips attached to each variant for rendering
//! - The error raised when a source file cannot be read

pub mod errors;
