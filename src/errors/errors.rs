use std::fmt::Display;

use thiserror::Error;

use crate::{Position, Span};

/// A diagnostic produced by the scanner or the grammar recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Error {
    internal_error: ErrorImpl,
    span: Span,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, span: Span) -> Self {
        Error {
            internal_error: error_impl,
            span,
        }
    }

    pub fn kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_position(&self) -> &Position {
        &self.span.start
    }

    pub fn get_span(&self) -> &Span {
        &self.span
    }

    /// True for diagnostics raised while scanning characters, as opposed to
    /// syntax errors raised by the recognizer.
    pub fn is_lexical(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::IllegalCharacter { .. }
                | ErrorImpl::UnterminatedString { .. }
                | ErrorImpl::UnterminatedComment
                | ErrorImpl::IntegerOverflow { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
            ErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
            ErrorImpl::UnexpectedTokenDetailed { .. } => "UnexpectedTokenDetailed",
            ErrorImpl::UnexpectedEndOfInput => "UnexpectedEndOfInput",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::IllegalCharacter { character } => {
                ErrorTip::Suggestion(format!("Illegal character '{}'", character.escape_default()))
            }
            ErrorImpl::UnterminatedString { .. } => ErrorTip::Suggestion(String::from(
                "String literals must be closed with `\"` on the same line",
            )),
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Block comment is never closed, add a matching `*/`",
            )),
            ErrorImpl::IntegerOverflow { literal } => ErrorTip::Suggestion(format!(
                "Invalid number: `{}`, is it above the integer limit?",
                literal
            )),
            ErrorImpl::UnexpectedToken { token } => ErrorTip::Suggestion(format!(
                "Unexpected token: `{}`, did you miss a semicolon?",
                token
            )),
            ErrorImpl::UnexpectedTokenDetailed { token, message } => {
                ErrorTip::Suggestion(format!("Unexpected token: `{}`, {}", token, message))
            }
            ErrorImpl::UnexpectedEndOfInput => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = self.get_position();
        write!(
            f,
            "{}:{}:{}: {}",
            position.file, position.line, position.column, self.internal_error
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("illegal character {character:?}")]
    IllegalCharacter { character: char },
    #[error("unterminated string literal: {literal:?}")]
    UnterminatedString { literal: String },
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("integer literal out of range: {literal:?}")]
    IntegerOverflow { literal: String },
    #[error("unexpected token: {token:?}")]
    UnexpectedToken { token: String },
    #[error("unexpected token ({message:?}): {token:?}")]
    UnexpectedTokenDetailed { token: String, message: String },
    #[error("unexpected end of input")]
    UnexpectedEndOfInput,
}

/// Failure to obtain source text. Raised before scanning begins.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Error opening \"{file}\": {source}")]
    Open {
        file: String,
        #[source]
        source: std::io::Error,
    },
}
