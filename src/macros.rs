//! Utility macros for the front end.
//!
//! This module defines helper macros used by the scanner:
//!
//! - `MK_TOKEN!` - Creates a Token instance
//! - `MK_PATTERN!` - Creates a cursor-anchored scan pattern with its handler
//!
//! These macros reduce boilerplate in the lexer implementation.

/// Creates a Token instance.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$lexeme` - The exact source text of the token
/// * `$value` - The decoded TokenValue
/// * `$span` - The source span
///
/// # Example
///
/// ```ignore
/// let token = MK_TOKEN!(TokenKind::IntLiteral, "42".to_string(), TokenValue::Int(42), span);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $lexeme:expr, $value:expr, $span:expr) => {
        Token {
            kind: $kind,
            lexeme: $lexeme,
            value: $value,
            span: $span,
        }
    };
}

/// Creates a scan pattern anchored at the cursor.
///
/// The regex is prefixed with `^` so it only matches at the current scan
/// position, and is compiled once when the pattern table is built.
///
/// # Arguments
///
/// * `$regex` - The pattern, without the leading anchor
/// * `$handler` - The `PatternHandler` invoked with the matched text
///
/// # Example
///
/// ```ignore
/// MK_PATTERN!("[0-9]+", number_handler)
/// ```
#[macro_export]
macro_rules! MK_PATTERN {
    ($regex:literal, $handler:expr) => {
        RegexPattern {
            regex: Regex::new(concat!("^", $regex)).expect("scan patterns are valid regexes"),
            handler: $handler,
        }
    };
}
