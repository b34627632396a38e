#![allow(clippy::module_inception)]

use std::{fmt::Write as _, fs, path::Path, rc::Rc};

use crate::errors::errors::{Error, ErrorTip, SourceError};

pub mod config;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

extern crate regex;

/// A location in a source file. `line` and `column` are 1-based, columns
/// count characters rather than bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub offset: u32,
    pub line: u32,
    pub column: u32,
    pub file: Rc<String>,
}

impl Position {
    pub fn start_of(file: Rc<String>) -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
            file,
        }
    }
}

/// Half-open source range: `end` is the position just past the last character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn len(&self) -> usize {
        (self.end.offset - self.start.offset) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.start.offset == self.end.offset
    }
}

/// Reads a whole source file into memory.
pub fn read_source(path: &Path) -> Result<String, SourceError> {
    fs::read_to_string(path).map_err(|source| SourceError::Open {
        file: path.to_string_lossy().into_owned(),
        source,
    })
}

/// Finds the line containing byte `position`, returning the 1-based line
/// number, the line text and the byte offset of `position` within the line.
pub fn get_line_at_position(content: &str, position: u32) -> Option<(usize, String, usize)> {
    let pos = position as usize;

    if pos > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&pos) {
            return Some((line_number, line.to_string(), pos - start));
        }

        start = end;
        line_number += 1;
    }

    // Position sits at the very end of the input (or the input is empty).
    let last = content[..pos].rsplit('\n').next().unwrap_or("");
    let line_number = content[..pos].matches('\n').count() + 1;
    Some((line_number, last.to_string(), last.len()))
}

/// Renders a diagnostic with a source excerpt and a caret under the offending column.
pub fn render_error(error: &Error, source: &str) -> String {
    /*
        Error: IllegalCharacter (Illegal character '@')
        -> test.decaf
          |
        1 | x @ y
          | --^
    */

    let position = error.get_position();
    let mut out = String::new();

    if let ErrorTip::None = error.get_tip() {
        let _ = writeln!(out, "Error: {}", error.get_error_name());
    } else {
        let _ = writeln!(out, "Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    let _ = writeln!(out, "-> {}", position.file);

    let Some((line, line_text, _)) = get_line_at_position(source, position.offset) else {
        return out;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    let _ = writeln!(out, "{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    let _ = writeln!(out, "{} | {}", line_str, line_text_removed.trim_end());

    let arrows = (position.column as usize).saturating_sub(removed_whitespace).max(1);

    let _ = writeln!(out, "{:>padding$} {:->arrows$}", "|", "^");
    out
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use crate::{
        errors::errors::{Error, ErrorImpl},
        Position, Span,
    };

    const CONTENT: &str = "Hello, world!\n\nfoo\nTesting { }\n";

    #[test]
    fn test_get_line_at_position() {
        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(CONTENT, 27).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("ab\ncd", 5).unwrap();
        assert_eq!(line_number, 2);
        assert_eq!(line, "cd");
        assert_eq!(line_pos, 2);

        assert!(super::get_line_at_position("ab", 3).is_none());
    }

    #[test]
    fn test_render_error_points_at_column() {
        let file = Rc::new("test.decaf".to_string());
        let start = Position { offset: 2, line: 1, column: 3, file: Rc::clone(&file) };
        let end = Position { offset: 3, line: 1, column: 4, file };
        let error = Error::new(ErrorImpl::IllegalCharacter { character: '@' }, Span { start, end });

        let rendered = super::render_error(&error, "x @ y\n");
        assert_eq!(
            rendered,
            "Error: IllegalCharacter (Illegal character '@')\n-> test.decaf\n  |\n1 | x @ y\n  | --^\n"
        );
    }

    #[test]
    fn test_render_error_strips_indentation() {
        let file = Rc::new("test.decaf".to_string());
        let start = Position { offset: 9, line: 2, column: 5, file: Rc::clone(&file) };
        let end = Position { offset: 10, line: 2, column: 6, file };
        let error = Error::new(ErrorImpl::IllegalCharacter { character: '#' }, Span { start, end });

        let rendered = super::render_error(&error, "int x;\n    # y\n");
        assert!(rendered.ends_with("2 | # y\n  | ^\n"), "{}", rendered);
    }
}
