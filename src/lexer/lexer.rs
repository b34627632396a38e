use std::rc::Rc;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::{debug, debug_span, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_PATTERN, MK_TOKEN,
};

use super::tokens::{ClassifierTables, Token, TokenKind, TokenValue, DEFAULT_TABLES};

pub type PatternHandler = fn(&mut Lexer<'_>, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: PatternHandler,
}

lazy_static! {
    // Order matters: comments before the `/` operator, terminated forms
    // before their unterminated fallbacks.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        MK_PATTERN!("[ \t\r\n\x0B\x0C]", skip_handler),
        MK_PATTERN!(r"//[^\n]*", skip_handler),
        MK_PATTERN!(r"/\*(?s:.*?)\*/", skip_handler),
        MK_PATTERN!(r"/\*(?s:.*)", unterminated_comment_handler),
        MK_PATTERN!("[A-Za-z_][A-Za-z0-9_]*", symbol_handler),
        MK_PATTERN!("[0-9]+", number_handler),
        MK_PATTERN!(r#""[^"\n]*""#, string_handler),
        MK_PATTERN!(r#""[^"\n]*"#, unterminated_string_handler),
    ];
}

/// Tokens and diagnostics produced by one scan, in source order.
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub tokens: Vec<Token>,
    pub diagnostics: Vec<Error>,
}

impl ScanResult {
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|token| token.kind).collect()
    }
}

/// Single-use scanner over a borrowed source buffer.
pub struct Lexer<'a> {
    tables: &'a ClassifierTables,
    source: &'a str,
    tokens: Vec<Token>,
    diagnostics: Vec<Error>,
    pos: usize,
    line: u32,
    column: u32,
    file: Rc<String>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str, file: Option<String>, tables: &'a ClassifierTables) -> Lexer<'a> {
        let file_name = Rc::new(file.unwrap_or_else(|| String::from("<input>")));

        Lexer {
            tables,
            source,
            tokens: vec![],
            diagnostics: vec![],
            pos: 0,
            line: 1,
            column: 1,
            file: file_name,
        }
    }

    /// Runs the scan to the end of the buffer.
    pub fn scan(mut self) -> ScanResult {
        let span = debug_span!("scan", file = %self.file, bytes = self.source.len());
        let _guard = span.enter();

        while !self.at_eof() {
            self.step();
        }

        debug!(
            tokens = self.tokens.len(),
            diagnostics = self.diagnostics.len(),
            "scan finished"
        );

        ScanResult {
            tokens: self.tokens,
            diagnostics: self.diagnostics,
        }
    }

    fn step(&mut self) {
        let remaining = self.remainder();

        for pattern in PATTERNS.iter() {
            if let Some(found) = pattern.regex.find(remaining) {
                (pattern.handler)(self, found.as_str());
                return;
            }
        }

        if let Some((kind, len)) = self.tables.match_operator(remaining) {
            self.emit(kind, &remaining[..len], TokenValue::None);
            return;
        }

        let current = self.at();
        let text = &remaining[..current.len_utf8()];

        if let Some(kind) = self.tables.punctuation_kind(current) {
            self.emit(kind, text, TokenValue::None);
        } else {
            self.report(ErrorImpl::IllegalCharacter { character: current }, text);
        }
    }

    /// Consumes `text`, which must start at the cursor, updating line and column.
    pub fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos += text.len();
    }

    pub fn push(&mut self, token: Token) {
        trace!(
            kind = ?token.kind,
            lexeme = %token.lexeme,
            line = token.line(),
            column = token.col_start(),
            "token"
        );
        self.tokens.push(token);
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.pos as u32,
            line: self.line,
            column: self.column,
            file: Rc::clone(&self.file),
        }
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or('\0')
    }

    pub fn remainder(&self) -> &'a str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn consume(&mut self, text: &str) -> Span {
        let start = self.position();
        self.advance_over(text);
        Span {
            start,
            end: self.position(),
        }
    }

    fn emit(&mut self, kind: TokenKind, lexeme: &str, value: TokenValue) -> Span {
        let span = self.consume(lexeme);
        self.push(MK_TOKEN!(kind, String::from(lexeme), value, span.clone()));
        span
    }

    fn report(&mut self, error: ErrorImpl, text: &str) {
        let span = self.consume(text);
        self.diagnose(error, span);
    }

    fn diagnose(&mut self, error: ErrorImpl, span: Span) {
        let error = Error::new(error, span);
        debug!(%error, "scanner diagnostic");
        self.diagnostics.push(error);
    }
}

fn skip_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.advance_over(matched);
}

fn unterminated_comment_handler(lexer: &mut Lexer<'_>, matched: &str) {
    lexer.report(ErrorImpl::UnterminatedComment, matched);
}

fn symbol_handler(lexer: &mut Lexer<'_>, matched: &str) {
    match lexer.tables.reserved_kind(matched) {
        Some(TokenKind::BoolLiteral) => {
            lexer.emit(TokenKind::BoolLiteral, matched, TokenValue::Bool(matched == "true"));
        }
        Some(kind) => {
            lexer.emit(kind, matched, TokenValue::None);
        }
        None => {
            let value = TokenValue::Identifier(String::from(matched));
            lexer.emit(TokenKind::Identifier, matched, value);
        }
    }
}

fn number_handler(lexer: &mut Lexer<'_>, matched: &str) {
    match matched.parse::<i64>() {
        Ok(value) => {
            lexer.emit(TokenKind::IntLiteral, matched, TokenValue::Int(value));
        }
        Err(_) => {
            let span = lexer.emit(TokenKind::IntLiteral, matched, TokenValue::None);
            let literal = String::from(matched);
            lexer.diagnose(ErrorImpl::IntegerOverflow { literal }, span);
        }
    }
}

fn string_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let content = String::from(&matched[1..matched.len() - 1]);
    lexer.emit(TokenKind::StringLiteral, matched, TokenValue::Str(content));
}

fn unterminated_string_handler(lexer: &mut Lexer<'_>, matched: &str) {
    let literal = String::from(matched);
    lexer.report(ErrorImpl::UnterminatedString { literal }, matched);
}

/// Scans `source` with the default classifier tables.
pub fn tokenize(source: &str, file: Option<String>) -> ScanResult {
    tokenize_with(source, file, &DEFAULT_TABLES)
}

/// Scans `source` with caller-supplied classifier tables.
pub fn tokenize_with(source: &str, file: Option<String>, tables: &ClassifierTables) -> ScanResult {
    Lexer::new(source, file, tables).scan()
}
