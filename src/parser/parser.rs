//! Grammar recognizer over the scanner's token sequence.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The recognizer uses a Pratt approach with NUD/LED handlers for
//! expressions and specialized functions for statements. It builds no
//! tree: each handler consumes tokens and either succeeds or returns the
//! first syntax error.
//!
//! Dispatch is table driven: each token kind maps to a statement handler,
//! a prefix (NUD) handler, an infix (LED) handler and a binding power.

use std::{collections::HashMap, rc::Rc};

use tracing::{debug, debug_span, trace};

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind, TokenValue},
    Position, Span, MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_decl,
    types::{create_token_type_lookups, TypeLEDHandler, TypeLEDLookup, TypeNUDHandler, TypeNUDLookup},
};

/// Deepest statement/expression nesting accepted before recognition fails.
pub const MAX_NESTING_DEPTH: usize = 256;

/// The recognizer state.
///
/// Holds the token sequence (always terminated by a synthetic `EOF` token)
/// and the lookup tables that drive statement, expression and type
/// recognition.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
    // Types get their own tables: `[` means an array suffix there, not indexing.
    type_nud_lookup: TypeNUDLookup,
    type_led_lookup: TypeLEDLookup,
    type_binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser over `tokens`.
    ///
    /// An `EOF` token positioned just past the last token (or at the start
    /// of `file` when there are no tokens) is appended.
    pub fn new(mut tokens: Vec<Token>, file: Rc<String>) -> Self {
        let end = tokens
            .last()
            .map(|token| token.span.end.clone())
            .unwrap_or_else(|| Position::start_of(file));

        tokens.push(MK_TOKEN!(
            TokenKind::EOF,
            String::new(),
            TokenValue::None,
            Span {
                start: end.clone(),
                end,
            }
        ));

        Parser {
            tokens,
            pos: 0,
            depth: 0,
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
            type_nud_lookup: HashMap::new(),
            type_led_lookup: HashMap::new(),
            type_binding_power_lookup: HashMap::new(),
        }
    }

    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Advances to the next token and returns the previous one. Stays on `EOF`.
    pub fn advance(&mut self) -> &Token {
        let index = self.pos;
        if index + 1 < self.tokens.len() {
            self.pos += 1;
        }

        let token = &self.tokens[index];
        trace!(kind = ?token.kind, lexeme = %token.lexeme, "consumed");
        token
    }

    /// Builds the error for an unexpected current token.
    ///
    /// At `EOF` this is always `UnexpectedEndOfInput`; otherwise `message`
    /// selects between the detailed and the plain variant.
    pub fn unexpected(&self, message: Option<&str>) -> Error {
        let token = self.current_token();
        let error = match (token.kind, message) {
            (TokenKind::EOF, _) => ErrorImpl::UnexpectedEndOfInput,
            (_, Some(message)) => ErrorImpl::UnexpectedTokenDetailed {
                token: token.lexeme.clone(),
                message: message.to_string(),
            },
            (_, None) => ErrorImpl::UnexpectedToken {
                token: token.lexeme.clone(),
            },
        };

        Error::new(error, token.span.clone())
    }

    /// Consumes a token of `expected_kind`, or fails with `error` (or a
    /// generic "expected ..." error when none is given).
    pub fn expect_error(
        &mut self,
        expected_kind: TokenKind,
        error: Option<Error>,
    ) -> Result<Token, Error> {
        if self.current_token_kind() != expected_kind {
            match error {
                Some(error) => Err(error),
                None => Err(self.unexpected(Some(&format!("expected {}", expected_kind.label())))),
            }
        } else {
            Ok(self.advance().clone())
        }
    }

    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        self.expect_error(expected_kind, None)
    }

    /// Runs `recognize` one nesting level deeper, failing instead of
    /// recursing past [`MAX_NESTING_DEPTH`].
    pub fn nested<F>(&mut self, recognize: F) -> Result<(), Error>
    where
        F: FnOnce(&mut Parser) -> Result<(), Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            debug!(depth = self.depth, "nesting limit reached");
            return Err(self.unexpected(Some("nesting too deep")));
        }

        self.depth += 1;
        let result = recognize(self);
        self.depth -= 1;
        result
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    /// Returns true until the current token is `EOF`.
    pub fn has_tokens(&self) -> bool {
        self.current_token_kind() != TokenKind::EOF
    }

    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    pub fn get_type_bp_lookup(&self) -> &BPLookup {
        &self.type_binding_power_lookup
    }

    pub fn get_type_nud_lookup(&self) -> &TypeNUDLookup {
        &self.type_nud_lookup
    }

    pub fn get_type_led_lookup(&self) -> &TypeLEDLookup {
        &self.type_led_lookup
    }

    pub fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// Tokens that already have an infix binding power keep it.
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.binding_power_lookup
            .entry(kind)
            .or_insert(BindingPower::Primary);
        self.nud_lookup.insert(kind, nud_fn);
    }

    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.binding_power_lookup
            .insert(kind, BindingPower::Default);
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn type_led(
        &mut self,
        kind: TokenKind,
        binding_power: BindingPower,
        led_fn: TypeLEDHandler,
    ) {
        self.type_binding_power_lookup.insert(kind, binding_power);
        self.type_led_lookup.insert(kind, led_fn);
    }

    pub fn type_nud(&mut self, kind: TokenKind, nud_fn: TypeNUDHandler) {
        self.type_binding_power_lookup
            .insert(kind, BindingPower::Primary);
        self.type_nud_lookup.insert(kind, nud_fn);
    }

    /// Returns the start position of the current token.
    pub fn get_position(&self) -> Position {
        self.current_token().span.start.clone()
    }
}

/// Recognizes a whole program.
///
/// This is the main entry point for the grammar. It creates a parser,
/// initializes all lookup tables and consumes top-level declarations until
/// `EOF`.
///
/// Returns the parser (positioned where recognition stopped) together with
/// the number of top-level declarations or the first syntax error.
pub fn parse(tokens: Vec<Token>, file: Rc<String>) -> (Parser, Result<usize, Error>) {
    let span = debug_span!("recognize", file = %file, tokens = tokens.len());
    let _guard = span.enter();

    let mut parser = Parser::new(tokens, file);
    create_token_lookups(&mut parser);
    create_token_type_lookups(&mut parser);

    let mut declarations = 0;

    while parser.has_tokens() {
        if let Err(error) = parse_decl(&mut parser) {
            debug!(%error, "syntax error");
            return (parser, Err(error));
        }
        declarations += 1;
    }

    debug!(declarations, "program recognized");
    (parser, Ok(declarations))
}
