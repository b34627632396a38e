//! Type recognition.
//!
//! Types are a base keyword (`int`, `bool`, `string` or `void`) followed by
//! any number of array suffixes `[` INT? `]`. Like expressions, they are
//! driven by NUD/LED handlers with binding powers.

use std::collections::HashMap;

use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{lookups::BindingPower, parser::Parser};

/// Type alias for type null denotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<(), Error>;

/// Type alias for type left denotation handler functions.
pub type TypeLEDHandler = fn(&mut Parser, BindingPower) -> Result<(), Error>;

pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;
pub type TypeLEDLookup = HashMap<TokenKind, TypeLEDHandler>;

/// Initializes the type lookup tables.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Int, parse_keyword_type);
    parser.type_nud(TokenKind::Bool, parse_keyword_type);
    parser.type_nud(TokenKind::StringType, parse_keyword_type);
    parser.type_nud(TokenKind::Void, parse_keyword_type);
    parser.type_led(TokenKind::OpenBracket, BindingPower::Call, parse_array_type);
}

pub fn parse_keyword_type(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    Ok(())
}

/// `[` with an optional size literal, then `]`.
pub fn parse_array_type(parser: &mut Parser, _bp: BindingPower) -> Result<(), Error> {
    parser.expect(TokenKind::OpenBracket)?;

    if parser.current_token_kind() == TokenKind::IntLiteral {
        parser.advance();
    }

    parser.expect(TokenKind::CloseBracket)?;
    Ok(())
}

pub fn parse_type(parser: &mut Parser, bp: BindingPower) -> Result<(), Error> {
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected(Some("expected a type")));
    };

    nud(parser)?;

    // While LED and current BP is less than BP of current token, continue
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = parser
            .get_type_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_type_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected(None));
        };

        led(parser, next_bp)?;
    }

    Ok(())
}
