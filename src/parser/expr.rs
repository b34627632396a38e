use crate::{errors::errors::Error, lexer::tokens::TokenKind};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<(), Error> {
    parser.nested(|parser| parse_nested_expr(parser, bp))
}

fn parse_nested_expr(parser: &mut Parser, bp: BindingPower) -> Result<(), Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(parser.unexpected(Some("expected an expression")));
    };

    nud(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let next_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if next_bp <= bp {
            break;
        }

        let Some(led) = parser.get_led_lookup().get(&token_kind).copied() else {
            return Err(parser.unexpected(None));
        };

        led(parser, next_bp)?;
    }

    Ok(())
}

/// Literals, `null` and identifiers. The lookup only routes those kinds here.
pub fn parse_primary_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    Ok(())
}

pub fn parse_binary_expr(parser: &mut Parser, bp: BindingPower) -> Result<(), Error> {
    parser.advance();
    parse_expr(parser, bp)
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    parse_expr(parser, BindingPower::Unary)
}

// Right associative: the right hand side may itself be an assignment.
pub fn parse_assignment_expr(parser: &mut Parser, _bp: BindingPower) -> Result<(), Error> {
    parser.advance();
    parse_expr(parser, BindingPower::Default)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;
    Ok(())
}

pub fn parse_call_expr(parser: &mut Parser, _bp: BindingPower) -> Result<(), Error> {
    parser.expect(TokenKind::OpenParen)?;
    parse_args(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    Ok(())
}

pub fn parse_index_expr(parser: &mut Parser, _bp: BindingPower) -> Result<(), Error> {
    parser.expect(TokenKind::OpenBracket)?;
    parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseBracket)?;
    Ok(())
}

pub fn parse_member_expr(parser: &mut Parser, _bp: BindingPower) -> Result<(), Error> {
    parser.expect(TokenKind::Dot)?;
    parser.expect(TokenKind::Identifier)?;
    Ok(())
}

/// Comma separated expressions up to, but not including, a `)`.
pub fn parse_args(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::CloseParen {
        return Ok(());
    }

    parse_expr(parser, BindingPower::Default)?;

    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        parse_expr(parser, BindingPower::Default)?;
    }

    Ok(())
}
