use crate::{
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{
        expr::{parse_args, parse_expr},
        lookups::BindingPower,
    },
};

use super::{parser::Parser, types::parse_type};

/// A top-level variable or function declaration.
pub fn parse_decl(parser: &mut Parser) -> Result<(), Error> {
    if !parser.current_token_kind().is_type_keyword() {
        return Err(parser.unexpected(Some("expected a declaration")));
    }

    parse_type(parser, BindingPower::Default)?;

    let error = parser.unexpected(Some("expected identifier during declaration"));
    parser.expect_error(TokenKind::Identifier, Some(error))?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        parse_params(parser)?;
        return parse_block_stmt(parser);
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

fn parse_params(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::OpenParen)?;

    if parser.current_token_kind() != TokenKind::CloseParen {
        parse_param(parser)?;

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            parse_param(parser)?;
        }
    }

    parser.expect(TokenKind::CloseParen)?;
    Ok(())
}

fn parse_param(parser: &mut Parser) -> Result<(), Error> {
    parse_type(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Identifier)?;
    Ok(())
}

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.nested(|parser| {
        if let Some(handler) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
            return handler(parser);
        }

        parse_expr(parser, BindingPower::Default)?;
        parser.expect(TokenKind::Semicolon)?;
        Ok(())
    })
}

pub fn parse_var_decl_stmt(parser: &mut Parser) -> Result<(), Error> {
    parse_type(parser, BindingPower::Default)?;

    let error = parser.unexpected(Some("expected identifier during variable declaration"));
    parser.expect_error(TokenKind::Identifier, Some(error))?;

    if parser.current_token_kind() == TokenKind::OpenParen {
        return Err(parser.unexpected(Some("functions can only be declared at the top level")));
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::OpenCurly)?;

    // An unclosed block runs into EOF, which no statement accepts.
    while parser.current_token_kind() != TokenKind::CloseCurly {
        parse_stmt(parser)?;
    }

    parser.expect(TokenKind::CloseCurly)?;
    Ok(())
}

fn parse_condition(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::OpenParen)?;
    parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;
    Ok(())
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();

    parse_condition(parser)?;
    parse_stmt(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        parse_stmt(parser)?;
    }

    Ok(())
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();

    parse_condition(parser)?;
    parse_stmt(parser)
}

pub fn parse_for_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    parser.expect(TokenKind::OpenParen)?;

    // Each clause is optional: init ; condition ; step
    for terminator in [TokenKind::Semicolon, TokenKind::Semicolon, TokenKind::CloseParen] {
        if parser.current_token_kind() != terminator {
            parse_expr(parser, BindingPower::Default)?;
        }
        parser.expect(terminator)?;
    }

    parse_stmt(parser)
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();

    if parser.current_token_kind() != TokenKind::Semicolon {
        parse_expr(parser, BindingPower::Default)?;
    }

    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

/// `break ;` and `continue ;`
pub fn parse_loop_control_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

pub fn parse_print_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.advance();

    parser.expect(TokenKind::OpenParen)?;
    parse_args(parser)?;
    parser.expect(TokenKind::CloseParen)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}
