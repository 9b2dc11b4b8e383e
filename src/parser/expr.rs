use crate::{
    ast::{
        ast::Expression,
        expressions::{
            Boolean, CallExpression, Identifier, IfExpression, InfixExpression, IntegerLiteral,
            PrefixExpression, StringLiteral,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    lookups::Precedence,
    parser::Parser,
    stmt::{parse_block, parse_function_definition},
};

/// Parses an expression whose operators all bind tighter than `precedence`.
///
/// Starts on the expression's first token and stops on its last one. A
/// Newline in peek position always ends the expression.
pub fn parse_expr(parser: &mut Parser, precedence: Precedence) -> Result<Expression, Error> {
    let token_kind = parser.current_token_kind();
    let prefix = match parser.get_prefix_lookup().get(&token_kind) {
        Some(prefix) => *prefix,
        None => {
            return Err(Error::new(
                ErrorImpl::NoPrefixParseFunction { kind: token_kind },
                parser.current_token().position,
            ))
        }
    };

    let mut left = prefix(parser)?;

    while !parser.peek_is(TokenKind::Newline) && precedence < parser.peek_precedence() {
        let infix = match parser.get_infix_lookup().get(&parser.peek_token_kind()) {
            Some(infix) => *infix,
            None => return Ok(left),
        };

        parser.advance();
        left = infix(parser, left)?;
    }

    Ok(left)
}

pub fn parse_identifier(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Identifier(current_identifier(parser)))
}

pub fn current_identifier(parser: &Parser) -> Identifier {
    let token = parser.current_token().clone();
    Identifier {
        value: token.value.clone(),
        token,
    }
}

/// An out-of-range literal is reported but still produces a node (valued 0),
/// so the rest of the statement is parsed normally.
pub fn parse_integer_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    let value = match token.value.parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            parser.record(Error::new(
                ErrorImpl::NumberParseError {
                    token: token.value.clone(),
                },
                token.position,
            ));
            0
        }
    };

    Ok(Expression::Integer(IntegerLiteral { token, value }))
}

pub fn parse_string_literal(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    Ok(Expression::String(StringLiteral {
        value: token.value.clone(),
        token,
    }))
}

pub fn parse_boolean(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    Ok(Expression::Boolean(Boolean {
        value: token.kind == TokenKind::True,
        token,
    }))
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    parser.advance();

    let operand = parse_expr(parser, Precedence::Prefix)?;

    Ok(Expression::Prefix(PrefixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        operand: Box::new(operand),
    }))
}

pub fn parse_infix_expr(parser: &mut Parser, left: Expression) -> Result<Expression, Error> {
    let operator_token = parser.current_token().clone();
    let precedence = parser.current_precedence();
    parser.advance();

    let right = parse_expr(parser, precedence)?;

    Ok(Expression::Infix(InfixExpression {
        operator: operator_token.value.clone(),
        token: operator_token,
        left: Box::new(left),
        right: Box::new(right),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expression, Error> {
    parser.advance();
    let expr = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(expr)
}

/// `if (<condition>) { ... }` with an optional `else { ... }`.
pub fn parse_if_expr(parser: &mut Parser) -> Result<Expression, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.advance();
    let condition = parse_expr(parser, Precedence::Lowest)?;
    parser.expect_peek(TokenKind::CloseParen)?;

    parser.expect_peek(TokenKind::OpenCurly)?;
    let consequence = parse_block(parser);

    let alternative = if parser.peek_is(TokenKind::Else) {
        parser.advance();
        parser.expect_peek(TokenKind::OpenCurly)?;
        Some(parse_block(parser))
    } else {
        None
    };

    Ok(Expression::If(IfExpression {
        token,
        condition: Box::new(condition),
        consequence,
        alternative,
    }))
}

pub fn parse_function_expr(parser: &mut Parser) -> Result<Expression, Error> {
    Ok(Expression::Function(Box::new(parse_function_definition(parser)?)))
}

/// Current token is the `(` following the callee.
pub fn parse_call_expr(parser: &mut Parser, callee: Expression) -> Result<Expression, Error> {
    let token = parser.current_token().clone();
    let mut arguments = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
    } else {
        parser.advance();
        arguments.push(parse_expr(parser, Precedence::Lowest)?);

        while parser.peek_is(TokenKind::Comma) {
            parser.advance();
            parser.advance();
            arguments.push(parse_expr(parser, Precedence::Lowest)?);
        }

        parser.expect_peek(TokenKind::CloseParen)?;
    }

    Ok(Expression::Call(CallExpression {
        token,
        callee: Box::new(callee),
        arguments,
    }))
}
