use crate::{
    ast::{
        ast::Statement,
        statements::{
            BlockStatement, EntrypointFunctionDefinition, ExpressionStatement, FunctionDefinition,
            Parameter, ReturnStatement, VarStatement,
        },
        types::Type,
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    expr::{current_identifier, parse_expr},
    lookups::Precedence,
    parser::Parser,
};

/// Parses the statement starting at the current token.
///
/// A bare Newline separates statements and yields `None`. On success the
/// current token is the statement's last token.
pub fn parse_stmt(parser: &mut Parser) -> Result<Option<Statement>, Error> {
    if parser.current_is(TokenKind::Newline) {
        return Ok(None);
    }

    let handler = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied();
    if let Some(handler) = handler {
        return handler(parser).map(Some);
    }

    parse_expression_stmt(parser).map(Some)
}

/// One statement per line: swallow the Newline that ends it.
fn end_of_statement(parser: &mut Parser) {
    if parser.peek_is(TokenKind::Newline) {
        parser.advance();
    }
}

pub fn parse_expression_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    let value = parse_expr(parser, Precedence::Lowest)?;
    end_of_statement(parser);

    Ok(Statement::Expression(ExpressionStatement { token, value }))
}

pub fn parse_var_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    let type_token = parser.expect_peek(TokenKind::TypeAnnotation)?;
    parser.expect_peek(TokenKind::Identifier)?;
    let name = current_identifier(parser);
    parser.expect_peek(TokenKind::Assignment)?;
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    end_of_statement(parser);

    Ok(Statement::Var(VarStatement {
        token,
        declared_type: to_type(type_token),
        name,
        value,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();
    parser.advance();

    let value = parse_expr(parser, Precedence::Lowest)?;
    end_of_statement(parser);

    Ok(Statement::Return(ReturnStatement { token, value }))
}

pub fn parse_function_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::Function(parse_function_definition(parser)?))
}

/// `func <name>(<parameters>) [<return type>] { <body> }`, starting on `func`.
pub fn parse_function_definition(parser: &mut Parser) -> Result<FunctionDefinition, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = current_identifier(parser);

    parser.expect_peek(TokenKind::OpenParen)?;
    let parameters = parse_parameters(parser)?;

    let return_type = if parser.peek_is(TokenKind::TypeAnnotation) {
        parser.advance();
        Some(to_type(parser.current_token().clone()))
    } else {
        None
    };

    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block(parser);

    Ok(FunctionDefinition {
        token,
        name,
        parameters,
        return_type,
        body,
    })
}

/// `efunc <name>() { <body> }`. There is no parameter list to parse: the
/// parentheses must be empty.
pub fn parse_entrypoint_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    let token = parser.current_token().clone();

    parser.expect_peek(TokenKind::Identifier)?;
    let name = current_identifier(parser);

    parser.expect_peek(TokenKind::OpenParen)?;
    parser.expect_peek(TokenKind::CloseParen)?;
    parser.expect_peek(TokenKind::OpenCurly)?;
    let body = parse_block(parser);

    Ok(Statement::Entrypoint(EntrypointFunctionDefinition {
        token,
        name,
        body,
    }))
}

/// Current token is `(`. Parses `<type> <name>` pairs up to and including `)`.
pub fn parse_parameters(parser: &mut Parser) -> Result<Vec<Parameter>, Error> {
    let mut parameters = vec![];

    if parser.peek_is(TokenKind::CloseParen) {
        parser.advance();
        return Ok(parameters);
    }

    loop {
        let type_token = parser.expect_peek(TokenKind::TypeAnnotation)?;
        parser.expect_peek(TokenKind::Identifier)?;

        parameters.push(Parameter {
            name: current_identifier(parser),
            param_type: to_type(type_token),
        });

        if parser.peek_is(TokenKind::Comma) {
            parser.advance();
        } else {
            break;
        }
    }

    parser.expect_peek(TokenKind::CloseParen)?;

    Ok(parameters)
}

pub fn parse_block_stmt(parser: &mut Parser) -> Result<Statement, Error> {
    Ok(Statement::Block(parse_block(parser)))
}

/// Current token is `{`; on return it is the matching `}`.
///
/// A broken statement inside the block is recorded and skipped so the rest
/// of the block still parses. Reaching EOF first is recorded too, and the
/// statements gathered so far are kept.
pub fn parse_block(parser: &mut Parser) -> BlockStatement {
    let token = parser.current_token().clone();
    let mut statements = vec![];

    parser.advance();
    if parser.current_is(TokenKind::Newline) {
        parser.advance();
    }

    while !parser.current_is(TokenKind::CloseCurly) && !parser.current_is(TokenKind::EOF) {
        if parser.current_is(TokenKind::Newline) {
            parser.advance();
            continue;
        }

        match parse_stmt(parser) {
            Ok(Some(stmt)) => statements.push(stmt),
            Ok(None) => {}
            Err(error) => {
                parser.recover(error);
                if parser.current_token().is_one_of_many(&[TokenKind::CloseCurly, TokenKind::EOF]) {
                    break;
                }
            }
        }
        parser.advance();
    }

    if parser.current_is(TokenKind::EOF) {
        let eof = parser.current_token();
        let error = Error::new(
            ErrorImpl::ExpectedToken {
                expected: TokenKind::CloseCurly,
                received: eof.kind,
            },
            eof.position,
        );
        parser.record(error);
    }

    BlockStatement { token, statements }
}

fn to_type(token: Token) -> Type {
    Type {
        value: token.value.clone(),
        token,
    }
}
