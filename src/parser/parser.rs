//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser is a Pratt parser: prefix and infix handlers are looked up
//! per token kind, and a precedence table decides how far an infix chain
//! extends.
//!
//! It holds two tokens of lookahead, `current` and `peek`, and collects
//! diagnostics instead of stopping at the first one.

use std::collections::HashMap;

use crate::{
    ast::ast::Program,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    MK_TOKEN,
};

use super::{
    lookups::{
        create_token_lookups, InfixHandler, InfixLookup, Precedence, PrecedenceLookup,
        PrefixHandler, PrefixLookup, StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
pub struct Parser {
    /// The tokens to parse, always ending in EOF
    tokens: Vec<Token>,
    /// Index of the current token
    pos: usize,
    /// Diagnostics recorded so far
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for prefix expression handlers
    prefix_lookup: PrefixLookup,
    /// Lookup table for infix expression handlers
    infix_lookup: InfixLookup,
    /// Lookup table for infix operator precedence
    precedence_lookup: PrecedenceLookup,
}

impl Parser {
    /// Creates a new Parser instance.
    ///
    /// A stream that does not end in EOF gets one appended.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|token| token.kind) != Some(TokenKind::EOF) {
            let position = tokens.last().map(|token| token.position).unwrap_or_default();
            tokens.push(MK_TOKEN!(TokenKind::EOF, "EOF", position));
        }

        Parser {
            tokens,
            pos: 0,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            prefix_lookup: HashMap::new(),
            infix_lookup: HashMap::new(),
            precedence_lookup: HashMap::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.tokens[self.pos]
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token().kind
    }

    /// Returns the token after the current one. At the end of the stream this is EOF.
    pub fn peek_token(&self) -> &Token {
        &self.tokens[(self.pos + 1).min(self.tokens.len() - 1)]
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek_token().kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek_token_kind() == kind
    }

    /// Moves `peek` into `current`. Stays put once EOF is current.
    pub fn advance(&mut self) {
        if self.pos + 1 < self.tokens.len() {
            self.pos += 1;
        }
    }

    /// Advances only if the peek token is `expected_kind`.
    ///
    /// On a mismatch nothing is consumed and the error describes the peek token;
    /// the caller abandons the statement and lets [`Parser::recover`] resynchronize.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek_is(expected_kind) {
            self.advance();
            Ok(self.current_token().clone())
        } else {
            let peek = self.peek_token();
            Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    received: peek.kind,
                },
                peek.position,
            ))
        }
    }

    pub fn peek_precedence(&self) -> Precedence {
        self.precedence_of(self.peek_token_kind())
    }

    pub fn current_precedence(&self) -> Precedence {
        self.precedence_of(self.current_token_kind())
    }

    fn precedence_of(&self, kind: TokenKind) -> Precedence {
        self.precedence_lookup
            .get(&kind)
            .copied()
            .unwrap_or(Precedence::Lowest)
    }

    /// Diagnostics collected while parsing.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn record(&mut self, error: Error) {
        self.errors.push(error);
    }

    /// Records `error` and skips the rest of the broken statement.
    ///
    /// Stops on a Newline, an unmatched `}` or EOF. Braces opened while
    /// skipping are matched, so a broken line never swallows the block around it.
    pub fn recover(&mut self, error: Error) {
        self.record(error);

        let mut depth = 0usize;
        loop {
            match self.current_token_kind() {
                TokenKind::EOF => return,
                TokenKind::Newline | TokenKind::CloseCurly if depth == 0 => return,
                TokenKind::CloseCurly => depth -= 1,
                TokenKind::OpenCurly => depth += 1,
                _ => {}
            }
            self.advance();
        }
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the prefix lookup table.
    pub fn get_prefix_lookup(&self) -> &PrefixLookup {
        &self.prefix_lookup
    }

    /// Returns a reference to the infix lookup table.
    pub fn get_infix_lookup(&self) -> &InfixLookup {
        &self.infix_lookup
    }

    /// Registers an infix handler and the precedence it binds at.
    pub fn infix(&mut self, kind: TokenKind, precedence: Precedence, infix_fn: InfixHandler) {
        self.precedence_lookup.insert(kind, precedence);
        self.infix_lookup.insert(kind, infix_fn);
    }

    /// Registers a prefix handler for a token.
    pub fn prefix(&mut self, kind: TokenKind, prefix_fn: PrefixHandler) {
        self.prefix_lookup.insert(kind, prefix_fn);
    }

    /// Registers a statement handler for a token.
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }
}

/// Parses a stream of tokens into a Program.
///
/// This is the main entry point for parsing. It creates a parser instance,
/// initializes all lookup tables, and parses statements until EOF. The
/// returned parser carries the diagnostics; a non-empty list still comes
/// with whatever part of the program could be built.
pub fn parse(tokens: Vec<Token>) -> (Parser, Program) {
    let mut parser = Parser::new(tokens);
    create_token_lookups(&mut parser);

    let mut program = Program::default();

    while !parser.current_is(TokenKind::EOF) {
        match parse_stmt(&mut parser) {
            Ok(Some(stmt)) => program.statements.push(stmt),
            Ok(None) => {}
            Err(error) => parser.recover(error),
        }
        parser.advance();
    }

    (parser, program)
}
