use std::fmt::Display;

use crate::lexer::tokens::Token;

use super::ast::Node;

/// A type name used as an annotation, e.g. the `int` in `var int x = 5`.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub token: Token,
    pub value: String,
}

impl Node for Type {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}
