use std::{fmt::Display, slice::Iter};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expression, Node, Statement},
    expressions::Identifier,
    types::Type,
};

/// Names an `efunc` may have. The runtime calls these itself.
pub const ENTRYPOINT_NAMES: &[&str] = &["main"];

/// `{ ... }`. The token is the opening curly brace.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    pub token: Token,
    pub statements: Vec<Statement>,
}

impl BlockStatement {
    pub fn iter(&self) -> Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Node for BlockStatement {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for BlockStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.statements.is_empty() {
            return write!(f, "{{ }}");
        }

        let statements: Vec<String> = self.statements.iter().map(|stmt| stmt.to_string()).collect();
        write!(f, "{{ {} }}", statements.join("; "))
    }
}

/// Any expression used as a statement. The token is the expression's first token.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub value: Expression,
}

impl Node for ExpressionStatement {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// `var <type> <name> = <value>`
#[derive(Debug, Clone, PartialEq)]
pub struct VarStatement {
    pub token: Token,
    pub declared_type: Type,
    pub name: Identifier,
    pub value: Expression,
}

impl Node for VarStatement {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for VarStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {} {} = {}", self.declared_type, self.name, self.value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStatement {
    pub token: Token,
    pub value: Expression,
}

impl Node for ReturnStatement {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for ReturnStatement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "return {}", self.value)
    }
}

/// `<type> <name>` in a parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: Identifier,
    pub param_type: Type,
}

impl Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.param_type, self.name)
    }
}

/// `func <name>(<parameters>) [<return type>] { <body> }`
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDefinition {
    pub token: Token,
    pub name: Identifier,
    pub parameters: Vec<Parameter>,
    pub return_type: Option<Type>,
    pub body: BlockStatement,
}

impl FunctionDefinition {
    pub fn parameter_types(&self) -> Vec<String> {
        self.parameters
            .iter()
            .map(|param| param.param_type.value.clone())
            .collect()
    }
}

impl Node for FunctionDefinition {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for FunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let parameters: Vec<String> = self.parameters.iter().map(|param| param.to_string()).collect();
        write!(f, "func {}({}) ", self.name, parameters.join(", "))?;
        if let Some(return_type) = &self.return_type {
            write!(f, "{} ", return_type)?;
        }
        write!(f, "{}", self.body)
    }
}

/// `efunc <name>() { <body> }`. Entrypoints never take parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct EntrypointFunctionDefinition {
    pub token: Token,
    pub name: Identifier,
    pub body: BlockStatement,
}

impl EntrypointFunctionDefinition {
    pub fn has_valid_name(&self) -> bool {
        ENTRYPOINT_NAMES.contains(&self.name.value.as_str())
    }
}

impl Node for EntrypointFunctionDefinition {
    fn token(&self) -> &Token {
        &self.token
    }
}

impl Display for EntrypointFunctionDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "efunc {}() {}", self.name, self.body)
    }
}
