use std::fmt::{Debug, Display};

use crate::{lexer::tokens::Token, Position};

use super::{
    expressions::{
        Boolean, CallExpression, Identifier, IfExpression, InfixExpression, IntegerLiteral,
        PrefixExpression, StringLiteral,
    },
    statements::{
        BlockStatement, EntrypointFunctionDefinition, ExpressionStatement, FunctionDefinition,
        ReturnStatement, VarStatement,
    },
};

/// Node Trait
///
/// Every node keeps the token it was parsed from so diagnostics can point at it.
pub trait Node: Debug + Display {
    /// Returns the originating token of the node.
    fn token(&self) -> &Token;
    /// Returns the position of the originating token.
    fn position(&self) -> Position {
        self.token().position
    }
}

/// The root of the tree: top-level statements in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Program {
    pub fn iter(&self) -> std::slice::Iter<'_, Statement> {
        self.statements.iter()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Expression(ExpressionStatement),
    Block(BlockStatement),
    Var(VarStatement),
    Return(ReturnStatement),
    Function(FunctionDefinition),
    Entrypoint(EntrypointFunctionDefinition),
}

impl Statement {
    pub fn name(&self) -> &'static str {
        match self {
            Statement::Expression(_) => "ExpressionStatement",
            Statement::Block(_) => "BlockStatement",
            Statement::Var(_) => "VarStatement",
            Statement::Return(_) => "ReturnStatement",
            Statement::Function(_) => "FunctionDefinition",
            Statement::Entrypoint(_) => "EntrypointFunctionDefinition",
        }
    }

    fn as_node(&self) -> &dyn Node {
        match self {
            Statement::Expression(stmt) => stmt,
            Statement::Block(stmt) => stmt,
            Statement::Var(stmt) => stmt,
            Statement::Return(stmt) => stmt,
            Statement::Function(stmt) => stmt,
            Statement::Entrypoint(stmt) => stmt,
        }
    }
}

impl Node for Statement {
    fn token(&self) -> &Token {
        self.as_node().token()
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}

/// Expression Types
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Identifier(Identifier),
    Boolean(Boolean),
    Integer(IntegerLiteral),
    String(StringLiteral),
    Prefix(PrefixExpression),
    Infix(InfixExpression),
    If(IfExpression),
    Call(CallExpression),
    Function(Box<FunctionDefinition>),
}

impl Expression {
    fn as_node(&self) -> &dyn Node {
        match self {
            Expression::Identifier(expr) => expr,
            Expression::Boolean(expr) => expr,
            Expression::Integer(expr) => expr,
            Expression::String(expr) => expr,
            Expression::Prefix(expr) => expr,
            Expression::Infix(expr) => expr,
            Expression::If(expr) => expr,
            Expression::Call(expr) => expr,
            Expression::Function(expr) => expr.as_ref(),
        }
    }
}

impl Node for Expression {
    fn token(&self) -> &Token {
        self.as_node().token()
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self.as_node(), f)
    }
}
