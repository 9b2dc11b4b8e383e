//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a Program. It uses a Pratt parser for expressions with a
//! precedence table and handles:
//!
//! - Statement parsing (variable declarations, functions, entrypoints, returns)
//! - Expression parsing (prefix/infix operators, calls, `if` expressions, literals)
//! - Blocks and parameter lists
//! - Error recovery and reporting
//!
//! Prefix and infix handlers live in lookup tables keyed by token kind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
