//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts source text
//! into a stream of tokens for parsing. It handles:
//!
//! - Character-at-a-time scanning with one character of push-back
//! - Recognition of keywords, type names, booleans, identifiers and literals
//! - Line/column tracking for diagnostics
//! - Line comments and the `@import` compiler instruction
//!
//! Newlines are tokens: statements are newline-terminated.

pub mod lexer;
pub mod source;
pub mod tokens;

#[cfg(test)]
mod tests;
