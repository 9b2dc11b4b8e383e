//! Semantic verification over a parsed Program.
//!
//! Checks names against a single flat symbol table:
//!
//! - Variables and entrypoints may only be defined once
//! - Entrypoint names must come from a fixed allow-list
//! - A literal assigned to a variable must match its declared type
//!
//! Function signatures and nested bodies are opt-in through `VerifierConfig`.

pub mod symbol_table;
pub mod verifier;

#[cfg(test)]
mod tests;
