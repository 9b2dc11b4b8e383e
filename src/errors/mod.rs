//! Error types and error handling for the compiler.
//!
//! This module defines the error types used throughout the front end.
//! It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for the lexer, parser and verifier
//! - Suggestions shown next to rendered diagnostics

pub mod errors;
